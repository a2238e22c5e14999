/*!
Base-10 logarithm.

The [`log2`](super::log2())-style recombination with the scale constants
swapped for `1/ln10` and `log10(2)`, each split into an exact head and a
tail. `k * log10_2hi` is not exact the way `k * ivln2hi` is, so the error
bound is a little wider than the other logarithms but still close to
1 ulp.
*/

use super::log::{LG1, LG2, LG3, LG4, LG5, LG6, LG7};

const IVLN10_HI: f64 = f64::from_bits(0x3fdbcb7b15200000);
const IVLN10_LO: f64 = f64::from_bits(0x3dbb9438ca9aadd5);
const LOG10_2HI: f64 = f64::from_bits(0x3fd34413509f6000);
const LOG10_2LO: f64 = f64::from_bits(0x3d59fef311f12b36);

/**
The base-10 logarithm of `x`.

`log10(1)` is exactly `+0`, `log10(±0)` is `-∞`, negative arguments are a
domain error returning NaN, `log10(+∞)` is `+∞`, NaN propagates.
*/
pub const fn log10(x: f64) -> f64 {
    let x1p54 = f64::from_bits(0x4350_0000_0000_0000);

    let mut x = x;
    let mut ui = x.to_bits();
    let mut hx = (ui >> 32) as u32;
    let mut k = 0i32;

    if hx < 0x0010_0000 || hx >> 31 > 0 {
        if ui << 1 == 0 {
            return -1.0 / (x * x);
        }

        if hx >> 31 > 0 {
            return (x - x) / 0.0;
        }

        k -= 54;
        x *= x1p54;
        ui = x.to_bits();
        hx = (ui >> 32) as u32;
    } else if hx >= 0x7ff0_0000 {
        return x;
    } else if hx == 0x3ff0_0000 && ui << 32 == 0 {
        return 0.0;
    }

    // Reduce x into [sqrt(2)/2, sqrt(2)]
    hx = hx.wrapping_add(0x3ff0_0000 - 0x3fe6_a09e);
    k += (hx >> 20) as i32 - 0x3ff;
    hx = (hx & 0x000f_ffff) + 0x3fe6_a09e;
    ui = ((hx as u64) << 32) | (ui & 0xffff_ffff);
    x = f64::from_bits(ui);

    let f = x - 1.0;
    let hfsq = 0.5 * f * f;
    let s = f / (2.0 + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * (LG2 + w * (LG4 + w * LG6));
    let t2 = z * (LG1 + w * (LG3 + w * (LG5 + w * LG7)));
    let r = t2 + t1;

    let mut hi = f - hfsq;
    let mut ui = hi.to_bits();
    ui &= (-1i64 as u64) << 32;
    hi = f64::from_bits(ui);
    let lo = f - hi - hfsq + s * (hfsq + r);
    let dk = k as f64;

    let val_hi = hi * IVLN10_HI;
    let mut val_lo = dk * LOG10_2LO + (lo + hi) * IVLN10_LO + lo * IVLN10_HI;

    // Compensated add of k * log10(2)
    let y = dk * LOG10_2HI;
    let w = y + val_hi;
    val_lo += (y - w) + val_hi;

    val_lo + w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_policy() {
        assert_eq!(0.0f64.to_bits(), log10(1.0).to_bits());
        assert_eq!(f64::NEG_INFINITY, log10(0.0));
        assert_eq!(f64::NEG_INFINITY, log10(-0.0));
        assert!(log10(-10.0).is_nan());
        assert_eq!(f64::INFINITY, log10(f64::INFINITY));
        assert!(log10(f64::NAN).is_nan());
    }

    #[test]
    fn powers_of_ten() {
        for (x, expected) in [
            (10.0f64, 1.0f64),
            (100.0, 2.0),
            (1e15, 15.0),
            (0.1, -1.0),
            (1e-7, -7.0),
        ] {
            let got = log10(x);

            assert!(
                got.to_bits().abs_diff(expected.to_bits()) <= 1,
                "log10({}) = {:e}",
                x,
                got
            );
        }
    }

    #[test]
    fn known_values_within_two_ulp() {
        for (x, expected) in [
            (2.0f64, 0.30102999566398120f64),
            (core::f64::consts::E, 0.4342944819032518),
            (5.0, 0.6989700043360189),
        ] {
            let got = log10(x);

            assert!(
                got.to_bits().abs_diff(expected.to_bits()) <= 2,
                "log10({}) = {:e}, want {:e}",
                x,
                got,
                expected
            );
        }
    }

    #[test]
    fn subnormal_arguments() {
        // log10(2^-1074) = -1074 * log10(2)
        let got = log10(5e-324);
        let expected = -1074.0 * 0.3010299956639812;

        assert!((got - expected).abs() < 1e-11, "{:e}", got);
    }

    #[test]
    fn const_and_runtime_agree() {
        const L: f64 = log10(2.0);

        assert_eq!(L.to_bits(), log10(2.0).to_bits());
    }
}
