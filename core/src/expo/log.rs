/*!
Natural logarithm.

The argument is reduced into `[√2/2, √2]` by exponent surgery on the high
word, leaving `log(x) = k*ln2 + log(1+f)`. With `s = f/(2+f)` the series
`log(1+f) = 2s + s*R(s^2)` is approximated by a degree-14 Remez polynomial
(coefficients LG1..LG7) good to `2^-58.45`, and `k*ln2` is added in two
pieces so the result lands inside 1 ulp.
*/

use crate::bits::FpBits64;

pub(super) const LN2_HI: f64 = f64::from_bits(0x3fe62e42fee00000);
pub(super) const LN2_LO: f64 = f64::from_bits(0x3dea39ef35793c76);
pub(super) const LG1: f64 = f64::from_bits(0x3fe5555555555593);
pub(super) const LG2: f64 = f64::from_bits(0x3fd999999997fa04);
pub(super) const LG3: f64 = f64::from_bits(0x3fd2492494229359);
pub(super) const LG4: f64 = f64::from_bits(0x3fcc71c51d8e78af);
pub(super) const LG5: f64 = f64::from_bits(0x3fc7466496cb03de);
pub(super) const LG6: f64 = f64::from_bits(0x3fc39a09d078c69f);
pub(super) const LG7: f64 = f64::from_bits(0x3fc2f112df3e5244);

/**
The natural logarithm of `x`.

`log(1)` is exactly `+0`; `log(±0)` is `-∞` through a division so the
divide-by-zero condition is visible; a negative argument is a domain error
returning NaN; `log(+∞)` is `+∞` and NaN propagates.
*/
pub const fn log(x: f64) -> f64 {
    let x1p54 = f64::from_bits(0x4350_0000_0000_0000);

    let mut x = x;
    let mut ui = x.to_bits();
    let mut hx = (ui >> 32) as u32;
    let mut k = 0i32;

    if hx < 0x0010_0000 || hx >> 31 != 0 {
        if ui << 1 == 0 {
            // log(±0) = -inf
            return -1.0 / (x * x);
        }

        if hx >> 31 != 0 {
            // log(negative) = NaN
            return (x - x) / 0.0;
        }

        // Subnormal: scale up into the normal range
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
    let dk = k as f64;

    s * (hfsq + r) + dk * LN2_LO - hfsq + f + dk * LN2_HI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_policy() {
        assert_eq!(0.0f64.to_bits(), log(1.0).to_bits());
        assert_eq!(f64::NEG_INFINITY, log(0.0));
        assert_eq!(f64::NEG_INFINITY, log(-0.0));
        assert!(log(-1.0).is_nan());
        assert!(log(f64::NEG_INFINITY).is_nan());
        assert_eq!(f64::INFINITY, log(f64::INFINITY));
        assert!(log(f64::NAN).is_nan());
    }

    #[test]
    fn known_values_within_one_ulp() {
        for (x, expected) in [
            (core::f64::consts::E, 1.0f64),
            (2.0, core::f64::consts::LN_2),
            (10.0, core::f64::consts::LN_10),
            (0.5, -core::f64::consts::LN_2),
            (4.0, 2.0 * core::f64::consts::LN_2),
        ] {
            let got = log(x);

            assert!(
                got.to_bits().abs_diff(expected.to_bits()) <= 1,
                "log({}) = {:e}, want {:e}",
                x,
                got,
                expected
            );
        }
    }

    #[test]
    fn subnormal_arguments() {
        // ln(2^-1074) = -1074 * ln 2
        let got = log(5e-324);
        let expected = -1074.0 * core::f64::consts::LN_2;

        assert!((got - expected).abs() < 1e-12, "{:e}", got);
        assert!(log(f64::MIN_POSITIVE) < -708.0);
    }

    #[test]
    fn log_is_monotone_around_one() {
        let below = log(f64::from_bits(1.0f64.to_bits() - 1));
        let above = log(f64::from_bits(1.0f64.to_bits() + 1));

        assert!(below < 0.0);
        assert!(above > 0.0);
    }

    #[test]
    fn const_and_runtime_agree() {
        const L: f64 = log(10.0);

        assert_eq!(L.to_bits(), log(10.0).to_bits());
    }
}
