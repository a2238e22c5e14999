/*!
Base-e exponential.

Reduction writes `x = k*ln2 + r` with `|r| <= 0.5*ln2`, carrying `r` as a
hi/lo pair so the subtraction of `k*ln2` loses nothing. A degree-5 Remez
polynomial approximates the rational kernel `R(r^2)` to within `2^-59`,
giving a result inside 1 ulp; `2^k` is put back with
[`scalbn`](crate::manip::scalbn).

Thresholds: overflow above 709.782712893383973096, zero below
-745.13321910194110842.
*/

use crate::bits::FpBits64;
use crate::manip::scalbn;

const HALF: [f64; 2] = [0.5, -0.5];
const LN2_HI: f64 = f64::from_bits(0x3fe62e42fee00000);
const LN2_LO: f64 = f64::from_bits(0x3dea39ef35793c76);
const INV_LN2: f64 = f64::from_bits(0x3ff71547652b82fe);
const P1: f64 = f64::from_bits(0x3fc555555555553e);
const P2: f64 = f64::from_bits(0xbf66c16c16bebd93);
const P3: f64 = f64::from_bits(0x3f11566aaf25de2c);
const P4: f64 = f64::from_bits(0xbebbbd41c5d26bf1);
const P5: f64 = f64::from_bits(0x3e66376972bea4d0);

/**
`e^x`.

`exp(±0)` is exactly 1, `exp(-∞)` is `+0`, `exp(+∞)` is `+∞`, and NaN
propagates. Overflow goes through a `2^1023` multiplication so the flag
can fire; only `exp(0)` is exact among finite arguments.
*/
pub const fn exp(x: f64) -> f64 {
    let x1p1023 = f64::from_bits(0x7fe0_0000_0000_0000);

    let mut x = x;
    let mut hx = (x.to_bits() >> 32) as u32;
    let sign = (hx >> 31) as usize;
    hx &= 0x7fff_ffff;

    if hx >= 0x4086_232b {
        // |x| >= 708.39...
        if FpBits64::from_value(x).is_nan() {
            return x;
        }

        if x > 709.782712893383973096 {
            // Overflow for any finite x this large
            return x * x1p1023;
        }

        if x < -745.13321910194110842 {
            return 0.0;
        }
    }

    let hi: f64;
    let lo: f64;
    let k: i32;

    if hx > 0x3fd6_2e42 {
        // |x| > 0.5 ln2
        if hx >= 0x3ff0_a2b2 {
            // |x| >= 1.5 ln2
            k = (INV_LN2 * x + HALF[sign]) as i32;
        } else {
            k = 1 - sign as i32 - sign as i32;
        }

        // k*ln2hi is exact at this magnitude
        hi = x - k as f64 * LN2_HI;
        lo = k as f64 * LN2_LO;
        x = hi - lo;
    } else if hx > 0x3e30_0000 {
        // |x| > 2^-28
        k = 0;
        hi = x;
        lo = 0.0;
    } else {
        // 1 to the last bit
        return 1.0 + x;
    }

    let xx = x * x;
    let c = x - xx * (P1 + xx * (P2 + xx * (P3 + xx * (P4 + xx * P5))));
    let y = 1.0 + (x * c / (2.0 - c) - lo + hi);

    if k == 0 {
        y
    } else {
        scalbn(y, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_points() {
        assert_eq!(1.0, exp(0.0));
        assert_eq!(1.0, exp(-0.0));
        assert_eq!(f64::INFINITY, exp(f64::INFINITY));
        assert_eq!(0.0, exp(f64::NEG_INFINITY));
        assert!(exp(f64::NAN).is_nan());
    }

    #[test]
    fn known_values_within_one_ulp() {
        for (x, expected) in [
            (1.0f64, core::f64::consts::E),
            (-1.0, 1.0 / core::f64::consts::E),
            (core::f64::consts::LN_2, 2.0),
            (2.0 * core::f64::consts::LN_2, 4.0),
            (0.5, 1.6487212707001282),
        ] {
            let got = exp(x);

            assert!(
                got.to_bits().abs_diff(expected.to_bits()) <= 1,
                "exp({}) = {:e}, want {:e}",
                x,
                got,
                expected
            );
        }
    }

    #[test]
    fn overflow_and_underflow_thresholds() {
        assert_eq!(f64::INFINITY, exp(709.79));
        assert_eq!(f64::INFINITY, exp(710.0));
        assert!(exp(709.78).is_finite());
        assert_eq!(0.0, exp(-745.14));
        assert!(exp(-745.13) > 0.0);
        assert!(exp(-708.5) > 0.0);
        assert!(crate::classify::is_subnormal(exp(-709.0)));
    }

    #[test]
    fn tiny_arguments_collapse_to_one() {
        let tiny = f64::from_bits(0x3e20_0000_0000_0000); // 2^-29
        assert_eq!(1.0 + tiny, exp(tiny));
        assert_eq!(1.0, exp(f64::from_bits(1)));
    }

    #[test]
    fn const_and_runtime_agree() {
        const E: f64 = exp(1.0);

        assert_eq!(E.to_bits(), exp(1.0).to_bits());
    }
}
