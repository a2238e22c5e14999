/*!
Basic arithmetic primitives.

The sign-bit operations here go through [`crate::bits`] rather than through
comparison, so `-0.0` keeps its sign and NaN payloads survive untouched.
The heavier operations live in submodules: [`fma`](self::fma()) with its
IEEE corner-case ladder, the division-free [`fmod`](self::fmod()), and
[`remquo`](self::remquo()).
*/

mod fma;
mod fmod;
mod remquo;

pub use self::{
    fma::{fma, fmaf},
    fmod::{fmod, fmodf},
    remquo::{remainder, remainderf, remquo, remquof},
};

use crate::bits::{FpBits32, FpBits64};

/**
The absolute value of `x`.

Clears the sign bit: `fabs(-0.0)` is `+0.0` and a negative NaN comes back
as the same NaN with the sign bit clear.
*/
pub const fn fabs(x: f64) -> f64 {
    FpBits64::from_value(x).abs().value()
}

/**
The absolute value of `x`.
*/
pub const fn fabsf(x: f32) -> f32 {
    FpBits32::from_value(x).abs().value()
}

/**
`mag` with the sign bit of `sgn`.

Works on every input including NaN: the magnitude's payload is kept and
only the sign bit is replaced, so `copysign(NaN, -1.0)` is a negative NaN.
*/
pub const fn copysign(mag: f64, sgn: f64) -> f64 {
    FpBits64::from_value(mag)
        .with_sign(FpBits64::from_value(sgn).sign())
        .value()
}

/**
`mag` with the sign bit of `sgn`.
*/
pub const fn copysignf(mag: f32, sgn: f32) -> f32 {
    FpBits32::from_value(mag)
        .with_sign(FpBits32::from_value(sgn).sign())
        .value()
}

/**
The larger of `x` and `y`.

IEEE-754 `maximumNumber` semantics: a NaN loses to a number, two NaNs give
NaN, and `+0.0` beats `-0.0`.
*/
pub const fn fmax(x: f64, y: f64) -> f64 {
    let xb = FpBits64::from_value(x);
    let yb = FpBits64::from_value(y);

    if xb.is_nan() {
        return y;
    }

    if yb.is_nan() {
        return x;
    }

    if x < y {
        y
    } else if y < x {
        x
    } else if xb.is_neg() {
        // Equal under comparison; prefer the one without the sign bit
        y
    } else {
        x
    }
}

/**
The larger of `x` and `y`.
*/
pub const fn fmaxf(x: f32, y: f32) -> f32 {
    let xb = FpBits32::from_value(x);
    let yb = FpBits32::from_value(y);

    if xb.is_nan() {
        return y;
    }

    if yb.is_nan() {
        return x;
    }

    if x < y {
        y
    } else if y < x {
        x
    } else if xb.is_neg() {
        y
    } else {
        x
    }
}

/**
The smaller of `x` and `y`.

A NaN loses to a number, two NaNs give NaN, and `-0.0` beats `+0.0`.
*/
pub const fn fmin(x: f64, y: f64) -> f64 {
    let xb = FpBits64::from_value(x);
    let yb = FpBits64::from_value(y);

    if xb.is_nan() {
        return y;
    }

    if yb.is_nan() {
        return x;
    }

    if x < y {
        x
    } else if y < x {
        y
    } else if xb.is_neg() {
        x
    } else {
        y
    }
}

/**
The smaller of `x` and `y`.
*/
pub const fn fminf(x: f32, y: f32) -> f32 {
    let xb = FpBits32::from_value(x);
    let yb = FpBits32::from_value(y);

    if xb.is_nan() {
        return y;
    }

    if yb.is_nan() {
        return x;
    }

    if x < y {
        x
    } else if y < x {
        y
    } else if xb.is_neg() {
        x
    } else {
        y
    }
}

/**
The positive difference `max(x - y, +0.0)`; NaN operands propagate.
*/
pub const fn fdim(x: f64, y: f64) -> f64 {
    if FpBits64::from_value(x).is_nan() {
        return x;
    }

    if FpBits64::from_value(y).is_nan() {
        return y;
    }

    if x > y {
        x - y
    } else {
        0.0
    }
}

/**
The positive difference `max(x - y, +0.0)`; NaN operands propagate.
*/
pub const fn fdimf(x: f32, y: f32) -> f32 {
    if FpBits32::from_value(x).is_nan() {
        return x;
    }

    if FpBits32::from_value(y).is_nan() {
        return y;
    }

    if x > y {
        x - y
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::classify::signbit;

    #[test]
    fn fabs_clears_the_sign_only() {
        assert_eq!(0.0f64.to_bits(), fabs(-0.0).to_bits());
        assert_eq!(1.5, fabs(-1.5));
        assert_eq!(1.5, fabs(1.5));
        assert_eq!(f64::INFINITY, fabs(f64::NEG_INFINITY));

        // A NaN payload survives with the sign bit cleared
        let payload = 0xfff8_0000_0000_beefu64;
        assert_eq!(
            payload & !(1 << 63),
            fabs(f64::from_bits(payload)).to_bits()
        );

        assert_eq!(2.5f32, fabsf(-2.5));
    }

    #[test]
    fn copysign_cases() {
        for (mag, sgn, expected) in [
            (1.0f64, -2.0, -1.0),
            (-1.0, 2.0, 1.0),
            (0.0, -1.0, -0.0),
            (f64::INFINITY, -0.0, f64::NEG_INFINITY),
        ] {
            assert_eq!(expected.to_bits(), copysign(mag, sgn).to_bits());
        }

        assert!(signbit(copysign(f64::NAN, -1.0)));
        assert!(!signbit(copysign(-f64::NAN, 1.0)));
    }

    #[test]
    fn minmax_zero_ordering() {
        assert_eq!(0.0f64.to_bits(), fmax(-0.0, 0.0).to_bits());
        assert_eq!(0.0f64.to_bits(), fmax(0.0, -0.0).to_bits());
        assert_eq!((-0.0f64).to_bits(), fmin(-0.0, 0.0).to_bits());
        assert_eq!((-0.0f64).to_bits(), fmin(0.0, -0.0).to_bits());
    }

    #[test]
    fn minmax_nan_loses_to_numbers() {
        assert_eq!(1.0, fmax(f64::NAN, 1.0));
        assert_eq!(1.0, fmax(1.0, f64::NAN));
        assert_eq!(1.0, fmin(f64::NAN, 1.0));
        assert!(fmax(f64::NAN, f64::NAN).is_nan());

        assert_eq!(2.0f32, fmaxf(f32::NAN, 2.0));
        assert_eq!(2.0f32, fminf(2.0, f32::NAN));
    }

    #[test]
    fn fdim_cases() {
        assert_eq!(1.0, fdim(3.0, 2.0));
        assert_eq!(0.0, fdim(2.0, 3.0));
        assert_eq!(0.0, fdim(2.0, 2.0));
        assert!(fdim(f64::NAN, 1.0).is_nan());
        assert!(fdimf(1.0, f32::NAN).is_nan());
    }

    #[test]
    fn const_and_runtime_agree() {
        const ABS: f64 = fabs(-0.0);
        const MAX: f64 = fmax(-0.0, 0.0);

        assert_eq!(ABS.to_bits(), fabs(-0.0).to_bits());
        assert_eq!(MAX.to_bits(), fmax(-0.0, 0.0).to_bits());
    }
}
