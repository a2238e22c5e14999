/*!
Exponential and logarithm functions.

Promoting wrappers over the table-driven engine in
[`exmath_core::expo`]; integers follow the C convention and evaluate in
`f64`.
*/

use crate::num::{Arg, Float};

/**
`e^x`.
*/
pub fn exp<T: Arg>(x: T) -> T::Promoted {
    x.promote().exp_v()
}

/**
`2^x`; exact for integer `x` in the representable range.
*/
pub fn exp2<T: Arg>(x: T) -> T::Promoted {
    x.promote().exp2_v()
}

/**
`e^x - 1`, accurate for small `x`.
*/
pub fn expm1<T: Arg>(x: T) -> T::Promoted {
    x.promote().expm1_v()
}

/**
The natural logarithm; `log(1)` is exactly `+0`, `log(±0)` is `-∞`,
negative arguments return NaN.
*/
pub fn log<T: Arg>(x: T) -> T::Promoted {
    x.promote().log_v()
}

/**
The base-2 logarithm; exact for powers of two.
*/
pub fn log2<T: Arg>(x: T) -> T::Promoted {
    x.promote().log2_v()
}

/**
The base-10 logarithm.
*/
pub fn log10<T: Arg>(x: T) -> T::Promoted {
    x.promote().log10_v()
}

/**
`log(1 + x)`, accurate for small `x`.
*/
pub fn log1p<T: Arg>(x: T) -> T::Promoted {
    x.promote().log1p_v()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_evaluate_in_f64() {
        let r = log2(8);
        let _: f64 = r;
        assert_eq!(3.0, r);

        assert_eq!(1.0f64, exp(0));
        assert_eq!(2.0f64, log10(100u8));
        assert_eq!(1024.0f64, exp2(10i16));
    }

    #[test]
    fn widths_dispatch() {
        assert_eq!(8.0f32, exp2(3.0f32));
        assert_eq!(8.0f64, exp2(3.0f64));
        assert_eq!(3.0f32, log2(8.0f32));
    }

    #[test]
    fn wrappers_match_the_core() {
        assert_eq!(
            exmath_core::expo::log(10.0).to_bits(),
            log(10.0f64).to_bits()
        );
        assert_eq!(
            exmath_core::expo::expm1(0.5).to_bits(),
            expm1(0.5f64).to_bits()
        );
    }
}
