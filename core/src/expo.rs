/*!
The table-driven exponential and logarithm engine.

Every evaluation follows the same shape: classify and short-circuit the
special cases, split the bit pattern into an exponent part and a reduced
argument in a narrow interval, approximate on that interval with a
minimax polynomial (plus an accurate-tables lookup for [`exp2`]), and
recombine with the exponent contribution carried as a hi/lo pair so the
final rounding is the only one that matters. Documented error bounds sit
between 0.5 and 1 ulp per function.

The `f32` surface evaluates through the `f64` engine and rounds once at
the end; the double rounding this introduces is bounded well inside the
half-ulp the extra 29 bits of slack provide.
*/

mod exp;
mod exp2;
mod expm1;
mod log;
mod log10;
mod log1p;
mod log2;

pub use self::{
    exp::exp, exp2::exp2, expm1::expm1, log::log, log10::log10, log1p::log1p,
    log2::log2,
};

use crate::bits::FpBits32;

macro_rules! through_f64 {
    ($(#[$meta:meta])* $name:ident => $inner:ident) => {
        $(#[$meta])*
        pub const fn $name(x: f32) -> f32 {
            if FpBits32::from_value(x).is_nan() {
                return x;
            }

            $inner(x as f64) as f32
        }
    };
}

through_f64!(
    /**
    `e^x`, single precision.
    */
    expf => exp
);

through_f64!(
    /**
    `2^x`, single precision; exact for integer `x` in range.
    */
    exp2f => exp2
);

through_f64!(
    /**
    `e^x - 1`, single precision.
    */
    expm1f => expm1
);

through_f64!(
    /**
    The natural logarithm, single precision.
    */
    logf => log
);

through_f64!(
    /**
    The base-2 logarithm, single precision; exact for powers of two.
    */
    log2f => log2
);

through_f64!(
    /**
    The base-10 logarithm, single precision.
    */
    log10f => log10
);

through_f64!(
    /**
    `log(1 + x)`, single precision.
    */
    log1pf => log1p
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_surface_edges() {
        assert_eq!(1.0f32, exp2f(0.0));
        assert_eq!(8.0f32, exp2f(3.0));
        assert_eq!(3.0f32, log2f(8.0));
        assert_eq!(f32::NEG_INFINITY, logf(0.0));
        assert!(logf(-1.0).is_nan());
        assert_eq!(f32::INFINITY, expf(f32::INFINITY));
        assert_eq!(0.0f32, expf(f32::NEG_INFINITY));
        assert!(expf(f32::NAN).is_nan());
        assert_eq!(-1.0f32, expm1f(f32::NEG_INFINITY));
        assert_eq!(0.0f32, log1pf(0.0));
    }

    #[test]
    fn f32_overflow_boundaries() {
        assert_eq!(f32::INFINITY, exp2f(128.0));
        assert!(exp2f(127.0).is_finite());
        assert_eq!(0.0f32, exp2f(-150.0));
        assert_eq!(f32::INFINITY, expf(89.0));
        assert!(expf(88.0).is_finite());
    }

    #[test]
    fn f32_values_track_the_f64_engine() {
        for x in [0.5f32, 1.0, 2.5, 10.0, -3.0] {
            assert_eq!((exp(x as f64)) as f32, expf(x));
            assert_eq!((log2(x as f64)) as f32, log2f(x));
        }
    }
}
