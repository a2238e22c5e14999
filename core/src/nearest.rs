/*!
Nearest-integer operations.

Everything here rounds by trimming fraction bits below the exponent rather
than by converting through an integer type, so the full finite range is
handled in constant time and the non-finite inputs pass through untouched
with their sign bits intact — `trunc(-NaN)` really is a NaN with the sign
bit set.

[`round_to_mode`] is the directional engine behind the family: a `const`
function over an explicit [`Round`], total for every input and mode.
[`rint`] and [`nearbyint`] are its runtime wrappers that consult the
ambient rounding mode, which is the one thing a const context cannot do;
const evaluation always observes round-to-nearest.

The `f32` operations classify first and then defer to the `f64` engine:
every `f32` value converts to `f64` exactly, and every rounded integer in
`f32` range converts back exactly.
*/

use crate::bits::{FpBits32, FpBits64};
use crate::env::{self, Except, Round};

/**
`x` with its fraction discarded, rounding toward zero.

`±0`, `±∞`, and NaN return unchanged, sign bit and payload included.
*/
pub const fn trunc(x: f64) -> f64 {
    let bits = FpBits64::from_value(x);

    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }

    let exponent = bits.exponent();

    // Large enough that no fraction bits remain
    if exponent >= FpBits64::FRACTION_LEN as i32 {
        return x;
    }

    // Smaller than one in magnitude
    if exponent <= -1 {
        return FpBits64::zero(bits.sign()).value();
    }

    let trimming = FpBits64::FRACTION_LEN - exponent as u32;
    bits.with_fraction((bits.fraction() >> trimming) << trimming).value()
}

/**
`x` with its fraction discarded, rounding toward zero.
*/
pub const fn truncf(x: f32) -> f32 {
    let bits = FpBits32::from_value(x);

    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }

    trunc(x as f64) as f32
}

/**
Round `x` to an integer in the given mode.

This is the whole nearest-integer family as one total `const` function;
the named operations are fixed-mode shorthands for it. NaN, infinities,
and zeros return unchanged.
*/
pub const fn round_to_mode(x: f64, mode: Round) -> f64 {
    let bits = FpBits64::from_value(x);

    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }

    let is_neg = bits.is_neg();
    let exponent = bits.exponent();

    if exponent >= FpBits64::FRACTION_LEN as i32 {
        return x;
    }

    // |x| < 1: the answer is a signed zero or one
    if exponent <= -1 {
        return match mode {
            Round::Downward => {
                if is_neg {
                    -1.0
                } else {
                    0.0
                }
            }
            Round::Upward => {
                if is_neg {
                    -0.0
                } else {
                    1.0
                }
            }
            Round::TowardZero => {
                if is_neg {
                    -0.0
                } else {
                    0.0
                }
            }
            Round::NearestFromZero => {
                if exponent < -1 {
                    // |x| < 0.5
                    if is_neg {
                        -0.0
                    } else {
                        0.0
                    }
                } else if is_neg {
                    -1.0
                } else {
                    1.0
                }
            }
            Round::Nearest => {
                // Exactly 0.5 ties to the even integer, zero
                if exponent <= -2 || bits.fraction() == 0 {
                    if is_neg {
                        -0.0
                    } else {
                        0.0
                    }
                } else if is_neg {
                    -1.0
                } else {
                    1.0
                }
            }
        };
    }

    let trimming = FpBits64::FRACTION_LEN - exponent as u32;
    let truncated =
        bits.with_fraction((bits.fraction() >> trimming) << trimming).value();

    if truncated == x {
        return x;
    }

    let trimmed = bits.fraction() & ((1u64 << trimming) - 1);
    let half = 1u64 << (trimming - 1);

    // With exponent 0 the trimming window spans the whole fraction and
    // this bit test would look at the implicit one; the halfway branch
    // below special-cases that.
    let truncated_is_odd =
        FpBits64::from_value(truncated).fraction() & (1u64 << trimming) != 0;

    match mode {
        Round::Downward => {
            if is_neg {
                truncated - 1.0
            } else {
                truncated
            }
        }
        Round::Upward => {
            if is_neg {
                truncated
            } else {
                truncated + 1.0
            }
        }
        Round::TowardZero => truncated,
        Round::NearestFromZero => {
            if trimmed >= half {
                if is_neg {
                    truncated - 1.0
                } else {
                    truncated + 1.0
                }
            } else {
                truncated
            }
        }
        Round::Nearest => {
            if trimmed > half {
                if is_neg {
                    truncated - 1.0
                } else {
                    truncated + 1.0
                }
            } else if trimmed == half {
                if exponent == 0 {
                    // 1.5-style halfway: the truncated part is odd
                    if is_neg {
                        -2.0
                    } else {
                        2.0
                    }
                } else if truncated_is_odd {
                    if is_neg {
                        truncated - 1.0
                    } else {
                        truncated + 1.0
                    }
                } else {
                    truncated
                }
            } else {
                truncated
            }
        }
    }
}

/**
The largest integer value not greater than `x`.
*/
pub const fn floor(x: f64) -> f64 {
    round_to_mode(x, Round::Downward)
}

/**
The largest integer value not greater than `x`.
*/
pub const fn floorf(x: f32) -> f32 {
    let bits = FpBits32::from_value(x);

    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }

    floor(x as f64) as f32
}

/**
The smallest integer value not less than `x`.
*/
pub const fn ceil(x: f64) -> f64 {
    round_to_mode(x, Round::Upward)
}

/**
The smallest integer value not less than `x`.
*/
pub const fn ceilf(x: f32) -> f32 {
    let bits = FpBits32::from_value(x);

    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }

    ceil(x as f64) as f32
}

/**
The nearest integer value to `x`, with halfway cases away from zero.
*/
pub const fn round(x: f64) -> f64 {
    round_to_mode(x, Round::NearestFromZero)
}

/**
The nearest integer value to `x`, with halfway cases away from zero.
*/
pub const fn roundf(x: f32) -> f32 {
    let bits = FpBits32::from_value(x);

    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }

    round(x as f64) as f32
}

/**
The nearest integer value to `x`, with halfway cases to the even integer.
*/
pub const fn roundeven(x: f64) -> f64 {
    round_to_mode(x, Round::Nearest)
}

/**
The nearest integer value to `x`, with halfway cases to the even integer.
*/
pub const fn roundevenf(x: f32) -> f32 {
    let bits = FpBits32::from_value(x);

    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }

    roundeven(x as f64) as f32
}

/**
Round `x` to an integer in the live rounding mode.

Reads the ambient environment, so this is a runtime function; in a const
context use [`roundeven`] (the round-to-nearest result) or
[`round_to_mode`] with an explicit mode.
*/
pub fn rint(x: f64) -> f64 {
    if FpBits64::from_value(x).is_inf_or_nan() {
        env::raise(Except::Invalid);
    }

    round_to_mode(x, env::current_round())
}

/**
Round `x` to an integer in the live rounding mode.
*/
pub fn rintf(x: f32) -> f32 {
    let bits = FpBits32::from_value(x);

    if bits.is_inf_or_nan() {
        env::raise(Except::Invalid);
        return x;
    }

    if bits.is_zero() {
        return x;
    }

    round_to_mode(x as f64, env::current_round()) as f32
}

/**
Round `x` to an integer in the live rounding mode, without raising
inexact.

Behaviorally [`rint`] and `nearbyint` differ only in exception-flag side
effects, which this library treats as best-effort either way.
*/
pub fn nearbyint(x: f64) -> f64 {
    round_to_mode(x, env::current_round())
}

/**
Round `x` to an integer in the live rounding mode, without raising
inexact.
*/
pub fn nearbyintf(x: f32) -> f32 {
    let bits = FpBits32::from_value(x);

    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }

    round_to_mode(x as f64, env::current_round()) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::classify::signbit;

    #[test]
    fn trunc_cases() {
        for (x, expected) in [
            (1.9f64, 1.0),
            (-1.9, -1.0),
            (0.9, 0.0),
            (-0.9, -0.0),
            (2.0, 2.0),
            (-2.0, -2.0),
            (1e300, 1e300),
            (4503599627370495.5, 4503599627370495.0),
            (f64::INFINITY, f64::INFINITY),
            (f64::NEG_INFINITY, f64::NEG_INFINITY),
        ] {
            assert_eq!(expected.to_bits(), trunc(x).to_bits(), "trunc({})", x);
        }
    }

    #[test]
    fn trunc_preserves_nan_sign() {
        assert!(trunc(f64::NAN).is_nan());
        assert!(!signbit(trunc(f64::NAN)));
        assert!(signbit(trunc(-f64::NAN)));

        assert!(crate::classify::signbitf(truncf(-f32::NAN)));
    }

    #[test]
    fn floor_and_ceil() {
        for (x, fl, ce) in [
            (2.5f64, 2.0f64, 3.0f64),
            (-2.5, -3.0, -2.0),
            (2.0, 2.0, 2.0),
            (-0.5, -1.0, -0.0),
            (0.5, 0.0, 1.0),
            (1e-300, 0.0, 1.0),
            (-1e-300, -1.0, -0.0),
        ] {
            assert_eq!(fl.to_bits(), floor(x).to_bits(), "floor({})", x);
            assert_eq!(ce.to_bits(), ceil(x).to_bits(), "ceil({})", x);
        }

        assert_eq!(0.0f64.to_bits(), floor(0.0).to_bits());
        assert_eq!((-0.0f64).to_bits(), floor(-0.0).to_bits());
        assert_eq!((-0.0f32).to_bits(), ceilf(-0.25).to_bits());
    }

    #[test]
    fn round_goes_away_from_zero_on_halves() {
        for (x, expected) in [
            (0.5f64, 1.0f64),
            (-0.5, -1.0),
            (1.5, 2.0),
            (2.5, 3.0),
            (-2.5, -3.0),
            (0.49999999999999994, 0.0),
            (2.4, 2.0),
        ] {
            assert_eq!(expected.to_bits(), round(x).to_bits(), "round({})", x);
        }
    }

    #[test]
    fn roundeven_ties_to_even() {
        for (x, expected) in [
            (0.5f64, 0.0f64),
            (1.5, 2.0),
            (2.5, 2.0),
            (3.5, 4.0),
            (-1.5, -2.0),
            (-2.5, -2.0),
            (5.5, 6.0),
        ] {
            assert_eq!(expected.to_bits(), roundeven(x).to_bits(), "roundeven({})", x);
        }
    }

    #[test]
    fn integers_are_fixed_points() {
        for x in [-7.0f64, -1.0, 0.0, 1.0, 3.0, 1024.0, 4503599627370496.0] {
            assert_eq!(x, trunc(x));
            assert_eq!(x, floor(x));
            assert_eq!(x, ceil(x));
            assert_eq!(x, round(x));
            assert_eq!(x, roundeven(x));
        }
    }

    #[test]
    fn all_modes_on_a_grid() {
        for (x, down, up, zero, nearest) in [
            (1.25f64, 1.0, 2.0, 1.0, 1.0),
            (1.75, 1.0, 2.0, 1.0, 2.0),
            (-1.25, -2.0, -1.0, -1.0, -1.0),
            (-1.75, -2.0, -1.0, -1.0, -2.0),
        ] {
            assert_eq!(down, round_to_mode(x, Round::Downward));
            assert_eq!(up, round_to_mode(x, Round::Upward));
            assert_eq!(zero, round_to_mode(x, Round::TowardZero));
            assert_eq!(nearest, round_to_mode(x, Round::Nearest));
        }
    }

    #[test]
    fn rint_under_the_default_mode() {
        // The test process runs with rounding to nearest
        assert_eq!(2.0, rint(1.5));
        assert_eq!(2.0, rint(2.5));
        assert_eq!(2.0, nearbyint(2.4));
        assert_eq!(-2.0, nearbyintf(-1.5));
        assert!(rint(f64::NAN).is_nan());
    }

    #[test]
    fn f32_delegation_is_exact() {
        for x in [0.5f32, -0.5, 1.5, 2.5, 8388607.5, -8388607.5, 1e30] {
            assert_eq!((x as f64).floor() as f32, floorf(x));
            assert_eq!((x as f64).ceil() as f32, ceilf(x));
            assert_eq!((x as f64).trunc() as f32, truncf(x));
        }
    }

    #[test]
    fn const_and_runtime_agree() {
        const F: f64 = floor(-2.5);
        const C: f64 = ceil(-2.5);
        const T: f64 = trunc(9.75);
        const R: f64 = roundeven(2.5);

        assert_eq!(F.to_bits(), floor(-2.5).to_bits());
        assert_eq!(C.to_bits(), ceil(-2.5).to_bits());
        assert_eq!(T.to_bits(), trunc(9.75).to_bits());
        assert_eq!(R.to_bits(), roundeven(2.5).to_bits());
    }
}
