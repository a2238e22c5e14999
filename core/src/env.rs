/*!
The ambient floating point environment.

The rounding mode register and the exception flags belong to the platform,
not to this library. This module is the narrow interface the algorithms go
through: [`current_round`] observes the live rounding mode without touching
libc, and [`raise`] sets exception flags best-effort by performing the
arithmetic that would set them.

Const evaluation always rounds to nearest, so only the runtime entry points
here consult the environment; everything `const` in this crate is
mode-free by construction.
*/

use core::hint::black_box;

/**
A floating point rounding mode.

The first four correspond to the C `FE_*` modes; [`Round::NearestFromZero`]
is the round-half-away mode `round` uses, which has no C environment flag.
*/
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Round {
    /**
    Round to nearest, ties to even. The default mode, and the only mode
    const evaluation can observe.
    */
    Nearest,
    /**
    Round toward `-∞`.
    */
    Downward,
    /**
    Round toward `+∞`.
    */
    Upward,
    /**
    Round toward zero.
    */
    TowardZero,
    /**
    Round to nearest, ties away from zero.
    */
    NearestFromZero,
}

/**
A floating point exception condition.
*/
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Except {
    /**
    An invalid operation, such as `0 * ∞`.
    */
    Invalid,
    /**
    A result too large in magnitude for the format.
    */
    Overflow,
    /**
    A nonzero result too small in magnitude for a normal value.
    */
    Underflow,
    /**
    A result that had to be rounded.
    */
    Inexact,
}

// 2^-24, 1 + 2^-23, and 2^-23; the probe constants
const PROBE: f32 = f32::from_bits(0x3380_0000);
const ONE_PLUS_ULP: f32 = f32::from_bits(0x3f80_0001);
const ULP_OF_ONE: f32 = f32::from_bits(0x3400_0000);

/**
Observe the live rounding mode.

The mode is read by watching how a handful of single-precision sums
round; `black_box` keeps the probes out of reach of constant folding. No
libc call is made.
*/
pub fn current_round() -> Round {
    let y = black_box(PROBE);
    let z = (black_box(ONE_PLUS_ULP) + y) + (black_box(-1.0f32) - y);

    if z == 0.0 {
        return Round::Downward;
    }

    if z == ULP_OF_ONE {
        return Round::TowardZero;
    }

    if black_box(2.0f32) + y == 2.0 {
        Round::Nearest
    } else {
        Round::Upward
    }
}

/**
Whether the live rounding mode is round-to-nearest.
*/
pub fn round_is_nearest() -> bool {
    let y = black_box(PROBE * 0.5);
    1.5f32 + y == 1.5f32 - y
}

/**
Raise an exception flag, best-effort.

The flag is set by evaluating an expression that produces the condition
(`0/0` for invalid, an overflowing product for overflow, and so on), which
is as far as a libc-free library can reach into the environment. Under the
`force-generic` feature this is a no-op so that builds wanting exact
reproducibility see no environment writes at all. Skipping flags is an
accepted behavior of this library, not an error.
*/
pub fn raise(except: Except) {
    #[cfg(feature = "force-generic")]
    {
        let _ = except;
    }

    #[cfg(not(feature = "force-generic"))]
    {
        let huge = black_box(f64::MAX);
        let tiny = black_box(f64::MIN_POSITIVE);

        let _ = black_box(match except {
            Except::Invalid => black_box(0.0f64) / black_box(0.0f64),
            Except::Overflow => huge * huge,
            Except::Underflow => tiny * tiny,
            Except::Inexact => tiny + black_box(1.0) - black_box(1.0),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_nearest() {
        // Tests run with the process in its default environment
        assert_eq!(Round::Nearest, current_round());
        assert!(round_is_nearest());
    }

    #[test]
    fn raise_is_callable() {
        for except in [
            Except::Invalid,
            Except::Overflow,
            Except::Underflow,
            Except::Inexact,
        ] {
            raise(except);
        }
    }
}
