/*!
Nearest-integer operations.

Thin promoting wrappers over [`exmath_core::nearest`]. An integer
argument is already integral, so it simply comes back as the equivalent
`f64` — the same convention the C library's additional overloads use.

[`rint`] and [`nearbyint`] consult the live rounding mode and are the
only members of this family without a const counterpart in the core; in
a const context use [`exmath_core::nearest::round_to_mode`] with an
explicit mode instead.
*/

use crate::num::{Arg, Float};

/**
The largest integer value not greater than `x`.
*/
pub fn floor<T: Arg>(x: T) -> T::Promoted {
    x.promote().floor_v()
}

/**
The smallest integer value not less than `x`.
*/
pub fn ceil<T: Arg>(x: T) -> T::Promoted {
    x.promote().ceil_v()
}

/**
`x` with its fraction discarded, toward zero; NaN keeps its sign bit.
*/
pub fn trunc<T: Arg>(x: T) -> T::Promoted {
    x.promote().trunc_v()
}

/**
The nearest integer value, halfway cases away from zero.
*/
pub fn round<T: Arg>(x: T) -> T::Promoted {
    x.promote().round_v()
}

/**
The nearest integer value, halfway cases to even.
*/
pub fn roundeven<T: Arg>(x: T) -> T::Promoted {
    x.promote().roundeven_v()
}

/**
The nearest integer value in the live rounding mode.
*/
pub fn rint<T: Arg>(x: T) -> T::Promoted {
    x.promote().rint_v()
}

/**
The nearest integer value in the live rounding mode, without the
inexact flag.
*/
pub fn nearbyint<T: Arg>(x: T) -> T::Promoted {
    x.promote().nearbyint_v()
}
