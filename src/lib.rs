/*!
Const-evaluable IEEE-754 math functions with bit-identical compile-time
and runtime results.

This crate is the public surface over [`exmath_core`] (re-exported as
[`engine`]), which implements the standard math functions — `sqrt`,
`log`/`log2`/`log10`/`log1p`, `exp`/`exp2`/`expm1`, `pow`, the
nearest-integer family, and the floating point manipulation routines —
as `const fn`s whose results do not depend on where they are evaluated.

The functions here are generic: floats dispatch by width, integers
promote to `f64` the way the C math library's additional overloads do,
and mixed-width calls resolve to the common type.

```
assert_eq!(3.0, exmath::log2(8.0));
assert_eq!(5.0, exmath::hypot(3, 4));
assert_eq!(1.0 + f64::EPSILON, exmath::nextafter(1.0, 2.0));
```

In a const context, call the engine's concrete functions directly; the
bits are the same ones the generic surface produces:

```
const SQRT2: f64 = exmath::engine::power::sqrt(2.0);

assert_eq!(SQRT2.to_bits(), exmath::sqrt(2.0f64).to_bits());
```

Where a hardware path exists (the x86-64 square root instruction), the
runtime surface uses it — IEEE requires it to be correctly rounded, and
the engine's algorithm is too, so the dispatch is invisible in results.
The `force-generic` cargo feature removes every such path for fully
reproducible builds.

Errors are never thrown or returned: domain errors come back as quiet
NaN and range errors as a correctly signed infinity or zero, exactly as
a C math library behaves.
*/

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

/**
The core engine, where every algorithm is a `const fn` on a concrete
type.
*/
pub use exmath_core as engine;

pub mod basic;
pub mod compare;
pub mod expo;
pub mod manip;
pub mod nearest;
pub mod num;
pub mod power;

pub use self::{
    basic::{
        abs, copysign, fabs, fdim, fma, fmax, fmin, fmod, remainder, remquo,
    },
    compare::{
        fpclassify, is_finite, is_inf, is_nan, is_normal, is_subnormal, signbit,
        Category,
    },
    expo::{exp, exp2, expm1, log, log10, log1p, log2},
    manip::{frexp, ilogb, ldexp, logb, modf, nextafter, nexttoward, scalbn},
    nearest::{ceil, floor, nearbyint, rint, round, roundeven, trunc},
    power::{cbrt, hypot, pow, sqrt},
};
