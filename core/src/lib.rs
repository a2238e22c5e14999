/*!
The bit-manipulation and algorithm engine for `exmath`.

This library is the core of `exmath`: IEEE-754 field access in [`bits`],
classification in [`classify`], the arithmetic, rounding,
exponential/logarithm, power, and manipulation families in their own
modules, and the narrow window onto the floating point environment in
[`env`].

Every algorithm entry point is a `const fn` over a concrete type (`f64`,
or `f32` in the `f`-suffixed variants). A `const fn` computes the same
bits during constant evaluation as at runtime — that guarantee is the
dual-mode contract this crate is built around, and the few runtime-only
functions ([`nearest::rint`], [`power::sqrt_rt`]) exist solely to consult
the live environment or the hardware without ever changing a numeric
result.

If you're looking to use these functions in an application, the `exmath`
crate wraps this one with generic, type-promoting signatures; this
library is where the semantics live.
*/

#![deny(missing_docs)]
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "std")]
extern crate std;

extern crate core;

pub mod arith;
pub mod bits;
pub mod classify;
pub mod dd;
pub mod env;
pub mod expo;
pub mod manip;
pub mod nearest;
pub mod power;
