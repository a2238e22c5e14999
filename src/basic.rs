/*!
Basic arithmetic operations.

Generic, promoting wrappers over [`exmath_core::arith`]: floats dispatch
by width, integers promote to `f64`, and mixed-width calls resolve to the
common type per [`crate::num::Promote`].
*/

use crate::num::{promote2, promote3, Absolute, Arg, Float, Promote, Promoted2, Promoted3};

/**
The absolute value of `x`, in `x`'s own domain.

`abs(-0.0)` is `+0.0`, `abs(-7i32)` is `7i32`; the sign bit is cleared
through the bit pattern, so NaN payloads survive.
*/
pub fn abs<T: Absolute>(x: T) -> T {
    x.absolute()
}

/**
The absolute value of a floating point value.
*/
pub fn fabs<T: Arg>(x: T) -> T::Promoted {
    x.promote().abs_v()
}

/**
`x * y + z` with the IEEE corner cases resolved explicitly; see
[`exmath_core::arith::fma`].
*/
pub fn fma<A, B, C>(x: A, y: B, z: C) -> Promoted3<A, B, C>
where
    A: Arg,
    B: Arg,
    C: Arg,
    A::Promoted: Promote<B::Promoted>,
    Promoted2<A, B>: Promote<C::Promoted>,
{
    let (x, y, z) = promote3(x, y, z);

    x.fma_v(y, z)
}

/**
The truncated remainder of `x / y`, with `x`'s sign on zero results.
*/
pub fn fmod<A, B>(x: A, y: B) -> Promoted2<A, B>
where
    A: Arg,
    B: Arg,
    A::Promoted: Promote<B::Promoted>,
{
    let (x, y) = promote2(x, y);

    x.fmod_v(y)
}

/**
The round-to-nearest remainder of `x / y`.
*/
pub fn remainder<A, B>(x: A, y: B) -> Promoted2<A, B>
where
    A: Arg,
    B: Arg,
    A::Promoted: Promote<B::Promoted>,
{
    let (x, y) = promote2(x, y);

    x.remainder_v(y)
}

/**
The round-to-nearest remainder and the low three quotient bits.
*/
pub fn remquo<A, B>(x: A, y: B) -> (Promoted2<A, B>, i32)
where
    A: Arg,
    B: Arg,
    A::Promoted: Promote<B::Promoted>,
{
    let (x, y) = promote2(x, y);

    x.remquo_v(y)
}

/**
`mag` with the sign bit of `sgn`.
*/
pub fn copysign<A, B>(mag: A, sgn: B) -> Promoted2<A, B>
where
    A: Arg,
    B: Arg,
    A::Promoted: Promote<B::Promoted>,
{
    let (mag, sgn) = promote2(mag, sgn);

    mag.copysign_v(sgn)
}

/**
The larger of `x` and `y`; a NaN loses to a number.
*/
pub fn fmax<A, B>(x: A, y: B) -> Promoted2<A, B>
where
    A: Arg,
    B: Arg,
    A::Promoted: Promote<B::Promoted>,
{
    let (x, y) = promote2(x, y);

    x.fmax_v(y)
}

/**
The smaller of `x` and `y`; a NaN loses to a number.
*/
pub fn fmin<A, B>(x: A, y: B) -> Promoted2<A, B>
where
    A: Arg,
    B: Arg,
    A::Promoted: Promote<B::Promoted>,
{
    let (x, y) = promote2(x, y);

    x.fmin_v(y)
}

/**
The positive difference `max(x - y, +0)`.
*/
pub fn fdim<A, B>(x: A, y: B) -> Promoted2<A, B>
where
    A: Arg,
    B: Arg,
    A::Promoted: Promote<B::Promoted>,
{
    let (x, y) = promote2(x, y);

    x.fdim_v(y)
}
