/*!
Power and root functions.

[`sqrt`] is where the dispatch layer earns its keep: outside const
evaluation it lands on the hardware square root where one exists, and
because both that instruction and the core's digit-by-digit algorithm
are correctly rounded, no caller can tell the paths apart by results.
Under the `force-generic` feature the hardware path compiles out
entirely.
*/

use crate::num::{promote2, Arg, Float, Promote, Promoted2};

/**
The square root of `x`, correctly rounded on every path.
*/
pub fn sqrt<T: Arg>(x: T) -> T::Promoted {
    x.promote().sqrt_v()
}

/**
The cube root of `x`, defined for negative `x` too.
*/
pub fn cbrt<T: Arg>(x: T) -> T::Promoted {
    x.promote().cbrt_v()
}

/**
`sqrt(x² + y²)` without intermediate overflow or underflow.
*/
pub fn hypot<A, B>(x: A, y: B) -> Promoted2<A, B>
where
    A: Arg,
    B: Arg,
    A::Promoted: Promote<B::Promoted>,
{
    let (x, y) = promote2(x, y);

    x.hypot_v(y)
}

/**
`x` raised to the power `y`, with the full IEEE special-case table; see
[`exmath_core::power::pow`].
*/
pub fn pow<A, B>(x: A, y: B) -> Promoted2<A, B>
where
    A: Arg,
    B: Arg,
    A::Promoted: Promote<B::Promoted>,
{
    let (x, y) = promote2(x, y);

    x.pow_v(y)
}
