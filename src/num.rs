/*!
The argument traits behind the generic surface.

[`Float`] is the sealed dispatch point: one implementation per concrete
width, each method handing straight to the matching `exmath_core`
function (taking the runtime-accelerated square root, which is
bit-identical to the const path). [`Arg`] widens anything numeric into a
float the way C's usual arithmetic conversions do — every integer type
promotes to `f64` — and [`Promote`] picks the common type for mixed-width
calls, so `fmod(1u8, 0.5f64)` and `fma(2, 3.0f32, 1i64)` resolve the way
the C library's overload set would.

An integer's "epsilon" is zero, which is why integers always lose to a
floating type in promotion: the promoted type is the one that can absorb
the other argument, never the other way around.
*/

use exmath_core::{arith, bits, classify, expo, manip, nearest, power};

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for isize {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

/**
A floating point type this library computes on: `f32` or `f64`.

Every method forwards to the corresponding `exmath_core` function for
the concrete width, so generic callers observe exactly the semantics the
core documents.
*/
#[allow(missing_docs)]
pub trait Float: private::Sealed + Copy + PartialOrd {
    fn abs_v(self) -> Self;
    fn copysign_v(self, sgn: Self) -> Self;
    fn fma_v(self, y: Self, z: Self) -> Self;
    fn fmod_v(self, y: Self) -> Self;
    fn remainder_v(self, y: Self) -> Self;
    fn remquo_v(self, y: Self) -> (Self, i32);
    fn fmax_v(self, y: Self) -> Self;
    fn fmin_v(self, y: Self) -> Self;
    fn fdim_v(self, y: Self) -> Self;

    fn trunc_v(self) -> Self;
    fn floor_v(self) -> Self;
    fn ceil_v(self) -> Self;
    fn round_v(self) -> Self;
    fn roundeven_v(self) -> Self;
    fn rint_v(self) -> Self;
    fn nearbyint_v(self) -> Self;

    fn exp_v(self) -> Self;
    fn exp2_v(self) -> Self;
    fn expm1_v(self) -> Self;
    fn log_v(self) -> Self;
    fn log2_v(self) -> Self;
    fn log10_v(self) -> Self;
    fn log1p_v(self) -> Self;

    fn sqrt_v(self) -> Self;
    fn cbrt_v(self) -> Self;
    fn hypot_v(self, y: Self) -> Self;
    fn pow_v(self, y: Self) -> Self;

    fn frexp_v(self) -> (Self, i32);
    fn scalbn_v(self, n: i32) -> Self;
    fn logb_v(self) -> Self;
    fn ilogb_v(self) -> i32;
    fn modf_v(self) -> (Self, Self);
    fn nextafter_v(self, to: Self) -> Self;

    fn is_nan_v(self) -> bool;
    fn is_inf_v(self) -> bool;
    fn is_finite_v(self) -> bool;
    fn is_normal_v(self) -> bool;
    fn is_subnormal_v(self) -> bool;
    fn signbit_v(self) -> bool;
    fn category_v(self) -> bits::Category;
}

impl Float for f64 {
    fn abs_v(self) -> Self {
        arith::fabs(self)
    }

    fn copysign_v(self, sgn: Self) -> Self {
        arith::copysign(self, sgn)
    }

    fn fma_v(self, y: Self, z: Self) -> Self {
        arith::fma(self, y, z)
    }

    fn fmod_v(self, y: Self) -> Self {
        arith::fmod(self, y)
    }

    fn remainder_v(self, y: Self) -> Self {
        arith::remainder(self, y)
    }

    fn remquo_v(self, y: Self) -> (Self, i32) {
        arith::remquo(self, y)
    }

    fn fmax_v(self, y: Self) -> Self {
        arith::fmax(self, y)
    }

    fn fmin_v(self, y: Self) -> Self {
        arith::fmin(self, y)
    }

    fn fdim_v(self, y: Self) -> Self {
        arith::fdim(self, y)
    }

    fn trunc_v(self) -> Self {
        nearest::trunc(self)
    }

    fn floor_v(self) -> Self {
        nearest::floor(self)
    }

    fn ceil_v(self) -> Self {
        nearest::ceil(self)
    }

    fn round_v(self) -> Self {
        nearest::round(self)
    }

    fn roundeven_v(self) -> Self {
        nearest::roundeven(self)
    }

    fn rint_v(self) -> Self {
        nearest::rint(self)
    }

    fn nearbyint_v(self) -> Self {
        nearest::nearbyint(self)
    }

    fn exp_v(self) -> Self {
        expo::exp(self)
    }

    fn exp2_v(self) -> Self {
        expo::exp2(self)
    }

    fn expm1_v(self) -> Self {
        expo::expm1(self)
    }

    fn log_v(self) -> Self {
        expo::log(self)
    }

    fn log2_v(self) -> Self {
        expo::log2(self)
    }

    fn log10_v(self) -> Self {
        expo::log10(self)
    }

    fn log1p_v(self) -> Self {
        expo::log1p(self)
    }

    fn sqrt_v(self) -> Self {
        power::sqrt_rt(self)
    }

    fn cbrt_v(self) -> Self {
        power::cbrt(self)
    }

    fn hypot_v(self, y: Self) -> Self {
        power::hypot(self, y)
    }

    fn pow_v(self, y: Self) -> Self {
        power::pow(self, y)
    }

    fn frexp_v(self) -> (Self, i32) {
        manip::frexp(self)
    }

    fn scalbn_v(self, n: i32) -> Self {
        manip::scalbn(self, n)
    }

    fn logb_v(self) -> Self {
        manip::logb(self)
    }

    fn ilogb_v(self) -> i32 {
        manip::ilogb(self)
    }

    fn modf_v(self) -> (Self, Self) {
        manip::modf(self)
    }

    fn nextafter_v(self, to: Self) -> Self {
        manip::nextafter(self, to)
    }

    fn is_nan_v(self) -> bool {
        classify::is_nan(self)
    }

    fn is_inf_v(self) -> bool {
        classify::is_inf(self)
    }

    fn is_finite_v(self) -> bool {
        classify::is_finite(self)
    }

    fn is_normal_v(self) -> bool {
        classify::is_normal(self)
    }

    fn is_subnormal_v(self) -> bool {
        classify::is_subnormal(self)
    }

    fn signbit_v(self) -> bool {
        classify::signbit(self)
    }

    fn category_v(self) -> bits::Category {
        classify::fpclassify(self)
    }
}

impl Float for f32 {
    fn abs_v(self) -> Self {
        arith::fabsf(self)
    }

    fn copysign_v(self, sgn: Self) -> Self {
        arith::copysignf(self, sgn)
    }

    fn fma_v(self, y: Self, z: Self) -> Self {
        arith::fmaf(self, y, z)
    }

    fn fmod_v(self, y: Self) -> Self {
        arith::fmodf(self, y)
    }

    fn remainder_v(self, y: Self) -> Self {
        arith::remainderf(self, y)
    }

    fn remquo_v(self, y: Self) -> (Self, i32) {
        arith::remquof(self, y)
    }

    fn fmax_v(self, y: Self) -> Self {
        arith::fmaxf(self, y)
    }

    fn fmin_v(self, y: Self) -> Self {
        arith::fminf(self, y)
    }

    fn fdim_v(self, y: Self) -> Self {
        arith::fdimf(self, y)
    }

    fn trunc_v(self) -> Self {
        nearest::truncf(self)
    }

    fn floor_v(self) -> Self {
        nearest::floorf(self)
    }

    fn ceil_v(self) -> Self {
        nearest::ceilf(self)
    }

    fn round_v(self) -> Self {
        nearest::roundf(self)
    }

    fn roundeven_v(self) -> Self {
        nearest::roundevenf(self)
    }

    fn rint_v(self) -> Self {
        nearest::rintf(self)
    }

    fn nearbyint_v(self) -> Self {
        nearest::nearbyintf(self)
    }

    fn exp_v(self) -> Self {
        expo::expf(self)
    }

    fn exp2_v(self) -> Self {
        expo::exp2f(self)
    }

    fn expm1_v(self) -> Self {
        expo::expm1f(self)
    }

    fn log_v(self) -> Self {
        expo::logf(self)
    }

    fn log2_v(self) -> Self {
        expo::log2f(self)
    }

    fn log10_v(self) -> Self {
        expo::log10f(self)
    }

    fn log1p_v(self) -> Self {
        expo::log1pf(self)
    }

    fn sqrt_v(self) -> Self {
        power::sqrtf_rt(self)
    }

    fn cbrt_v(self) -> Self {
        power::cbrtf(self)
    }

    fn hypot_v(self, y: Self) -> Self {
        power::hypotf(self, y)
    }

    fn pow_v(self, y: Self) -> Self {
        power::powf(self, y)
    }

    fn frexp_v(self) -> (Self, i32) {
        manip::frexpf(self)
    }

    fn scalbn_v(self, n: i32) -> Self {
        manip::scalbnf(self, n)
    }

    fn logb_v(self) -> Self {
        manip::logbf(self)
    }

    fn ilogb_v(self) -> i32 {
        manip::ilogbf(self)
    }

    fn modf_v(self) -> (Self, Self) {
        manip::modff(self)
    }

    fn nextafter_v(self, to: Self) -> Self {
        manip::nextafterf(self, to)
    }

    fn is_nan_v(self) -> bool {
        classify::is_nanf(self)
    }

    fn is_inf_v(self) -> bool {
        classify::is_inff(self)
    }

    fn is_finite_v(self) -> bool {
        classify::is_finitef(self)
    }

    fn is_normal_v(self) -> bool {
        classify::is_normalf(self)
    }

    fn is_subnormal_v(self) -> bool {
        classify::is_subnormalf(self)
    }

    fn signbit_v(self) -> bool {
        classify::signbitf(self)
    }

    fn category_v(self) -> bits::Category {
        classify::fpclassifyf(self)
    }
}

/**
A numeric argument: a float passes through, an integer promotes to
`f64` the way the C math library's additional overloads do.
*/
pub trait Arg: private::Sealed + Copy {
    /**
    The floating point type this argument evaluates as.
    */
    type Promoted: Float;

    /**
    Widen into the promoted type.
    */
    fn promote(self) -> Self::Promoted;
}

impl Arg for f64 {
    type Promoted = f64;

    fn promote(self) -> f64 {
        self
    }
}

impl Arg for f32 {
    type Promoted = f32;

    fn promote(self) -> f32 {
        self
    }
}

macro_rules! int_arg {
    ($($int:ty),*) => {
        $(
            impl Arg for $int {
                type Promoted = f64;

                fn promote(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

int_arg!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/**
The common type of a two-float pair: `f32` holds only against itself,
anything touching `f64` resolves to `f64`.
*/
pub trait Promote<B: Float>: Float {
    /**
    The common type both operands convert to without loss.
    */
    type Output: Float;

    /**
    Widen the left operand.
    */
    fn lift(self) -> Self::Output;

    /**
    Widen the right operand.
    */
    fn lift_rhs(rhs: B) -> Self::Output;
}

impl Promote<f32> for f32 {
    type Output = f32;

    fn lift(self) -> f32 {
        self
    }

    fn lift_rhs(rhs: f32) -> f32 {
        rhs
    }
}

impl Promote<f64> for f32 {
    type Output = f64;

    fn lift(self) -> f64 {
        self as f64
    }

    fn lift_rhs(rhs: f64) -> f64 {
        rhs
    }
}

impl Promote<f32> for f64 {
    type Output = f64;

    fn lift(self) -> f64 {
        self
    }

    fn lift_rhs(rhs: f32) -> f64 {
        rhs as f64
    }
}

impl Promote<f64> for f64 {
    type Output = f64;

    fn lift(self) -> f64 {
        self
    }

    fn lift_rhs(rhs: f64) -> f64 {
        rhs
    }
}

/**
The common promoted type of a two-argument call.
*/
pub type Promoted2<A, B> =
    <<A as Arg>::Promoted as Promote<<B as Arg>::Promoted>>::Output;

/**
The common promoted type of a three-argument call.
*/
pub type Promoted3<A, B, C> =
    <Promoted2<A, B> as Promote<<C as Arg>::Promoted>>::Output;

pub(crate) fn promote2<A, B>(a: A, b: B) -> (Promoted2<A, B>, Promoted2<A, B>)
where
    A: Arg,
    B: Arg,
    A::Promoted: Promote<B::Promoted>,
{
    (a.promote().lift(), <A::Promoted as Promote<B::Promoted>>::lift_rhs(b.promote()))
}

pub(crate) fn promote3<A, B, C>(
    a: A,
    b: B,
    c: C,
) -> (Promoted3<A, B, C>, Promoted3<A, B, C>, Promoted3<A, B, C>)
where
    A: Arg,
    B: Arg,
    C: Arg,
    A::Promoted: Promote<B::Promoted>,
    Promoted2<A, B>: Promote<C::Promoted>,
{
    let (a2, b2) = promote2(a, b);

    (
        a2.lift(),
        b2.lift(),
        <Promoted2<A, B> as Promote<C::Promoted>>::lift_rhs(c.promote()),
    )
}

/**
A type with an absolute value in its own domain: floats clear the sign
bit, signed integers negate, unsigned integers pass through.
*/
pub trait Absolute: private::Sealed + Copy {
    /**
    The absolute value of `self`.
    */
    fn absolute(self) -> Self;
}

impl Absolute for f64 {
    fn absolute(self) -> Self {
        arith::fabs(self)
    }
}

impl Absolute for f32 {
    fn absolute(self) -> Self {
        arith::fabsf(self)
    }
}

macro_rules! signed_absolute {
    ($($int:ty),*) => {
        $(
            impl Absolute for $int {
                fn absolute(self) -> Self {
                    if self < 0 {
                        -self
                    } else {
                        self
                    }
                }
            }
        )*
    };
}

macro_rules! unsigned_absolute {
    ($($int:ty),*) => {
        $(
            impl Absolute for $int {
                fn absolute(self) -> Self {
                    self
                }
            }
        )*
    };
}

signed_absolute!(i8, i16, i32, i64, isize);
unsigned_absolute!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_promote_to_f64() {
        assert_eq!(3.0f64, 3i32.promote());
        assert_eq!(3.0f64, 3u8.promote());
        assert_eq!(-7.0f64, (-7i64).promote());
    }

    #[test]
    fn pairs_resolve_to_the_wider_type() {
        let (a, b) = promote2(1.5f32, 2.0f64);
        let _: (f64, f64) = (a, b);
        assert_eq!((1.5, 2.0), (a, b));

        let (a, b) = promote2(1.5f32, 2.0f32);
        let _: (f32, f32) = (a, b);
        assert_eq!((1.5, 2.0), (a, b));

        let (a, b) = promote2(3u16, 2.0f32);
        let _: (f64, f64) = (a, b);
        assert_eq!((3.0, 2.0), (a, b));
    }

    #[test]
    fn triples_resolve_to_the_wider_type() {
        let (a, b, c) = promote3(2i32, 3.0f32, 1i64);
        let _: (f64, f64, f64) = (a, b, c);
        assert_eq!((2.0, 3.0, 1.0), (a, b, c));

        let (a, b, c) = promote3(2.0f32, 3.0f32, 1.0f32);
        let _: (f32, f32, f32) = (a, b, c);
        assert_eq!((2.0, 3.0, 1.0), (a, b, c));
    }

    #[test]
    fn absolute_per_domain() {
        assert_eq!(2.5f64, (-2.5f64).absolute());
        assert_eq!(0.0f64.to_bits(), (-0.0f64).absolute().to_bits());
        assert_eq!(7i32, (-7i32).absolute());
        assert_eq!(7u32, 7u32.absolute());
    }
}
