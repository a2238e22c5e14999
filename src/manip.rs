/*!
Floating point manipulation.

Promoting wrappers over [`exmath_core::manip`]. Out-parameters from the
C signatures are tuples here: [`frexp`] returns `(mantissa, exponent)`
and [`modf`] returns `(fractional, integral)`.
*/

use crate::num::{promote2, Arg, Float, Promote, Promoted2};

/**
Decompose `x` into a mantissa in `[0.5, 1)` and a power-of-two
exponent.
*/
pub fn frexp<T: Arg>(x: T) -> (T::Promoted, i32) {
    x.promote().frexp_v()
}

/**
`x * 2^n` in O(1) exponent arithmetic.
*/
pub fn scalbn<T: Arg>(x: T, n: i32) -> T::Promoted {
    x.promote().scalbn_v(n)
}

/**
`x * 2^n`; identical to [`scalbn`] under the other standard name.
*/
pub fn ldexp<T: Arg>(x: T, n: i32) -> T::Promoted {
    x.promote().scalbn_v(n)
}

/**
The unbiased exponent of `x` as a floating value.
*/
pub fn logb<T: Arg>(x: T) -> T::Promoted {
    x.promote().logb_v()
}

/**
The unbiased exponent of `x` as an integer; `i32::MIN` for zero and
`i32::MAX` for NaN or infinity.
*/
pub fn ilogb<T: Arg>(x: T) -> i32 {
    x.promote().ilogb_v()
}

/**
Split `x` into `(fractional, integral)` parts, both carrying `x`'s
sign.
*/
pub fn modf<T: Arg>(x: T) -> (T::Promoted, T::Promoted) {
    x.promote().modf_v()
}

/**
The next representable value after `from` in the direction of `to`.
*/
pub fn nextafter<A, B>(from: A, to: B) -> Promoted2<A, B>
where
    A: Arg,
    B: Arg,
    A::Promoted: Promote<B::Promoted>,
{
    let (from, to) = promote2(from, to);

    from.nextafter_v(to)
}

/**
The next representable `f32` after `from` toward a target compared in
`f64` precision.
*/
pub fn nexttoward(from: f32, to: f64) -> f32 {
    exmath_core::manip::nexttowardf(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples_replace_out_parameters() {
        assert_eq!((0.5, 3), frexp(4.0));
        assert_eq!((0.5, 3), frexp(4));

        let (frac, int) = modf(-3.5);
        assert_eq!(-0.5, frac);
        assert_eq!(-3.0, int);
    }

    #[test]
    fn scalbn_and_ldexp_agree() {
        assert_eq!(scalbn(1.5f64, 4).to_bits(), ldexp(1.5f64, 4).to_bits());
        assert_eq!(24.0f64, scalbn(1.5, 4));
        assert_eq!(8.0f64, scalbn(1, 3));
        assert_eq!(12.0f32, scalbn(1.5f32, 3));
    }

    #[test]
    fn stepping_and_exponents() {
        assert_eq!(1.0 + f64::EPSILON, nextafter(1.0, 2.0));
        assert_eq!(1.0 + f64::EPSILON, nextafter(1.0, 2));
        assert_eq!(3, ilogb(8));
        assert_eq!(3.0f64, logb(8));
        assert_eq!(
            f32::from_bits(1.0f32.to_bits() + 1),
            nexttoward(1.0, 1.0 + f64::EPSILON)
        );
    }
}
