/*!
Power and root functions.

[`sqrt`](self::sqrt()) carries the load-bearing dispatch contract of this
crate: the const digit-by-digit algorithm and the hardware instruction
are both correctly rounded, so [`sqrt_rt`] may hand positive finite
arguments to SSE2 with bit-identical results and fall back to the
generic path everywhere else (and entirely, under `force-generic` or on
targets without a vetted instruction). [`pow`](self::pow()) is the full
double-double `exp(y log x)` composition; [`cbrt`](self::cbrt()) and
[`hypot`](self::hypot()) round out the family.
*/

mod cbrt;
mod hypot;
mod pow;
mod sqrt;

pub use self::{
    cbrt::{cbrt, cbrtf},
    hypot::{hypot, hypotf},
    pow::pow,
    sqrt::{sqrt, sqrtf},
};

use crate::bits::FpBits32;

/**
`x` raised to the power `y`, single precision, evaluated through the
`f64` engine and rounded once.
*/
pub const fn powf(x: f32, y: f32) -> f32 {
    if FpBits32::from_value(x).is_nan() && !(y == 0.0) {
        return x;
    }

    pow(x as f64, y as f64) as f32
}

/**
The square root, taking the hardware instruction when one is available.

IEEE 754 requires a correctly rounded hardware square root, and the
generic [`sqrt`](self::sqrt()) is correctly rounded too, so the two can
never disagree on a numeric result; only positive finite inputs are
handed to the instruction so that NaN sign conventions stay with the
generic path. In a const context call [`sqrt`](self::sqrt()) directly.
*/
#[cfg(all(target_arch = "x86_64", not(feature = "force-generic")))]
pub fn sqrt_rt(x: f64) -> f64 {
    use core::arch::x86_64::{_mm_cvtsd_f64, _mm_set_sd, _mm_sqrt_sd};

    if !(x > 0.0) {
        return sqrt(x);
    }

    // SSE2 is baseline on x86_64
    unsafe {
        let v = _mm_set_sd(x);
        _mm_cvtsd_f64(_mm_sqrt_sd(v, v))
    }
}

/**
The square root; on this target the generic const algorithm is the
runtime path as well.
*/
#[cfg(not(all(target_arch = "x86_64", not(feature = "force-generic"))))]
pub fn sqrt_rt(x: f64) -> f64 {
    sqrt(x)
}

/**
The single precision square root, taking the hardware instruction when
one is available; see [`sqrt_rt`].
*/
#[cfg(all(target_arch = "x86_64", not(feature = "force-generic")))]
pub fn sqrtf_rt(x: f32) -> f32 {
    use core::arch::x86_64::{_mm_cvtss_f32, _mm_set_ss, _mm_sqrt_ss};

    if !(x > 0.0) {
        return sqrtf(x);
    }

    unsafe { _mm_cvtss_f32(_mm_sqrt_ss(_mm_set_ss(x))) }
}

/**
The single precision square root; on this target the generic const
algorithm is the runtime path as well.
*/
#[cfg(not(all(target_arch = "x86_64", not(feature = "force-generic"))))]
pub fn sqrtf_rt(x: f32) -> f32 {
    sqrtf(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_and_generic_sqrt_are_bit_identical() {
        let mut state = 0xdead_beef_1234_5678u64;

        for _ in 0..50_000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;

            let x = f64::from_bits(state);

            let generic = sqrt(x);
            let runtime = sqrt_rt(x);

            assert_eq!(
                generic.to_bits(),
                runtime.to_bits(),
                "sqrt({:e}) diverged between paths",
                x
            );
        }

        for x in [0.0f64, -0.0, 5e-324, f64::MAX, f64::INFINITY, 2.0] {
            assert_eq!(sqrt(x).to_bits(), sqrt_rt(x).to_bits());
        }
    }

    #[test]
    fn runtime_and_generic_sqrtf_are_bit_identical() {
        let mut state = 0x1357_9bdfu32;

        for _ in 0..50_000 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;

            let x = f32::from_bits(state);

            assert_eq!(sqrtf(x).to_bits(), sqrtf_rt(x).to_bits(), "{:e}", x);
        }
    }

    #[test]
    fn powf_tracks_the_f64_engine() {
        assert_eq!(8.0f32, powf(2.0, 3.0));
        assert_eq!(1.0f32, powf(f32::NAN, 0.0));
        assert!(powf(f32::NAN, 1.0).is_nan());
        assert_eq!((pow(3.0, 2.5)) as f32, powf(3.0, 2.5));
    }
}
