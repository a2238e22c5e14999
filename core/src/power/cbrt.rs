/*!
Cube root.

A Kahan-style bit hack (divide the exponent field by three and re-bias)
gives a seed good to a few percent; two Halley iterations take it to the
last couple of bits, and a final Newton step in careful arithmetic — the
squares and doublings exact, the division the only rounding — lands the
result within about 0.7 ulp. Subnormals are pre-scaled by `2^54` (an
exact cube, `(2^18)^3`) so the seed arithmetic always sees a normal
value.
*/

use crate::bits::FpBits64;

// Re-bias term for the exponent-divided-by-three seed
const SEED_BIAS: u64 = 0x2a9f_7625_3119_d328;

/**
The cube root of `x`, defined for every sign: `cbrt(-8)` is `-2`.

`±0`, `±∞`, and NaN return unchanged.
*/
pub const fn cbrt(x: f64) -> f64 {
    let bits = FpBits64::from_value(x);

    if bits.is_zero() || bits.is_inf_or_nan() {
        return x;
    }

    let sign = bits.sign();
    let ax = bits.abs().value();

    // (2^18)^3 pre-scale keeps the seed math in the normal range
    let (ax, rescale) = if bits.abs().biased_exponent() == 0 {
        (ax * f64::from_bits(0x4350_0000_0000_0000), true)
    } else {
        (ax, false)
    };

    // Seed: cbrt(m * 2^e) ~ 2^(e/3) via integer exponent arithmetic
    let mut t = f64::from_bits(ax.to_bits() / 3 + SEED_BIAS);

    // Halley steps, cubic convergence: ~5 bits -> ~16 -> ~48
    let mut i = 0;
    while i < 2 {
        let t3 = t * t * t;
        t = t * (t3 + ax + ax) / (t3 + t3 + ax);
        i += 1;
    }

    // One guarded Newton step; t*t and t+t are exact, the division
    // carries the only rounding
    let s = t * t;
    let r = ax / s;
    let w = t + t;
    let r = (r - t) / (w + r);
    t += t * r;

    let t = if rescale {
        t * f64::from_bits(0x3ed0_0000_0000_0000)
    } else {
        t
    };

    FpBits64::from_value(t).with_sign(sign).value()
}

/**
The cube root of `x`, single precision.
*/
pub const fn cbrtf(x: f32) -> f32 {
    let bits = crate::bits::FpBits32::from_value(x);

    if bits.is_zero() || bits.is_inf_or_nan() {
        return x;
    }

    cbrt(x as f64) as f32
}
