/*!
Division-free floating point remainder.

The value of `fmod(x, y)` is `x - trunc(x/y) * y`, but computing it that
way loses the last bits whenever `x/y` rounds. This implementation aligns
the two significands as integers and reduces with exact integer arithmetic
instead, so the result is exact for every finite input.

The special-case table runs first and settles the nine combinations of
{zero, infinite, finite} × {zero, infinite, finite, NaN} exactly as IEEE
754 specifies them, including the sign rule `fmod(±0, y) = ±0`.
*/

use crate::bits::{FpBits32, FpBits64, Sign};

// Remainder of (x << e) mod y for 53-bit (or 24-bit) significands.
const fn reduce64(mut x: u64, mut e: u32, y: u64) -> u64 {
    if x >= y {
        x %= y;
    }

    if e <= 8 {
        while e > 0 {
            x <<= 1;
            if x >= y {
                x -= y;
            }
            e -= 1;
        }

        return x;
    }

    while e > 63 {
        x = (((x as u128) << 63) % (y as u128)) as u64;
        e -= 63;
    }

    if e > 0 {
        x = (((x as u128) << e) % (y as u128)) as u64;
    }

    x
}

const fn reduce32(mut x: u32, mut e: u32, y: u32) -> u32 {
    if x >= y {
        x %= y;
    }

    if e <= 8 {
        while e > 0 {
            x <<= 1;
            if x >= y {
                x -= y;
            }
            e -= 1;
        }

        return x;
    }

    while e > 31 {
        x = (((x as u64) << 31) % (y as u64)) as u32;
        e -= 31;
    }

    if e > 0 {
        x = (((x as u64) << e) % (y as u64)) as u32;
    }

    x
}

// Split |x| bits into an aligned significand and a shifted exponent where
// subnormals land at exponent zero on the same scale as normals.
const fn split64(bits: u64) -> (u64, u32) {
    let implicit = 1u64 << FpBits64::FRACTION_LEN;
    let sat = bits.saturating_sub(implicit);

    (bits - (sat & FpBits64::EXP_MASK), (sat >> FpBits64::FRACTION_LEN) as u32)
}

const fn split32(bits: u32) -> (u32, u32) {
    let implicit = 1u32 << FpBits32::FRACTION_LEN;
    let sat = bits.saturating_sub(implicit);

    (bits - (sat & FpBits32::EXP_MASK), sat >> FpBits32::FRACTION_LEN)
}

/**
The remainder of `x / y`, truncated toward zero.

The result has the sign of `x` and magnitude below `|y|`; it is exact.
NaN inputs propagate; `fmod(∞, y)` and `fmod(x, 0)` are domain errors
returning NaN; `fmod(±0, y)` is `±0`; `fmod(x, ±∞)` is `x` for finite `x`.
*/
pub const fn fmod(x: f64, y: f64) -> f64 {
    let xb = FpBits64::from_value(x);
    let yb = FpBits64::from_value(y);

    if xb.is_nan() {
        return x;
    }

    if yb.is_nan() {
        return y;
    }

    if xb.is_inf() || yb.is_zero() {
        return FpBits64::quiet_nan(Sign::Pos).value();
    }

    let ux = xb.abs().to_bits();
    let uy = yb.abs().to_bits();

    // Covers x == ±0 and finite x against an infinite y
    if ux < uy {
        return x;
    }

    let (num, ex) = split64(ux);
    let (div, ey) = split64(uy);
    let e = ex - ey;

    // The quick path needs both significands normalized so num < 2 * div
    let rem = if ex > 0 && ey > 0 && e <= 1 {
        let mut r = num;
        if r >= div {
            r -= div;
        }
        if e == 1 {
            r <<= 1;
            if r >= div {
                r -= div;
            }
        }
        r
    } else {
        reduce64(num, e, div)
    };

    if rem == 0 {
        return FpBits64::zero(xb.sign()).value();
    }

    let top = 63 - rem.leading_zeros();
    let shift = if ey < FpBits64::FRACTION_LEN - top {
        ey
    } else {
        FpBits64::FRACTION_LEN - top
    };
    let mag = (rem << shift) + (((ey - shift) as u64) << FpBits64::FRACTION_LEN);

    FpBits64::from_bits(mag).with_sign(xb.sign()).value()
}

/**
The remainder of `x / y`, truncated toward zero.
*/
pub const fn fmodf(x: f32, y: f32) -> f32 {
    let xb = FpBits32::from_value(x);
    let yb = FpBits32::from_value(y);

    if xb.is_nan() {
        return x;
    }

    if yb.is_nan() {
        return y;
    }

    if xb.is_inf() || yb.is_zero() {
        return FpBits32::quiet_nan(Sign::Pos).value();
    }

    let ux = xb.abs().to_bits();
    let uy = yb.abs().to_bits();

    if ux < uy {
        return x;
    }

    let (num, ex) = split32(ux);
    let (div, ey) = split32(uy);
    let e = ex - ey;

    let rem = if ex > 0 && ey > 0 && e <= 1 {
        let mut r = num;
        if r >= div {
            r -= div;
        }
        if e == 1 {
            r <<= 1;
            if r >= div {
                r -= div;
            }
        }
        r
    } else {
        reduce32(num, e, div)
    };

    if rem == 0 {
        return FpBits32::zero(xb.sign()).value();
    }

    let top = 31 - rem.leading_zeros();
    let shift = if ey < FpBits32::FRACTION_LEN - top {
        ey
    } else {
        FpBits32::FRACTION_LEN - top
    };
    let mag = (rem << shift) + ((ey - shift) << FpBits32::FRACTION_LEN);

    FpBits32::from_bits(mag).with_sign(xb.sign()).value()
}
