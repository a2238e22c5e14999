/*!
`e^x - 1` without the cancellation.

Same `k*ln2 + r` reduction as [`exp`](super::exp()), but the kernel
approximates `expm1(r)` directly with a rational form in `r^2` (the Q
coefficients), and the `2^k` reconstruction is spelled out per band of
`k` so that subtracting the 1 never cancels significant bits. The
reduction error is carried in a correction term `c` the whole way.
*/

use crate::bits::FpBits64;

const O_THRESHOLD: f64 = 7.09782712893383973096e+02;
const LN2_HI: f64 = f64::from_bits(0x3fe62e42fee00000);
const LN2_LO: f64 = f64::from_bits(0x3dea39ef35793c76);
const INV_LN2: f64 = f64::from_bits(0x3ff71547652b82fe);
const Q1: f64 = f64::from_bits(0xbfa11111111110f4);
const Q2: f64 = f64::from_bits(0x3f5a01a019fe5585);
const Q3: f64 = f64::from_bits(0xbf14ce199eaadbb7);
const Q4: f64 = f64::from_bits(0x3ed0cfca86e65239);
const Q5: f64 = f64::from_bits(0xbe8afdb76e09c32d);

const fn hi_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

/**
`e^x - 1`, accurate even where `exp(x)` is within an ulp of 1.

`expm1(±0)` is `±0`, `expm1(-∞)` is exactly `-1`, `expm1(+∞)` is `+∞`,
NaN propagates, and the overflow threshold is the same 709.78... as
[`exp`](super::exp()).
*/
pub const fn expm1(x: f64) -> f64 {
    let x1p1023 = f64::from_bits(0x7fe0_0000_0000_0000);

    let mut x = x;
    let mut hx = hi_word(x);
    let sign = (hx >> 31) as i32;
    hx &= 0x7fff_ffff;

    if hx >= 0x4043_687a {
        // |x| >= 56 ln2
        if FpBits64::from_value(x).is_nan() {
            return x;
        }

        if sign != 0 {
            return -1.0;
        }

        if x > O_THRESHOLD {
            return x * x1p1023;
        }
    }

    let mut c = 0.0;
    let k: i32;

    if hx > 0x3fd6_2e42 {
        // |x| > 0.5 ln2
        k = if hx < 0x3ff0_a2b2 {
            1 - sign - sign
        } else {
            (INV_LN2 * x + [0.5, -0.5][sign as usize]) as i32
        };

        let t = k as f64;
        let hi = x - t * LN2_HI;
        let lo = t * LN2_LO;
        x = hi - lo;
        c = (hi - x) - lo;
    } else if hx < 0x3c90_0000 {
        // |x| < 2^-54
        return x;
    } else {
        k = 0;
    }

    // expm1(x) on the primary range via the rational kernel
    let hfx = 0.5 * x;
    let hxs = x * hfx;
    let r1 = 1.0 + hxs * (Q1 + hxs * (Q2 + hxs * (Q3 + hxs * (Q4 + hxs * Q5))));
    let t = 3.0 - r1 * hfx;
    let mut e = hxs * ((r1 - t) / (6.0 - x * t));

    if k == 0 {
        // c is zero here
        return x - (x * e - hxs);
    }

    e = x * (e - c) - c;
    e -= hxs;

    if k == -1 {
        return 0.5 * (x - e) - 0.5;
    }

    if k == 1 {
        if x < -0.25 {
            return -2.0 * (e - (x + 0.5));
        }

        return 1.0 + 2.0 * (x - e);
    }

    let twopk = f64::from_bits(((0x3ff + k) as u64) << 52);

    if k < 0 || k > 56 {
        // |result| is far from 1; exp(x) - 1 in two rounded steps is fine
        let mut y = x - e + 1.0;

        if k == 1024 {
            y = y * 2.0 * x1p1023;
        } else {
            y = y * twopk;
        }

        return y - 1.0;
    }

    let uf = f64::from_bits(((0x3ff - k) as u64) << 52);

    if k < 20 {
        (x - e + (1.0 - uf)) * twopk
    } else {
        (x - e - uf + 1.0) * twopk
    }
}
