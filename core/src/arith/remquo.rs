/*!
Round-to-nearest remainder and partial quotient.

`remquo(x, y)` returns the IEEE remainder (`x - n*y` with `n` the integer
nearest `x/y`, ties to even) together with the low three bits of `n`
carrying the sign of `x/y`. [`remainder`] is the same computation with the
quotient discarded.

The quotient is folded down with `fmod(x, 8y)` first, then recovered by at
most three staged subtractions, so no full-width division happens and the
remainder stays exact.
*/

use crate::arith::{fabs, fabsf, fmod, fmodf};
use crate::bits::{FpBits32, FpBits64};

/**
The remainder of `x / y` rounded to nearest, and the low three bits of the
quotient with the sign of `x / y`.

NaN operands, an infinite `x`, or a zero `y` are domain errors returning
NaN with a zero quotient.
*/
pub const fn remquo(x: f64, y: f64) -> (f64, i32) {
    let xb = FpBits64::from_value(x);
    let yb = FpBits64::from_value(y);

    let x_neg = xb.is_neg();
    let quotient_neg = xb.is_neg() != yb.is_neg();

    let ax = xb.abs().to_bits();
    let ay = yb.abs().to_bits();

    if yb.is_zero() || xb.is_inf() || xb.is_nan() || yb.is_nan() {
        return ((x * y) / (x * y), 0);
    }

    // Fold the quotient down to its low three bits while the remainder
    // stays exact; 8y must not overflow for this to be valid.
    let mut xr = x;
    if ay <= 0x7fbf_ffff_ffff_ffff {
        xr = fmod(x, 8.0 * y);
    }

    if ax == ay {
        return (0.0 * x, if quotient_neg { -1 } else { 1 });
    }

    let mut r = fabs(xr);
    let ymag = FpBits64::from_bits(ay).value();
    let mut q = 0i32;

    if ay <= 0x7fcf_ffff_ffff_ffff && r >= 4.0 * ymag {
        r -= 4.0 * ymag;
        q += 4;
    }

    if ay <= 0x7fdf_ffff_ffff_ffff && r >= 2.0 * ymag {
        r -= 2.0 * ymag;
        q += 2;
    }

    if ay < 0x0020_0000_0000_0000 {
        // y is too small for y/2 to be exact; compare 2r against y instead
        if r + r > ymag {
            r -= ymag;
            q += 1;
            if r + r >= ymag {
                r -= ymag;
                q += 1;
            }
        }
    } else {
        let y_half = 0.5 * ymag;
        if r > y_half {
            r -= ymag;
            q += 1;
            if r >= y_half {
                r -= ymag;
                q += 1;
            }
        }
    }

    // Keep the zero positive before the sign of x is put back
    if r == 0.0 {
        r = 0.0;
    }

    if x_neg {
        r = -r;
    }

    (r, if quotient_neg { -q } else { q })
}

/**
The remainder of `x / y` rounded to nearest, and the low three bits of the
quotient with the sign of `x / y`.
*/
pub const fn remquof(x: f32, y: f32) -> (f32, i32) {
    let xb = FpBits32::from_value(x);
    let yb = FpBits32::from_value(y);

    let x_neg = xb.is_neg();
    let quotient_neg = xb.is_neg() != yb.is_neg();

    let ax = xb.abs().to_bits();
    let ay = yb.abs().to_bits();

    if yb.is_zero() || xb.is_inf() || xb.is_nan() || yb.is_nan() {
        return ((x * y) / (x * y), 0);
    }

    let mut xr = x;
    if ay <= 0x7dff_ffff {
        xr = fmodf(x, 8.0 * y);
    }

    if ax == ay {
        return (0.0 * x, if quotient_neg { -1 } else { 1 });
    }

    let mut r = fabsf(xr);
    let ymag = FpBits32::from_bits(ay).value();
    let mut q = 0i32;

    if ay <= 0x7e7f_ffff && r >= 4.0 * ymag {
        r -= 4.0 * ymag;
        q += 4;
    }

    if ay <= 0x7eff_ffff && r >= 2.0 * ymag {
        r -= 2.0 * ymag;
        q += 2;
    }

    if ay < 0x0100_0000 {
        if r + r > ymag {
            r -= ymag;
            q += 1;
            if r + r >= ymag {
                r -= ymag;
                q += 1;
            }
        }
    } else {
        let y_half = 0.5 * ymag;
        if r > y_half {
            r -= ymag;
            q += 1;
            if r >= y_half {
                r -= ymag;
                q += 1;
            }
        }
    }

    if r == 0.0 {
        r = 0.0;
    }

    if x_neg {
        r = -r;
    }

    (r, if quotient_neg { -q } else { q })
}

/**
The remainder of `x / y` with the quotient rounded to nearest, ties to
even; may be negative for positive `x`.
*/
pub const fn remainder(x: f64, y: f64) -> f64 {
    remquo(x, y).0
}

/**
The remainder of `x / y` with the quotient rounded to nearest, ties to
even.
*/
pub const fn remainderf(x: f32, y: f32) -> f32 {
    remquof(x, y).0
}
