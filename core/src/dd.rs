/*!
The [`DoubleDouble`] compensated pair.

A double-double carries a value as the unevaluated sum `hi + lo` of two
ordinary doubles, recovering precision the native format loses between the
steps of a transcendental evaluation. Pairs are transient — built, combined,
and collapsed within a single call — and after any normalizing operation
`|lo|` is below one ulp of `hi`.
*/

/**
A value held to roughly twice double precision as the exact sum of two
doubles.
*/
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DoubleDouble {
    /**
    The leading term.
    */
    pub hi: f64,
    /**
    The trailing error term; below one ulp of `hi` after normalization.
    */
    pub lo: f64,
}

// 2^27 + 1, the Dekker split point for a 53-bit significand
const SPLIT: f64 = 134_217_729.0;

impl DoubleDouble {
    /**
    Wrap an existing hi/lo pair as-is.
    */
    pub const fn new(hi: f64, lo: f64) -> Self {
        DoubleDouble { hi, lo }
    }

    /**
    The exact sum `a + b` under the precondition `|a| >= |b|` (or either
    is zero). Two operations; the error term is exact.
    */
    pub const fn fast_two_sum(a: f64, b: f64) -> Self {
        let hi = a + b;
        let lo = b - (hi - a);

        DoubleDouble { hi, lo }
    }

    /**
    The exact sum `a + b` with no ordering precondition (Knuth two-sum).
    */
    pub const fn two_sum(a: f64, b: f64) -> Self {
        let hi = a + b;
        let bb = hi - a;
        let lo = (a - (hi - bb)) + (b - bb);

        DoubleDouble { hi, lo }
    }

    /**
    The exact product `a * b` via Dekker splitting; `hi` is the rounded
    product and `lo` the rounding error, computed without a hardware FMA.
    */
    pub const fn mul_exact(a: f64, b: f64) -> Self {
        let at = SPLIT * a;
        let ahi = at - (at - a);
        let alo = a - ahi;

        let bt = SPLIT * b;
        let bhi = bt - (bt - b);
        let blo = b - bhi;

        let hi = a * b;
        let lo = ((ahi * bhi - hi) + ahi * blo + alo * bhi) + alo * blo;

        DoubleDouble { hi, lo }
    }

    /**
    Add a plain double, renormalizing.
    */
    pub const fn add_f64(self, rhs: f64) -> Self {
        let s = Self::two_sum(self.hi, rhs);

        Self::fast_two_sum(s.hi, s.lo + self.lo)
    }

    /**
    Collapse to a single double.
    */
    pub const fn to_f64(self) -> f64 {
        self.hi + self.lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ulp(x: f64) -> f64 {
        let bits = x.abs().to_bits();
        f64::from_bits(bits + 1) - f64::from_bits(bits)
    }

    #[test]
    fn fast_two_sum_is_exact() {
        let a = 1.0;
        let b = 1e-30;
        let s = DoubleDouble::fast_two_sum(a, b);

        assert_eq!(1.0, s.hi);
        assert_eq!(1e-30, s.lo);
        assert!(s.lo.abs() < ulp(s.hi));
    }

    #[test]
    fn two_sum_recovers_the_rounding_error() {
        for (a, b) in [
            (0.1, 0.2),
            (1e16, 1.0),
            (-1e16, 1.0),
            (3.0, -2.9999999999999996),
        ] {
            let s = DoubleDouble::two_sum(a, b);

            assert_eq!(a + b, s.hi);
            assert!(s.lo.abs() <= ulp(s.hi), "{} + {}", a, b);
        }
    }

    #[test]
    fn mul_exact_splits_the_product() {
        let p = DoubleDouble::mul_exact(0.1, 0.3);

        assert_eq!(0.1 * 0.3, p.hi);
        assert_ne!(0.0, p.lo);
        assert!(p.lo.abs() < ulp(p.hi));

        // Exactly representable products carry no error term
        let q = DoubleDouble::mul_exact(1.5, 2.0);
        assert_eq!(3.0, q.hi);
        assert_eq!(0.0, q.lo);
    }

    #[test]
    fn const_evaluation_matches_runtime() {
        const S: DoubleDouble = DoubleDouble::two_sum(1e16, 1.0);
        let r = DoubleDouble::two_sum(1e16, 1.0);

        assert_eq!(S.hi.to_bits(), r.hi.to_bits());
        assert_eq!(S.lo.to_bits(), r.lo.to_bits());
    }
}
