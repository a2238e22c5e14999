/*!
The [`FpBits64`] and [`FpBits32`] accessors over raw IEEE-754 bit patterns.

Every algorithm in this crate bottoms out here: a floating point value is
reinterpreted as its same-width unsigned bit pattern, decomposed into sign,
biased exponent and fraction fields, manipulated, and reassembled. The
reinterpretation is [`f64::to_bits`]/[`f64::from_bits`] (and the `f32`
equivalents), which are lossless in both directions and produce the same
bytes in const and runtime evaluation.
*/

/**
The sign of a floating point value, including the signs of zero, infinity,
and NaN.

IEEE-754 comparison treats `+0.0` and `-0.0` as equal; the sign bit still
distinguishes them, and this type reports it faithfully.
*/
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sign {
    /**
    The sign bit is clear.
    */
    Pos,
    /**
    The sign bit is set.
    */
    Neg,
}

impl Sign {
    /**
    Whether this is [`Sign::Neg`].
    */
    pub const fn is_neg(self) -> bool {
        matches!(self, Sign::Neg)
    }

    /**
    The opposite sign.
    */
    pub const fn negate(self) -> Self {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

/**
The class of a floating point value.

Exactly one category holds for any bit pattern; [`FpBits64::category`]
computes it from the exponent and fraction fields alone, so the partition
property is structural rather than numeric.
*/
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    /**
    All-ones exponent with a nonzero fraction.
    */
    Nan,
    /**
    All-ones exponent with a zero fraction.
    */
    Infinite,
    /**
    Zero exponent and zero fraction; `+0.0` or `-0.0`.
    */
    Zero,
    /**
    Zero exponent with a nonzero fraction; the leading significand bit is
    not implied.
    */
    Subnormal,
    /**
    Anything else.
    */
    Normal,
}

macro_rules! fp_bits {
    (
        $(#[$meta:meta])*
        $name:ident, $float:ty, $uint:ty, $exp_len:expr, $fraction_len:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        pub struct $name {
            bits: $uint,
        }

        impl $name {
            /**
            The width of the exponent field in bits.
            */
            pub const EXP_LEN: u32 = $exp_len;

            /**
            The width of the fraction field in bits.
            */
            pub const FRACTION_LEN: u32 = $fraction_len;

            /**
            The total width of the format: sign + exponent + fraction.
            */
            pub const TOTAL_LEN: u32 = 1 + Self::EXP_LEN + Self::FRACTION_LEN;

            /**
            The exponent bias; always positive.
            */
            pub const EXP_BIAS: i32 = (1 << (Self::EXP_LEN - 1)) - 1;

            /**
            The largest value of the biased exponent field; all-ones,
            marking an infinity or NaN.
            */
            pub const MAX_BIASED_EXP: u32 = (1 << Self::EXP_LEN) - 1;

            /**
            Mask selecting the fraction field.
            */
            pub const FRACTION_MASK: $uint = (1 << Self::FRACTION_LEN) - 1;

            /**
            Mask selecting the exponent field.
            */
            pub const EXP_MASK: $uint =
                ((1 << Self::EXP_LEN) - 1) << Self::FRACTION_LEN;

            /**
            Mask selecting the sign bit.
            */
            pub const SIGN_MASK: $uint = 1 << (Self::TOTAL_LEN - 1);

            /**
            Mask selecting everything but the sign bit.
            */
            pub const ABS_MASK: $uint = Self::EXP_MASK | Self::FRACTION_MASK;

            /**
            The quiet bit: the most significant fraction bit, set in every
            quiet NaN this crate constructs.
            */
            pub const QUIET_BIT: $uint = 1 << (Self::FRACTION_LEN - 1);

            /**
            Wrap a floating point value.
            */
            pub const fn from_value(value: $float) -> Self {
                Self { bits: value.to_bits() }
            }

            /**
            Wrap a raw bit pattern.
            */
            pub const fn from_bits(bits: $uint) -> Self {
                Self { bits }
            }

            /**
            The raw bit pattern.
            */
            pub const fn to_bits(self) -> $uint {
                self.bits
            }

            /**
            The floating point value these bits spell.
            */
            pub const fn value(self) -> $float {
                <$float>::from_bits(self.bits)
            }

            /**
            The sign bit.
            */
            pub const fn sign(self) -> Sign {
                if self.bits & Self::SIGN_MASK == 0 {
                    Sign::Pos
                } else {
                    Sign::Neg
                }
            }

            /**
            Whether the sign bit is set.

            Faithful for zeros and NaNs: `-0.0` and a NaN built with the
            sign bit set both report `true`.
            */
            pub const fn is_neg(self) -> bool {
                self.bits & Self::SIGN_MASK != 0
            }

            /**
            The raw (biased) exponent field.
            */
            pub const fn biased_exponent(self) -> u32 {
                ((self.bits & Self::EXP_MASK) >> Self::FRACTION_LEN) as u32
            }

            /**
            The unbiased exponent: the biased field minus [`Self::EXP_BIAS`].

            Zeros and subnormals report `-EXP_BIAS`; callers that need the
            normalized exponent of a subnormal must rescale first.
            */
            pub const fn exponent(self) -> i32 {
                self.biased_exponent() as i32 - Self::EXP_BIAS
            }

            /**
            The fraction field: the significand without the implied leading
            bit.
            */
            pub const fn fraction(self) -> $uint {
                self.bits & Self::FRACTION_MASK
            }

            /**
            These bits with the sign replaced.
            */
            pub const fn with_sign(self, sign: Sign) -> Self {
                let cleared = self.bits & !Self::SIGN_MASK;
                Self {
                    bits: match sign {
                        Sign::Pos => cleared,
                        Sign::Neg => cleared | Self::SIGN_MASK,
                    },
                }
            }

            /**
            These bits with the biased exponent field replaced.
            */
            pub const fn with_biased_exponent(self, exp: u32) -> Self {
                Self {
                    bits: (self.bits & !Self::EXP_MASK)
                        | (((exp as $uint) << Self::FRACTION_LEN) & Self::EXP_MASK),
                }
            }

            /**
            These bits with the fraction field replaced.
            */
            pub const fn with_fraction(self, fraction: $uint) -> Self {
                Self {
                    bits: (self.bits & !Self::FRACTION_MASK)
                        | (fraction & Self::FRACTION_MASK),
                }
            }

            /**
            Assemble a value from explicit fields.
            */
            pub const fn encode(sign: Sign, biased_exp: u32, fraction: $uint) -> Self {
                Self::from_bits(0)
                    .with_sign(sign)
                    .with_biased_exponent(biased_exp)
                    .with_fraction(fraction)
            }

            /**
            These bits with the sign cleared.
            */
            pub const fn abs(self) -> Self {
                Self { bits: self.bits & Self::ABS_MASK }
            }

            /**
            A signed zero.
            */
            pub const fn zero(sign: Sign) -> Self {
                Self::encode(sign, 0, 0)
            }

            /**
            A signed one.
            */
            pub const fn one(sign: Sign) -> Self {
                Self::encode(sign, Self::EXP_BIAS as u32, 0)
            }

            /**
            A signed infinity.
            */
            pub const fn inf(sign: Sign) -> Self {
                Self::encode(sign, Self::MAX_BIASED_EXP, 0)
            }

            /**
            A quiet NaN with the given sign and the quiet bit set.
            */
            pub const fn quiet_nan(sign: Sign) -> Self {
                Self::encode(sign, Self::MAX_BIASED_EXP, Self::QUIET_BIT)
            }

            /**
            The smallest positive subnormal magnitude, signed.
            */
            pub const fn min_subnormal(sign: Sign) -> Self {
                Self::encode(sign, 0, 1)
            }

            /**
            The largest subnormal magnitude, signed.
            */
            pub const fn max_subnormal(sign: Sign) -> Self {
                Self::encode(sign, 0, Self::FRACTION_MASK)
            }

            /**
            The smallest normal magnitude, signed.
            */
            pub const fn min_normal(sign: Sign) -> Self {
                Self::encode(sign, 1, 0)
            }

            /**
            The largest finite magnitude, signed.
            */
            pub const fn max_normal(sign: Sign) -> Self {
                Self::encode(sign, Self::MAX_BIASED_EXP - 1, Self::FRACTION_MASK)
            }

            /**
            Whether the value is `+0.0` or `-0.0`.
            */
            pub const fn is_zero(self) -> bool {
                self.bits & Self::ABS_MASK == 0
            }

            /**
            Whether the exponent field is all-ones and the fraction nonzero.
            */
            pub const fn is_nan(self) -> bool {
                self.bits & Self::ABS_MASK > Self::EXP_MASK
            }

            /**
            Whether the exponent field is all-ones and the fraction zero.
            */
            pub const fn is_inf(self) -> bool {
                self.bits & Self::ABS_MASK == Self::EXP_MASK
            }

            /**
            Whether the exponent field is all-ones.
            */
            pub const fn is_inf_or_nan(self) -> bool {
                self.bits & Self::EXP_MASK == Self::EXP_MASK
            }

            /**
            Whether the value is finite (not an infinity and not a NaN).
            */
            pub const fn is_finite(self) -> bool {
                !self.is_inf_or_nan()
            }

            /**
            Whether the value is nonzero with a zero exponent field.
            */
            pub const fn is_subnormal(self) -> bool {
                self.biased_exponent() == 0 && !self.is_zero()
            }

            /**
            Whether the value is finite, nonzero, and not subnormal.
            */
            pub const fn is_normal(self) -> bool {
                let exp = self.biased_exponent();
                exp != 0 && exp != Self::MAX_BIASED_EXP
            }

            /**
            Classify these bits.
            */
            pub const fn category(self) -> Category {
                if self.is_zero() {
                    Category::Zero
                } else if self.is_nan() {
                    Category::Nan
                } else if self.is_inf() {
                    Category::Infinite
                } else if self.biased_exponent() == 0 {
                    Category::Subnormal
                } else {
                    Category::Normal
                }
            }
        }
    };
}

fp_bits!(
    /**
    Accessor over the bit pattern of an [`f64`] (1 sign bit, 11 exponent
    bits, 52 fraction bits).
    */
    FpBits64,
    f64,
    u64,
    11,
    52
);

fp_bits!(
    /**
    Accessor over the bit pattern of an [`f32`] (1 sign bit, 8 exponent
    bits, 23 fraction bits).
    */
    FpBits32,
    f32,
    u32,
    8,
    23
);
