/*!
Cross-function properties of the engine, exercised through the public
surface.
*/

use rand::Rng;

fn ulp_diff(a: f64, b: f64) -> u64 {
    a.to_bits().abs_diff(b.to_bits())
}

#[test]
fn bit_reinterpretation_round_trips() {
    let mut rng = rand::rng();

    for _ in 0..100_000 {
        let bits: u64 = rng.random();
        let b = exmath::engine::bits::FpBits64::from_bits(bits);

        assert_eq!(bits, b.to_bits());
        assert_eq!(bits, exmath::engine::bits::FpBits64::from_value(b.value()).to_bits());
    }

    for _ in 0..100_000 {
        let bits: u32 = rng.random();

        assert_eq!(
            bits,
            exmath::engine::bits::FpBits32::from_bits(bits).to_bits()
        );
    }
}

#[test]
fn classification_partitions_the_domain() {
    let mut rng = rand::rng();

    for _ in 0..100_000 {
        let x = f64::from_bits(rng.random());

        let flags = [
            exmath::is_nan(x),
            exmath::is_inf(x),
            x == 0.0 && !exmath::is_nan(x),
            exmath::is_subnormal(x),
            exmath::is_normal(x),
        ];

        assert_eq!(
            1,
            flags.iter().filter(|&&f| f).count(),
            "partition broken for {:#x}",
            x.to_bits()
        );
    }
}

#[test]
fn nearest_integer_functions_fix_integers() {
    let mut rng = rand::rng();

    for _ in 0..10_000 {
        let n: i64 = rng.random_range(-(1 << 52)..(1 << 52));
        let x = n as f64;

        assert_eq!(x, exmath::floor(x));
        assert_eq!(x, exmath::ceil(x));
        assert_eq!(x, exmath::trunc(x));
        assert_eq!(x, exmath::round(x));
        assert_eq!(x, exmath::roundeven(x));
    }
}

#[test]
fn floor_ceil_bracket_and_agree_with_std() {
    let mut rng = rand::rng();

    for _ in 0..50_000 {
        let x = rng.random_range(-1e9f64..1e9);

        assert_eq!(x.floor().to_bits(), exmath::floor(x).to_bits(), "{}", x);
        assert_eq!(x.ceil().to_bits(), exmath::ceil(x).to_bits(), "{}", x);
        assert_eq!(x.trunc().to_bits(), exmath::trunc(x).to_bits(), "{}", x);
        assert_eq!(x.round().to_bits(), exmath::round(x).to_bits(), "{}", x);
    }
}

#[test]
fn fmod_matches_the_native_operator() {
    let mut rng = rand::rng();

    for _ in 0..50_000 {
        let x = rng.random_range(-1e12f64..1e12);
        let y = rng.random_range(-1e6f64..1e6);

        if y == 0.0 {
            continue;
        }

        assert_eq!((x % y).to_bits(), exmath::fmod(x, y).to_bits(), "{} % {}", x, y);
    }
}

#[test]
fn fmod_signed_zero_rule() {
    for y in [1.0f64, -3.5, 1e300, 5e-324] {
        assert!(!exmath::signbit(exmath::fmod(0.0, y)));
        assert!(exmath::signbit(exmath::fmod(-0.0, y)));
    }
}

#[test]
fn nextafter_is_monotone_everywhere() {
    let mut rng = rand::rng();

    for _ in 0..50_000 {
        let x = f64::from_bits(rng.random());

        if !x.is_finite() {
            continue;
        }

        assert!(exmath::nextafter(x, f64::INFINITY) > x, "{:e}", x);
        assert!(exmath::nextafter(x, f64::NEG_INFINITY) < x, "{:e}", x);
    }
}

#[test]
fn scalbn_inverts_itself() {
    let mut rng = rand::rng();

    for _ in 0..50_000 {
        let x = rng.random_range(-1e10f64..1e10);
        let n = rng.random_range(-800i32..800);

        let scaled = exmath::scalbn(x, n);

        if scaled.is_finite() && exmath::is_normal(scaled) {
            assert_eq!(
                x.to_bits(),
                exmath::scalbn(scaled, -n).to_bits(),
                "{} <<>> {}",
                x,
                n
            );
        }
    }
}

#[test]
fn sqrt_is_bit_identical_to_std() {
    let mut rng = rand::rng();

    for _ in 0..200_000 {
        let x = f64::from_bits(rng.random::<u64>() & !(1u64 << 63));

        if x.is_nan() {
            continue;
        }

        assert_eq!(x.sqrt().to_bits(), exmath::sqrt(x).to_bits(), "{:e}", x);
    }
}

#[test]
fn exp2_log2_round_trip() {
    let mut rng = rand::rng();

    for _ in 0..20_000 {
        let k = rng.random_range(-500i32..500);
        let x = exmath::scalbn(rng.random_range(1.0f64..2.0), k);

        let rt = exmath::exp2(exmath::log2(x));

        // log2's half-ulp lands in exp2's argument, so the round-trip
        // error grows with the magnitude of log2(x)
        let tol = 4 + 2 * k.unsigned_abs() as u64;

        assert!(
            ulp_diff(rt, x) <= tol,
            "exp2(log2({:e})) off by {} ulp",
            x,
            ulp_diff(rt, x)
        );
    }

    // Near one the round trip stays within a couple of ulp
    for _ in 0..20_000 {
        let x = rng.random_range(0.5f64..2.0);
        let rt = exmath::exp2(exmath::log2(x));

        assert!(ulp_diff(rt, x) <= 2, "exp2(log2({}))", x);
    }
}

#[test]
fn exp_log_round_trip() {
    let mut rng = rand::rng();

    for _ in 0..20_000 {
        let x = rng.random_range(-700.0f64..700.0);
        let rt = exmath::log(exmath::exp(x));

        // log amplifies exp's ulp error by |x| at the endpoints
        let tol = 1e-13 * (1.0 + x.abs());

        assert!((rt - x).abs() <= tol, "log(exp({})) = {}", x, rt);
    }
}

#[test]
fn pow_agrees_with_repeated_multiplication() {
    let mut rng = rand::rng();

    for _ in 0..10_000 {
        let x = rng.random_range(-10.0f64..10.0);

        if x == 0.0 {
            continue;
        }

        let x2 = exmath::pow(x, 2.0);
        let x3 = exmath::pow(x, 3.0);

        assert!(ulp_diff(x2, x * x) <= 2, "pow({}, 2)", x);
        assert!(ulp_diff(x3, x * x * x) <= 3, "pow({}, 3)", x);
    }
}

#[test]
fn dual_mode_anchor_values() {
    const SQRT2: f64 = exmath::engine::power::sqrt(2.0);
    const LOG2_8: f64 = exmath::engine::expo::log2(8.0);
    const TINY: f64 = exmath::engine::manip::scalbn(1.0, -1074);
    const NEXT: f64 = exmath::engine::manip::nextafter(1.0, 2.0);
    const E: f64 = exmath::engine::expo::exp(1.0);
    const CUBE: f64 = exmath::engine::power::pow(-3.0, 3.0);

    assert_eq!(SQRT2.to_bits(), exmath::sqrt(2.0f64).to_bits());
    assert_eq!(LOG2_8.to_bits(), 3.0f64.to_bits());
    assert_eq!(TINY, 5e-324);
    assert_eq!(NEXT, 1.0 + f64::EPSILON);
    assert_eq!(E.to_bits(), exmath::exp(1.0f64).to_bits());
    assert_eq!(CUBE, -27.0);
}

#[test]
fn frexp_modf_reassemble() {
    let mut rng = rand::rng();

    for _ in 0..50_000 {
        let x = rng.random_range(-1e15f64..1e15);

        let (m, e) = exmath::frexp(x);
        assert_eq!(x.to_bits(), exmath::scalbn(m, e).to_bits(), "{}", x);

        let (frac, int) = exmath::modf(x);
        assert_eq!(x, frac + int, "{}", x);
        assert_eq!(exmath::signbit(x), exmath::signbit(int), "{}", x);
    }
}
