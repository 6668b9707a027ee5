//! Properties of the public number tools, exercised through the prelude.

use numkit::prelude::*;

#[test]
fn test_parity_is_complementary() {
    for n in (-1000..1000).chain([i64::MIN, i64::MAX]) {
        assert_eq!(Is::even(n), !Is::odd(n), "{}", n);
    }
}

#[test]
fn test_persian_roundtrip() {
    for s in ["0", "0123456789", "9876543210", "000", "42"] {
        let persian = Numeral::to_persian(s);
        assert_ne!(persian, s);
        assert_eq!(Numeral::to_english(&persian), s);
    }
}

#[test]
fn test_roman_roundtrip() {
    for n in 1..=3999 {
        assert_eq!(Roman::decode(&Roman::encode(n)), n);
    }
    assert_eq!(Roman::encode(0), "0");
    assert_eq!(Roman::encode(4000), "4000");
}

#[test]
fn test_abbreviate_and_file_size() {
    assert_eq!(Fmt::abbreviate(1500.0), "1.5K");
    assert_eq!(Fmt::abbreviate(2_500_000.0), "2.5M");
    assert_eq!(Fmt::abbreviate(999.0), "999");
    assert_eq!(Fmt::file_size(500), "500 B");
    assert_eq!(Fmt::file_size(1500), "1.5 KB");
}

#[test]
fn test_factorial_and_divide() {
    assert!(Theory::factorial(-1).unwrap_err().is(PreL4::ARGS));
    assert_eq!(Theory::factorial(0).unwrap(), 1);
    assert_eq!(Theory::factorial(5).unwrap(), 120);

    let e = Arith::divide(5.0, 0.0).unwrap_err();
    assert!(e.is(PreL4::ARGS));
    assert!(e.code().layout_string().contains("-ARGS-"));
    assert_eq!(Arith::divide(5.0, 2.0).unwrap(), 2.5);
}

#[test]
fn test_random_integer() {
    for _ in 0..500 {
        let v = Random::integer(3, None).unwrap();
        assert!((100..=999).contains(&v));
    }
    assert!(Random::integer(0, None).unwrap_err().is(PreL4::ARGS));
    let otp = Random::otp().unwrap();
    assert!((100_000..=999_999).contains(&otp));
}

#[test]
fn test_gcd_lcm() {
    assert_eq!(Theory::gcd(12, 18), 6);
    assert_eq!(Theory::lcm(4, 6), 12);
    for (a, b) in [(12, 18), (7, 13), (100, 75), (-8, 12)] {
        assert_eq!(Theory::gcd(a, b) * Theory::lcm(a, b), (a * b).unsigned_abs());
    }
}

#[test]
fn test_median() {
    assert_eq!(Stats::median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    assert_eq!(Stats::median(&[]), 0.0);
}

#[test]
fn test_find_numbers() {
    let s = "abc123def456";
    assert_eq!(Extract::first_number(s).as_deref(), Some("123"));
    assert_eq!(Extract::last_number(s).as_deref(), Some("456"));
    assert_eq!(Extract::all_numbers(s), vec!["123".to_string(), "456".to_string()]);
}

#[test]
fn test_parse_accepts_own_formatting() {
    for v in [0.0, 12.5, 1234.56, 9_876_543.21] {
        assert_eq!(Extract::parse(&Fmt::number(v, 2)), Some(v));
        assert_eq!(Extract::parse(&Fmt::currency(v, "USD", "en_US")), Some(v));
    }
    assert_eq!(Extract::parse(&Fmt::to_numeral_system(2024, "bengali")), Some(2024.0));
}

#[test]
fn test_words_and_ordinals() {
    assert_eq!(Words::spell(21), "twenty-one");
    assert_eq!(Words::spell(-1_000_000), "negative one million");
    assert_eq!(Fmt::ordinal(112), "112th");
    assert_eq!(Fmt::ordinal(122), "122nd");
    assert_eq!(Duration::humanize(90061), "1 day, 1 hour, 1 minute, 1 second");
}

#[test]
fn test_interp_laws() {
    for v in [0.0, 2.5, 7.0, 10.0] {
        let t = Interp::normalize(v, 0.0, 10.0);
        assert!(Interp::approximately(Interp::lerp(0.0, 10.0, t), v, 1e-12));
    }
    assert!(Interp::normalize(3.0, 4.0, 4.0).is_infinite());
}

#[test]
fn test_increment_in_place() {
    let mut counter = 0;
    for _ in 0..3 {
        Arith::increment(&mut counter);
    }
    Arith::decrement(&mut counter);
    assert_eq!(counter, 2);
}
