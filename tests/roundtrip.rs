//! Round-trip properties from `spec.md` §8: parse-then-format proximate
//! equality (property 6) and base-conversion round trips (property 7).

use apnum::Number;
use proptest::prelude::*;

/// Two formatted strings are "proximate-equal" if they match character for
/// character up to some index, after which either one ends or one has
/// `(d+1)000...` where the other has `d999...` — the representation-
/// boundary rounding called out in `spec.md` §8.
fn proximate_equal(a: &str, b: &str) -> bool {
    let ac: Vec<char> = a.chars().collect();
    let bc: Vec<char> = b.chars().collect();

    let mut i = 0;
    while i < ac.len() && i < bc.len() && ac[i] == bc[i] {
        i += 1;
    }

    if i == ac.len() || i == bc.len() {
        return true;
    }

    let (d1, d2) = (ac[i], bc[i]);
    let rest_a = &ac[i + 1..];
    let rest_b = &bc[i + 1..];
    if d1 as u32 + 1 == d2 as u32 {
        rest_a.iter().all(|&c| c == '9') && rest_b.iter().all(|&c| c == '0')
    } else if d2 as u32 + 1 == d1 as u32 {
        rest_b.iter().all(|&c| c == '9') && rest_a.iter().all(|&c| c == '0')
    } else {
        false
    }
}

#[test]
fn parse_format_round_trip_decimal() {
    let n = Number::from_text("3.14159265358979", 500, 10).unwrap();
    let s = n.to_dec_string();
    assert!(proximate_equal(&s, "3.14159265358979"));
}

#[test]
fn parse_format_round_trip_hex() {
    let n = Number::from_text("0x1A2B3C", 200, 16).unwrap();
    assert_eq!(n.to_hex_string(), "1A2B3C");
}

#[test]
fn parse_format_round_trip_octal() {
    let n = Number::from_text("017", 200, 10).unwrap();
    assert_eq!(n.to_oct_string(), "17");
}

#[test]
fn parse_format_round_trip_binary() {
    let n = Number::from_text("0b10110", 200, 10).unwrap();
    assert_eq!(n.to_bin_string(), "10110");
}

proptest! {
    #[test]
    fn base_conversion_round_trip(v in -1_000_000_000i64..=1_000_000_000i64, b2 in 2i64..=1_000_000i64) {
        let a = Number::from_i64(v, 300, 10);
        let converted = a.convert_base(b2).convert_base(10);
        let delta = &converted - &a;
        prop_assert!(delta.is_zero());
    }

    #[test]
    fn decimal_integer_round_trip(v in -10_000_000i64..=10_000_000i64) {
        let a = Number::from_i64(v, 200, 10);
        let s = a.to_dec_string();
        let parsed = Number::from_text(&s, 200, 10).unwrap();
        prop_assert_eq!(parsed, a);
    }

    #[test]
    fn hex_string_round_trip(v in -10_000_000i64..=10_000_000i64) {
        let a = Number::from_i64(v, 200, apnum::DEFAULT_BASE);
        let s = a.to_hex_string();
        let (sign, magnitude) = match s.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", s.as_str()),
        };
        let parsed = Number::from_text(&format!("{sign}0x{magnitude}"), 200, apnum::DEFAULT_BASE).unwrap();
        prop_assert_eq!(parsed, a);
    }
}
