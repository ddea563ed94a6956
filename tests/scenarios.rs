//! Concrete scenarios E1-E8 from `spec.md` §8.

use apnum::{Error, Number};

#[test]
fn e1_parse_format_pi_prefix() {
    let n = Number::from_text("3.14159265358979", 500, 10).unwrap();
    assert!(n.to_dec_string().starts_with("3.14159265358979"));
}

#[test]
fn e2_power_series_for_e() {
    let mut e = Number::from_i64(1, 1000, 10);
    let mut t = Number::from_i64(1, 1000, 10);
    let mut i = 1i64;
    while !t.is_zero() {
        t /= i;
        e += &t;
        i += 1;
    }

    let s = e.to_dec_string();
    assert!(s.starts_with("2.718281828459045235360287471352"));
}

#[test]
fn e3_machin_like_pi() {
    // pi = 88*arctan(3/79) - 20*arctan(685601/69049993)
    fn arctan(num: i64, den: i64, precision: i64) -> Number {
        let mut x = Number::from_i64(num, precision, 10);
        x /= den;

        let x_squared = &x * &x;
        let mut result = x.clone();
        let mut term = x;
        let mut sign = -1i64;
        let mut n = 3i64;
        loop {
            term *= &x_squared;
            let mut addend = term.clone();
            addend /= n;
            if addend.is_zero() {
                break;
            }
            if sign > 0 {
                result += &addend;
            } else {
                result -= &addend;
            }
            sign = -sign;
            n += 2;
        }
        result
    }

    let precision = 1200;
    let mut pi = arctan(3, 79, precision);
    pi *= 88i64;
    let mut second = arctan(685601, 69049993, precision);
    second *= 20i64;
    pi -= &second;

    let s = pi.to_dec_string();
    assert!(s.starts_with("3.141592653589793238462643383279"));
}

#[test]
fn e4_large_exact_integer_binomial() {
    fn factorial(n: u32, precision: i64) -> Number {
        let mut f = Number::from_i64(1, precision, 10);
        for k in 2..=n {
            f *= k as i64;
        }
        f
    }

    let precision = 200;
    let mut c = factorial(1000, precision);
    c /= factorial(900, precision);
    c /= factorial(100, precision);

    let reference = Number::from_text("6.3850511926305130236698511142022e139", precision, 10).unwrap();
    let delta = &c - &reference;
    let mut relative = delta.clone();
    relative /= &reference;

    let tolerance = Number::from_text("1e-20", precision, 10).unwrap();
    assert!(apnum::abs(&relative) < tolerance);
}

#[test]
fn e5_rational_round_trip() {
    let mut a = Number::from_i64(1, 100, 111);
    a /= 1001i64;
    a *= 1001i64;
    assert_eq!(a, Number::from_i64(1, 100, 111));
}

#[test]
fn e6_hex_round_trip() {
    let x = Number::from_i64(12345678901, 300, apnum::DEFAULT_BASE);
    let s = x.to_hex_string();
    let parsed = Number::from_text(&format!("0x{s}"), 300, apnum::DEFAULT_BASE).unwrap();
    assert_eq!(parsed, x);
}

#[test]
fn e7_division_by_zero_is_overflow() {
    let mut a = Number::from_i64(1, 50, 10);
    let err = a.try_div_assign_i64(0).unwrap_err();
    assert!(matches!(err, Error::Overflow(_)));
}

#[test]
fn e8_parse_invalid_hex_digit_is_invalid_argument() {
    let err = Number::from_text("0x1G", 50, 16).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}
