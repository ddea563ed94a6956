//! Text parsing: auto-detected base prefixes, a digit sequence with an
//! optional `.`, and an optional `e`/`E` scientific exponent interpreted in
//! the mantissa's own base (`spec.md` §4.6, §6).

use std::collections::VecDeque;
use std::convert::TryFrom;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::number::Number;

/// Digit alphabet for radices up to 27: `0-9`, then `A-Q`/`a-q` (17
/// letters) — matching the alphabet `src/format.rs` writes back out.
fn digit_value(ch: char) -> Option<i64> {
    match ch {
        '0'..='9' => Some(ch as i64 - '0' as i64),
        'A'..='Q' => Some(ch as i64 - 'A' as i64 + 10),
        'a'..='q' => Some(ch as i64 - 'a' as i64 + 10),
        _ => None,
    }
}

/// Split a sign prefix off the front of `text`, if any.
fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Detect the source base from an (already sign-stripped) prefix: `0x` ->
/// 16, `0b` -> 2, a leading `0` followed by an octal digit `0-7` -> 8, a
/// leading `0` followed by `8`/`9` -> rejected outright (`spec.md` §9 open
/// question, decided in `DESIGN.md`), anything else -> 10.
fn detect_base(text: &str) -> Result<(i64, &str)> {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return Err(Error::InvalidArgument("empty number string".to_string()));
    };
    if first != '0' {
        return Ok((10, text));
    }

    match chars.next() {
        Some('x') | Some('X') => Ok((16, &text[2..])),
        Some('b') | Some('B') => Ok((2, &text[2..])),
        Some('0'..='7') => Ok((8, &text[1..])),
        Some('8') | Some('9') => Err(Error::InvalidArgument(
            "a leading 0 followed by 8 or 9 is not a valid octal prefix".to_string(),
        )),
        _ => Ok((10, text)),
    }
}

/// Consume the mantissa (digits and at most one `.`) of `text` in `base`,
/// returning the constructed `Number` (already `trim`med) and the unparsed
/// remainder (the `e`/`E` exponent suffix, if any).
fn parse_mantissa(text: &str, base: i64, precision_in_10: i64) -> Result<(Number, &str)> {
    let no = Number::zero_with(base, precision_in_10);

    let mut digits: Vec<i64> = Vec::new();
    let mut int_len: Option<i32> = None;

    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        if base == 10 && (ch == 'e' || ch == 'E') {
            break;
        }

        if ch == '.' {
            if int_len.is_some() {
                return Err(Error::InvalidArgument(
                    "number string has more than one '.'".to_string(),
                ));
            }
            int_len = Some(digits.len() as i32);
            rest = &rest[1..];
            continue;
        }

        if let Some(l) = int_len {
            let frac_count = digits.len() as i32 - l;
            let next_exp = -(frac_count + 1);
            if no.below_min_exp(next_exp) {
                break;
            }
        }

        let value = digit_value(ch)
            .ok_or_else(|| Error::InvalidArgument(format!("'{ch}' is not a valid digit")))?;
        if value >= base {
            return Err(Error::InvalidArgument(format!(
                "digit '{ch}' is not valid in base {base}"
            )));
        }

        digits.push(value);
        rest = &rest[ch.len_utf8()..];
    }

    if digits.is_empty() {
        return Err(Error::InvalidArgument(
            "no digits in number string".to_string(),
        ));
    }

    let int_len = int_len.unwrap_or(digits.len() as i32);
    let ms_exp = int_len - 1;

    let mut no = no;
    no.ms_exp = ms_exp;
    no.digits = VecDeque::from(digits);
    no.trim();

    Ok((no, rest))
}

/// Parse the decimal exponent suffix (`e`/`E` followed by a signed decimal
/// integer), interpreted literally in `base` (i.e. `base^exp`, not
/// `10^exp`).
fn parse_exponent(text: &str) -> Result<i32> {
    let Some(rest) = text.strip_prefix(['e', 'E']) else {
        if text.is_empty() {
            return Ok(0);
        }
        return Err(Error::InvalidArgument(format!(
            "unexpected trailing characters: {text:?}"
        )));
    };

    let (neg, digits) = split_sign(rest);
    if digits.is_empty() {
        return Err(Error::InvalidArgument("empty exponent".to_string()));
    }

    let mut exp: i32 = 0;
    for ch in digits.chars() {
        let d = ch
            .to_digit(10)
            .ok_or_else(|| Error::InvalidArgument(format!("'{ch}' is not a decimal digit")))?;
        exp = exp
            .checked_mul(10)
            .and_then(|e| e.checked_add(d as i32))
            .ok_or_else(|| Error::InvalidArgument("exponent overflow".to_string()))?;
    }
    Ok(if neg { -exp } else { exp })
}

/// Parse `text`, auto-detecting the source base, then convert the result to
/// `target_base`.
pub fn parse(text: &str, precision_in_10: i64, target_base: i64) -> Result<Number> {
    let trimmed = text.trim();
    let (negative, unsigned) = split_sign(trimmed);
    let (src_base, body) = detect_base(unsigned)?;

    let (mut no, rest) = parse_mantissa(body, src_base, precision_in_10)?;
    let exp = parse_exponent(rest)?;
    no.shl_assign(exp);
    no.trim();

    if negative {
        no.mul_assign_i64(-1);
    }

    Ok(no.convert_base(target_base))
}

impl FromStr for Number {
    type Err = Error;
    fn from_str(s: &str) -> Result<Number> {
        parse(s, crate::number::DEFAULT_PRECISION_IN_10, crate::number::DEFAULT_BASE)
    }
}

impl TryFrom<&str> for Number {
    type Error = Error;
    fn try_from(s: &str) -> Result<Number> {
        parse(s, crate::number::DEFAULT_PRECISION_IN_10, crate::number::DEFAULT_BASE)
    }
}
