//! Text formatting: render a `Number` to a radix-`[2, 27]` string, packing
//! several target-base digits into one stored "packed" digit for speed
//! (`spec.md` §4.6).

use crate::error::{Error, Result};
use crate::number::Number;

/// `0-9` then `A-Q` (17 letters) — exactly the 27-symbol alphabet
/// `spec.md` §4.6 allows for formatting, matching `src/parse.rs`'s reader.
const DIGIT_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQ";

/// Render `x` (a packed digit, `0 <= x < base^digits_per_int`) as exactly
/// `digits_per_int` characters in `base`, suppressing leading zeros unless
/// `leading_zero` is set (used for every packed digit except the topmost).
fn int_to_chars(mut x: i64, base: i64, digits_per_int: i32) -> Vec<u8> {
    let n = digits_per_int as usize;
    let mut buf = vec![b'0'; n];
    for i in (0..n).rev() {
        buf[i] = DIGIT_CHARS[(x % base) as usize];
        x /= base;
    }
    buf
}

fn int_to_chars_trimmed(x: i64, base: i64, digits_per_int: i32) -> Vec<u8> {
    let buf = int_to_chars(x, base, digits_per_int);
    let first = buf.iter().position(|&c| c != b'0').unwrap_or(buf.len() - 1);
    buf[first..].to_vec()
}

impl Number {
    /// Render this `Number` as a string in `base`, which must be in
    /// `[2, 27]`.
    pub fn to_string_radix(&self, base: i64) -> Result<String> {
        if !(2..=27).contains(&base) {
            return Err(Error::InvalidArgument(format!(
                "base must be between 2 and 27, got {base}"
            )));
        }

        let max_int = 1i64 << 30;
        let digits_per_int = ((max_int as f64).ln() / (base as f64).ln()).floor() as i32;
        let real_base = base.pow(digits_per_int as u32);

        let converted = self.convert_base(real_base);
        Ok(converted.extract_string(base, digits_per_int, self.precision_in_10()))
    }

    /// Port of the original `extract_string`: walk packed digits from the
    /// top down, rendering each as `digits_per_int` target-base characters,
    /// then trim the fractional tail to `precision_in_10` characters and
    /// drop trailing zeros.
    fn extract_string(&self, base: i64, digits_per_int: i32, precision_in_10: i64) -> String {
        let out_no = if self.is_non_negative() {
            self.clone()
        } else {
            -self
        };

        let hi_exp = out_no.ms_exp().max(0);
        let mut lo_exp = out_no.ls_exp().max(out_no.min_comp_exp());
        if lo_exp > 0 {
            lo_exp = 0;
        }

        let mut bytes: Vec<u8> = Vec::new();
        if self.is_negative() {
            bytes.push(b'-');
        }

        let mut dot_pos: Option<usize> = None;
        let mut exp = hi_exp;
        while exp >= lo_exp {
            let digit = out_no.digit(exp);
            if exp == -1 {
                bytes.push(b'.');
                dot_pos = Some(bytes.len());
            }

            if exp == hi_exp {
                bytes.extend(int_to_chars_trimmed(digit, base, digits_per_int));
            } else {
                bytes.extend(int_to_chars(digit, base, digits_per_int));
            }
            exp -= 1;
        }

        if let Some(dot_pos) = dot_pos {
            let keep = dot_pos + precision_in_10.max(0) as usize;
            if bytes.len() > keep {
                bytes.truncate(keep);
            }

            while bytes.len() > dot_pos && *bytes.last().unwrap() == b'0' {
                bytes.pop();
            }
            if bytes.len() == dot_pos {
                bytes.pop(); // drop a now-bare trailing '.'
            }
        }

        // Safety net for the `[2, 27]` alphabet: every byte pushed above
        // came from `DIGIT_CHARS`, `.`, or `-`, so this is always valid
        // UTF-8.
        String::from_utf8(bytes).expect("formatted digits are ASCII")
    }

    /// Format in base 2.
    pub fn to_bin_string(&self) -> String {
        self.to_string_radix(2).expect("base 2 is always valid")
    }

    /// Format in base 8.
    pub fn to_oct_string(&self) -> String {
        self.to_string_radix(8).expect("base 8 is always valid")
    }

    /// Format in base 10.
    pub fn to_dec_string(&self) -> String {
        self.to_string_radix(10).expect("base 10 is always valid")
    }

    /// Format in base 16.
    pub fn to_hex_string(&self) -> String {
        self.to_string_radix(16).expect("base 16 is always valid")
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_dec_string())
    }
}
