//! Ordering and equality: the carry-accumulating digit walk from
//! `spec.md` §4.7, plus the `PartialEq`/`PartialOrd` surface against
//! `Number`, `i64`, and `f64` operands.

use std::cmp::Ordering;

use crate::number::Number;

impl Number {
    /// Compare two `Number`s that already share a base: walk the
    /// overlapping exponent range from high to low, accumulating a signed
    /// `carry = carry * base + xd - yd`; a magnitude above `1` resolves the
    /// answer immediately. One digit below the stored range is then
    /// examined to resolve a near-tie, with a residual magnitude below
    /// `base / 2` rounded down to "equal".
    fn relation_same_base(&self, y: &Number) -> i32 {
        let hi_exp = self.ms_exp().max(y.ms_exp());
        let lo_exp = self.ls_exp().min(y.ls_exp()).max(self.min_comp_exp());

        let mut carry = 0i64;
        let mut exp = hi_exp;
        while exp >= lo_exp {
            let xd = self.digit(exp);
            let yd = y.digit(exp);
            carry = carry * self.base + xd - yd;

            if carry.abs() > 1 {
                return if carry > 1 { 1 } else { -1 };
            }
            exp -= 1;
        }

        if carry == 0 {
            return 0;
        }

        let xd = self.digit(lo_exp - 1);
        let yd = y.digit(lo_exp - 1);
        carry = carry * self.base + xd - yd;

        if carry.abs() < self.base / 2 {
            return 0;
        }
        if carry > 0 {
            1
        } else {
            -1
        }
    }

    /// Compare against a `Number` of any base, converting the smaller-base
    /// operand to the larger base first.
    pub(crate) fn relation(&self, y: &Number) -> i32 {
        if self.same_base(y) {
            return self.relation_same_base(y);
        }
        if self.base > y.base {
            self.relation_same_base(&y.convert_base(self.base))
        } else {
            -y.relation_same_base(&self.convert_base(y.base))
        }
    }

    pub(crate) fn relation_i64(&self, v: i64) -> i32 {
        self.relation(&self.seed_i64(v))
    }

    pub(crate) fn relation_f64(&self, v: f64) -> i32 {
        self.relation(&self.seed_f64(v))
    }

    /// Precision-aware equality: the literal `0` comparison goes through
    /// [`Number::is_zero`] directly (no conversion needed); every other
    /// comparison is a digit-walk relation, which agrees with
    /// "difference `is_zero()`" to within the same tolerance window (see
    /// `DESIGN.md`).
    pub fn equal(&self, other: &Number) -> bool {
        self.relation(other) == 0
    }

    /// Precision-aware equality against an integer literal.
    pub fn equal_i64(&self, v: i64) -> bool {
        if v == 0 {
            return self.is_zero();
        }
        self.relation_i64(v) == 0
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        self.equal(other)
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        self.equal_i64(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.relation_f64(*other) == 0
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        Some(match self.relation(other) {
            r if r < 0 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        })
    }
}

impl PartialOrd<i64> for Number {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(match self.relation_i64(*other) {
            r if r < 0 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        })
    }
}

impl PartialOrd<f64> for Number {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        Some(match self.relation_f64(*other) {
            r if r < 0 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_integers_same_base() {
        let a = Number::from_i64(12345, 50, 10);
        let b = Number::from_i64(12345, 50, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn ordering_across_sign() {
        let a = Number::from_i64(-5, 50, 10);
        let b = Number::from_i64(5, 50, 10);
        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn equal_against_i64_literal_zero() {
        let z = Number::zero_with(10, 50);
        assert_eq!(z, 0i64);
    }

    #[test]
    fn cross_base_comparison() {
        let a = Number::from_i64(100, 200, 7);
        let b = Number::from_i64(100, 200, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn relation_respects_rounding_tolerance() {
        let a = Number::from_i64(1, 20, 10);
        let mut b = a.clone();
        b += 1.0e-30;
        assert_eq!(a, b);
    }
}
