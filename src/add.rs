//! Additive arithmetic: `+=`, `-=`, carry propagation, negation.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::Result;
use crate::number::Number;

impl Number {
    /// Add a single digit-magnitude value at `exp`, propagating carry. Used
    /// by the integer-decomposition path and by the division/multiplication
    /// algorithms to post a try-out digit.
    pub(crate) fn add_digit_at(&mut self, value: i64, exp: i32) -> Result<()> {
        if value == 0 || self.below_min_exp(exp) {
            return Ok(());
        }
        let idx = self.ensure_digit(exp)?;
        self.digits[idx] += value;
        let carry = Self::gen_carry_digit(&mut self.digits[idx], self.base);
        self.add_carry(carry, exp + 1);
        Ok(())
    }

    /// Add an arbitrary-magnitude integer by decomposing it into base-`B`
    /// digits (`value % B`, `value /= B`) and posting each with its
    /// corresponding exponent (`spec.md` §4.2, "alternative path for long
    /// integers").
    pub(crate) fn add_assign_i64(&mut self, mut value: i64) {
        let mut exp = 0i32;
        while value != 0 {
            let digit = value % self.base;
            value /= self.base;
            // Infallible: exponent 0 upward is always growable (no floor).
            self.add_digit_at(digit, exp).expect("growing upward never fails");
            exp += 1;
        }
    }

    fn add_assign_frac(&mut self, mut frac_value: f64) {
        let mut exp = -1i32;
        while !self.below_min_exp(exp) && frac_value != 0.0 {
            frac_value *= self.base as f64;
            let digit = frac_value.floor() as i64;
            frac_value -= digit as f64;
            // Safe: exp only decreases while `!below_min_exp(exp)` holds.
            self.add_digit_at(digit, exp).expect("within precision floor");
            exp -= 1;
        }
    }

    /// Add a floating-point value: split into an integer part (added via
    /// the decomposition path) and a fractional part (added digit by digit
    /// at decreasing exponents).
    pub(crate) fn add_assign_f64(&mut self, value: f64) {
        let int_value = value.trunc() as i64;
        let frac_value = value - int_value as f64;
        self.add_assign_i64(int_value);
        self.add_assign_frac(frac_value);
    }

    /// Core additive loop shared by `+=` and `-=` on `Number` operands:
    /// `sign` is `1` for addition, `-1` for subtraction.
    pub(crate) fn add_assign_number(&mut self, sign: i64, other: &Number) -> Result<()> {
        debug_assert!(self.same_base(other), "add_assign_number requires matching bases");

        if other.is_zero_strict() {
            return Ok(());
        }

        let ms_exp = other.ms_exp();
        let ls_exp = other.ls_exp().max(self.min_exp());

        let mut carry = 0i64;
        for exp in ls_exp..=ms_exp {
            let idx = self.ensure_digit(exp)?;
            self.digits[idx] += sign * other.digit(exp) + carry;
            carry = Self::gen_carry_digit(&mut self.digits[idx], self.base);
        }
        self.add_carry(carry, ms_exp + 1);
        Ok(())
    }

    /// Fallible `self += other`, converting bases first if they differ.
    pub fn try_add_assign(&mut self, other: &Number) -> Result<()> {
        if self.same_base(other) {
            self.add_assign_number(1, other)
        } else {
            let converted = crate::convert::convert_base(other, self.base);
            self.add_assign_number(1, &converted)
        }
    }

    /// Fallible `self -= other`, converting bases first if they differ.
    pub fn try_sub_assign(&mut self, other: &Number) -> Result<()> {
        if self.same_base(other) {
            self.add_assign_number(-1, other)
        } else {
            let converted = crate::convert::convert_base(other, self.base);
            self.add_assign_number(-1, &converted)
        }
    }
}

impl AddAssign<&Number> for Number {
    fn add_assign(&mut self, rhs: &Number) {
        self.try_add_assign(rhs).expect("Number += Number");
    }
}

impl AddAssign<Number> for Number {
    fn add_assign(&mut self, rhs: Number) {
        self.try_add_assign(&rhs).expect("Number += Number");
    }
}

impl AddAssign<i64> for Number {
    fn add_assign(&mut self, rhs: i64) {
        self.add_assign_i64(rhs);
    }
}

impl AddAssign<f64> for Number {
    fn add_assign(&mut self, rhs: f64) {
        self.add_assign_f64(rhs);
    }
}

impl SubAssign<&Number> for Number {
    fn sub_assign(&mut self, rhs: &Number) {
        self.try_sub_assign(rhs).expect("Number -= Number");
    }
}

impl SubAssign<Number> for Number {
    fn sub_assign(&mut self, rhs: Number) {
        self.try_sub_assign(&rhs).expect("Number -= Number");
    }
}

impl SubAssign<i64> for Number {
    fn sub_assign(&mut self, rhs: i64) {
        self.add_assign_i64(-rhs);
    }
}

impl SubAssign<f64> for Number {
    fn sub_assign(&mut self, rhs: f64) {
        self.add_assign_f64(-rhs);
    }
}

impl Neg for Number {
    type Output = Number;
    fn neg(mut self) -> Number {
        self.mul_assign_i64(-1);
        self
    }
}

impl Neg for &Number {
    type Output = Number;
    fn neg(self) -> Number {
        let mut out = self.clone();
        out.mul_assign_i64(-1);
        out
    }
}

macro_rules! impl_binop_via_assign {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $rhs:ty) => {
        impl $trait<$rhs> for Number {
            type Output = Number;
            fn $method(self, rhs: $rhs) -> Number {
                let mut out = self;
                $assign_trait::$assign_method(&mut out, rhs);
                out
            }
        }

        impl $trait<$rhs> for &Number {
            type Output = Number;
            fn $method(self, rhs: $rhs) -> Number {
                let mut out = self.clone();
                $assign_trait::$assign_method(&mut out, rhs);
                out
            }
        }
    };
}

impl_binop_via_assign!(Add, add, AddAssign, add_assign, &Number);
impl_binop_via_assign!(Add, add, AddAssign, add_assign, Number);
impl_binop_via_assign!(Add, add, AddAssign, add_assign, i64);
impl_binop_via_assign!(Add, add, AddAssign, add_assign, f64);

impl_binop_via_assign!(Sub, sub, SubAssign, sub_assign, &Number);
impl_binop_via_assign!(Sub, sub, SubAssign, sub_assign, Number);
impl_binop_via_assign!(Sub, sub, SubAssign, sub_assign, i64);
impl_binop_via_assign!(Sub, sub, SubAssign, sub_assign, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_two_positive_integers() {
        let mut a = Number::from_i64(123, 50, 10);
        let b = Number::from_i64(877, 50, 10);
        a += &b;
        assert_eq!(a, Number::from_i64(1000, 50, 10));
    }

    #[test]
    fn subtract_to_negative() {
        let mut a = Number::from_i64(5, 50, 10);
        let b = Number::from_i64(12, 50, 10);
        a -= &b;
        assert_eq!(a, Number::from_i64(-7, 50, 10));
    }

    #[test]
    fn self_add_clone_doubles() {
        let mut a = Number::from_i64(41, 50, 10);
        let clone = a.clone();
        a += &clone;
        assert_eq!(a, Number::from_i64(82, 50, 10));
    }

    #[test]
    fn self_sub_clone_is_zero() {
        let mut a = Number::from_i64(41, 50, 10);
        let clone = a.clone();
        a -= &clone;
        assert!(a.is_zero_strict());
    }

    #[test]
    fn negation_is_idempotent() {
        let a = Number::from_i64(99, 50, 10);
        let double_neg = -(-a.clone());
        assert_eq!(a, double_neg);
    }

    #[test]
    fn float_addition_splits_integer_and_fraction() {
        let mut a = Number::from_i64(0, 50, 10);
        a += 1.5f64;
        assert_eq!(a, Number::from_f64(1.5, 50, 10));
    }
}
