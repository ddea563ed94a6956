//! Multiplicative arithmetic: `*=` by small scalar and by `Number`,
//! squaring, and integer power.

use std::ops::{Mul, MulAssign};

use crate::error::Result;
use crate::number::Number;

impl Number {
    fn mul_minus_1(&mut self) {
        let mut carry = 0i64;
        let mut exp = self.ls_exp();
        let ms_exp = self.ms_exp();
        while exp <= ms_exp {
            let idx = (self.ms_exp() - exp) as usize;
            self.digits[idx] = -self.digits[idx] + carry;
            carry = Self::gen_carry_digit(&mut self.digits[idx], self.base);
            exp += 1;
        }
        self.add_carry(carry, exp);
    }

    fn mul_single_digit(digit: &mut i64, multiplier: i64, carry: i64, base: i64) -> i64 {
        // Widen to i128 so `digit * multiplier` cannot overflow even for
        // large user-chosen bases; Euclidean division/remainder give the
        // same (carry, digit) pair as truncating div/mod immediately
        // followed by `gen_carry_digit`, in one step.
        let r = (*digit as i128) * (multiplier as i128) + carry as i128;
        let c = r.div_euclid(base as i128) as i64;
        *digit = r.rem_euclid(base as i128) as i64;
        c
    }

    /// `self *= multiplier` for a scalar, with the `{0, 1, -1}` fast paths
    /// called out in `spec.md` §4.3.
    pub(crate) fn mul_assign_i64(&mut self, multiplier: i64) {
        if multiplier == 1 {
            return;
        }
        if multiplier == -1 {
            self.mul_minus_1();
            return;
        }
        if multiplier == 0 {
            self.clear();
            return;
        }

        let base = self.base;
        let mut carry = 0i64;
        let mut exp = self.ls_exp();
        let ms_exp = self.ms_exp();
        while exp <= ms_exp {
            let idx = (self.ms_exp() - exp) as usize;
            carry = Self::mul_single_digit(&mut self.digits[idx], multiplier, carry, base);
            exp += 1;
        }
        self.add_carry(carry, exp);
    }

    /// `self = (self << value_exp) * multiplier`, i.e. `self * multiplier *
    /// base^value_exp`.
    pub(crate) fn mul_assign_i64_shifted(&mut self, multiplier: i64, value_exp: i32) {
        self.shl_assign(value_exp);
        self.trim();
        self.mul_assign_i64(multiplier);
    }

    /// A scaled-and-shifted copy of `self`, without mutating it.
    pub(crate) fn mul_by_shifted(&self, multiplier: i64, value_exp: i32) -> Number {
        let mut out = self.clone();
        out.mul_assign_i64_shifted(multiplier, value_exp);
        out
    }

    /// `self *= other`, for two `Number`s of the same base.
    pub(crate) fn mul_assign_number(&mut self, other: &Number) -> Result<()> {
        debug_assert!(self.same_base(other), "mul_assign_number requires matching bases");

        let clone_of_this = self.clone();
        self.clear();

        let mut exp = other.ms_exp();
        while exp >= other.ls_exp() {
            let term = clone_of_this.mul_by_shifted(other.digit(exp), exp);
            self.add_assign_number(1, &term)?;
            exp -= 1;
        }
        Ok(())
    }

    /// Fallible `self *= other`, converting bases first if they differ.
    pub fn try_mul_assign(&mut self, other: &Number) -> Result<()> {
        if self.same_base(other) {
            self.mul_assign_number(other)
        } else {
            let converted = crate::convert::convert_base(other, self.base);
            self.mul_assign_number(&converted)
        }
    }

    /// `self ^= exp` — integer power via binary exponentiation
    /// (`spec.md` §4.3).
    pub fn try_pow_assign(&mut self, exp: i32) -> Result<()> {
        if exp == 0 {
            self.assign_i64(1);
            return Ok(());
        }
        if exp == 1 {
            return Ok(());
        }

        let clone = self.clone();
        if exp == -1 {
            self.assign_i64(1);
            return self.try_div_assign(&clone);
        }

        self.try_pow_assign(exp / 2)?;
        let squared = self.clone();
        self.mul_assign_number(&squared)?;

        if exp & 1 != 0 {
            if exp > 0 {
                self.mul_assign_number(&clone)?;
            } else {
                self.try_div_assign(&clone)?;
            }
        }
        Ok(())
    }

    /// `self ^= exp`, panicking on failure (division by zero for a
    /// negative exponent of a zero base). See [`Number::try_pow_assign`]
    /// for the non-panicking path.
    pub fn pow_assign(&mut self, exp: i32) {
        self.try_pow_assign(exp).expect("Number ^= exponent")
    }

    /// `self ^ exp`, without mutating `self`.
    pub fn pow(&self, exp: i32) -> Number {
        let mut out = self.clone();
        out.pow_assign(exp);
        out
    }
}

/// `pow(x, exp)`, mirroring the original's `friend Number pow(int, int)`.
pub fn pow(x: i64, exp: i32) -> Number {
    Number::from_i64_default(x).pow(exp)
}

/// `abs(n)`, mirroring the original's `friend Number abs(const Number&)`.
pub fn abs(n: &Number) -> Number {
    if n.is_non_negative() {
        n.clone()
    } else {
        -n
    }
}

impl MulAssign<&Number> for Number {
    fn mul_assign(&mut self, rhs: &Number) {
        self.try_mul_assign(rhs).expect("Number *= Number");
    }
}

impl MulAssign<Number> for Number {
    fn mul_assign(&mut self, rhs: Number) {
        self.try_mul_assign(&rhs).expect("Number *= Number");
    }
}

impl MulAssign<i64> for Number {
    fn mul_assign(&mut self, rhs: i64) {
        self.mul_assign_i64(rhs);
    }
}

impl MulAssign<f64> for Number {
    fn mul_assign(&mut self, rhs: f64) {
        let seed = self.seed_f64(rhs);
        self.try_mul_assign(&seed).expect("Number *= f64");
    }
}

macro_rules! impl_mul_via_assign {
    ($rhs:ty) => {
        impl Mul<$rhs> for Number {
            type Output = Number;
            fn mul(self, rhs: $rhs) -> Number {
                let mut out = self;
                out *= rhs;
                out
            }
        }

        impl Mul<$rhs> for &Number {
            type Output = Number;
            fn mul(self, rhs: $rhs) -> Number {
                let mut out = self.clone();
                out *= rhs;
                out
            }
        }
    };
}

impl_mul_via_assign!(&Number);
impl_mul_via_assign!(Number);
impl_mul_via_assign!(i64);
impl_mul_via_assign!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_small_integers() {
        let mut a = Number::from_i64(123, 50, 10);
        a *= 4i64;
        assert_eq!(a, Number::from_i64(492, 50, 10));
    }

    #[test]
    fn multiply_by_minus_one_negates() {
        let mut a = Number::from_i64(123, 50, 10);
        a *= -1i64;
        assert_eq!(a, Number::from_i64(-123, 50, 10));
    }

    #[test]
    fn multiply_two_numbers() {
        let a = Number::from_i64(12345, 50, 10);
        let b = Number::from_i64(6789, 50, 10);
        let mut product = a.clone();
        product *= &b;
        assert_eq!(product, Number::from_i64(12345 * 6789, 50, 10));
    }

    #[test]
    fn self_multiply_via_clone_squares() {
        let mut a = Number::from_i64(17, 50, 10);
        let clone = a.clone();
        a *= &clone;
        assert_eq!(a, Number::from_i64(289, 50, 10));
    }

    #[test]
    fn power_zero_is_one() {
        let a = Number::from_i64(12345, 50, 10);
        assert_eq!(a.pow(0), Number::from_i64(1, 50, 10));
    }

    #[test]
    fn power_binary_exponentiation() {
        let a = Number::from_i64(3, 50, 10);
        assert_eq!(a.pow(5), Number::from_i64(243, 50, 10));
    }

    #[test]
    fn abs_of_negative() {
        let a = Number::from_i64(-5, 50, 10);
        assert_eq!(abs(&a), Number::from_i64(5, 50, 10));
    }
}
