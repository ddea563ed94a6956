//! Base conversion: convert digit sequences between radices for both the
//! integer and fractional parts (`spec.md` §4.5).

use crate::number::Number;

impl Number {
    fn convert_int_base(&self, new_base: i64, precision_in_new_base: f64) -> Number {
        let mut int_result = Number::zero_with_base_precision(new_base, precision_in_new_base);
        let mut pow_base = int_result.seed_i64(1);

        let old_base = self.base();

        if self.ls_exp() > 0 {
            pow_base = pow_base.seed_i64(old_base);
            pow_base.pow_assign(self.ls_exp() - 1);
        }

        int_result.assign_i64(self.digit(0));

        let mut exp = 1.max(self.ls_exp());
        while exp <= self.ms_exp() {
            pow_base.mul_assign_i64(old_base);
            let value = self.digit(exp);
            let term = &pow_base * value;
            int_result += &term;
            exp += 1;
        }

        int_result
    }

    fn convert_frac_result(&self, new_base: i64, precision_in_new_base: f64) -> Number {
        let frac_result = Number::zero_with_base_precision(new_base, precision_in_new_base);
        let mut pow_base = frac_result.seed_i64(1);
        let mut frac_result = frac_result;

        let old_base = self.base();
        if self.ms_exp() < -1 {
            pow_base = pow_base.seed_i64(old_base);
            pow_base.pow_assign(self.ms_exp() + 1);
        }

        let mut exp = (-1).min(self.ms_exp());
        while exp >= self.ls_exp() && !pow_base.is_zero_strict() {
            let value = self.digit(exp);
            pow_base /= old_base;
            let term = &pow_base * value;
            frac_result += &term;
            exp -= 1;
        }

        frac_result
    }

    fn convert_base_with_precision(&self, new_base: i64, precision_in_new_base: f64) -> Number {
        let mut int_result = self.convert_int_base(new_base, precision_in_new_base);
        let frac_result = self.convert_frac_result(new_base, precision_in_new_base);

        int_result += &frac_result;
        int_result.trim();
        int_result
    }

    /// Convert to `new_base`, deriving an appropriate working precision
    /// from this number's own precision (`precision * ln(base) /
    /// ln(new_base)`).
    pub fn convert_base(&self, new_base: i64) -> Number {
        if new_base == self.base() {
            return self.clone();
        }
        let precision_in_new_base = self.precision * (self.base as f64).ln() / (new_base as f64).ln();
        self.convert_base_with_precision(new_base, precision_in_new_base)
    }

    /// Return a copy with the decimal precision changed, discarding digits
    /// below the new floor.
    pub fn convert_precision(&self, new_precision_in_10: i64) -> Number {
        let mut out = self.clone();
        out.set_precision(new_precision_in_10);
        out
    }
}

/// Free-function form of [`Number::convert_base`], used internally by the
/// additive/multiplicative/division operators when operands don't share a
/// base.
pub(crate) fn convert_base(n: &Number, new_base: i64) -> Number {
    n.convert_base(new_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_base_round_trip_is_close() {
        let a = Number::from_i64(123_456_789, 200, 10);
        let converted = a.convert_base(7).convert_base(10);
        let delta = &converted - &a;
        assert!(delta.is_zero());
    }

    #[test]
    fn convert_base_preserves_small_fraction() {
        let a = Number::from_f64(3.14159, 200, 10);
        let converted = a.convert_base(16).convert_base(10);
        let delta = &converted - &a;
        assert!(delta.is_zero());
    }

    #[test]
    fn convert_precision_shrinks_storage() {
        let a = Number::from_f64(1.0 / 3.0_f64, 2000, 10);
        let shrunk = a.convert_precision(5);
        assert!(shrunk.min_exp() <= -5);
        assert!(shrunk.ls_exp() >= shrunk.min_exp());
    }
}
