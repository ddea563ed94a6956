//! Schoolbook long division with a floating-point two-digit quotient
//! estimate (`spec.md` §4.4).

use std::ops::{Div, DivAssign};

use crate::error::{Error, Result};
use crate::number::Number;

impl Number {
    /// Estimate the next quotient digit `(q*, e*)` from the top two digits
    /// of `m` and `n`.
    fn get_q_star(base: i64, m: &Number, n: &Number) -> (i64, i32) {
        let exp_m = m.ms_exp();
        let m0 = m.digit(exp_m);
        let m1 = m.digit(exp_m - 1);

        let exp_n = n.ms_exp();
        let n0 = n.digit(exp_n);
        let n1 = n.digit(exp_n - 1);

        let mv = m0 as f64 + m1 as f64 / base as f64;
        let nv = n0 as f64 + n1 as f64 / base as f64;

        let e = exp_m - exp_n;
        let q_hash = mv / nv;

        if q_hash >= 1.0 {
            (q_hash.floor() as i64, e)
        } else {
            ((q_hash * base as f64).floor() as i64, e - 1)
        }
    }

    /// Estimate the next quotient digit when dividing by a scalar: only
    /// `m0`/`m1` participate, and `n0 = k`.
    fn get_q_star_scalar(base: i64, m: &Number, k: i64) -> (i64, i32) {
        let mut e = m.ms_exp();
        let m0 = m.digit(e);
        let m1 = m.digit(e - 1);
        let mv = m0 as f64 + m1 as f64 / base as f64;
        let mut q_hash = mv / k as f64;

        while q_hash < 1.0 {
            q_hash *= base as f64;
            e -= 1;
        }
        (q_hash.floor() as i64, e)
    }

    /// `self` receives `M / N` for non-negative `M` and positive `N` of the
    /// same base; `self` is cleared first.
    fn div_positive(&mut self, mut m: Number, n: &Number) -> Result<()> {
        self.clear();

        if n.is_one() {
            m.shr_assign(n.ms_exp());
            *self = m;
            return Ok(());
        }

        let base = self.base;
        let mut dup_n = n.clone();

        while m.ms_value() != 0 {
            let (mut q_star, mut e_star) = Self::get_q_star(base, &m, n);
            debug_assert!(q_star != 0, "quotient-digit estimate must be non-zero");

            if e_star < self.min_comp_exp() {
                break;
            }

            let nq = dup_n.mul_by_shifted(q_star, e_star);
            if nq.is_zero_strict() {
                break;
            }

            m.try_sub_assign(&nq)?;
            if m.is_negative() {
                if q_star > 1 {
                    q_star -= 1;
                } else {
                    debug_assert_eq!(q_star, 1);
                    q_star = base - 1;
                    e_star -= 1;
                }

                dup_n.shl_assign(e_star);
                m.try_add_assign(&dup_n)?;
                dup_n.shr_assign(e_star);
            }

            self.add_digit_at(q_star, e_star)?;
        }

        Ok(())
    }

    /// `self /= n`, for two `Number`s of the same base.
    fn div_assign_number(&mut self, n: &Number) -> Result<()> {
        if n.is_zero_strict() {
            return Err(Error::Overflow("division by zero".to_string()));
        }

        let mut m = self.clone();
        self.clear();

        let neg_m = m.is_negative();
        let neg_n = n.is_negative();
        let neg_q = neg_m != neg_n;

        if neg_m {
            m.mul_assign_i64(-1);
        }
        let n_abs;
        let n_ref: &Number = if neg_n {
            let mut t = n.clone();
            t.mul_assign_i64(-1);
            n_abs = t;
            &n_abs
        } else {
            n
        };

        self.div_positive(m, n_ref)?;
        if neg_q {
            self.mul_assign_i64(-1);
        }
        Ok(())
    }

    /// `self /= k` for an `i64` divisor (`spec.md` §4.4, "divide by small
    /// integer").
    fn div_assign_i64_inner(&mut self, n: i64) -> Result<()> {
        if n == 1 {
            return Ok(());
        }
        if n == -1 {
            self.mul_assign_i64(-1);
            return Ok(());
        }
        if n == 0 {
            return Err(Error::Overflow("division by zero".to_string()));
        }

        let mut m = self.clone();
        self.clear();

        let neg_m = m.is_negative();
        let neg_n = n < 0;
        let neg_q = neg_m != neg_n;

        let mut nn = n;
        if neg_n {
            nn = -nn;
        }
        if neg_m {
            m.mul_assign_i64(-1);
        }

        let base = self.base;
        while m.ms_value() != 0 {
            let (q_star, e_star) = Self::get_q_star_scalar(base, &m, nn);
            debug_assert!(q_star != 0, "quotient-digit estimate must be non-zero");

            if e_star < self.min_comp_exp() {
                break;
            }

            let mut nq = m.seed_i64(nn);
            nq.mul_assign_i64_shifted(q_star, e_star);

            m.try_sub_assign(&nq)?;
            self.add_digit_at(q_star, e_star)?;
        }

        if neg_q {
            self.mul_assign_i64(-1);
        }
        Ok(())
    }

    /// Fallible `self /= other`, converting bases first if they differ.
    pub fn try_div_assign(&mut self, other: &Number) -> Result<()> {
        if self.same_base(other) {
            self.div_assign_number(other)
        } else {
            let converted = crate::convert::convert_base(other, self.base);
            self.div_assign_number(&converted)
        }
    }

    /// Fallible `self /= n` for an integer divisor.
    pub fn try_div_assign_i64(&mut self, n: i64) -> Result<()> {
        self.div_assign_i64_inner(n)
    }

    /// Fallible `self /= value` for a floating-point divisor.
    pub fn try_div_assign_f64(&mut self, value: f64) -> Result<()> {
        let seed = self.seed_f64(value);
        self.div_assign_number(&seed)
    }
}

impl DivAssign<&Number> for Number {
    fn div_assign(&mut self, rhs: &Number) {
        self.try_div_assign(rhs).expect("Number /= Number");
    }
}

impl DivAssign<Number> for Number {
    fn div_assign(&mut self, rhs: Number) {
        self.try_div_assign(&rhs).expect("Number /= Number");
    }
}

impl DivAssign<i64> for Number {
    fn div_assign(&mut self, rhs: i64) {
        self.try_div_assign_i64(rhs).expect("Number /= integer");
    }
}

impl DivAssign<f64> for Number {
    fn div_assign(&mut self, rhs: f64) {
        self.try_div_assign_f64(rhs).expect("Number /= float");
    }
}

macro_rules! impl_div_via_assign {
    ($rhs:ty) => {
        impl Div<$rhs> for Number {
            type Output = Number;
            fn div(self, rhs: $rhs) -> Number {
                let mut out = self;
                out /= rhs;
                out
            }
        }

        impl Div<$rhs> for &Number {
            type Output = Number;
            fn div(self, rhs: $rhs) -> Number {
                let mut out = self.clone();
                out /= rhs;
                out
            }
        }
    };
}

impl_div_via_assign!(&Number);
impl_div_via_assign!(Number);
impl_div_via_assign!(i64);
impl_div_via_assign!(f64);
