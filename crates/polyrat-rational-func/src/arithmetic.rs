//! Arithmetic operations for rational functions.
//!
//! Every result is passed through [`RationalFunction::reduced`] so that
//! degrees do not grow across chained operations.

use std::ops;

use num_traits::{One, Zero};

use crate::error::{RationalError, Result};
use crate::RationalFunction;

impl RationalFunction {
    /// Adds two rational functions by reference.
    ///
    /// a/b + c/d = (ad + bc) / bd
    #[must_use]
    pub fn add_ref(&self, other: &Self) -> Self {
        let num = self
            .numerator()
            .mul(other.denominator())
            .add(&other.numerator().mul(self.denominator()));
        let den = self.denominator().mul(other.denominator());

        Self::from_parts(num, den).reduced()
    }

    /// Subtracts another rational function from this one.
    ///
    /// a/b - c/d = (ad - bc) / bd
    #[must_use]
    pub fn sub_ref(&self, other: &Self) -> Self {
        let num = self
            .numerator()
            .mul(other.denominator())
            .sub(&other.numerator().mul(self.denominator()));
        let den = self.denominator().mul(other.denominator());

        Self::from_parts(num, den).reduced()
    }

    /// Multiplies two rational functions.
    #[must_use]
    pub fn mul_ref(&self, other: &Self) -> Self {
        let num = self.numerator().mul(other.numerator());
        let den = self.denominator().mul(other.denominator());

        Self::from_parts(num, den).reduced()
    }

    /// Divides this rational function by another.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `other` is zero.
    pub fn div_ref(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        let num = self.numerator().mul(other.denominator());
        let den = self.denominator().mul(other.numerator());

        Ok(Self::from_parts(num, den).reduced())
    }

    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if this is zero.
    #[must_use]
    pub fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::from_parts(self.denominator().clone(), self.numerator().clone()).reduced())
        }
    }

    /// Raises to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_ref(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_ref(&base);
            }
        }

        result
    }
}

impl ops::Add for RationalFunction {
    type Output = Self;

    /// a/b + c/d = (ad + bc) / bd
    fn add(self, other: Self) -> Self::Output {
        self.add_ref(&other)
    }
}

impl ops::Add<&RationalFunction> for RationalFunction {
    type Output = Self;

    fn add(self, other: &Self) -> Self::Output {
        self.add_ref(other)
    }
}

impl ops::Add<&RationalFunction> for &RationalFunction {
    type Output = RationalFunction;

    fn add(self, other: &RationalFunction) -> Self::Output {
        self.add_ref(other)
    }
}

impl ops::Sub for RationalFunction {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.sub_ref(&other)
    }
}

impl ops::Sub<&RationalFunction> for RationalFunction {
    type Output = Self;

    fn sub(self, other: &Self) -> Self::Output {
        self.sub_ref(other)
    }
}

impl ops::Sub<&RationalFunction> for &RationalFunction {
    type Output = RationalFunction;

    fn sub(self, other: &RationalFunction) -> Self::Output {
        self.sub_ref(other)
    }
}

impl ops::Mul for RationalFunction {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.mul_ref(&other)
    }
}

impl ops::Mul<&RationalFunction> for RationalFunction {
    type Output = Self;

    fn mul(self, other: &Self) -> Self::Output {
        self.mul_ref(other)
    }
}

impl ops::Mul<&RationalFunction> for &RationalFunction {
    type Output = RationalFunction;

    fn mul(self, other: &RationalFunction) -> Self::Output {
        self.mul_ref(other)
    }
}

impl ops::Neg for RationalFunction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        RationalFunction::neg(&self)
    }
}

impl ops::Neg for &RationalFunction {
    type Output = RationalFunction;

    fn neg(self) -> Self::Output {
        RationalFunction::neg(self)
    }
}

impl Zero for RationalFunction {
    fn zero() -> Self {
        RationalFunction::zero()
    }

    fn is_zero(&self) -> bool {
        RationalFunction::is_zero(self)
    }
}

impl One for RationalFunction {
    fn one() -> Self {
        RationalFunction::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use polyrat_poly::Polynomial;

    fn poly(coeffs: &[f64]) -> Polynomial {
        Polynomial::new(coeffs).unwrap()
    }

    fn rf(num: &[f64], den: &[f64]) -> RationalFunction {
        RationalFunction::new(num, den).unwrap()
    }

    #[test]
    fn test_add() {
        // 1/x + 1/x = 2/x
        let a = rf(&[1.0], &[0.0, 1.0]);
        let b = rf(&[1.0], &[0.0, 1.0]);
        let sum = a + b;

        assert_eq!(sum.numerator(), &poly(&[2.0]));
        assert_eq!(sum.denominator().degree(), 1);
    }

    #[test]
    fn test_add_different_denominators() {
        // 1/x + 1/(x+1) = (2x + 1) / (x(x+1))
        let a = rf(&[1.0], &[0.0, 1.0]);
        let b = rf(&[1.0], &[1.0, 1.0]);
        let sum = &a + &b;

        assert_eq!(sum.numerator(), &poly(&[1.0, 2.0]));
        assert_eq!(sum.denominator(), &poly(&[0.0, 1.0, 1.0]));
    }

    #[test]
    fn test_sub() {
        // 1/x - 1/x = 0
        let a = rf(&[1.0], &[0.0, 1.0]);
        let diff = &a - &a;

        assert!(diff.is_zero());
        assert_eq!(diff, RationalFunction::zero());
    }

    #[test]
    fn test_mul() {
        // (1/x) * x = 1
        let a = rf(&[1.0], &[0.0, 1.0]);
        let b = RationalFunction::from_poly(poly(&[0.0, 1.0]));
        let prod = a * b;

        assert!(prod.is_polynomial());
        assert_eq!(prod.numerator(), &Polynomial::one());
    }

    #[test]
    fn test_div() {
        // (1/x) / (1/x) = 1
        let a = rf(&[1.0], &[0.0, 1.0]);
        let quot = a.div_ref(&a).unwrap();

        assert!(quot.is_polynomial());
        assert_eq!(quot, RationalFunction::one());
    }

    #[test]
    fn test_div_by_zero() {
        let a = rf(&[1.0], &[0.0, 1.0]);
        assert_eq!(
            a.div_ref(&RationalFunction::zero()),
            Err(RationalError::DivisionByZero)
        );
    }

    #[test]
    fn test_inv() {
        // inv(1/x) = x
        let a = rf(&[1.0], &[0.0, 1.0]);
        let a_inv = a.inv().unwrap();

        assert!(a_inv.is_polynomial());
        assert_eq!(a_inv.numerator().degree(), 1);
        assert!(RationalFunction::zero().inv().is_none());
    }

    #[test]
    fn test_pow() {
        // (1/x)^2 = 1/x^2
        let a = rf(&[1.0], &[0.0, 1.0]);
        let a_sq = a.pow(2);

        assert_eq!(a_sq.numerator().degree(), 0);
        assert_eq!(a_sq.denominator().degree(), 2);
        assert_eq!(a.pow(0), RationalFunction::one());
        assert_eq!(a.pow(1), a);
    }

    #[test]
    fn test_pow_matches_repeated_mul() {
        let u = [Complex64::new(-1.0, 1.0), Complex64::new(1.0, 0.0)];
        let v = [Complex64::new(1.0, 2.0), Complex64::new(1.0, 0.0)];
        let r = RationalFunction::new(u, v).unwrap();

        assert_eq!(&r * &r, r.pow(2));
        assert_eq!(&(&r * &r) * &r, r.pow(3));
        assert_eq!(&(&(&r * &r) * &r) * &r, r.pow(4));
    }

    #[test]
    fn test_field_identity() {
        // a * inv(a) = 1
        let a = rf(&[1.0, 2.0], &[3.0, 0.0, 1.0]); // (1 + 2x) / (3 + x^2)
        let a_inv = a.inv().unwrap();
        let prod = a * a_inv;

        assert!(prod.is_polynomial());
        assert_eq!(prod, RationalFunction::one());
    }

    #[test]
    fn test_neg_operator() {
        let a = rf(&[1.0, 2.0], &[3.0, 1.0]);
        assert_eq!(-&a, rf(&[-1.0, -2.0], &[3.0, 1.0]));
        assert!((a.clone() + -a).is_zero());
    }
}
