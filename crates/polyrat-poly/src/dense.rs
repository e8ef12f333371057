//! Dense univariate polynomials over the complex numbers.
//!
//! Coefficients are stored in ascending degree order and trimmed so the
//! last entry is nonzero. The zero polynomial is a single zero coefficient.

use std::fmt;
use std::ops;

use num_complex::Complex64;
use num_traits::{One, Zero};
use polyrat_linalg::EigenSolver;

use crate::algorithms::{companion, laguerre};
use crate::coefficients::IntoCoefficients;
use crate::config::{LaguerreConfig, Tolerance};
use crate::error::{PolyError, Result};

/// A dense univariate polynomial with complex coefficients.
///
/// Values are immutable: every operation returns a new polynomial.
#[derive(Clone, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending degree order.
    coeffs: Vec<Complex64>,
}

impl Polynomial {
    /// Creates a polynomial from a scalar, a coefficient sequence, or
    /// another polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::EmptyCoefficients`] for an empty sequence and
    /// [`PolyError::NonFiniteCoefficient`] if any value is NaN or infinite.
    pub fn new(coeffs: impl IntoCoefficients) -> Result<Self> {
        let coeffs = coeffs.into_coefficients();
        if coeffs.is_empty() {
            return Err(PolyError::EmptyCoefficients);
        }
        if let Some(index) = coeffs
            .iter()
            .position(|c| !c.re.is_finite() || !c.im.is_finite())
        {
            return Err(PolyError::NonFiniteCoefficient { index });
        }
        Ok(Self::from_vec(coeffs))
    }

    /// Creates a polynomial from raw coefficients without validation.
    ///
    /// Trailing exact zeros are removed; an empty vector gives zero.
    #[must_use]
    pub fn from_vec(mut coeffs: Vec<Complex64>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(Complex64::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![Complex64::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![Complex64::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: Complex64) -> Self {
        Self::from_vec(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::from_vec(vec![Complex64::zero(), Complex64::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: Complex64, n: usize) -> Self {
        let mut coeffs = vec![Complex64::zero(); n + 1];
        coeffs[n] = c;
        Self::from_vec(coeffs)
    }

    /// Creates the monic polynomial with the given roots.
    #[must_use]
    pub fn from_roots(roots: &[Complex64]) -> Self {
        roots.iter().fold(Self::one(), |acc, &r| {
            acc.mul(&Self::from_vec(vec![-r, Complex64::one()]))
        })
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Complex64 {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Complex64 {
        self.coeffs.get(i).copied().unwrap_or_else(Complex64::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    /// Consumes the polynomial and returns its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<Complex64> {
        self.coeffs
    }

    /// Returns the largest coefficient magnitude.
    #[must_use]
    pub fn norm_inf(&self) -> f64 {
        self.coeffs.iter().map(|c| c.norm()).fold(0.0, f64::max)
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, z: Complex64) -> Complex64 {
        self.coeffs
            .iter()
            .rev()
            .fold(Complex64::zero(), |acc, c| acc * z + c)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) + other.coeff(i)).collect();
        Self::from_vec(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_vec(self.coeffs.iter().map(|c| -c).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) - other.coeff(i)).collect();
        Self::from_vec(result)
    }

    /// Multiplies two polynomials by direct convolution.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![Complex64::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        Self::from_vec(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: Complex64) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::from_vec(self.coeffs.iter().map(|x| x * c).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn deriv(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let result = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| *c * i as f64)
            .collect();

        Self::from_vec(result)
    }

    /// Shifts the polynomial by multiplying by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let mut coeffs = vec![Complex64::zero(); n];
        coeffs.extend_from_slice(&self.coeffs);
        Self::from_vec(coeffs)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }

        result
    }

    /// Divides by `(x - root)` using synthetic division and returns the
    /// quotient.
    ///
    /// The remainder (the value at `root`) is discarded. The leading
    /// coefficient carries over unchanged, so the quotient never loses
    /// degree to rounding.
    #[must_use]
    pub fn deflate(&self, root: Complex64) -> Self {
        let n = self.degree();
        if n == 0 {
            return Self::zero();
        }

        let mut quotient = vec![Complex64::zero(); n];
        let mut carry = self.coeffs[n];
        for j in (0..n).rev() {
            quotient[j] = carry;
            carry = carry * root + self.coeffs[j];
        }

        Self::from_vec(quotient)
    }

    /// Divides by another polynomial, returning (quotient, remainder).
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        crate::algorithms::gcd::poly_div_rem(self, divisor)
    }

    /// Drops leading coefficients whose magnitude is at most `threshold`.
    #[must_use]
    pub fn trim_negligible(&self, threshold: f64) -> Self {
        let mut coeffs = self.coeffs.clone();
        while coeffs.last().is_some_and(|c| c.norm() <= threshold) {
            coeffs.pop();
        }
        Self::from_vec(coeffs)
    }

    /// Compares two polynomials coefficient-wise under a relative tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        let scale = self.norm_inf().max(other.norm_inf());
        let bound = tolerance.relative * scale;
        let len = self.coeffs.len().max(other.coeffs.len());
        (0..len).all(|i| (self.coeff(i) - other.coeff(i)).norm() <= bound)
    }

    /// Finds all roots as eigenvalues of the companion matrix.
    ///
    /// Degree 0 polynomials have no roots. Degree 1 is solved directly.
    ///
    /// # Errors
    ///
    /// Propagates eigenvalue failures as [`PolyError::Eigen`].
    pub fn roots_companion(&self) -> Result<Vec<Complex64>> {
        companion::roots_companion(self, &polyrat_linalg::QrEigenSolver::default())
    }

    /// Finds all roots with a caller-supplied eigenvalue solver.
    ///
    /// # Errors
    ///
    /// Propagates eigenvalue failures as [`PolyError::Eigen`].
    pub fn roots_companion_with<S: EigenSolver + ?Sized>(
        &self,
        solver: &S,
    ) -> Result<Vec<Complex64>> {
        companion::roots_companion(self, solver)
    }

    /// Finds all roots with Laguerre's method and deflation.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NoConvergence`] if any root exhausts the
    /// iteration budget.
    pub fn roots_laguerre(&self) -> Result<Vec<Complex64>> {
        laguerre::roots_laguerre(self, &LaguerreConfig::default())
    }

    /// Finds all roots with Laguerre's method under explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NoConvergence`] if any root exhausts the
    /// iteration budget.
    pub fn roots_laguerre_with(&self, config: &LaguerreConfig) -> Result<Vec<Complex64>> {
        laguerre::roots_laguerre(self, config)
    }
}

/// Approximate equality under the default [`Tolerance`].
///
/// The bound is relative to the larger of the two max-norms, so it is not
/// transitive: `x + 1e-12 == x` holds, yet the constant `1e-12` is not equal
/// to zero, whose norm gives it no room. Use [`Polynomial::approx_eq`] to
/// pick the tolerance explicitly.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, &Tolerance::default())
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}

impl ops::Add for Polynomial {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(&self, &other)
    }
}

impl ops::Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl ops::Sub for Polynomial {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(&self, &other)
    }
}

impl ops::Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &Polynomial) -> Self::Output {
        Polynomial::sub(self, other)
    }
}

impl ops::Mul for Polynomial {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Polynomial::mul(&self, &other)
    }
}

impl ops::Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Self::Output {
        Polynomial::mul(self, other)
    }
}

impl ops::Mul<Complex64> for Polynomial {
    type Output = Self;

    fn mul(self, c: Complex64) -> Self::Output {
        self.scale(c)
    }
}

impl ops::Mul<Polynomial> for Complex64 {
    type Output = Polynomial;

    fn mul(self, p: Polynomial) -> Self::Output {
        p.scale(self)
    }
}

impl ops::Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("({c})"),
                1 => format!("({c})*x"),
                _ => format!("({c})*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
