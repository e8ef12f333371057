//! Core rational function type.
//!
//! A rational function is a quotient of two polynomials P(x)/Q(x) with
//! complex floating-point coefficients. Unlike an exact field, there is
//! no reliable canonical form here, so the representation is whatever
//! the caller or the last operation produced:
//! - The denominator is never the zero polynomial
//! - Common factors may or may not have been cancelled
//! - Equality is decided by cross-multiplication, never by comparing parts

use std::fmt;

use num_complex::Complex64;
use num_traits::Zero;
use polyrat_poly::{gcd_with, make_monic, GcdConfig, IntoCoefficients, Polynomial};
use tracing::{debug, trace};

use crate::error::{RationalError, Result};

/// A rational function P(x)/Q(x) with complex coefficients.
///
/// # Invariants
///
/// - `denominator` is never the zero polynomial
///
/// # Example
///
/// ```
/// use polyrat_rational_func::RationalFunction;
///
/// // (x + 1) / (x^2 - 1) equals 1 / (x - 1) without being reduced first.
/// let f = RationalFunction::new([1.0, 1.0], [-1.0, 0.0, 1.0]).unwrap();
/// let g = RationalFunction::new(1.0, [-1.0, 1.0]).unwrap();
/// assert_eq!(f, g);
/// ```
#[derive(Clone, Debug)]
pub struct RationalFunction {
    numerator: Polynomial,
    denominator: Polynomial,
}

impl RationalFunction {
    /// Creates a rational function from a numerator and denominator, each
    /// given as a scalar, a coefficient sequence, or a polynomial.
    ///
    /// The pair is stored as given; no common factor is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Poly`] if either side is malformed and
    /// [`RationalError::ZeroDenominator`] if the denominator is zero.
    pub fn new(numerator: impl IntoCoefficients, denominator: impl IntoCoefficients) -> Result<Self> {
        let numerator = Polynomial::new(numerator)?;
        let denominator = Polynomial::new(denominator)?;
        if denominator.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Builds from parts whose denominator is already known to be nonzero.
    pub(crate) fn from_parts(numerator: Polynomial, denominator: Polynomial) -> Self {
        debug_assert!(!denominator.is_zero());
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a rational function from a polynomial (denominator = 1).
    #[must_use]
    pub fn from_poly(p: Polynomial) -> Self {
        Self {
            numerator: p,
            denominator: Polynomial::one(),
        }
    }

    /// Creates the zero rational function (0/1).
    #[must_use]
    pub fn zero() -> Self {
        Self::from_poly(Polynomial::zero())
    }

    /// Creates the constant rational function 1/1.
    #[must_use]
    pub fn one() -> Self {
        Self::from_poly(Polynomial::one())
    }

    /// Creates a constant rational function c/1.
    #[must_use]
    pub fn constant(c: Complex64) -> Self {
        Self::from_poly(Polynomial::constant(c))
    }

    /// Returns the numerator polynomial.
    #[must_use]
    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    /// Returns the denominator polynomial.
    #[must_use]
    pub fn denominator(&self) -> &Polynomial {
        &self.denominator
    }

    /// Returns true if this is the zero rational function.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true if the denominator is a nonzero constant.
    #[must_use]
    pub fn is_polynomial(&self) -> bool {
        self.denominator.degree() == 0
    }

    /// Returns the polynomial this represents, if the denominator is constant.
    #[must_use]
    pub fn as_polynomial(&self) -> Option<Polynomial> {
        self.is_polynomial()
            .then(|| self.numerator.scale(self.denominator.leading_coeff().finv()))
    }

    /// Returns the degree of the numerator minus degree of denominator.
    ///
    /// This is the "degree at infinity" of the rational function.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn degree_at_infinity(&self) -> i64 {
        self.numerator.degree() as i64 - self.denominator.degree() as i64
    }

    /// Cancels the common factor of numerator and denominator and makes
    /// the denominator monic, using the default [`GcdConfig`].
    #[must_use]
    pub fn reduced(&self) -> Self {
        self.reduced_with(&GcdConfig::default())
    }

    /// Like [`reduced`](Self::reduced) with an explicit GCD configuration.
    ///
    /// The numerical GCD is only trusted if it divides both parts with a
    /// negligible remainder; otherwise the factor is left in place and
    /// only the monic normalization happens.
    #[must_use]
    pub fn reduced_with(&self, config: &GcdConfig) -> Self {
        if self.numerator.is_zero() {
            return Self::zero();
        }

        let g = gcd_with(&self.numerator, &self.denominator, config);
        let (num, den) = if g.degree() == 0 {
            (self.numerator.clone(), self.denominator.clone())
        } else {
            match (
                exact_quotient(&self.numerator, &g, config),
                exact_quotient(&self.denominator, &g, config),
            ) {
                (Some(num), Some(den)) => {
                    trace!(degree = g.degree(), "cancelled common factor");
                    (num, den)
                }
                _ => {
                    debug!(degree = g.degree(), "gcd does not divide both parts, skipping reduction");
                    (self.numerator.clone(), self.denominator.clone())
                }
            }
        };

        let lead_inv = den.leading_coeff().finv();
        Self {
            numerator: num.scale(lead_inv),
            denominator: make_monic(&den),
        }
    }

    /// Evaluates the rational function at a point.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Pole`] if the denominator is exactly zero
    /// at `z`.
    pub fn eval(&self, z: Complex64) -> Result<Complex64> {
        let den_val = self.denominator.eval(z);
        if den_val.is_zero() {
            return Err(RationalError::Pole { at: z });
        }

        Ok(self.numerator.eval(z).fdiv(den_val))
    }

    /// Computes the derivative of the rational function.
    ///
    /// Using the quotient rule: (P/Q)' = (P'Q - PQ') / Q²
    #[must_use]
    pub fn deriv(&self) -> Self {
        let p = &self.numerator;
        let q = &self.denominator;

        // P'Q - PQ'
        let num = p.deriv().mul(q).sub(&p.mul(&q.deriv()));
        // Q²
        let den = q.mul(q);

        Self::from_parts(num, den).reduced()
    }

    /// Decomposes into polynomial part and proper fraction.
    ///
    /// Returns (poly, proper) where:
    /// - `poly` is the polynomial part (possibly zero)
    /// - `proper` has deg(numerator) < deg(denominator), or is zero
    ///
    /// # Errors
    ///
    /// Propagates polynomial division failures as [`RationalError::Poly`].
    pub fn decompose_proper(&self) -> Result<(Polynomial, Self)> {
        if self.numerator.degree() < self.denominator.degree() {
            return Ok((Polynomial::zero(), self.clone()));
        }

        let (q, r) = self.numerator.div_rem(&self.denominator)?;

        Ok((q, Self::from_parts(r, self.denominator.clone())))
    }

    /// Negates the rational function.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            numerator: self.numerator.neg(),
            denominator: self.denominator.clone(),
        }
    }

    /// Unary plus: returns an identical copy.
    #[must_use]
    pub fn pos(&self) -> Self {
        self.clone()
    }
}

/// Quotient `p / g` when the division leaves a negligible remainder.
fn exact_quotient(p: &Polynomial, g: &Polynomial, config: &GcdConfig) -> Option<Polynomial> {
    let (q, r) = p.div_rem(g).ok()?;
    let bound = config.relative * (p.norm_inf() + q.norm_inf() * g.norm_inf());
    (r.norm_inf() <= bound).then_some(q)
}

impl PartialEq for RationalFunction {
    /// Cross-multiplies: `a/b == c/d` iff `a·d == c·b` as polynomials.
    fn eq(&self, other: &Self) -> bool {
        self.numerator.mul(&other.denominator) == other.numerator.mul(&self.denominator)
    }
}

impl Default for RationalFunction {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for RationalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) / ({})", self.numerator, self.denominator)
    }
}
