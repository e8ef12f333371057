//! Polynomial division and GCD.
//!
//! Floating-point remainders are almost never exactly zero, so the
//! Euclidean loop trims remainder coefficients that fall below the
//! backward-error scale of the division that produced them (see
//! [`GcdConfig`]). Termination does not depend on that threshold: every
//! division step strictly lowers the degree.

use num_complex::Complex64;
use num_traits::Zero;

use crate::config::GcdConfig;
use crate::dense::Polynomial;
use crate::error::{PolyError, Result};

/// Divides polynomial a by b, returning (quotient, remainder).
///
/// The top coefficient of the running remainder is removed by degree on
/// every step instead of being tested against zero.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
pub fn poly_div_rem(a: &Polynomial, b: &Polynomial) -> Result<(Polynomial, Polynomial)> {
    if b.is_zero() {
        return Err(PolyError::DivisionByZero);
    }

    if a.degree() < b.degree() {
        return Ok((Polynomial::zero(), a.clone()));
    }

    let divisor = b.coeffs();
    let m = divisor.len();
    let lead = b.leading_coeff();
    let mut quotient = vec![Complex64::zero(); a.degree() - b.degree() + 1];
    let mut remainder = a.coeffs().to_vec();

    while remainder.len() >= m {
        let deg_diff = remainder.len() - m;
        let coeff = remainder[remainder.len() - 1].fdiv(lead);

        quotient[deg_diff] = coeff;

        for (i, bc) in divisor.iter().take(m - 1).enumerate() {
            remainder[deg_diff + i] -= coeff * bc;
        }

        remainder.pop();
    }

    Ok((Polynomial::from_vec(quotient), Polynomial::from_vec(remainder)))
}

/// Makes a polynomial monic (leading coefficient = 1).
///
/// The zero polynomial is returned unchanged.
#[must_use]
pub fn make_monic(p: &Polynomial) -> Polynomial {
    if p.is_zero() {
        return p.clone();
    }

    p.scale(p.leading_coeff().finv())
}

/// Computes the monic GCD of two polynomials with the default settings.
#[must_use]
pub fn gcd(a: &Polynomial, b: &Polynomial) -> Polynomial {
    gcd_with(a, b, &GcdConfig::default())
}

/// Computes the monic GCD of two polynomials using the Euclidean algorithm.
///
/// `gcd(p, 0)` is `p` made monic; coprime inputs give the constant 1.
#[must_use]
pub fn gcd_with(a: &Polynomial, b: &Polynomial, config: &GcdConfig) -> Polynomial {
    if a.is_zero() {
        return make_monic(b);
    }
    if b.is_zero() {
        return make_monic(a);
    }

    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let Ok((quot, r)) = poly_div_rem(&p, &q) else {
            break;
        };
        let threshold = remainder_threshold(&p, &quot, &q, config);
        p = q;
        q = r.trim_negligible(threshold);
    }

    make_monic(&p)
}

/// Extended polynomial GCD.
///
/// Computes (gcd, s, t) such that gcd = s*a + t*b, with gcd monic.
///
/// # Example
///
/// ```
/// use polyrat_poly::{poly_extended_gcd, Polynomial};
///
/// let a = Polynomial::new([-1.0, 0.0, 1.0]).unwrap(); // x² - 1
/// let b = Polynomial::new([-1.0, 1.0]).unwrap(); // x - 1
///
/// let (g, s, t) = poly_extended_gcd(&a, &b);
/// assert_eq!(g, b);
/// assert_eq!(s.mul(&a).add(&t.mul(&b)), g);
/// ```
#[must_use]
pub fn poly_extended_gcd(a: &Polynomial, b: &Polynomial) -> (Polynomial, Polynomial, Polynomial) {
    let config = GcdConfig::default();

    if a.is_zero() {
        if b.is_zero() {
            return (Polynomial::zero(), Polynomial::one(), Polynomial::zero());
        }
        let scale = b.leading_coeff().finv();
        return (make_monic(b), Polynomial::zero(), Polynomial::constant(scale));
    }
    if b.is_zero() {
        let scale = a.leading_coeff().finv();
        return (make_monic(a), Polynomial::constant(scale), Polynomial::zero());
    }

    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_s = Polynomial::one();
    let mut s = Polynomial::zero();
    let mut old_t = Polynomial::zero();
    let mut t = Polynomial::one();

    while !r.is_zero() {
        let Ok((q, rem)) = poly_div_rem(&old_r, &r) else {
            break;
        };
        let threshold = remainder_threshold(&old_r, &q, &r, &config);

        let new_r = rem.trim_negligible(threshold);
        let new_s = old_s.sub(&q.mul(&s));
        let new_t = old_t.sub(&q.mul(&t));

        old_r = r;
        r = new_r;
        old_s = s;
        s = new_s;
        old_t = t;
        t = new_t;
    }

    let lead_inv = old_r.leading_coeff().finv();

    (
        old_r.scale(lead_inv),
        old_s.scale(lead_inv),
        old_t.scale(lead_inv),
    )
}

/// Magnitude below which a remainder of `dividend / divisor` is noise.
fn remainder_threshold(
    dividend: &Polynomial,
    quotient: &Polynomial,
    divisor: &Polynomial,
    config: &GcdConfig,
) -> f64 {
    config.relative * (dividend.norm_inf() + quotient.norm_inf() * divisor.norm_inf())
}
