//! Polynomial root finding via companion matrix eigenvalues.
//!
//! For p(x) = c₀ + c₁x + ... + cₙxⁿ:
//! 1. Normalize to monic form by dividing through by cₙ
//! 2. Build the companion matrix of the monic polynomial
//! 3. Its eigenvalues are the roots
//!
//! The eigenvalue routine is any [`EigenSolver`]. Coefficient divisions
//! go through [`Complex64::fdiv`], which stays finite for leading
//! coefficients far below or above unit magnitude.

use num_complex::Complex64;
use polyrat_linalg::{DenseMatrix, EigenSolver};
use tracing::trace;

use crate::dense::Polynomial;
use crate::error::Result;

/// Finds all roots of `p` as eigenvalues of its companion matrix.
///
/// Returns an empty vector for constants. Linear polynomials are solved
/// directly without building a matrix.
///
/// # Errors
///
/// Propagates eigenvalue failures as [`crate::PolyError::Eigen`].
pub fn roots_companion<S: EigenSolver + ?Sized>(
    p: &Polynomial,
    solver: &S,
) -> Result<Vec<Complex64>> {
    let coeffs = p.coeffs();
    let n = p.degree();

    match n {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![(-coeffs[0]).fdiv(coeffs[1])]),
        _ => {}
    }

    let lead = p.leading_coeff();
    let lower: Vec<Complex64> = coeffs[..n].iter().map(|c| c.fdiv(lead)).collect();
    let companion = DenseMatrix::companion(&lower);

    trace!(degree = n, "solving companion eigenproblem");
    Ok(solver.eigenvalues(&companion)?)
}
