//! Error types for polynomial construction and algorithms.

use num_complex::Complex64;
use polyrat_linalg::LinalgError;
use thiserror::Error;

/// Errors that can occur while building or operating on polynomials.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PolyError {
    /// A coefficient sequence with no entries was supplied.
    #[error("coefficient sequence must contain at least one value")]
    EmptyCoefficients,

    /// A coefficient is NaN or infinite.
    #[error("coefficient {index} is not a finite number")]
    NonFiniteCoefficient {
        /// Position of the offending coefficient.
        index: usize,
    },

    /// Division by the zero polynomial.
    #[error("division by zero polynomial")]
    DivisionByZero,

    /// Laguerre iteration ran out of budget.
    #[error("root iteration did not converge after {iterations} steps (last estimate {estimate})")]
    NoConvergence {
        /// Iterations performed.
        iterations: usize,
        /// The estimate at the point the budget ran out.
        estimate: Complex64,
    },

    /// The eigenvalue routine behind the companion method failed.
    #[error("companion eigenvalues: {0}")]
    Eigen(#[from] LinalgError),
}

/// Result alias for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
