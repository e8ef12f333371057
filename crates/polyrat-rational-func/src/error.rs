//! Error types for rational functions.

use num_complex::Complex64;
use polyrat_poly::PolyError;
use thiserror::Error;

/// Errors raised by rational function construction and operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RationalError {
    /// The numerator or denominator could not be built.
    #[error("invalid polynomial: {0}")]
    Poly(#[from] PolyError),

    /// The denominator is the zero polynomial.
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    /// Division by the zero rational function.
    #[error("division by zero")]
    DivisionByZero,

    /// Evaluation at a root of the denominator.
    #[error("pole at {at}")]
    Pole {
        /// The point that was evaluated.
        at: Complex64,
    },
}

/// Result alias for rational function operations.
pub type Result<T> = std::result::Result<T, RationalError>;
