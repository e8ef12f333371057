//! Error types for matrix routines.

use thiserror::Error;

/// Errors raised by the dense linear algebra routines.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LinalgError {
    /// An eigenvalue routine was handed a rectangular matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A matrix entry is NaN or infinite.
    #[error("matrix entry ({row}, {col}) is not finite")]
    NonFiniteEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// The QR iteration exhausted its sweep budget.
    #[error("eigenvalue iteration did not converge after {iterations} QR sweeps")]
    NoConvergence {
        /// Total number of sweeps performed.
        iterations: usize,
    },
}

/// Result alias for linear algebra routines.
pub type Result<T> = std::result::Result<T, LinalgError>;
