//! # polyrat-linalg
//!
//! Small dense linear algebra for polyrat.
//!
//! This crate provides:
//! - Row-major dense matrices, including companion-matrix construction
//! - A pluggable eigenvalue interface ([`EigenSolver`])
//! - A balanced, shifted complex QR eigenvalue solver ([`QrEigenSolver`])
//!
//! ## Pipeline
//!
//! ```text
//! balance ─► Householder Hessenberg ─► shifted QR sweeps ─► eigenvalues
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod dense_matrix;
pub mod eigen;
pub mod error;

pub use dense_matrix::DenseMatrix;
pub use eigen::{EigenConfig, EigenSolver, QrEigenSolver};
pub use error::{LinalgError, Result};
