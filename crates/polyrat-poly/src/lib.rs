//! # polyrat-poly
//!
//! Univariate polynomials with complex floating-point coefficients.
//!
//! This crate provides:
//! - Dense polynomials stored in ascending degree order
//! - Ring arithmetic, formal derivative, Horner evaluation
//! - Division with remainder and the Euclidean GCD
//! - Two independent root finders: companion-matrix eigenvalues and
//!   Laguerre iteration with deflation
//!
//! ## Numerical policy
//!
//! Coefficients are trimmed only when exactly zero, so a tiny leading
//! coefficient still defines the degree. Every floating-point threshold
//! (equality, GCD remainders, iteration budgets) lives in [`config`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::should_implement_trait)]

pub mod algorithms;
pub mod coefficients;
pub mod config;
pub mod dense;
pub mod error;

#[cfg(test)]
mod proptests;

pub use algorithms::gcd::{gcd, gcd_with, make_monic, poly_div_rem, poly_extended_gcd};
pub use coefficients::IntoCoefficients;
pub use config::{GcdConfig, LaguerreConfig, Tolerance};
pub use dense::Polynomial;
pub use error::{PolyError, Result};
pub use num_complex::Complex64;
pub use polyrat_linalg::{EigenConfig, EigenSolver, QrEigenSolver};
