//! # polyrat
//!
//! Univariate polynomial and rational function algebra over the complex
//! numbers.
//!
//! ## Features
//!
//! - **Polynomials**: ring arithmetic, derivative, division, Euclidean GCD
//! - **Root finding**: companion-matrix eigenvalues and Laguerre's method,
//!   two independent algorithms that cross-check each other
//! - **Rational functions**: field arithmetic, evaluation with pole
//!   detection, quotient-rule derivative, scale-invariant equality
//!
//! ## Quick Start
//!
//! ```rust
//! use polyrat::prelude::*;
//!
//! // x^2 - 3x + 2 = (x - 1)(x - 2)
//! let p = Polynomial::new([2.0, -3.0, 1.0]).unwrap();
//! let mut roots = p.roots_companion().unwrap();
//! roots.sort_by(|a, b| a.re.total_cmp(&b.re));
//! assert!((roots[0] - Complex64::new(1.0, 0.0)).norm() < 1e-12);
//!
//! let f = RationalFunction::new([1.0, 1.0], [-1.0, 0.0, 1.0]).unwrap();
//! assert_eq!(f, RationalFunction::new(1.0, [-1.0, 1.0]).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyrat_linalg as linalg;
pub use polyrat_poly as poly;
pub use polyrat_rational_func as rational_func;

pub use polyrat_poly::gcd;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use num_complex::Complex64;
    pub use polyrat_linalg::{EigenConfig, EigenSolver, QrEigenSolver};
    pub use polyrat_poly::{gcd, GcdConfig, LaguerreConfig, PolyError, Polynomial, Tolerance};
    pub use polyrat_rational_func::{RationalError, RationalFunction};
}
