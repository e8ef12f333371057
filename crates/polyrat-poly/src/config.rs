//! Numerical tolerances and iteration budgets.
//!
//! All floating-point policy for this crate is collected here so that it
//! can be audited and overridden in one place.

/// Relative tolerance for comparing polynomials.
///
/// Two polynomials are equal when every coefficient difference is at most
/// `relative * max(‖a‖∞, ‖b‖∞)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Relative bound on coefficient differences.
    pub relative: f64,
}

impl Tolerance {
    /// Creates a tolerance with the given relative bound.
    #[must_use]
    pub fn new(relative: f64) -> Self {
        Self { relative }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { relative: 1e-9 }
    }
}

/// Configuration for the Euclidean GCD.
///
/// A remainder coefficient is treated as zero when it is below
/// `relative` times the backward-error scale of the division step that
/// produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GcdConfig {
    /// Relative threshold for negligible remainder coefficients.
    pub relative: f64,
}

impl Default for GcdConfig {
    fn default() -> Self {
        Self { relative: 1e-10 }
    }
}

/// Configuration for Laguerre root finding.
#[derive(Clone, Debug, PartialEq)]
pub struct LaguerreConfig {
    /// Unit roundoff used to decide that a residual is pure rounding noise.
    pub epsilon: f64,
    /// Relative step size below which an estimate counts as converged.
    pub step_tolerance: f64,
    /// Iteration budget per root.
    pub max_iterations: usize,
    /// Every this many iterations a fractional step is taken to break
    /// limit cycles.
    pub cycle_break_interval: usize,
    /// Whether to refine each root against the undeflated polynomial.
    pub polish: bool,
}

impl Default for LaguerreConfig {
    fn default() -> Self {
        Self {
            epsilon: f64::EPSILON,
            step_tolerance: 1e-15,
            max_iterations: 80,
            cycle_break_interval: 10,
            polish: true,
        }
    }
}
