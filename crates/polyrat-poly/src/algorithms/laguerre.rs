//! Laguerre's method with deflation.
//!
//! Roots are found one at a time on a working copy of the polynomial:
//!
//! ```text
//! x ← x - n / (G ± √((n - 1)(nH - G²)))
//! G = p'/p,  H = G² - p''/p
//! ```
//!
//! After each root the working polynomial is deflated by `(x - root)`;
//! the final linear factor is solved directly. Roots can optionally be
//! polished against the original polynomial to undo deflation error.
//!
//! Iteration stops when the residual is at roundoff level or the step
//! vanishes relative to the estimate. Limit cycles are broken with a
//! fractional step every `cycle_break_interval` iterations.

use num_complex::Complex64;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::config::LaguerreConfig;
use crate::dense::Polynomial;
use crate::error::{PolyError, Result};

/// Fractional step lengths used to break limit cycles.
const CYCLE_FRACTIONS: [f64; 8] = [0.5, 0.25, 0.75, 0.13, 0.38, 0.62, 0.88, 1.0];

/// Finds all roots of `p` with Laguerre's method and deflation.
///
/// Constants have no roots.
///
/// # Errors
///
/// Returns [`PolyError::NoConvergence`] as soon as one root exhausts
/// `config.max_iterations`.
pub fn roots_laguerre(p: &Polynomial, config: &LaguerreConfig) -> Result<Vec<Complex64>> {
    let n = p.degree();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut working = p.clone();
    let mut roots = Vec::with_capacity(n);

    while working.degree() > 1 {
        let root = laguerre_root(&working, Complex64::zero(), config)?;
        trace!(degree = working.degree(), %root, "deflating");
        working = working.deflate(root);
        roots.push(root);
    }

    let linear = working.coeffs();
    roots.push((-linear[0]).fdiv(linear[1]));

    if config.polish {
        for root in &mut roots {
            match laguerre_root(p, *root, config) {
                Ok(polished) => *root = polished,
                Err(err) => debug!(%err, "polishing failed, keeping deflated root"),
            }
        }
    }

    Ok(roots)
}

/// Refines a single root of `p` starting from `start`.
///
/// # Errors
///
/// Returns [`PolyError::NoConvergence`] with the last estimate if the
/// budget runs out.
pub fn laguerre_root(p: &Polynomial, start: Complex64, config: &LaguerreConfig) -> Result<Complex64> {
    let a = p.coeffs();
    let m = p.degree();
    let mf = m as f64;
    let interval = config.cycle_break_interval.max(1);
    let mut x = start;

    for iter in 1..=config.max_iterations {
        // Horner for p, p' and p''/2 at once, with a running roundoff bound.
        let mut b = a[m];
        let mut d = Complex64::zero();
        let mut f = Complex64::zero();
        let mut err = b.norm();
        let abx = x.norm();
        for j in (0..m).rev() {
            f = x * f + d;
            d = x * d + b;
            b = x * b + a[j];
            err = b.norm() + abx * err;
        }
        err *= config.epsilon;

        if b.norm() <= err {
            trace!(iterations = iter, "residual at roundoff level");
            return Ok(x);
        }

        // Scaled division: |p(x)| may be far outside the range where
        // |p(x)|² is representable.
        let g = d.fdiv(b);
        let g2 = g * g;
        let h = g2 - (f * 2.0).fdiv(b);
        let sq = ((h * mf - g2) * (mf - 1.0)).sqrt();
        let gp = g + sq;
        let gm = g - sq;
        let abp = gp.norm();
        let abm = gm.norm();
        let denom = if abp < abm { gm } else { gp };

        let dx = if abp.max(abm) > 0.0 {
            Complex64::new(mf, 0.0).fdiv(denom)
        } else {
            Complex64::from_polar(1.0 + abx, iter as f64)
        };

        let x1 = x - dx;
        if x1 == x || dx.norm() <= config.step_tolerance * x1.norm() {
            trace!(iterations = iter, "step below tolerance");
            return Ok(x1);
        }

        if iter % interval == 0 {
            x -= dx * CYCLE_FRACTIONS[(iter / interval - 1) % CYCLE_FRACTIONS.len()];
        } else {
            x = x1;
        }
    }

    debug!(degree = m, iterations = config.max_iterations, estimate = %x, "laguerre did not converge");
    Err(PolyError::NoConvergence {
        iterations: config.max_iterations,
        estimate: x,
    })
}
