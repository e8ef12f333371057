//! Eigenvalues of general complex matrices.
//!
//! The default solver follows the classical dense pipeline:
//! 1. Balance the matrix with a diagonal similarity (powers of two, so exact)
//! 2. Scale by a power of two so the largest entry is of order one
//! 3. Reduce to upper Hessenberg form with Householder reflections
//! 4. Run single-shift complex QR sweeps (Givens rotations, Wilkinson shifts)
//!    on the active block, deflating whenever a subdiagonal entry vanishes
//!
//! The scaling step keeps products of entries away from overflow and
//! underflow; eigenvalues are scaled back at the end.
//!
//! A 2×2 matrix, and every trailing 2×2 block, is solved in closed form. The larger eigenvalue
//! comes from the quadratic formula and the smaller one from `det / λ₁`,
//! which keeps tiny eigenvalues of badly scaled companion matrices accurate
//! to working precision.

use num_complex::Complex64;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::dense_matrix::DenseMatrix;
use crate::error::{LinalgError, Result};

/// Radix used for balancing; scaling by powers of it is exact.
const RADIX: f64 = 2.0;

/// Upper bound on balancing passes.
const MAX_BALANCE_SWEEPS: usize = 64;

/// Anything that can produce the eigenvalues of a square complex matrix.
pub trait EigenSolver {
    /// Returns all eigenvalues of `matrix`, with multiplicity, in no
    /// particular order.
    ///
    /// # Errors
    ///
    /// Implementations report non-square input and iteration failure.
    fn eigenvalues(&self, matrix: &DenseMatrix<Complex64>) -> Result<Vec<Complex64>>;
}

/// Configuration for [`QrEigenSolver`].
#[derive(Clone, Debug)]
pub struct EigenConfig {
    /// QR sweeps allowed before each deflation.
    pub max_iterations_per_eigenvalue: usize,
    /// Every this many stalled sweeps, an exceptional shift is used.
    pub exceptional_shift_interval: usize,
    /// Whether to balance the matrix before reduction.
    pub balance: bool,
}

impl Default for EigenConfig {
    fn default() -> Self {
        Self {
            max_iterations_per_eigenvalue: 60,
            exceptional_shift_interval: 10,
            balance: true,
        }
    }
}

/// Shifted complex QR eigenvalue solver.
#[derive(Clone, Debug, Default)]
pub struct QrEigenSolver {
    config: EigenConfig,
}

impl QrEigenSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: EigenConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &EigenConfig {
        &self.config
    }
}

impl EigenSolver for QrEigenSolver {
    fn eigenvalues(&self, matrix: &DenseMatrix<Complex64>) -> Result<Vec<Complex64>> {
        if !matrix.is_square() {
            return Err(LinalgError::NotSquare {
                rows: matrix.num_rows(),
                cols: matrix.num_cols(),
            });
        }

        let n = matrix.num_rows();
        for row in 0..n {
            for col in 0..n {
                let z = matrix[(row, col)];
                if !z.re.is_finite() || !z.im.is_finite() {
                    return Err(LinalgError::NonFiniteEntry { row, col });
                }
            }
        }

        if n == 0 {
            return Ok(Vec::new());
        }

        let mut h = matrix.clone();
        if self.config.balance {
            balance(&mut h);
        }

        let scale = power_of_two_scale(h.norm_max());
        h.scale_entries(scale.recip());

        let mut eigenvalues = if n == 2 {
            let (l1, l2) = eig2x2(h[(0, 0)], h[(0, 1)], h[(1, 0)], h[(1, 1)]);
            vec![l1, l2]
        } else {
            reduce_to_hessenberg(&mut h);
            hessenberg_qr(&mut h, &self.config)?
        };

        for z in &mut eigenvalues {
            *z *= scale;
        }
        Ok(eigenvalues)
    }
}

/// Power of two `2^⌊log₂ norm⌋`, or 1 for a zero matrix.
///
/// Dividing by it is exact and puts the largest entry in about `[1, 2)`.
#[allow(clippy::cast_possible_truncation)]
fn power_of_two_scale(norm: f64) -> f64 {
    if norm == 0.0 || !norm.is_finite() {
        return 1.0;
    }
    let exponent = norm.log2().floor().clamp(-1022.0, 1023.0) as i32;
    2f64.powi(exponent)
}

/// Balances a square matrix in place (Parlett–Reinsch).
///
/// Applies a diagonal similarity D⁻¹AD so that each row and column pair
/// has comparable off-diagonal norm. Eigenvalues are unchanged.
pub fn balance(h: &mut DenseMatrix<Complex64>) {
    let n = h.num_rows();
    let sqrdx = RADIX * RADIX;

    for _ in 0..MAX_BALANCE_SWEEPS {
        let mut done = true;

        for i in 0..n {
            let mut c = 0.0;
            let mut r = 0.0;
            for j in 0..n {
                if j != i {
                    c += h[(j, i)].l1_norm();
                    r += h[(i, j)].l1_norm();
                }
            }

            if c == 0.0 || r == 0.0 {
                continue;
            }

            let s = c + r;
            let mut f = 1.0;
            let mut g = r / RADIX;
            while c < g {
                f *= RADIX;
                c *= sqrdx;
            }
            g = r * RADIX;
            while c > g {
                f /= RADIX;
                c /= sqrdx;
            }

            if (c + r) / f < 0.95 * s {
                done = false;
                let inv = 1.0 / f;
                for j in 0..n {
                    h[(i, j)] *= inv;
                }
                for j in 0..n {
                    h[(j, i)] *= f;
                }
            }
        }

        if done {
            break;
        }
    }
}

/// Reduces a square matrix to upper Hessenberg form in place.
///
/// Uses one Householder reflection per column; the result is unitarily
/// similar to the input.
pub fn reduce_to_hessenberg(h: &mut DenseMatrix<Complex64>) {
    let n = h.num_rows();
    if n < 3 {
        return;
    }

    for k in 0..n - 2 {
        let tail: f64 = (k + 2..n).map(|i| h[(i, k)].norm_sqr()).sum();
        if tail == 0.0 {
            continue;
        }

        let x0 = h[(k + 1, k)];
        let x_norm = (tail + x0.norm_sqr()).sqrt();
        let phase = if x0.is_zero() {
            Complex64::new(1.0, 0.0)
        } else {
            x0 / x0.norm()
        };
        let alpha = -phase * x_norm;

        let mut v: Vec<Complex64> = (k + 1..n).map(|i| h[(i, k)]).collect();
        v[0] -= alpha;
        let v_norm = v.iter().map(Complex64::norm_sqr).sum::<f64>().sqrt();
        if v_norm == 0.0 {
            continue;
        }
        for z in &mut v {
            *z /= v_norm;
        }

        // H <- (I - 2vv*) H
        for j in k..n {
            let dot: Complex64 = v
                .iter()
                .enumerate()
                .map(|(m, vm)| vm.conj() * h[(k + 1 + m, j)])
                .sum();
            for (m, vm) in v.iter().enumerate() {
                h[(k + 1 + m, j)] -= vm * dot * 2.0;
            }
        }

        // H <- H (I - 2vv*)
        for i in 0..n {
            let dot: Complex64 = v
                .iter()
                .enumerate()
                .map(|(m, vm)| h[(i, k + 1 + m)] * vm)
                .sum();
            for (m, vm) in v.iter().enumerate() {
                h[(i, k + 1 + m)] -= dot * vm.conj() * 2.0;
            }
        }

        h[(k + 1, k)] = alpha;
        for i in k + 2..n {
            h[(i, k)] = Complex64::zero();
        }
    }
}

/// Runs shifted QR on an upper Hessenberg matrix until every eigenvalue
/// has been deflated.
fn hessenberg_qr(h: &mut DenseMatrix<Complex64>, config: &EigenConfig) -> Result<Vec<Complex64>> {
    let n = h.num_rows();
    let norm = h.norm_max();
    let interval = config.exceptional_shift_interval.max(1);

    let mut eigenvalues = vec![Complex64::zero(); n];
    let mut hi = n;
    let mut stalled = 0usize;
    let mut total = 0usize;

    while hi > 0 {
        let lo = find_split(h, hi, norm);

        match hi - lo {
            1 => {
                eigenvalues[lo] = h[(lo, lo)];
                hi = lo;
                stalled = 0;
                continue;
            }
            2 => {
                let (l1, l2) = eig2x2(
                    h[(lo, lo)],
                    h[(lo, lo + 1)],
                    h[(lo + 1, lo)],
                    h[(lo + 1, lo + 1)],
                );
                eigenvalues[lo] = l1;
                eigenvalues[lo + 1] = l2;
                hi = lo;
                stalled = 0;
                continue;
            }
            _ => {}
        }

        if stalled >= config.max_iterations_per_eigenvalue {
            debug!(size = n, remaining = hi, sweeps = total, "QR iteration stalled");
            return Err(LinalgError::NoConvergence { iterations: total });
        }
        stalled += 1;
        total += 1;

        let shift = if stalled % interval == 0 {
            let sub = h[(hi - 1, hi - 2)].l1_norm() + h[(hi - 2, hi - 3)].l1_norm();
            h[(hi - 1, hi - 1)] + Complex64::new(0.75 * sub, 0.0)
        } else {
            wilkinson_shift(h, hi)
        };

        trace!(lo, hi, stalled, "QR sweep");
        qr_sweep(h, lo, hi, shift);
    }

    debug!(size = n, sweeps = total, "QR iteration converged");
    Ok(eigenvalues)
}

/// Finds the start of the active unreduced block ending at `hi`.
///
/// Negligible subdiagonal entries are zeroed as they are found.
fn find_split(h: &mut DenseMatrix<Complex64>, hi: usize, norm: f64) -> usize {
    let mut l = hi - 1;
    while l > 0 {
        let mut s = h[(l - 1, l - 1)].l1_norm() + h[(l, l)].l1_norm();
        if s == 0.0 {
            s = norm;
        }
        if h[(l, l - 1)].l1_norm() <= f64::EPSILON * s {
            h[(l, l - 1)] = Complex64::zero();
            return l;
        }
        l -= 1;
    }
    0
}

/// Eigenvalue of the trailing 2×2 block closest to its last diagonal entry.
fn wilkinson_shift(h: &DenseMatrix<Complex64>, hi: usize) -> Complex64 {
    let d = h[(hi - 1, hi - 1)];
    let (l1, l2) = eig2x2(h[(hi - 2, hi - 2)], h[(hi - 2, hi - 1)], h[(hi - 1, hi - 2)], d);
    if (l1 - d).norm() <= (l2 - d).norm() {
        l1
    } else {
        l2
    }
}

/// Eigenvalues of `[[a, b], [c, d]]`, larger magnitude first.
fn eig2x2(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> (Complex64, Complex64) {
    let half_trace = (a + d) * 0.5;
    let half_diff = (a - d) * 0.5;
    let det = a * d - b * c;
    let disc = (half_diff * half_diff + b * c).sqrt();

    let plus = half_trace + disc;
    let minus = half_trace - disc;
    let l1 = if plus.norm() >= minus.norm() { plus } else { minus };

    if l1.is_zero() {
        return (l1, Complex64::zero());
    }
    (l1, det.fdiv(l1))
}

/// Computes a complex Givens rotation `(c, s)` with real `c` such that
/// `[[c, s], [-s̄, c]] · [a, b]ᵀ = [r, 0]ᵀ`.
fn givens(a: Complex64, b: Complex64) -> (f64, Complex64) {
    let bn = b.norm();
    if bn == 0.0 {
        return (1.0, Complex64::zero());
    }
    let an = a.norm();
    if an == 0.0 {
        return (0.0, b.conj() / bn);
    }
    let norm = an.hypot(bn);
    let phase = a / an;
    (an / norm, phase * b.conj() / norm)
}

/// One explicit shifted QR step on the active block `lo..hi`.
fn qr_sweep(h: &mut DenseMatrix<Complex64>, lo: usize, hi: usize, shift: Complex64) {
    for k in lo..hi {
        h[(k, k)] -= shift;
    }

    // H - μI = QR
    let mut rotations = Vec::with_capacity(hi - lo - 1);
    for k in lo..hi - 1 {
        let (c, s) = givens(h[(k, k)], h[(k + 1, k)]);
        for j in k..hi {
            let x = h[(k, j)];
            let y = h[(k + 1, j)];
            h[(k, j)] = x * c + s * y;
            h[(k + 1, j)] = -s.conj() * x + y * c;
        }
        h[(k + 1, k)] = Complex64::zero();
        rotations.push((c, s));
    }

    // RQ + μI
    for (offset, &(c, s)) in rotations.iter().enumerate() {
        let k = lo + offset;
        for i in lo..(k + 2).min(hi) {
            let x = h[(i, k)];
            let y = h[(i, k + 1)];
            h[(i, k)] = x * c + y * s.conj();
            h[(i, k + 1)] = y * c - x * s;
        }
    }

    for k in lo..hi {
        h[(k, k)] += shift;
    }
}
