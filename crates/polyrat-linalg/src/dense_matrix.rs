//! Dense matrix storage for small square problems.
//!
//! Companion matrices are at most a few dozen rows, so a flat row-major
//! buffer keeps every QR sweep cache-friendly.

use std::ops::{Index, IndexMut};

use num_complex::Complex64;
use num_traits::{One, Zero};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T: Clone + Zero> DenseMatrix<T> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![T::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// Returns `None` if the rows are ragged.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        if rows.is_empty() {
            return Some(Self::zeros(0, 0));
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        if rows.iter().any(|r| r.len() != num_cols) {
            return None;
        }
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Some(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns the main diagonal.
    #[must_use]
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.num_rows.min(self.num_cols))
            .map(|i| self[(i, i)].clone())
            .collect()
    }
}

#[cfg(test)]
impl<T: Clone + Zero + One + std::ops::Mul<Output = T>> DenseMatrix<T> {
    pub(crate) fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    pub(crate) fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = T::zero();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                }
                result[(i, j)] = sum;
            }
        }
        result
    }
}

impl DenseMatrix<Complex64> {
    /// Builds the companion matrix of a monic polynomial.
    ///
    /// `lower` holds the monic coefficients a₀..aₙ₋₁ of
    /// xⁿ + aₙ₋₁xⁿ⁻¹ + ... + a₀ in ascending order:
    ///
    /// ```text
    /// C = [ 0   0   ...  0  -a₀  ]
    ///     [ 1   0   ...  0  -a₁  ]
    ///     [ 0   1   ...  0  -a₂  ]
    ///     [ .   .   ...  .   .   ]
    ///     [ 0   0   ...  1  -aₙ₋₁]
    /// ```
    #[must_use]
    pub fn companion(lower: &[Complex64]) -> Self {
        let n = lower.len();
        let mut m = Self::zeros(n, n);
        for i in 1..n {
            m[(i, i - 1)] = Complex64::one();
        }
        for (i, a) in lower.iter().enumerate() {
            m[(i, n - 1)] = -a;
        }
        m
    }

    /// Multiplies every entry by `factor` in place.
    pub fn scale_entries(&mut self, factor: f64) {
        for z in &mut self.data {
            *z *= factor;
        }
    }

    /// Returns the largest entry magnitude.
    #[must_use]
    pub fn norm_max(&self) -> f64 {
        self.data.iter().map(|z| z.norm()).fold(0.0, f64::max)
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
