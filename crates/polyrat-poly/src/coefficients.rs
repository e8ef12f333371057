//! Conversion of accepted input shapes into coefficient vectors.
//!
//! Constructors accept a bare scalar, a sequence of scalars, or an
//! existing polynomial. Each shape goes through [`IntoCoefficients`]
//! before any validation happens.

use num_complex::Complex64;

use crate::dense::Polynomial;

/// Anything that can be read as an ascending list of coefficients.
pub trait IntoCoefficients {
    /// Returns the coefficients in ascending degree order.
    fn into_coefficients(self) -> Vec<Complex64>;
}

impl IntoCoefficients for Complex64 {
    fn into_coefficients(self) -> Vec<Complex64> {
        vec![self]
    }
}

impl IntoCoefficients for f64 {
    fn into_coefficients(self) -> Vec<Complex64> {
        vec![Complex64::new(self, 0.0)]
    }
}

impl<T: Into<Complex64>> IntoCoefficients for Vec<T> {
    fn into_coefficients(self) -> Vec<Complex64> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Complex64> + Copy> IntoCoefficients for &Vec<T> {
    fn into_coefficients(self) -> Vec<Complex64> {
        self.iter().map(|&c| c.into()).collect()
    }
}

impl<T: Into<Complex64> + Copy> IntoCoefficients for &[T] {
    fn into_coefficients(self) -> Vec<Complex64> {
        self.iter().map(|&c| c.into()).collect()
    }
}

impl<T: Into<Complex64>, const N: usize> IntoCoefficients for [T; N] {
    fn into_coefficients(self) -> Vec<Complex64> {
        self.into_iter().map(Into::into).collect()
    }
}

impl IntoCoefficients for Polynomial {
    fn into_coefficients(self) -> Vec<Complex64> {
        self.into_coeffs()
    }
}

impl IntoCoefficients for &Polynomial {
    fn into_coefficients(self) -> Vec<Complex64> {
        self.coeffs().to_vec()
    }
}
