//! Polynomial algorithms.
//!
//! This module contains:
//! - Division with remainder and the Euclidean GCD
//! - Companion-matrix root finding
//! - Laguerre root finding with deflation

pub mod companion;
pub mod gcd;
pub mod laguerre;
