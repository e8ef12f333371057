//! Rational functions P(x)/Q(x) with complex polynomial parts.
//!
//! This crate provides:
//! - [`RationalFunction`] type for representing P(x)/Q(x)
//! - Arithmetic operations (add, sub, mul, div, pow)
//! - Evaluation with pole detection and the quotient-rule derivative
//! - Equality by cross-multiplication, so `k·P / k·Q == P / Q`
//!
//! Representations are not canonical. Arithmetic results cancel a
//! common factor only when the GCD verifiably divides both parts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod arithmetic;
pub mod error;
mod rational_func;

#[cfg(test)]
mod proptests;

pub use error::{RationalError, Result};
pub use rational_func::RationalFunction;
