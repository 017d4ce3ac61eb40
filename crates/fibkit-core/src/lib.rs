//! # fibkit-core
//!
//! Exact Fibonacci numbers F(n) for any `u64` index, with F(0) = 0 and
//! F(1) = 1. Four strategies are provided (linear iteration and 2x2 matrix
//! exponentiation, each over `u64` and over `BigUint`) plus a dispatcher
//! that picks one of them from the magnitude of `n`.

pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod iterative;
pub mod matrix;
pub(crate) mod matrix_types;
pub mod numeric;
pub mod thresholds;

#[cfg(feature = "gmp")]
pub mod numeric_gmp;

// Re-exports
pub use constants::{DEFAULT_FIXED_WIDTH_THRESHOLD, DEFAULT_MATRIX_BIG_THRESHOLD, MAX_FIB_U64};
pub use dispatcher::{Dispatcher, Strategy};
pub use error::FibError;
pub use iterative::{fibonacci_iterative_big, fibonacci_iterative_fixed};
pub use matrix::{fibonacci_matrix_big, fibonacci_matrix_fixed};
pub use numeric::FibNum;
pub use thresholds::Thresholds;

use num_bigint::BigUint;

/// Compute F(n), choosing the strategy from the magnitude of `n`.
///
/// This is the primary entry point. It uses the default thresholds; build a
/// [`Dispatcher`] to use different ones.
///
/// # Example
/// ```
/// assert_eq!(fibkit_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibkit_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    Dispatcher::new().compute(n)
}
