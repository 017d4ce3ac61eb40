//! Magnitude-based strategy selection.

use std::fmt;

use num_bigint::BigUint;
use tracing::trace;

use crate::error::FibError;
use crate::iterative::fibonacci_iterative_big;
use crate::matrix::{fibonacci_matrix_big, fibonacci_matrix_fixed};
use crate::thresholds::Thresholds;

/// The strategies the dispatcher chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `u64` matrix exponentiation, widened to `BigUint`.
    MatrixFixed,
    /// `BigUint` linear iteration.
    IterativeBig,
    /// `BigUint` matrix exponentiation.
    MatrixBig,
}

impl Strategy {
    /// All strategies, in dispatch order.
    pub const ALL: [Strategy; 3] = [Self::MatrixFixed, Self::IterativeBig, Self::MatrixBig];

    /// Stable display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MatrixFixed => "MatrixFixed",
            Self::IterativeBig => "IterativeBig",
            Self::MatrixBig => "MatrixBig",
        }
    }

    /// Run this strategy for `n`.
    ///
    /// `MatrixFixed` wraps for `n > MAX_FIB_U64`; the dispatcher never
    /// sends it such an index.
    #[must_use]
    pub fn compute(self, n: u64) -> BigUint {
        match self {
            Self::MatrixFixed => BigUint::from(fibonacci_matrix_fixed(n)),
            Self::IterativeBig => fibonacci_iterative_big(n),
            Self::MatrixBig => fibonacci_matrix_big(n),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes F(n) with the strategy suited to the magnitude of `n`.
///
/// Holds no state besides its thresholds, so one instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    thresholds: Thresholds,
}

impl Dispatcher {
    /// Create a dispatcher with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher with custom thresholds, validating them first.
    pub fn with_thresholds(thresholds: Thresholds) -> Result<Self, FibError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// The thresholds in use.
    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Pick the strategy for index `n`.
    #[must_use]
    pub fn select(&self, n: u64) -> Strategy {
        if n < self.thresholds.fixed_width {
            Strategy::MatrixFixed
        } else if n < self.thresholds.matrix_big {
            Strategy::IterativeBig
        } else {
            Strategy::MatrixBig
        }
    }

    /// Compute F(n).
    #[must_use]
    pub fn compute(&self, n: u64) -> BigUint {
        let strategy = self.select(n);
        trace!(n, strategy = %strategy, "Dispatching");
        strategy.compute(n)
    }
}
