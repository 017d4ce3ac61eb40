//! Dispatch thresholds and their (de)serialization.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{DEFAULT_FIXED_WIDTH_THRESHOLD, DEFAULT_MATRIX_BIG_THRESHOLD, MAX_FIB_U64};
use crate::error::FibError;

/// Index boundaries between the dispatcher's strategies.
///
/// `n < fixed_width` uses `u64` matrix exponentiation, `n < matrix_big`
/// iterates over `BigUint`, anything larger uses `BigUint` matrix
/// exponentiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Exclusive upper bound of the fixed-width range.
    pub fixed_width: u64,
    /// First index computed with `BigUint` matrix exponentiation.
    pub matrix_big: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            fixed_width: DEFAULT_FIXED_WIDTH_THRESHOLD,
            matrix_big: DEFAULT_MATRIX_BIG_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Check that the fixed-width range cannot overflow and that the
    /// boundaries are ordered.
    pub fn validate(&self) -> Result<(), FibError> {
        if self.fixed_width > MAX_FIB_U64 + 1 {
            return Err(FibError::Config(format!(
                "fixed-width threshold {} exceeds {}: F({}) does not fit in u64",
                self.fixed_width,
                MAX_FIB_U64 + 1,
                MAX_FIB_U64 + 1,
            )));
        }
        if self.fixed_width > self.matrix_big {
            return Err(FibError::Config(format!(
                "fixed-width threshold {} is above matrix threshold {}",
                self.fixed_width, self.matrix_big,
            )));
        }
        Ok(())
    }

    /// Parse and validate thresholds from JSON. Missing fields take their
    /// default values.
    pub fn from_json(s: &str) -> Result<Self, FibError> {
        let thresholds: Self = serde_json::from_str(s)?;
        if let Err(e) = thresholds.validate() {
            warn!(error = %e, "Rejecting threshold configuration");
            return Err(e);
        }
        debug!(
            fixed_width = thresholds.fixed_width,
            matrix_big = thresholds.matrix_big,
            "Loaded thresholds"
        );
        Ok(thresholds)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, FibError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
