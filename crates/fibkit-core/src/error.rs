//! Error type for threshold configuration.
//!
//! The computations themselves are total and never fail.

/// Error type for Fibonacci configuration.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// Thresholds are out of range or out of order.
    #[error("configuration error: {0}")]
    Config(String),

    /// Threshold data could not be parsed or serialized.
    #[error("invalid threshold data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_error_display() {
        let err = FibError::Config("test".into());
        assert_eq!(err.to_string(), "configuration error: test");
    }

    #[test]
    fn parse_error_converts() {
        let json_err = serde_json::from_str::<u64>("nope").unwrap_err();
        let err: FibError = json_err.into();
        assert!(matches!(err, FibError::Parse(_)));
        assert!(err.to_string().starts_with("invalid threshold data"));
    }
}
