//! Error types for the forecasting pipeline
//!
//! Failures here are soft by policy: the public [`crate::trainer::train`]
//! entry point maps every error to `None` so callers degrade to "no forecast
//! available" instead of aborting the analysis run. The error type is still
//! exported for callers using the fallible variants directly.
//!
//! Variants carry only `Copy` data and `&'static str` reasons so errors stay
//! cheap to return and compare.

use thiserror_no_std::Error;

/// Result type for forecasting operations
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Forecasting errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastError {
    /// Not enough historical records to fit a trend
    #[error("Insufficient data: need {required} records, have {available}")]
    InsufficientData {
        /// Minimum number of records needed
        required: usize,
        /// Actual number of records available
        available: usize,
    },

    /// The numeric fit failed internally (non-finite loss, degenerate batch)
    #[error("Numeric fit failure: {reason}")]
    NumericFailure {
        /// What went wrong, for the degradation log line
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ForecastError::InsufficientData {
            required: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: need 2 records, have 1"
        );
    }
}
