//! Error types for normalization operations.

use std::fmt;

/// Error type for normalization operations.
///
/// Only shape problems are reported here. Numeric edge cases such as a
/// constant column or the logarithm of a non-positive value propagate as
/// NaN or infinity in the output instead.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizationError {
    /// Shape mismatch between expected and actual matrix dimensions.
    InvalidShape { expected: String, got: String },
    /// Empty data provided where at least one row and one column is required.
    EmptyData(String),
    /// A per-column statistic does not have one entry per matrix column.
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// Invalid parameter value.
    InvalidParameter(String),
}

impl fmt::Display for NormalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationError::InvalidShape { expected, got } => {
                write!(f, "Invalid shape: expected {}, got {}", expected, got)
            }
            NormalizationError::EmptyData(msg) => {
                write!(f, "Empty data: {}", msg)
            }
            NormalizationError::FeatureMismatch {
                expected_features,
                got_features,
            } => {
                write!(
                    f,
                    "Feature mismatch: expected {} features, got {}",
                    expected_features, got_features
                )
            }
            NormalizationError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
        }
    }
}

impl std::error::Error for NormalizationError {}
