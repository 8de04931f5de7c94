//! Named selection of a normalization transform.
//!
//! Lets a preprocessing configuration pick the transform by name:
//!
//! ```
//! use column_normalizer::backend::{CpuBackend, Matrix};
//! use column_normalizer::normalization::{normalize, NormalizationMethod};
//!
//! let method: NormalizationMethod = "min_max".parse().unwrap();
//! let m = Matrix::<CpuBackend>::from_rows(&[vec![2.0], vec![4.0]]).unwrap();
//! assert_eq!(normalize(&m, method).unwrap().to_vec(), vec![0.0, 1.0]);
//! ```

use super::{
    normalize_with_log_scaling, normalize_with_min_max, normalize_with_robust_scaling,
    normalize_with_z_score,
};
use crate::backend::{Backend, Matrix};
use crate::error::NormalizationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the column normalization transforms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMethod {
    /// Zero mean, unit population standard deviation.
    #[default]
    ZScore,
    /// Linear rescaling to [0, 1].
    MinMax,
    /// Element-wise base-10 logarithm.
    LogScaling,
    /// Median centering, IQR scaling.
    RobustScaling,
}

impl NormalizationMethod {
    /// Every method, in declaration order.
    pub const ALL: [NormalizationMethod; 4] = [
        NormalizationMethod::ZScore,
        NormalizationMethod::MinMax,
        NormalizationMethod::LogScaling,
        NormalizationMethod::RobustScaling,
    ];

    /// The snake_case name used by `Display`, `FromStr` and serde.
    pub fn name(self) -> &'static str {
        match self {
            NormalizationMethod::ZScore => "z_score",
            NormalizationMethod::MinMax => "min_max",
            NormalizationMethod::LogScaling => "log_scaling",
            NormalizationMethod::RobustScaling => "robust_scaling",
        }
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormalizationMethod {
    type Err = NormalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| {
                NormalizationError::InvalidParameter(format!(
                    "Unknown normalization method '{}'",
                    s
                ))
            })
    }
}

/// Normalizes `matrix` with its own statistics using `method`.
pub fn normalize<B: Backend>(
    matrix: &Matrix<B>,
    method: NormalizationMethod,
) -> Result<Matrix<B>, NormalizationError> {
    match method {
        NormalizationMethod::ZScore => normalize_with_z_score(matrix),
        NormalizationMethod::MinMax => normalize_with_min_max(matrix),
        NormalizationMethod::LogScaling => normalize_with_log_scaling(matrix),
        NormalizationMethod::RobustScaling => normalize_with_robust_scaling(matrix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_name_round_trip() {
        for method in NormalizationMethod::ALL {
            assert_eq!(method.to_string().parse::<NormalizationMethod>(), Ok(method));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            "l2".parse::<NormalizationMethod>(),
            Err(NormalizationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&NormalizationMethod::RobustScaling).unwrap();
        assert_eq!(json, "\"robust_scaling\"");

        let method: NormalizationMethod = serde_json::from_str("\"log_scaling\"").unwrap();
        assert_eq!(method, NormalizationMethod::LogScaling);
    }

    #[test]
    fn test_normalize_dispatches() {
        let data = Matrix::<CpuBackend>::new(vec![1.0, 10.0, 100.0], 3, 1).unwrap();

        let minmax = normalize(&data, NormalizationMethod::MinMax).unwrap();
        assert_eq!(minmax.to_vec(), normalize_with_min_max(&data).unwrap().to_vec());

        let log = normalize(&data, NormalizationMethod::LogScaling).unwrap();
        assert_eq!(log.to_vec(), vec![0.0, 1.0, 2.0]);

        let robust = normalize(&data, NormalizationMethod::RobustScaling).unwrap();
        assert_eq!(robust.get(1, 0), Some(0.0));

        let zscore = normalize(&data, NormalizationMethod::default()).unwrap();
        assert_eq!(zscore.to_vec(), normalize_with_z_score(&data).unwrap().to_vec());
    }
}
