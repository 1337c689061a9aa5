use alloc::string::String;

/// Errors raised when a computation receives input it cannot summarize.
///
/// Degenerate but valid data (a constant sample, a regression over a vertical
/// point cloud) is not an error: those cases produce defined, if uninteresting,
/// numeric output. Only inputs the formulas cannot be evaluated on end up here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatsError {
    /// The sample holds no finite values
    #[error("sample is empty")]
    EmptySample,

    /// The requested quantile is not within `[0, 1]`
    #[error("quantile {0} is outside [0, 1]")]
    QuantileOutOfRange(f64),

    /// A histogram was requested with zero bins
    #[error("histogram bin count must be positive")]
    ZeroBins,

    /// The two halves of a paired sample differ in length
    #[error("paired sample length mismatch: x has {x} values, y has {y}")]
    LengthMismatch {
        /// Number of `x` values
        x: usize,
        /// Number of `y` values
        y: usize,
    },

    /// Not enough observations to evaluate the formula
    #[error("at least {required} values are required, got {actual}")]
    InsufficientData {
        /// Minimum number of observations
        required: usize,
        /// Observations supplied
        actual: usize,
    },

    /// One of the regression variables has zero variance
    #[error("regression variable has zero variance")]
    ZeroVariance,

    /// The dataset has no column with this name
    #[error("column `{0}` not found in dataset")]
    MissingColumn(String),
}

/// Result type used throughout the crate
pub type Result<T, E = StatsError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_values() {
        assert_eq!(
            StatsError::QuantileOutOfRange(1.5).to_string(),
            "quantile 1.5 is outside [0, 1]"
        );
        assert_eq!(
            StatsError::LengthMismatch { x: 3, y: 4 }.to_string(),
            "paired sample length mismatch: x has 3 values, y has 4"
        );
        assert_eq!(
            StatsError::MissingColumn("Price".into()).to_string(),
            "column `Price` not found in dataset"
        );
    }
}
