use num_traits::Float;
use ordered_float::PrimitiveFloat;

use crate::{NumericSample, Result, SortedSample};

/// Quantiles evaluated for the summary, in field order
const QUARTILES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Five-number summary of a sample, the annotations of a box plot.
///
/// All five values come from the same sorted copy through the interpolating
/// quantile estimator, so `min <= q1 <= median <= q3 <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FiveNumberSummary<T> {
    /// Smallest value
    pub min: T,
    /// First quartile
    pub q1: T,
    /// Median
    pub median: T,
    /// Third quartile
    pub q3: T,
    /// Largest value
    pub max: T,
}

impl<T: Float + PrimitiveFloat> FiveNumberSummary<T> {
    /// Summarizes a sample without modifying it
    ///
    /// # Arguments
    ///
    /// * `sample` - The values to summarize, in any order
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The summary, or [`crate::StatsError::EmptySample`] if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use car_market_stats::{FiveNumberSummary, NumericSample};
    ///
    /// let prices = NumericSample::new([100.0, 150.0, 120.0, 130.0, 110.0, 200.0, 90.0]);
    /// let summary = FiveNumberSummary::new(&prices).unwrap();
    ///
    /// assert_eq!(summary.as_array(), [90.0, 105.0, 120.0, 140.0, 200.0]);
    /// ```
    pub fn new(sample: &NumericSample<T>) -> Result<Self> {
        Self::from_sorted(&sample.sorted())
    }
}

impl<T: Float> FiveNumberSummary<T> {
    /// Summarizes an already sorted sample
    pub fn from_sorted(sorted: &SortedSample<T>) -> Result<Self> {
        let [min, q1, median, q3, max] = QUARTILES;
        Ok(Self {
            min: sorted.quantile(min)?,
            q1: sorted.quantile(q1)?,
            median: sorted.quantile(median)?,
            q3: sorted.quantile(q3)?,
            max: sorted.quantile(max)?,
        })
    }

    /// Returns the interquartile range `q3 - q1`
    pub fn iqr(&self) -> T {
        self.q3 - self.q1
    }

    /// Returns the range `max - min`
    pub fn range(&self) -> T {
        self.max - self.min
    }

    /// Returns `[min, q1, median, q3, max]`
    pub fn as_array(&self) -> [T; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}
