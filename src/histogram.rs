use num_traits::Float;

use alloc::{string::String, vec::Vec};
use core::{fmt::Display, ops::Range};

use crate::{
    NumericSample, Result, StatsError,
    helper::{count_to_float, round_half_up},
};

/// Bin count used when none is configured
pub const DEFAULT_BINS: usize = 10;

/// A single bin of a [`Histogram`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramBin<T> {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    /// The last bin of a histogram also includes its end.
    pub range: Range<T>,
    /// The number of values that fall within this bin's range.
    pub count: usize,
}

impl<T: Float + Display> HistogramBin<T> {
    /// Returns the display label of the bin, `"{lower} - {upper}"`, with both
    /// bounds rounded to the nearest integer
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            round_half_up(self.range.start),
            round_half_up(self.range.end)
        )
    }
}

/// Equal-width frequency distribution of a sample over `[min, max]`.
///
/// The range is split into `k` bins of width `(max - min) / k`. A value lands
/// in bin `floor((value - min) / width)`; the maximum itself would land one
/// past the end and is folded into the last bin. When every value is identical
/// the width is zero and the whole sample is counted in the first bin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram<T> {
    bins: Vec<HistogramBin<T>>,
    min: T,
    max: T,
    bin_width: T,
}

impl<T: Float> Histogram<T> {
    /// Builds a histogram with `num_bins` equal-width bins
    ///
    /// # Arguments
    ///
    /// * `sample` - The values to distribute
    /// * `num_bins` - The number of bins, must be positive
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The histogram
    ///
    /// # Errors
    ///
    /// * [`StatsError::ZeroBins`] if `num_bins` is zero
    /// * [`StatsError::EmptySample`] if the sample holds no values
    ///
    /// # Examples
    ///
    /// ```
    /// use car_market_stats::{Histogram, NumericSample};
    ///
    /// let prices = NumericSample::new([100.0, 150.0, 120.0, 130.0, 110.0, 200.0, 90.0]);
    /// let histogram = Histogram::new(&prices, 10).unwrap();
    ///
    /// assert_eq!(histogram.len(), 10);
    /// assert_eq!(histogram.total(), 7);
    /// assert_eq!(histogram.counts(), vec![2, 1, 1, 1, 0, 1, 0, 0, 0, 1]);
    /// assert_eq!(histogram.labels()[0], "90 - 101");
    /// ```
    pub fn new(sample: &NumericSample<T>, num_bins: usize) -> Result<Self> {
        if num_bins == 0 {
            return Err(StatsError::ZeroBins);
        }
        let (min, max) = sample
            .min()
            .zip(sample.max())
            .ok_or(StatsError::EmptySample)?;

        let bin_width = (max - min) / count_to_float(num_bins);
        let last = num_bins - 1;
        let bins = (0..num_bins)
            .map(|i| {
                let start = min + bin_width * count_to_float(i);
                let end = if i == last {
                    max
                } else {
                    min + bin_width * count_to_float(i + 1)
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect();

        let mut histogram = Self {
            bins,
            min,
            max,
            bin_width,
        };
        if histogram.is_degenerate() {
            tracing::warn!(
                values = sample.len(),
                "sample has zero range, counting every value in the first bin"
            );
        } else if bin_width <= T::zero() {
            tracing::warn!(
                values = sample.len(),
                "bin width underflows to zero, counting every value in the first bin"
            );
        }

        for &value in sample {
            if let Some(index) = histogram.bin_index(value) {
                histogram.bins[index].count += 1;
            }
        }
        Ok(histogram)
    }

    /// Builds a histogram with [`DEFAULT_BINS`] bins
    pub fn with_default_bins(sample: &NumericSample<T>) -> Result<Self> {
        Self::new(sample, DEFAULT_BINS)
    }

    /// Returns the index of the bin `value` belongs to
    ///
    /// # Returns
    ///
    /// * `Option<usize>` - The bin index, or `None` if `value` lies outside `[min, max]`
    pub fn bin_index(&self, value: T) -> Option<usize> {
        if !(self.min..=self.max).contains(&value) {
            return None;
        }
        let last = self.bins.len().checked_sub(1)?;
        if self.bin_width <= T::zero() {
            return Some(0);
        }

        let index = ((value - self.min) / self.bin_width).floor().to_usize();
        Some(index.map_or(last, |index| index.min(last)))
    }

    /// Returns `true` when all values were identical and the bins have zero width
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Returns the bins in ascending order
    pub fn bins(&self) -> &[HistogramBin<T>] {
        &self.bins
    }

    /// Returns the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns the count of every bin in ascending order
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Returns the total number of values counted
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Returns the smallest value of the sample
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the largest value of the sample
    pub fn max(&self) -> T {
        self.max
    }

    /// Returns the width shared by all bins
    pub fn bin_width(&self) -> T {
        self.bin_width
    }
}

impl<T: Float + Display> Histogram<T> {
    /// Returns the display label of every bin in ascending order
    pub fn labels(&self) -> Vec<String> {
        self.bins.iter().map(HistogramBin::label).collect()
    }

    /// Returns `(label, count)` pairs in ascending order, ready for a bar chart
    pub fn pairs(&self) -> Vec<(String, usize)> {
        self.bins.iter().map(|bin| (bin.label(), bin.count)).collect()
    }
}
