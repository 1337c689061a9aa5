use num_traits::Float;
use ordered_float::PrimitiveFloat;

use alloc::vec::Vec;
use core::slice::Iter;

use crate::{
    Result,
    helper::{numeric_prefix, sorted_copy},
    quantile,
};

/// An ordered sequence of finite values taken from one raw data column.
///
/// Values keep the order in which they appeared in the source column. Anything
/// that is not a finite number (missing cells, text, `NaN`, infinities) is
/// discarded on construction, so every statistic computed from a
/// `NumericSample` can rely on finite input.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericSample<T> {
    values: Vec<T>,
}

impl<T: Float> NumericSample<T> {
    /// Builds a sample from already numeric values, dropping non-finite ones
    ///
    /// # Examples
    ///
    /// ```
    /// use car_market_stats::NumericSample;
    ///
    /// let sample = NumericSample::new([1.0, f64::NAN, 3.0, f64::INFINITY]);
    /// assert_eq!(sample.as_slice(), &[1.0, 3.0]);
    /// ```
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            values: values.into_iter().filter(|v| v.is_finite()).collect(),
        }
    }

    /// Coerces raw cells into a sample
    ///
    /// Leading whitespace is skipped and the longest decimal number at the
    /// start of the cell is read, so `"3.5萬"` gives `3.5` and `"12abc"` gives
    /// `12`. Cells without a leading number, or whose number is not finite,
    /// are discarded.
    ///
    /// # Arguments
    ///
    /// * `cells` - The raw cells of a column, in source order
    ///
    /// # Returns
    ///
    /// * `Self` - The cleaned sample
    ///
    /// # Examples
    ///
    /// ```
    /// use car_market_stats::NumericSample;
    ///
    /// let sample = NumericSample::<f64>::parse(["72.5", "", "n/a", " 64 ", "NaN", "3.5萬"]);
    /// assert_eq!(sample.as_slice(), &[72.5, 64.0, 3.5]);
    /// ```
    pub fn parse<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut discarded = 0usize;
        let values: Vec<T> = cells
            .into_iter()
            .filter_map(|cell| {
                let parsed = Some(numeric_prefix(cell.as_ref().trim_start()))
                    .filter(|digits| !digits.is_empty())
                    .and_then(|digits| T::from_str_radix(digits, 10).ok())
                    .filter(|v| v.is_finite());
                if parsed.is_none() {
                    discarded += 1;
                }
                parsed
            })
            .collect();

        tracing::debug!(
            kept = values.len(),
            discarded,
            "coerced raw column into numeric sample"
        );
        Self { values }
    }

    /// Returns the number of values in the sample
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sample holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the values in source order
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns an iterator over the values in source order
    pub fn iter(&self) -> Iter<'_, T> {
        self.values.iter()
    }

    /// Returns the smallest value, or `None` if the sample is empty
    pub fn min(&self) -> Option<T> {
        self.values.iter().copied().reduce(T::min)
    }

    /// Returns the largest value, or `None` if the sample is empty
    pub fn max(&self) -> Option<T> {
        self.values.iter().copied().reduce(T::max)
    }

    /// Consumes the sample, returning the values in source order
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Float + PrimitiveFloat> NumericSample<T> {
    /// Returns a sorted copy of the sample, leaving `self` untouched
    pub fn sorted(&self) -> SortedSample<T> {
        SortedSample::from(self)
    }
}

impl<T: Float> FromIterator<T> for NumericSample<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, T> IntoIterator for &'a NumericSample<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// A [`NumericSample`] copied and sorted ascending.
///
/// Only ever produced from a sample, so the ascending-order and finiteness
/// invariants hold by construction.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortedSample<T> {
    values: Vec<T>,
}

impl<T: PrimitiveFloat> From<&NumericSample<T>> for SortedSample<T> {
    fn from(sample: &NumericSample<T>) -> Self {
        Self {
            values: sorted_copy(&sample.values),
        }
    }
}

impl<T: Float> SortedSample<T> {
    /// Returns the interpolated quantile `q` of the sample
    ///
    /// # Arguments
    ///
    /// * `q` - The quantile to calculate, within `[0, 1]`
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The quantile, or an error if the sample is empty or `q` is out of range
    ///
    /// # Examples
    ///
    /// ```
    /// use car_market_stats::NumericSample;
    ///
    /// let sorted = NumericSample::new([40.0, 10.0, 30.0, 20.0]).sorted();
    /// assert_eq!(sorted.quantile(0.5).unwrap(), 25.0);
    /// ```
    pub fn quantile(&self, q: f64) -> Result<T> {
        quantile(&self.values, q)
    }

    /// Returns the number of values in the sample
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sample holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the values in ascending order
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns the smallest value, or `None` if the sample is empty
    pub fn min(&self) -> Option<T> {
        self.values.first().copied()
    }

    /// Returns the largest value, or `None` if the sample is empty
    pub fn max(&self) -> Option<T> {
        self.values.last().copied()
    }

    /// Consumes the sample, returning the values in ascending order
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}
