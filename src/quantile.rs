use num_traits::Float;

use crate::{Result, StatsError, helper::quantile_from_sorted_slice};

/// Returns the quantile `q` of a sorted slice
///
/// The rank `(n - 1) * q` is split into an integral `base` and a fractional
/// `rest`. When `rest` is zero the order statistic at `base` is returned as is,
/// otherwise the result is interpolated linearly towards the next order
/// statistic. `q = 0` therefore yields the minimum and `q = 1` the maximum.
///
/// # Arguments
///
/// * `sorted` - Values sorted in ascending order
/// * `q` - The quantile to calculate, within `[0, 1]`
///
/// # Returns
///
/// * `Result<T>` - The quantile value
///
/// # Errors
///
/// * [`StatsError::EmptySample`] if `sorted` is empty
/// * [`StatsError::QuantileOutOfRange`] if `q` is outside `[0, 1]` or `NaN`
///
/// # Examples
///
/// ```
/// use car_market_stats::quantile;
///
/// let sorted = [90.0, 100.0, 110.0, 120.0, 130.0, 150.0, 200.0];
/// assert_eq!(quantile(&sorted, 0.0).unwrap(), 90.0);
/// assert_eq!(quantile(&sorted, 0.5).unwrap(), 120.0);
/// assert_eq!(quantile(&sorted, 0.75).unwrap(), 140.0);
/// assert!(quantile(&sorted, 1.5).is_err());
/// ```
pub fn quantile<T: Float>(sorted: &[T], q: f64) -> Result<T> {
    if sorted.is_empty() {
        return Err(StatsError::EmptySample);
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(StatsError::QuantileOutOfRange(q));
    }
    debug_assert!(
        sorted.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    quantile_from_sorted_slice(sorted, q).ok_or(StatsError::QuantileOutOfRange(q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn boundaries_are_min_and_max() {
        let sorted = [-4.0, 1.5, 2.0, 9.0, 12.25];
        assert_eq!(quantile(&sorted, 0.0), Ok(-4.0));
        assert_eq!(quantile(&sorted, 1.0), Ok(12.25));
    }

    #[test]
    fn interpolates_fractional_ranks() {
        // rank (4 - 1) * 0.25 = 0.75
        let sorted = [10.0, 20.0, 30.0, 40.0];
        assert_approx_eq!(quantile(&sorted, 0.25).unwrap(), 17.5, 1e-12);
        assert_approx_eq!(quantile(&sorted, 0.75).unwrap(), 32.5, 1e-12);
    }

    #[test]
    fn exact_ranks_skip_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile(&sorted, 0.25), Ok(2.0));
        assert_eq!(quantile(&sorted, 0.5), Ok(3.0));
        assert_eq!(quantile(&sorted, 0.75), Ok(4.0));
    }

    #[test]
    fn single_value_sample() {
        let sorted = [7.0_f32];
        for q in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(quantile(&sorted, q), Ok(7.0));
        }
    }

    #[test]
    fn is_monotonic_in_q() {
        let sorted = [1.0, 1.0, 2.0, 3.5, 8.0, 8.0, 13.0, 21.0, 34.0];
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=100 {
            let q = f64::from(step) / 100.0;
            let value = quantile(&sorted, q).unwrap();
            assert!(value >= previous, "q = {q}: {value} < {previous}");
            previous = value;
        }
    }

    #[test]
    fn rejects_empty_sample() {
        let sorted: [f64; 0] = [];
        assert_eq!(quantile(&sorted, 0.5), Err(StatsError::EmptySample));
    }

    #[test]
    fn rejects_out_of_range_quantiles() {
        let sorted = [1.0, 2.0];
        assert_eq!(
            quantile(&sorted, -0.1),
            Err(StatsError::QuantileOutOfRange(-0.1))
        );
        assert_eq!(
            quantile(&sorted, 1.01),
            Err(StatsError::QuantileOutOfRange(1.01))
        );
        assert!(matches!(
            quantile(&sorted, f64::NAN),
            Err(StatsError::QuantileOutOfRange(_))
        ));
    }
}
