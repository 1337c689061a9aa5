use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

use alloc::vec::Vec;

/// Returns the quantile from a sorted slice by linear interpolation between
/// the two order statistics around rank `(n - 1) * q`
///
/// # Arguments
///
/// * `ss` - The sorted slice
/// * `q` - The quantile to calculate, within `[0, 1]`
///
/// # Returns
///
/// * `Option<T>` - The quantile, or `None` if the slice is empty
#[inline]
pub fn quantile_from_sorted_slice<T: Float>(ss: &[T], q: f64) -> Option<T> {
    let last = ss.len().checked_sub(1)?;
    let pos = q * last as f64;
    let base = Float::floor(pos) as usize;
    let rest = T::from(pos - base as f64)?;

    let lower_value = *ss.get(base)?;
    if rest.is_zero() {
        return Some(lower_value);
    }

    let upper_value = *ss.get(base + 1)?;
    Some(lower_value + rest * (upper_value - lower_value))
}

/// Rounds to the nearest integer, halves going towards positive infinity
///
/// Negative zero is normalized so that labels never render as `-0`.
#[inline]
pub fn round_half_up<T: Float>(value: T) -> T {
    let half = T::one() / (T::one() + T::one());
    (value + half).floor() + T::zero()
}

/// Converts a count into the float type
///
/// Exact as long as the count fits the mantissa, which sample sizes and bin
/// counts always do in practice.
#[inline]
pub fn count_to_float<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::max_value)
}

/// Returns the longest leading `[+-]digits[.digits][e[+-]digits]` run of `cell`
///
/// At least one mantissa digit is required, otherwise the result is empty.
/// An exponent marker without digits after it is left out.
pub fn numeric_prefix(cell: &str) -> &str {
    let bytes = cell.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }
    &cell[..end]
}

/// Copies the values and sorts the copy ascending
pub fn sorted_copy<T: PrimitiveFloat>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by_key(|v| OrderedFloat(*v));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates_between_neighbours() {
        let ss = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile_from_sorted_slice(&ss, 0.0), Some(10.0));
        assert_eq!(quantile_from_sorted_slice(&ss, 0.5), Some(25.0));
        assert_eq!(quantile_from_sorted_slice(&ss, 1.0), Some(40.0));
    }

    #[test]
    fn quantile_of_empty_slice_is_none() {
        let ss: [f64; 0] = [];
        assert_eq!(quantile_from_sorted_slice(&ss, 0.5), None);
    }

    #[test]
    fn round_half_up_matches_display_rounding() {
        assert_eq!(round_half_up(2.5_f64), 3.0);
        assert_eq!(round_half_up(-2.5_f64), -2.0);
        assert_eq!(round_half_up(101.49_f64), 101.0);
        assert!(round_half_up(-0.2_f64).is_sign_positive());
    }

    #[test]
    fn numeric_prefix_reads_leading_number() {
        assert_eq!(numeric_prefix("3.5萬"), "3.5");
        assert_eq!(numeric_prefix("12abc"), "12");
        assert_eq!(numeric_prefix("-7.25e3 km"), "-7.25e3");
        assert_eq!(numeric_prefix("1e"), "1");
        assert_eq!(numeric_prefix("5."), "5");
        assert_eq!(numeric_prefix(".5"), ".5");
        assert_eq!(numeric_prefix("abc"), "");
        assert_eq!(numeric_prefix("-"), "");
        assert_eq!(numeric_prefix("."), "");
        assert_eq!(numeric_prefix(""), "");
    }

    #[test]
    fn sorted_copy_leaves_input_untouched() {
        let values = [3.0, -1.0, 2.0];
        assert_eq!(sorted_copy(&values), vec![-1.0, 2.0, 3.0]);
        assert_eq!(values, [3.0, -1.0, 2.0]);
    }
}
