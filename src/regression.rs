use num_traits::Float;

use alloc::vec::Vec;

use crate::{Kbn, Result, StatsError, helper::count_to_float};

/// A simple linear regression `y = slope * x + intercept` fitted by ordinary
/// least squares, together with Pearson's correlation coefficient.
///
/// The line comes from the sums `Σx`, `Σy`, `Σxy` and `Σx²`, gathered in a
/// single pass with Kahan-Babuska-Neumaier summation:
///
/// - `slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)`
/// - `intercept = (Σy − slope·Σx) / n`
///
/// `r` is taken from deviations about the means in a second pass,
/// `r = Σ(x−x̄)(y−ȳ) / sqrt(Σ(x−x̄)² · Σ(y−ȳ)²)`, so that values sitting on a
/// large offset (production months, odometer readings) keep their precision.
///
/// Zero variance is a degenerate but valid input. A constant `x` leaves the
/// line undefined, so slope and intercept are `NaN`. A constant `y` fits the
/// horizontal line through it. In both cases `r` is `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRegression<T> {
    /// Slope of the least-squares line
    pub slope: T,
    /// Intercept of the least-squares line
    pub intercept: T,
    /// Pearson's correlation coefficient, within `[-1, 1]` or `NaN`
    pub r: T,
    /// Number of paired observations
    pub count: usize,
}

impl<T> LinearRegression<T>
where
    T: Default + Float,
{
    /// Fits the least-squares line through the paired sample `(x[i], y[i])`
    ///
    /// # Arguments
    ///
    /// * `x` - The explanatory values
    /// * `y` - The response values, paired with `x` by position
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The fitted regression
    ///
    /// # Errors
    ///
    /// * [`StatsError::LengthMismatch`] if `x` and `y` differ in length
    /// * [`StatsError::InsufficientData`] if fewer than two pairs are supplied
    ///
    /// # Examples
    ///
    /// ```
    /// use car_market_stats::LinearRegression;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let mileage: [f64; 4] = [10.0, 20.0, 30.0, 40.0];
    /// let price = [200.0, 180.0, 160.0, 140.0];
    /// let fit = LinearRegression::fit(&mileage, &price).unwrap();
    ///
    /// assert_approx_eq!(fit.slope, -2.0, 1e-9);
    /// assert_approx_eq!(fit.intercept, 220.0, 1e-9);
    /// assert_approx_eq!(fit.r, -1.0, 1e-9);
    /// ```
    pub fn fit(x: &[T], y: &[T]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(StatsError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        let count = x.len();
        if count < 2 {
            return Err(StatsError::InsufficientData {
                required: 2,
                actual: count,
            });
        }

        let (x0, y0) = (x[0], y[0]);
        let mut x_varies = false;
        let mut y_varies = false;
        let mut sum: (Kbn<T>, Kbn<T>) = Default::default();
        let mut sum_sq_x = Kbn::<T>::default();
        let mut sum_prod = Kbn::<T>::default();

        for (&xi, &yi) in x.iter().zip(y) {
            x_varies |= xi != x0;
            y_varies |= yi != y0;

            sum.0 += xi;
            sum.1 += yi;
            sum_sq_x += xi * xi;
            sum_prod += xi * yi;
        }

        let n = count_to_float::<T>(count);
        let (sum_x, sum_y) = (sum.0.total(), sum.1.total());

        let (slope, intercept) = match (x_varies, y_varies) {
            (false, _) => (T::nan(), T::nan()),
            (true, false) => (T::zero(), y0),
            (true, true) => {
                let slope = (n * sum_prod.total() - sum_x * sum_y)
                    / (n * sum_sq_x.total() - sum_x * sum_x);
                (slope, (sum_y - slope * sum_x) / n)
            }
        };

        let r = if x_varies && y_varies {
            pearson_r(x, y, sum_x / n, sum_y / n)
        } else {
            T::nan()
        };

        let fit = Self {
            slope,
            intercept,
            r,
            count,
        };
        if fit.is_degenerate() {
            tracing::warn!(count, x_varies, y_varies, "regression over zero-variance data");
        } else {
            tracing::debug!(count, "fitted least-squares line");
        }
        Ok(fit)
    }

    /// Returns the fitted value `slope * x + intercept`
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Returns the point `(x, slope * x + intercept)` for every `x`, in order
    ///
    /// # Examples
    ///
    /// ```
    /// use car_market_stats::LinearRegression;
    ///
    /// let fit = LinearRegression::fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
    /// assert_eq!(fit.fitted_line(&[2.0, 0.0]), vec![(2.0, 5.0), (0.0, 1.0)]);
    /// ```
    pub fn fitted_line(&self, xs: &[T]) -> Vec<(T, T)> {
        xs.iter().map(|&x| (x, self.predict(x))).collect()
    }

    /// Returns the coefficient of determination `r²`
    pub fn r_squared(&self) -> T {
        self.r * self.r
    }

    /// Returns `true` if zero variance left the line or `r` undefined
    pub fn is_degenerate(&self) -> bool {
        !self.slope.is_finite() || !self.intercept.is_finite() || self.r.is_nan()
    }

    /// Rejects degenerate fits
    ///
    /// # Errors
    ///
    /// * [`StatsError::ZeroVariance`] if [`Self::is_degenerate`] holds
    pub fn ensure_finite(self) -> Result<Self> {
        if self.is_degenerate() {
            Err(StatsError::ZeroVariance)
        } else {
            Ok(self)
        }
    }
}

/// Pearson's `r` from deviations about the means `mean_x` and `mean_y`
fn pearson_r<T: Default + Float>(x: &[T], y: &[T], mean_x: T, mean_y: T) -> T {
    let mut ss_x = Kbn::<T>::default();
    let mut ss_y = Kbn::<T>::default();
    let mut ss_xy = Kbn::<T>::default();

    for (&xi, &yi) in x.iter().zip(y) {
        let (dx, dy) = (xi - mean_x, yi - mean_y);
        ss_x += dx * dx;
        ss_y += dy * dy;
        ss_xy += dx * dy;
    }

    let (ss_x, ss_y) = (ss_x.total(), ss_y.total());
    if ss_x > T::zero() && ss_y > T::zero() {
        (ss_xy.total() / (ss_x * ss_y).sqrt())
            .max(-T::one())
            .min(T::one())
    } else {
        T::nan()
    }
}
