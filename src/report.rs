use num_traits::Float;
use ordered_float::PrimitiveFloat;

use alloc::vec::Vec;

use crate::{
    AnalysisConfig, Dataset, FiveNumberSummary, Histogram, LinearRegression, ModelComparison,
    NumericSample, Result, SortedSample, StatsError,
};

/// Data behind a box plot: the five-number summary and the sorted sample it
/// was drawn from, for displaying raw points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxPlot<T> {
    /// Box and whisker positions
    pub summary: FiveNumberSummary<T>,
    /// The sample in ascending order
    pub sorted: SortedSample<T>,
}

impl<T: Float + PrimitiveFloat> BoxPlot<T> {
    /// Sorts a copy of `sample` and summarizes it
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptySample`] if the sample is empty
    pub fn new(sample: &NumericSample<T>) -> Result<Self> {
        let sorted = sample.sorted();
        let summary = FiveNumberSummary::from_sorted(&sorted)?;
        Ok(Self { summary, sorted })
    }
}

/// Data behind a scatter plot with its regression line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegressionChart<T> {
    /// The paired sample as `(x, y)` points, in source order
    pub points: Vec<(T, T)>,
    /// The least-squares fit of `y` on `x`
    pub regression: LinearRegression<T>,
    /// `(x, slope * x + intercept)` for every `x` of the sample
    pub line: Vec<(T, T)>,
}

impl<T: Default + Float> RegressionChart<T> {
    /// Fits `y` on `x` and lays out the scatter points and the fitted line
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`LinearRegression::fit`].
    pub fn new(x: &NumericSample<T>, y: &NumericSample<T>) -> Result<Self> {
        let regression = LinearRegression::fit(x.as_slice(), y.as_slice())?;
        let points = x.iter().copied().zip(y.iter().copied()).collect();
        let line = regression.fitted_line(x.as_slice());
        Ok(Self {
            points,
            regression,
            line,
        })
    }
}

/// Everything the rendering layer needs for the six listing charts.
///
/// Each chart is computed independently. A chart whose input is invalid
/// carries the error instead of its data, so the remaining charts can still
/// be drawn.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketReport<T> {
    /// Price histogram
    pub price_histogram: Result<Histogram<T>>,
    /// Price box plot
    pub price_box_plot: Result<BoxPlot<T>>,
    /// Price regressed on mileage
    pub price_vs_mileage: Result<RegressionChart<T>>,
    /// Price regressed on production month
    pub price_vs_production_month: Result<RegressionChart<T>>,
    /// Reference metrics of the prediction models
    pub model_comparison: ModelComparison,
}

impl<T> MarketReport<T> {
    /// Returns the name and error of every chart that could not be computed
    pub fn failures(&self) -> Vec<(&'static str, &StatsError)> {
        [
            ("price_histogram", self.price_histogram.as_ref().err()),
            ("price_box_plot", self.price_box_plot.as_ref().err()),
            ("price_vs_mileage", self.price_vs_mileage.as_ref().err()),
            (
                "price_vs_production_month",
                self.price_vs_production_month.as_ref().err(),
            ),
        ]
        .into_iter()
        .filter_map(|(chart, error)| error.map(|error| (chart, error)))
        .collect()
    }
}

/// Computes every chart of the listing report from a dataset snapshot
///
/// The price, mileage and production month columns are each coerced on their
/// own. Price feeds the histogram and the box plot; mileage and production
/// month are each paired with price by position for the two regressions.
///
/// # Arguments
///
/// * `dataset` - The parsed listings
/// * `config` - Column names, bin count and model table
///
/// # Returns
///
/// * `Result<MarketReport<T>>` - The report, with per-chart results
///
/// # Errors
///
/// * [`StatsError::MissingColumn`] if a configured column is absent
///
/// # Examples
///
/// ```
/// use car_market_stats::{AnalysisConfig, Dataset, analyze};
///
/// let dataset = Dataset::from_columns([
///     ("Price", vec!["200", "180", "160", "140"]),
///     ("Mileage", vec!["10", "20", "30", "40"]),
///     ("ProductionMonth", vec!["201901", "201807", "201702", "201511"]),
/// ]);
/// let report = analyze::<f64>(&dataset, &AnalysisConfig::default()).unwrap();
///
/// let mileage = report.price_vs_mileage.unwrap();
/// assert!((mileage.regression.slope + 2.0).abs() < 1e-9);
/// assert_eq!(report.price_histogram.unwrap().total(), 4);
/// ```
pub fn analyze<T>(dataset: &Dataset, config: &AnalysisConfig) -> Result<MarketReport<T>>
where
    T: Default + Float + PrimitiveFloat,
{
    let price = dataset.numeric_column::<T>(config.price_column())?;
    let mileage = dataset.numeric_column::<T>(config.mileage_column())?;
    let production_month = dataset.numeric_column::<T>(config.production_month_column())?;

    let report = MarketReport {
        price_histogram: Histogram::new(&price, config.bins()),
        price_box_plot: BoxPlot::new(&price),
        price_vs_mileage: RegressionChart::new(&mileage, &price),
        price_vs_production_month: RegressionChart::new(&production_month, &price),
        model_comparison: config.model_comparison().clone(),
    };

    for (chart, error) in report.failures() {
        tracing::warn!(chart, %error, "chart skipped");
    }
    tracing::debug!(
        rows = dataset.num_rows(),
        prices = price.len(),
        "listing report ready"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn listings() -> Dataset {
        Dataset::from_rows(
            ["Price", "Mileage", "ProductionMonth", "Color"],
            [
                vec!["100", "55000", "201401", "white"],
                vec!["150", "30000", "201806", "black"],
                vec!["120", "42000", "201605", "white"],
                vec!["130", "39000", "201702", "red"],
                vec!["110", "50000", "201503", "grey"],
                vec!["200", "8000", "202101", "white"],
                vec!["90", "61000", "201309", "black"],
            ],
        )
    }

    #[test]
    fn computes_every_chart() {
        let report = analyze::<f64>(&listings(), &AnalysisConfig::default()).unwrap();
        assert!(report.failures().is_empty());

        let histogram = report.price_histogram.as_ref().unwrap();
        assert_eq!(histogram.pairs().len(), 10);
        assert_eq!(histogram.total(), 7);
        assert_eq!(histogram.bins()[0].count, 2);
        assert_eq!(histogram.bins()[9].count, 1);

        let box_plot = report.price_box_plot.as_ref().unwrap();
        assert_eq!(box_plot.summary.as_array(), [90.0, 105.0, 120.0, 140.0, 200.0]);
        assert_eq!(
            box_plot.sorted.as_slice(),
            &[90.0, 100.0, 110.0, 120.0, 130.0, 150.0, 200.0]
        );

        let mileage = report.price_vs_mileage.as_ref().unwrap();
        assert_eq!(mileage.points.len(), 7);
        assert_eq!(mileage.points[0], (55000.0, 100.0));
        assert!(mileage.regression.slope < 0.0);
        assert!(mileage.regression.r < -0.9);
        assert_eq!(mileage.line.len(), 7);
        for ((x, _), (lx, _)) in mileage.points.iter().zip(&mileage.line) {
            assert_eq!(x, lx);
        }

        let month = report.price_vs_production_month.as_ref().unwrap();
        assert!(month.regression.slope > 0.0);
        assert!(month.regression.r > 0.9);

        assert_eq!(report.model_comparison, ModelComparison::reference());
    }

    #[test]
    fn regression_scenario_through_dataset() {
        let dataset = Dataset::from_columns([
            ("Price", vec!["200", "180", "160", "140"]),
            ("Mileage", vec!["10", "20", "30", "40"]),
            ("ProductionMonth", vec!["1", "2", "3", "4"]),
        ]);
        let report = analyze::<f64>(&dataset, &AnalysisConfig::default()).unwrap();
        let chart = report.price_vs_mileage.unwrap();

        assert_approx_eq!(chart.regression.slope, -2.0, 1e-9);
        assert_approx_eq!(chart.regression.intercept, 220.0, 1e-9);
        assert_approx_eq!(chart.regression.r, -1.0, 1e-9);
        assert_eq!(chart.line[0], (10.0, 200.0));
    }

    #[test]
    fn unparseable_cells_break_only_the_affected_pairing() {
        let dataset = listings().with_column(
            "Mileage",
            ["55000", "", "42000", "39000", "50000", "8000", "61000"],
        );
        let report = analyze::<f64>(&dataset, &AnalysisConfig::default()).unwrap();

        assert_eq!(
            report.price_vs_mileage,
            Err(StatsError::LengthMismatch { x: 6, y: 7 })
        );
        assert!(report.price_histogram.is_ok());
        assert!(report.price_box_plot.is_ok());
        assert!(report.price_vs_production_month.is_ok());
        assert_eq!(
            report.failures(),
            vec![(
                "price_vs_mileage",
                &StatsError::LengthMismatch { x: 6, y: 7 }
            )]
        );
    }

    #[test]
    fn empty_price_column_fails_its_charts() {
        let dataset = Dataset::from_columns([
            ("Price", vec!["", "?"]),
            ("Mileage", vec!["1", "2"]),
            ("ProductionMonth", vec!["3", "4"]),
        ]);
        let report = analyze::<f32>(&dataset, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.price_histogram, Err(StatsError::EmptySample));
        assert_eq!(report.price_box_plot, Err(StatsError::EmptySample));
        assert_eq!(
            report.price_vs_mileage,
            Err(StatsError::LengthMismatch { x: 2, y: 0 })
        );
        assert_eq!(report.failures().len(), 4);
    }

    #[test]
    fn configured_columns_and_bins() {
        let dataset = Dataset::from_columns([
            ("price", vec!["1", "2", "3", "4"]),
            ("km", vec!["4", "3", "2", "1"]),
            ("built", vec!["1", "1", "1", "1"]),
        ]);
        let mut config = AnalysisConfig::default();
        config
            .set_bins(2)
            .set_price_column("price")
            .set_mileage_column("km")
            .set_production_month_column("built");

        let report = analyze::<f64>(&dataset, &config).unwrap();
        assert_eq!(report.price_histogram.unwrap().counts(), vec![2, 2]);

        let constant = report.price_vs_production_month.unwrap();
        assert!(constant.regression.is_degenerate());
        assert!(constant.regression.r.is_nan());
    }

    #[test]
    fn missing_column_fails_the_report() {
        let dataset = Dataset::from_columns([("Price", vec!["1"])]);
        assert_eq!(
            analyze::<f64>(&dataset, &AnalysisConfig::default()),
            Err(StatsError::MissingColumn("Mileage".into()))
        );
    }
}
