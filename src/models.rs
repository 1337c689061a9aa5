use alloc::{string::String, vec::Vec};

/// Error metrics reported for one price-prediction model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelMetrics {
    /// Model name
    pub name: String,
    /// Root mean squared error
    pub rmse: f64,
    /// Mean squared error
    pub mse: f64,
    /// Coefficient of determination
    pub r2: f64,
}

impl ModelMetrics {
    /// Creates a new `ModelMetrics` entry
    pub fn new(name: impl Into<String>, rmse: f64, mse: f64, r2: f64) -> Self {
        Self {
            name: name.into(),
            rmse,
            mse,
            r2,
        }
    }
}

/// Side-by-side metrics of the price-prediction models, the data behind the
/// model-comparison bar chart.
///
/// The metrics come from model training that happens elsewhere. They are
/// carried through to the report unchanged, never recomputed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelComparison {
    models: Vec<ModelMetrics>,
}

impl ModelComparison {
    /// Creates a comparison table from metrics in display order
    pub fn new(models: Vec<ModelMetrics>) -> Self {
        Self { models }
    }

    /// Returns the reference results of the three trained models
    ///
    /// # Examples
    ///
    /// ```
    /// use car_market_stats::ModelComparison;
    ///
    /// let table = ModelComparison::reference();
    /// assert_eq!(table.names(), ["Random Forest", "XGBoost", "SVR"]);
    /// assert_eq!(table.rmse(), [8.62, 8.46, 7.92]);
    /// ```
    pub fn reference() -> Self {
        Self::new(vec![
            ModelMetrics::new("Random Forest", 8.62, 5.98, 0.88),
            ModelMetrics::new("XGBoost", 8.46, 6.02, 0.88),
            ModelMetrics::new("SVR", 7.92, 6.03, 0.90),
        ])
    }

    /// Returns the metrics of every model in display order
    pub fn models(&self) -> &[ModelMetrics] {
        &self.models
    }

    /// Returns the metrics of the named model
    pub fn get(&self, name: &str) -> Option<&ModelMetrics> {
        self.models.iter().find(|model| model.name == name)
    }

    /// Returns the model names in display order
    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|model| model.name.as_str()).collect()
    }

    /// Returns the RMSE series in display order
    pub fn rmse(&self) -> Vec<f64> {
        self.models.iter().map(|model| model.rmse).collect()
    }

    /// Returns the MSE series in display order
    pub fn mse(&self) -> Vec<f64> {
        self.models.iter().map(|model| model.mse).collect()
    }

    /// Returns the R² series in display order
    pub fn r2(&self) -> Vec<f64> {
        self.models.iter().map(|model| model.r2).collect()
    }
}

impl Default for ModelComparison {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_is_passed_through() {
        let table = ModelComparison::default();

        assert_eq!(table.models().len(), 3);
        assert_eq!(table.mse(), [5.98, 6.02, 6.03]);
        assert_eq!(table.r2(), [0.88, 0.88, 0.90]);
        assert_eq!(
            table.get("SVR"),
            Some(&ModelMetrics::new("SVR", 7.92, 6.03, 0.90))
        );
        assert_eq!(table.get("Linear"), None);
    }

    #[test]
    fn custom_table_keeps_order() {
        let table = ModelComparison::new(vec![
            ModelMetrics::new("b", 1.0, 1.0, 0.5),
            ModelMetrics::new("a", 2.0, 4.0, 0.25),
        ]);
        assert_eq!(table.names(), ["b", "a"]);
    }
}
