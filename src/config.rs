use alloc::string::String;

use crate::{DEFAULT_BINS, ModelComparison};

/// Settings of an [`analyze`](crate::analyze) run.
///
/// Defaults match the used-car listing export: `Price`, `Mileage` and
/// `ProductionMonth` columns, a ten-bin price histogram, and the reference
/// model comparison table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AnalysisConfig {
    /// Number of price histogram bins
    bins: usize,
    /// Column holding the listing price
    price_column: String,
    /// Column holding the mileage
    mileage_column: String,
    /// Column holding the production month
    production_month_column: String,
    /// Metrics passed through to the model comparison chart
    model_comparison: ModelComparison,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            price_column: "Price".into(),
            mileage_column: "Mileage".into(),
            production_month_column: "ProductionMonth".into(),
            model_comparison: ModelComparison::reference(),
        }
    }
}

impl AnalysisConfig {
    /// Returns the number of price histogram bins
    pub const fn bins(&self) -> usize {
        self.bins
    }

    /// Sets the number of price histogram bins
    ///
    /// # Arguments
    ///
    /// * `bins` - The bin count, zero makes the histogram fail with [`crate::StatsError::ZeroBins`]
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The config object
    pub const fn set_bins(&mut self, bins: usize) -> &mut Self {
        self.bins = bins;
        self
    }

    /// Returns the price column name
    pub fn price_column(&self) -> &str {
        &self.price_column
    }

    /// Sets the price column name
    pub fn set_price_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.price_column = name.into();
        self
    }

    /// Returns the mileage column name
    pub fn mileage_column(&self) -> &str {
        &self.mileage_column
    }

    /// Sets the mileage column name
    pub fn set_mileage_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.mileage_column = name.into();
        self
    }

    /// Returns the production month column name
    pub fn production_month_column(&self) -> &str {
        &self.production_month_column
    }

    /// Sets the production month column name
    pub fn set_production_month_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.production_month_column = name.into();
        self
    }

    /// Returns the model comparison table
    pub const fn model_comparison(&self) -> &ModelComparison {
        &self.model_comparison
    }

    /// Replaces the model comparison table
    pub fn set_model_comparison(&mut self, table: ModelComparison) -> &mut Self {
        self.model_comparison = table;
        self
    }
}
