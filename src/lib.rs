#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits, clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod error;
pub use error::{Result, StatsError};

mod sample;
pub use sample::{NumericSample, SortedSample};

mod quantile;
pub use quantile::quantile;

mod histogram;
pub use histogram::{DEFAULT_BINS, Histogram, HistogramBin};

mod regression;
pub use regression::LinearRegression;

mod summary;
pub use summary::FiveNumberSummary;

mod dataset;
pub use dataset::Dataset;

mod models;
pub use models::{ModelComparison, ModelMetrics};

mod config;
pub use config::AnalysisConfig;

mod report;
pub use report::{BoxPlot, MarketReport, RegressionChart, analyze};
