//! # Rate Forecast
//!
//! A Rust library for smoothing, forecasting and charting exchange-rate
//! and commodity-price time series.
//!
//! ## Features
//!
//! - Dated series handling with CSV ingestion
//! - Holt linear exponential smoothing (fitted values, multi-step
//!   forecast, residual sigma)
//! - Simple and exponential moving-average overlays
//! - Chart series assembly with forecast dates and 95% confidence bands
//! - CSV and JSON export of the assembled chart
//! - Forecast accuracy evaluation (MAE, MSE, RMSE, MAPE)
//!
//! The numeric operations are synchronous pure functions: they borrow
//! their inputs, allocate fresh outputs, and hold no state between calls,
//! so they can be re-run freely for different parameter sets.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rate_forecast::chart::forecast_chart;
//! use rate_forecast::{HoltLinear, RateSeries};
//!
//! fn main() -> rate_forecast::Result<()> {
//!     // Load data
//!     let series = RateSeries::from_csv_path("rates.csv")?;
//!
//!     // Smooth and forecast 14 days ahead, with 7/14-day overlays
//!     let smoother = HoltLinear::new(0.5, 0.3)?;
//!     let points = forecast_chart(&series, &smoother, 14, 7, 14);
//!
//!     // Export for a chart widget or a tabular download
//!     let csv = rate_forecast::export::to_csv(&points)?;
//!     let json = rate_forecast::export::to_json(&points)?;
//!     println!("{} bytes of CSV, {} bytes of JSON", csv.len(), json.len());
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod error;
pub mod export;
pub mod indicators;
pub mod series;
pub mod smoothing;
pub mod utils;

// Re-export commonly used types
pub use crate::chart::{build_chart_series, ChartPoint};
pub use crate::error::{ForecastError, Result};
pub use crate::series::{Observation, RateSeries};
pub use crate::smoothing::{HoltForecast, HoltLinear};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
