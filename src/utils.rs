//! Utility functions for the rate_forecast crate

use crate::error::{ForecastError, Result};
use chrono::{Duration, NaiveDate};

/// Generate the calendar dates a forecast extends over
///
/// Returns `horizon` consecutive days following `last_date`. Forecast dates
/// advance by plain calendar days even when the historical series only
/// contains business days; weekends and holidays are not skipped.
pub fn future_dates(last_date: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(horizon);
    let mut current = last_date;

    for _ in 0..horizon {
        current = current + Duration::days(1);
        dates.push(current);
    }

    dates
}

/// Split a series into training and test sets
///
/// The trailing `test_ratio` share of the data becomes the test set. A
/// ratio outside (0, 1) leaves everything in the training set.
pub fn train_test_split(data: &[f64], test_ratio: f64) -> (Vec<f64>, Vec<f64>) {
    if data.is_empty() || test_ratio <= 0.0 || test_ratio >= 1.0 {
        return (data.to_vec(), Vec::new());
    }

    let test_size = (data.len() as f64 * test_ratio).round() as usize;
    let train_size = data.len() - test_size;

    (data[..train_size].to_vec(), data[train_size..].to_vec())
}

/// Accuracy metrics comparing a forecast against realized values
#[derive(Debug, Clone)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error
    pub mape: f64,
}

impl std::fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:  {:.4}", self.mae)?;
        writeln!(f, "  MSE:  {:.4}", self.mse)?;
        writeln!(f, "  RMSE: {:.4}", self.rmse)?;
        writeln!(f, "  MAPE: {:.4}%", self.mape)?;
        Ok(())
    }
}

/// Calculate accuracy metrics for a forecast vs actual values
pub fn forecast_accuracy(forecast: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::ValidationError(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = forecast.len() as f64;

    let errors: Vec<f64> = actual
        .iter()
        .zip(forecast.iter())
        .map(|(&a, &f)| a - f)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;
    let rmse = mse.sqrt();

    // Zero actuals are skipped so the percentage stays defined
    let mape = actual
        .iter()
        .zip(errors.iter())
        .filter(|(&a, _)| a != 0.0)
        .map(|(&a, &e)| (e.abs() / a.abs()) * 100.0)
        .sum::<f64>()
        / n;

    Ok(ForecastAccuracy {
        mae,
        mse,
        rmse,
        mape,
    })
}
