//! Dated rate series handling for forecasting

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A single dated observation (one trading/observation day)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Observed rate or price
    pub value: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// An ordered series of dated observations
///
/// Dates never decrease along the series. Days with no data are simply
/// omitted; gaps are not represented as missing entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSeries {
    observations: Vec<Observation>,
}

impl RateSeries {
    /// Create a new series from observations, validating date order
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        for pair in observations.windows(2) {
            if pair[1].date < pair[0].date {
                return Err(ForecastError::DataError(format!(
                    "Observations out of order: {} follows {}",
                    pair[1].date, pair[0].date
                )));
            }
        }

        Ok(Self { observations })
    }

    /// Create a new series from (date, value) pairs
    pub fn from_pairs(pairs: Vec<(NaiveDate, f64)>) -> Result<Self> {
        Self::new(
            pairs
                .into_iter()
                .map(|(date, value)| Observation::new(date, value))
                .collect(),
        )
    }

    /// Load a series from a CSV file
    ///
    /// The file must have a header row with a date column and a value
    /// column; columns are detected by name.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Load a series from any CSV reader
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let date_idx = Self::detect_date_column(&headers)?;
        let value_idx = Self::detect_value_column(&headers)?;

        let mut observations = Vec::new();
        for record in csv_reader.records() {
            let record = record?;

            let date_field = record.get(date_idx).unwrap_or("");
            let date = date_field.parse::<NaiveDate>().map_err(|e| {
                ForecastError::DataError(format!("Unparseable date '{}': {}", date_field, e))
            })?;

            let value_field = record.get(value_idx).unwrap_or("");
            let value = value_field.parse::<f64>().map_err(|e| {
                ForecastError::DataError(format!("Unparseable value '{}': {}", value_field, e))
            })?;

            observations.push(Observation::new(date, value));
        }

        Self::new(observations)
    }

    /// Detect the date column in a CSV header row
    fn detect_date_column(headers: &csv::StringRecord) -> Result<usize> {
        for (i, name) in headers.iter().enumerate() {
            let lower_name = name.to_lowercase();
            if lower_name.contains("date") || lower_name.contains("time") {
                return Ok(i);
            }
        }

        Err(ForecastError::DataError(
            "No date column found in data".to_string(),
        ))
    }

    /// Detect the value column in a CSV header row
    fn detect_value_column(headers: &csv::StringRecord) -> Result<usize> {
        let candidates = ["rate", "price", "value", "close"];

        for candidate in &candidates {
            for (i, name) in headers.iter().enumerate() {
                if name.to_lowercase().contains(candidate) {
                    return Ok(i);
                }
            }
        }

        Err(ForecastError::DataError(
            "No value column found in data".to_string(),
        ))
    }

    /// Get the observations
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Get the values as a vector
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Get the dates as a vector
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|o| o.date).collect()
    }

    /// Get the date of the final observation
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Calculate the mean of the values
    pub fn mean(&self) -> Result<f64> {
        if self.observations.is_empty() {
            return Err(ForecastError::DataError(
                "No observations available".to_string(),
            ));
        }

        let sum: f64 = self.observations.iter().map(|o| o.value).sum();
        Ok(sum / self.observations.len() as f64)
    }

    /// Calculate the standard deviation of the values
    pub fn std_dev(&self) -> Result<f64> {
        let mean = self.mean()?;
        let variance: f64 = self
            .observations
            .iter()
            .map(|o| (o.value - mean).powi(2))
            .sum::<f64>()
            / self.observations.len() as f64;

        Ok(variance.sqrt())
    }
}
