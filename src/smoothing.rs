//! Holt linear (double exponential) smoothing
//!
//! Smooths a series into a level and a trend component, replays the
//! one-step-ahead fitted values over the observed history, and extrapolates
//! a straight-line forecast from the final level/trend pair.

use crate::error::{ForecastError, Result};
use serde::Serialize;

/// Result of smoothing a series with [`HoltLinear`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoltForecast {
    /// One-step-ahead fitted values, one per input observation
    ///
    /// The first entry is the initial level rather than a genuine
    /// prediction; it is excluded from the residuals behind `sigma`.
    pub fitted: Vec<f64>,
    /// Forecast values extending beyond the input series
    pub forecast: Vec<f64>,
    /// Standard deviation of the one-step-ahead residuals
    pub sigma: f64,
}

impl HoltForecast {
    /// Check whether the input series was too short to smooth
    pub fn is_empty(&self) -> bool {
        self.fitted.is_empty()
    }

    fn empty() -> Self {
        Self {
            fitted: Vec::new(),
            forecast: Vec::new(),
            sigma: 0.0,
        }
    }
}

/// Holt linear exponential smoothing
///
/// `alpha` controls the level update, `beta` the trend update. Both are
/// user-supplied; the smoother itself involves no division by either, so
/// the exact boundary values 0 and 1 are accepted.
#[derive(Debug, Clone)]
pub struct HoltLinear {
    alpha: f64,
    beta: f64,
}

/// Number of leading observations used to seed the trend estimate
const MAX_INIT_POINTS: usize = 5;

impl HoltLinear {
    /// Create a new smoother with the specified parameters
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(ForecastError::InvalidParameter(
                "Alpha must be between 0 and 1".to_string(),
            ));
        }
        if !beta.is_finite() || !(0.0..=1.0).contains(&beta) {
            return Err(ForecastError::InvalidParameter(
                "Beta must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self { alpha, beta })
    }

    /// Get the level smoothing parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the trend smoothing parameter
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Smooth a series and forecast `horizon` steps beyond it
    ///
    /// A series with fewer than two observations carries no trend
    /// information; the result is then empty with zero sigma, signalling
    /// "not enough data" rather than an error.
    pub fn smooth(&self, values: &[f64], horizon: usize) -> HoltForecast {
        if values.len() < 2 {
            return HoltForecast::empty();
        }

        let n = values.len();
        let mut fitted = Vec::with_capacity(n);
        let mut forecast = Vec::with_capacity(horizon);

        let init_points = MAX_INIT_POINTS.min(n / 2);
        let mut level = values[0];
        let mut trend = initial_trend(&values[..init_points]);

        // Seed: the initial level itself, not a one-step prediction
        fitted.push(level);

        for &value in &values[1..] {
            let prev_level = level;
            let prev_trend = trend;

            fitted.push(prev_level + prev_trend);

            // Level must be updated before the trend, which compares the
            // new level against the previous one
            level = self.alpha * value + (1.0 - self.alpha) * (prev_level + prev_trend);
            trend = self.beta * (level - prev_level) + (1.0 - self.beta) * prev_trend;
        }

        for h in 1..=horizon {
            forecast.push(level + h as f64 * trend);
        }

        // The seed at index 0 is not a prediction, so residuals start at 1.
        // Non-finite residuals are dropped so a single bad observation
        // cannot poison sigma.
        let residuals: Vec<f64> = values
            .iter()
            .zip(fitted.iter())
            .skip(1)
            .map(|(value, fit)| value - fit)
            .filter(|r| r.is_finite())
            .collect();

        let sigma = if residuals.is_empty() {
            0.0
        } else {
            (residuals.iter().map(|r| r * r).sum::<f64>() / residuals.len() as f64).sqrt()
        };

        HoltForecast {
            fitted,
            forecast,
            sigma,
        }
    }
}

/// Ordinary least-squares slope of the leading observations against their
/// index, used as the initial trend estimate
fn initial_trend(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let x_mean = (values.len() - 1) as f64 / 2.0;
    let y_mean = values.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        numerator += (x - x_mean) * (y - y_mean);
        denominator += (x - x_mean) * (x - x_mean);
    }

    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_params() {
        assert!(HoltLinear::new(-0.1, 0.5).is_err());
        assert!(HoltLinear::new(1.1, 0.5).is_err());
        assert!(HoltLinear::new(0.5, -0.1).is_err());
        assert!(HoltLinear::new(0.5, 1.1).is_err());
        assert!(HoltLinear::new(f64::NAN, 0.5).is_err());
        assert!(HoltLinear::new(0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_boundary_params_accepted() {
        // 0 and 1 never divide anything inside the recurrence
        let smoother = HoltLinear::new(0.0, 1.0).unwrap();
        let result = smoother.smooth(&[10.0, 11.0, 12.0, 13.0], 2);

        assert_eq!(result.fitted.len(), 4);
        assert!(result.forecast.iter().all(|v| v.is_finite()));
        assert!(result.sigma.is_finite());
    }

    #[test]
    fn test_insufficient_data() {
        let smoother = HoltLinear::new(0.5, 0.5).unwrap();

        for series in [&[][..], &[10.0][..]] {
            let result = smoother.smooth(series, 5);
            assert!(result.is_empty());
            assert!(result.forecast.is_empty());
            assert_eq!(result.sigma, 0.0);
        }
    }

    #[test]
    fn test_minimum_series() {
        let smoother = HoltLinear::new(0.5, 0.5).unwrap();
        let result = smoother.smooth(&[10.0, 15.0], 1);

        // One seed plus one genuine one-step prediction
        assert_eq!(result.fitted.len(), 2);
        assert_eq!(result.forecast.len(), 1);
        assert!(result.sigma >= 0.0);
    }

    #[test]
    fn test_seed_is_initial_level() {
        let smoother = HoltLinear::new(0.5, 0.5).unwrap();
        let result = smoother.smooth(&[10.0, 12.0, 14.0, 16.0], 1);

        assert!((result.fitted[0] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_series_forecast() {
        let smoother = HoltLinear::new(0.5, 0.5).unwrap();
        let result = smoother.smooth(&[10.0, 11.0, 12.0, 13.0, 14.0], 3);

        // Near-linear input: the forecast keeps climbing roughly one per step
        assert!(result.forecast[0] > 14.0);
        assert!(result.forecast[0] < result.forecast[1]);
        assert!(result.forecast[1] < result.forecast[2]);
        assert!((result.forecast[0] - 15.0).abs() < 0.5);
        assert!((result.forecast[2] - 17.0).abs() < 1.0);
    }

    #[test]
    fn test_constant_series_sigma() {
        let smoother = HoltLinear::new(0.3, 0.3).unwrap();
        let result = smoother.smooth(&[5.0; 20], 2);

        // A flat series is fitted exactly, so residuals vanish
        assert!(result.sigma.abs() < 1e-9);
        for value in &result.forecast {
            assert!((value - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_initial_trend_slope() {
        // Perfectly linear leading points recover the exact slope
        assert!((initial_trend(&[10.0, 12.0, 14.0]) - 2.0).abs() < 1e-12);
        assert_eq!(initial_trend(&[10.0]), 0.0);
        assert_eq!(initial_trend(&[]), 0.0);
    }

    #[test]
    fn test_non_finite_residuals_dropped() {
        let smoother = HoltLinear::new(0.5, 0.5).unwrap();
        let result = smoother.smooth(&[10.0, f64::NAN, 12.0, 13.0], 1);

        // The NaN observation contaminates fitted values but not sigma
        assert!(result.sigma.is_finite());
    }
}
