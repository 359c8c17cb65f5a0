//! Display-ready chart series construction
//!
//! Merges a dated historical series with its fitted values, forecast,
//! confidence band and moving-average overlays into a single ordered
//! sequence of points, ready for a rendering widget or tabular export.

use crate::indicators;
use crate::series::{Observation, RateSeries};
use crate::smoothing::{HoltForecast, HoltLinear};
use crate::utils::future_dates;
use serde::Serialize;

/// 95% two-sided normal quantile used for the confidence band
const Z_95: f64 = 1.96;

/// One display point, either historical or forecast
///
/// Historical points carry `actual`, `fitted` and the overlay fields and
/// leave the forecast fields empty; forecast points carry only `forecast`
/// and the band. Serialized field names follow the wire shape a chart
/// widget expects (`bandHi`/`bandLo`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Calendar date of the point
    pub x: chrono::NaiveDate,
    /// Observed value, present on historical points
    pub actual: Option<f64>,
    /// One-step-ahead fitted value
    pub fitted: Option<f64>,
    /// Forecast value, present on forecast points
    pub forecast: Option<f64>,
    /// Upper edge of the 95% confidence band
    pub band_hi: Option<f64>,
    /// Lower edge of the 95% confidence band
    pub band_lo: Option<f64>,
    /// Simple moving average overlay
    pub sma: Option<f64>,
    /// Exponential moving average overlay
    pub ema: Option<f64>,
}

/// Merge a historical series and its model outputs into chart points
///
/// Historical points come first in input order, followed by one point per
/// forecast step on consecutive calendar days after the final observation.
/// An empty `points` slice produces an empty chart, since there is no date
/// to anchor the forecast tail to.
///
/// # Panics
///
/// Panics if the overlay slices do not match `points` in length, or if
/// `holt.fitted` is neither empty nor `points`-sized. Those mismatches are
/// caller contract violations, not data conditions.
pub fn build_chart_series(
    points: &[Observation],
    holt: &HoltForecast,
    sma: &[Option<f64>],
    ema: &[Option<f64>],
) -> Vec<ChartPoint> {
    assert_eq!(sma.len(), points.len(), "SMA overlay length mismatch");
    assert_eq!(ema.len(), points.len(), "EMA overlay length mismatch");
    assert!(
        holt.fitted.is_empty() || holt.fitted.len() == points.len(),
        "fitted length mismatch"
    );

    if points.is_empty() {
        return Vec::new();
    }
    let last_date = points[points.len() - 1].date;

    let mut result = Vec::with_capacity(points.len() + holt.forecast.len());

    for (i, point) in points.iter().enumerate() {
        result.push(ChartPoint {
            x: point.date,
            actual: Some(point.value),
            fitted: holt.fitted.get(i).copied(),
            forecast: None,
            band_hi: None,
            band_lo: None,
            sma: sma[i],
            ema: ema[i],
        });
    }

    let margin = Z_95 * holt.sigma;
    let dates = future_dates(last_date, holt.forecast.len());

    for (&value, date) in holt.forecast.iter().zip(dates) {
        result.push(ChartPoint {
            x: date,
            actual: None,
            fitted: None,
            forecast: Some(value),
            band_hi: Some(value + margin),
            band_lo: Some(value - margin),
            sma: None,
            ema: None,
        });
    }

    result
}

/// Run the full pipeline over one series
///
/// Smooths the series, computes both moving-average overlays, and merges
/// everything into a single chart series. This is the one-call form of the
/// flow a dashboard page performs on every parameter change.
pub fn forecast_chart(
    series: &RateSeries,
    smoother: &HoltLinear,
    horizon: usize,
    sma_window: usize,
    ema_window: usize,
) -> Vec<ChartPoint> {
    let values = series.values();

    let holt = smoother.smooth(&values, horizon);
    let sma = indicators::sma(&values, sma_window);
    let ema = indicators::ema(&values, ema_window);

    build_chart_series(series.observations(), &holt, &sma, &ema)
}
