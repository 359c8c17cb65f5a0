//! Moving average indicator overlays
//!
//! Contains whole-series implementations of:
//! - Simple Moving Average (SMA)
//! - Exponential Moving Average (EMA)
//!
//! Each returns one entry per input value, with `None` wherever the
//! indicator is not yet defined, so the output aligns index-for-index with
//! the series it was computed from.

/// Simple moving average over a series
///
/// Entries before the window fills are `None`. A window smaller than 1 or
/// larger than the series yields an all-`None` overlay rather than an
/// error: the indicator is simply unavailable.
pub fn sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window < 1 || window > values.len() {
        return vec![None; values.len()];
    }

    let mut result = vec![None; values.len()];
    let mut sum: f64 = values[..window].iter().sum();

    result[window - 1] = Some(sum / window as f64);

    for i in window..values.len() {
        // Slide the window: admit the newest value, retire the oldest
        sum += values[i] - values[i - window];
        result[i] = Some(sum / window as f64);
    }

    result
}

/// Exponential moving average over a series
///
/// Seeded with the first value, so coverage starts at index 0 — unlike
/// [`sma`], which leaves a leading gap. A window smaller than 1 yields an
/// all-`None` overlay.
pub fn ema(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window < 1 || values.is_empty() {
        return vec![None; values.len()];
    }

    let multiplier = 2.0 / (window as f64 + 1.0);

    let mut result = Vec::with_capacity(values.len());
    let mut current = values[0];
    result.push(Some(current));

    for &value in &values[1..] {
        current = (value - current) * multiplier + current;
        result.push(Some(current));
    }

    result
}
