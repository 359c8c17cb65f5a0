use chrono::{Duration, NaiveDate};
use rate_forecast::utils::{forecast_accuracy, train_test_split};
use rate_forecast::{HoltLinear, RateSeries};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Rate Forecast: Basic Forecasting Example");
    println!("========================================\n");

    // Create sample data
    println!("Creating sample data...");
    let series = create_sample_series();
    println!("Sample data created: {} daily points\n", series.len());

    // Smooth with two parameter sets: one sluggish, one reactive
    println!("Smoothing...");
    let sluggish = HoltLinear::new(0.2, 0.1)?;
    let reactive = HoltLinear::new(0.8, 0.4)?;

    let sluggish_result = sluggish.smooth(&series.values(), 14);
    let reactive_result = reactive.smooth(&series.values(), 14);

    println!(
        "Residual sigma: sluggish = {:.4}, reactive = {:.4}\n",
        sluggish_result.sigma, reactive_result.sigma
    );

    // Show the forecasts with their 95% bands
    println!("14-day forecast (reactive parameters):");
    for (i, value) in reactive_result.forecast.iter().enumerate() {
        let margin = 1.96 * reactive_result.sigma;
        println!(
            "  Day {:>2}: {:>8.3}  ({:.3} .. {:.3})",
            i + 1,
            value,
            value - margin,
            value + margin
        );
    }

    // Evaluate both parameter sets on a holdout tail
    println!("\nHoldout evaluation (last 20% of the series):");
    let values = series.values();
    let (train, test) = train_test_split(&values, 0.2);

    for (label, smoother) in [("sluggish", &sluggish), ("reactive", &reactive)] {
        let result = smoother.smooth(&train, test.len());
        let accuracy = forecast_accuracy(&result.forecast, &test)?;
        println!("  {}: MAE = {:.4}, RMSE = {:.4}", label, accuracy.mae, accuracy.rmse);
    }

    println!("\nForecasting complete!");
    Ok(())
}

/// Create sample daily data with a trend and some noise
fn create_sample_series() -> RateSeries {
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut pairs = Vec::with_capacity(120);

    let mut rate = 1.08;
    for i in 0..120 {
        let date = start_date + Duration::days(i);

        // Mild upward drift plus a deterministic wobble
        let drift = 0.0004;
        let wobble = (i as f64 * 0.35).sin() * 0.002;

        rate += drift + wobble;
        pairs.push((date, rate));
    }

    RateSeries::from_pairs(pairs).unwrap()
}
