use rate_forecast::chart::forecast_chart;
use rate_forecast::export::{to_csv, to_json};
use rate_forecast::utils::{forecast_accuracy, train_test_split};
use rate_forecast::{ForecastError, HoltLinear, RateSeries};
use std::io::Write;
use tempfile::NamedTempFile;

// Helper function to create a simple rates file
fn create_sample_data() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    writeln!(file, "date,rate").unwrap();
    writeln!(file, "2024-01-01,100.0").unwrap();
    writeln!(file, "2024-01-02,102.0").unwrap();
    writeln!(file, "2024-01-03,101.0").unwrap();
    writeln!(file, "2024-01-04,103.0").unwrap();
    writeln!(file, "2024-01-05,102.0").unwrap();
    writeln!(file, "2024-01-06,104.0").unwrap();
    writeln!(file, "2024-01-07,103.0").unwrap();
    writeln!(file, "2024-01-08,105.0").unwrap();
    writeln!(file, "2024-01-09,104.0").unwrap();
    writeln!(file, "2024-01-10,106.0").unwrap();

    file
}

#[test]
fn test_full_forecast_workflow() {
    // 1. Create sample data file
    let data_file = create_sample_data();
    let file_path = data_file.path();

    // 2. Load the series
    let series = RateSeries::from_csv_path(file_path).unwrap();
    assert_eq!(series.len(), 10);

    // 3. Smooth and forecast
    let smoother = HoltLinear::new(0.5, 0.3).unwrap();
    let holt = smoother.smooth(&series.values(), 5);
    assert_eq!(holt.fitted.len(), 10);
    assert_eq!(holt.forecast.len(), 5);
    assert!(holt.sigma > 0.0);

    // 4. Build the chart series
    let points = forecast_chart(&series, &smoother, 5, 3, 5);
    assert_eq!(points.len(), 15);

    // 5. Export for rendering and download
    let csv = to_csv(&points).unwrap();
    assert_eq!(csv.lines().count(), 16);

    let json = to_json(&points).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 15);

    // 6. Test error handling
    let invalid_path = "/nonexistent/path.csv";
    let result = RateSeries::from_csv_path(invalid_path);
    assert!(result.is_err());

    let error = result.unwrap_err();
    assert!(matches!(error, ForecastError::IoError(_)));
}

#[test]
fn test_holdout_evaluation_workflow() {
    let data_file = create_sample_data();
    let series = RateSeries::from_csv_path(data_file.path()).unwrap();

    // Hold out the last 30% and forecast it from the rest
    let values = series.values();
    let (train, test) = train_test_split(&values, 0.3);
    assert_eq!(test.len(), 3);

    let smoother = HoltLinear::new(0.6, 0.2).unwrap();
    let holt = smoother.smooth(&train, test.len());
    assert_eq!(holt.forecast.len(), test.len());

    let accuracy = forecast_accuracy(&holt.forecast, &test).unwrap();
    assert!(accuracy.mae >= 0.0);
    assert!(accuracy.rmse >= accuracy.mae);
}

#[test]
fn test_recomputation_is_deterministic() {
    let data_file = create_sample_data();
    let series = RateSeries::from_csv_path(data_file.path()).unwrap();
    let smoother = HoltLinear::new(0.5, 0.5).unwrap();

    // Rapid parameter-change recomputation relies on the whole pipeline
    // being pure: identical inputs must give bit-identical charts
    let first = forecast_chart(&series, &smoother, 7, 5, 10);
    let second = forecast_chart(&series, &smoother, 7, 5, 10);

    assert_eq!(first, second);
    assert_eq!(to_csv(&first).unwrap(), to_csv(&second).unwrap());
}
