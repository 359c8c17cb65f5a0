use chrono::{Duration, NaiveDate};
use rate_forecast::chart::forecast_chart;
use rate_forecast::export::{to_csv, to_json};
use rate_forecast::{HoltLinear, RateSeries};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Rate Forecast: Chart Export Example");
    println!("===================================\n");

    // A short gold-price-like series
    let start_date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let prices = [2031.2, 2039.5, 2035.1, 2042.8, 2048.3, 2044.9, 2051.0];

    let series = RateSeries::from_pairs(
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| (start_date + Duration::days(i as i64), price))
            .collect(),
    )?;

    // One call runs smoothing, overlays and chart assembly
    let smoother = HoltLinear::new(0.5, 0.3)?;
    let points = forecast_chart(&series, &smoother, 5, 3, 5);

    println!(
        "Chart series: {} points ({} historical + {} forecast)\n",
        points.len(),
        series.len(),
        points.len() - series.len()
    );

    println!("CSV output:");
    println!("{}", to_csv(&points)?);

    let json = to_json(&points)?;
    println!("JSON output: {} bytes (first 120 shown)", json.len());
    println!("{}...", &json[..120.min(json.len())]);

    Ok(())
}
