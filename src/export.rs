//! Chart series export to delimited text and JSON
//!
//! Works over any serializable record type; the record's fields, in
//! declaration order, become the CSV columns. Absent values render as
//! empty fields, and fields containing delimiters or quotes are quoted
//! with doubled internal quotes.

use crate::error::{ForecastError, Result};
use serde::Serialize;
use std::io::Write;

/// Serialize records as CSV into any writer
///
/// The header row is derived from the record's field names. No rows means
/// no output, header included.
pub fn write_csv<S: Serialize, W: Write>(rows: &[S], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Serialize records as a CSV string
pub fn to_csv<S: Serialize>(rows: &[S]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;

    String::from_utf8(buffer).map_err(|e| ForecastError::CsvError(e.to_string()))
}

/// Serialize records as a JSON array
///
/// Absent values become JSON `null`s, which is the shape a rendering
/// widget expects for gaps.
pub fn to_json<S: Serialize>(rows: &[S]) -> Result<String> {
    Ok(serde_json::to_string(rows)?)
}
