//! Output formatting and persistence for occupancy reports.
//!
//! Supports console reporting, JSON serialization, and CSV append. All of
//! it consumes the report read-only.

use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::types::OccupancyReport;
use crate::occupancy::FlightOccupancyRecord;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Logs the report as structured lines: dataset shape, distribution,
/// per-aircraft table, and the worst-offender ranking.
pub fn print_report(report: &OccupancyReport) {
    info!(
        flights = report.records.len(),
        mean = report.distribution.mean,
        stddev = report.distribution.stddev,
        min = report.distribution.min,
        max = report.distribution.max,
        "Occupancy distribution"
    );

    info!(
        threshold = report.low_occupancy_threshold,
        low_occupancy_fraction = report.low_occupancy_fraction,
        "Low-occupancy share of all flights"
    );

    for summary in &report.aircraft {
        info!(
            aircraft_code = %summary.aircraft_code,
            avg_occupancy = summary.avg_occupancy,
            total_flights = summary.total_flights,
            low_occupancy_flights = summary.low_occupancy_flights,
            "Aircraft performance"
        );
    }

    for (position, summary) in report.worst_offenders.iter().enumerate() {
        info!(
            rank = position + 1,
            aircraft_code = %summary.aircraft_code,
            low_occupancy_flights = summary.low_occupancy_flights,
            "Top contributor to low occupancy"
        );
    }
}

/// Logs the full report as pretty-printed JSON.
pub fn print_json(report: &OccupancyReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Appends the per-flight record sequence as rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_records(path: &str, records: &[FlightOccupancyRecord]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, records = records.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
