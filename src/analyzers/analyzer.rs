use chrono::Utc;
use tracing::info;

use crate::analyzers::aggregate::{aggregate_by_aircraft, distribution};
use crate::analyzers::rank::top_offenders;
use crate::analyzers::types::OccupancyReport;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::occupancy::occupancy_records;
use crate::source::DataSource;

/// Runs the full pipeline: bulk read, per-flight extraction, per-aircraft
/// aggregation, and worst-offender ranking.
///
/// # Errors
///
/// * [`AnalysisError::Configuration`] if `config` is out of range.
/// * [`AnalysisError::DataSource`] if the bulk read fails. The read is not
///   retried and nothing partial is returned.
/// * [`AnalysisError::EmptyDataset`] if extraction yields zero flights.
pub async fn run_analysis<S: DataSource>(
    source: &S,
    config: &AnalysisConfig,
) -> Result<OccupancyReport, AnalysisError> {
    config.validate()?;

    let dataset = source.fetch_dataset().await?;
    let records = occupancy_records(&dataset);

    if records.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let threshold = config.low_occupancy_threshold;
    let low_count = records
        .iter()
        .filter(|r| r.occupancy_rate < threshold)
        .count();

    let aircraft = aggregate_by_aircraft(&records, threshold);
    let worst_offenders = top_offenders(&aircraft, config.top_n);
    let distribution = distribution(&records);

    info!(
        flights = records.len(),
        aircraft_types = aircraft.len(),
        low_occupancy_flights = low_count,
        "Analysis complete"
    );

    Ok(OccupancyReport {
        generated_at: Utc::now(),
        low_occupancy_threshold: threshold,
        low_occupancy_fraction: low_count as f64 / records.len() as f64,
        records,
        aircraft,
        worst_offenders,
        distribution,
    })
}
