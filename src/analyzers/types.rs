//! Data types produced by the aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::occupancy::FlightOccupancyRecord;

/// Aggregate occupancy statistics for one aircraft type.
#[derive(Debug, Clone, Serialize)]
pub struct AircraftSummary {
    pub aircraft_code: String,
    pub avg_occupancy: f64,
    pub total_flights: usize,
    pub low_occupancy_flights: usize,
}

/// Shape of the occupancy-rate distribution over the whole dataset.
///
/// Narrative only; no downstream stage computes from it.
#[derive(Debug, Clone, Serialize)]
pub struct OccupancyDistribution {
    pub flights: usize,
    pub mean: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
}

/// Complete result of one analysis run.
///
/// Presentation layers consume this read-only; nothing here survives
/// between runs.
#[derive(Debug, Clone, Serialize)]
pub struct OccupancyReport {
    pub generated_at: DateTime<Utc>,
    pub low_occupancy_threshold: f64,
    /// One entry per flight with known seat capacity, in input order.
    pub records: Vec<FlightOccupancyRecord>,
    /// One entry per distinct aircraft_code, ascending by code.
    pub aircraft: Vec<AircraftSummary>,
    /// The top-N aircraft types by low-occupancy flight count.
    pub worst_offenders: Vec<AircraftSummary>,
    pub distribution: OccupancyDistribution,
    /// Fraction of all analyzed flights strictly below the threshold.
    pub low_occupancy_fraction: f64,
}
