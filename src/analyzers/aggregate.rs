use std::collections::BTreeMap;

use crate::analyzers::types::{AircraftSummary, OccupancyDistribution};
use crate::analyzers::utility::{extent, mean, stddev};
use crate::occupancy::FlightOccupancyRecord;

/// Rolls per-flight records up into one [`AircraftSummary`] per aircraft type.
///
/// Every distinct aircraft_code in the input appears exactly once, ascending
/// by code. Groups are formed from existing records and are never empty, so
/// the mean is always defined.
pub fn aggregate_by_aircraft(
    records: &[FlightOccupancyRecord],
    low_occupancy_threshold: f64,
) -> Vec<AircraftSummary> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.aircraft_code.as_str())
            .or_default()
            .push(record.occupancy_rate);
    }

    groups
        .into_iter()
        .map(|(aircraft_code, rates)| AircraftSummary {
            aircraft_code: aircraft_code.to_string(),
            avg_occupancy: mean(&rates),
            total_flights: rates.len(),
            // Strictly below: a flight exactly at the threshold is not low.
            low_occupancy_flights: rates
                .iter()
                .filter(|rate| **rate < low_occupancy_threshold)
                .count(),
        })
        .collect()
}

/// Describes the occupancy-rate distribution across all records.
pub fn distribution(records: &[FlightOccupancyRecord]) -> OccupancyDistribution {
    let rates: Vec<f64> = records.iter().map(|r| r.occupancy_rate).collect();
    let mean = mean(&rates);
    let (min, max) = extent(&rates).unwrap_or((0.0, 0.0));

    OccupancyDistribution {
        flights: rates.len(),
        mean,
        stddev: stddev(&rates, mean),
        min,
        max,
    }
}
