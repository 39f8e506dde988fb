use crate::analyzers::types::AircraftSummary;

/// Returns the `n` aircraft types contributing the most low-occupancy
/// flights, ordered by that count descending.
///
/// Ties on the count are broken by ascending aircraft_code so output is
/// reproducible run to run. Fewer than `n` types in the input returns all
/// of them.
pub fn top_offenders(summaries: &[AircraftSummary], n: usize) -> Vec<AircraftSummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| {
        b.low_occupancy_flights
            .cmp(&a.low_occupancy_flights)
            .then_with(|| a.aircraft_code.cmp(&b.aircraft_code))
    });
    ranked.truncate(n);
    ranked
}
