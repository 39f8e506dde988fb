//! Per-flight occupancy extraction.

use std::collections::HashMap;

use serde::Serialize;

use crate::source::RawDataset;

/// One flight with its computed seat-occupancy rate.
#[derive(Debug, Clone, Serialize)]
pub struct FlightOccupancyRecord {
    pub flight_id: i64,
    pub aircraft_code: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    /// Booked seats divided by the aircraft's seat capacity.
    pub occupancy_rate: f64,
}

/// Derives one [`FlightOccupancyRecord`] per flight whose aircraft type has a
/// known seat capacity.
///
/// Capacity is the count of seat rows per aircraft_code; booked seats the
/// count of ticket rows per flight_id. Flights whose aircraft_code has no
/// seat rows are dropped — an aircraft with zero registered seats has no
/// meaningful occupancy rate. Flights with no ticket rows get a rate of 0.0.
/// The order of the flights relation is preserved.
pub fn occupancy_records(dataset: &RawDataset) -> Vec<FlightOccupancyRecord> {
    let mut seat_capacity: HashMap<&str, u64> = HashMap::new();
    for seat in &dataset.seats {
        *seat_capacity.entry(seat.aircraft_code.as_str()).or_default() += 1;
    }

    let mut booked_seats: HashMap<i64, u64> = HashMap::new();
    for ticket in &dataset.ticket_flights {
        *booked_seats.entry(ticket.flight_id).or_default() += 1;
    }

    dataset
        .flights
        .iter()
        .filter_map(|flight| {
            // Inner-join semantics on capacity, left-join on bookings.
            let total_seats = *seat_capacity.get(flight.aircraft_code.as_str())?;
            let booked = booked_seats.get(&flight.flight_id).copied().unwrap_or(0);

            Some(FlightOccupancyRecord {
                flight_id: flight.flight_id,
                aircraft_code: flight.aircraft_code.clone(),
                departure_airport: flight.departure_airport.clone(),
                arrival_airport: flight.arrival_airport.clone(),
                // total_seats > 0 by construction: the code appeared in at
                // least one seat row.
                occupancy_rate: booked as f64 / total_seats as f64,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FlightRow, SeatRow, TicketFlightRow};

    fn flight(flight_id: i64, aircraft_code: &str) -> FlightRow {
        FlightRow {
            flight_id,
            aircraft_code: aircraft_code.to_string(),
            departure_airport: "AAA".to_string(),
            arrival_airport: "BBB".to_string(),
        }
    }

    fn seats(aircraft_code: &str, count: usize) -> Vec<SeatRow> {
        (0..count)
            .map(|i| SeatRow {
                aircraft_code: aircraft_code.to_string(),
                seat_no: format!("{}A", i + 1),
            })
            .collect()
    }

    fn bookings(flight_id: i64, count: usize) -> Vec<TicketFlightRow> {
        (0..count)
            .map(|i| TicketFlightRow {
                flight_id,
                ticket_no: format!("tkt-{flight_id}-{i}"),
            })
            .collect()
    }

    #[test]
    fn test_exact_ratio() {
        let dataset = RawDataset {
            flights: vec![flight(1, "A1")],
            seats: seats("A1", 4),
            ticket_flights: bookings(1, 3),
        };

        let records = occupancy_records(&dataset);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].flight_id, 1);
        assert_eq!(records[0].occupancy_rate, 0.75);
    }

    #[test]
    fn test_no_bookings_yields_zero_not_error() {
        let dataset = RawDataset {
            flights: vec![flight(7, "A1")],
            seats: seats("A1", 2),
            ticket_flights: vec![],
        };

        let records = occupancy_records(&dataset);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].occupancy_rate, 0.0);
    }

    #[test]
    fn test_unknown_aircraft_excluded() {
        let dataset = RawDataset {
            flights: vec![flight(1, "A1"), flight(2, "GHOST")],
            seats: seats("A1", 2),
            ticket_flights: bookings(2, 1),
        };

        let records = occupancy_records(&dataset);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].aircraft_code, "A1");
    }

    #[test]
    fn test_rates_in_unit_interval_when_not_overbooked() {
        let mut ticket_flights = bookings(1, 1);
        ticket_flights.extend(bookings(2, 2));

        let dataset = RawDataset {
            flights: vec![flight(1, "A1"), flight(2, "A1"), flight(3, "A1")],
            seats: seats("A1", 2),
            ticket_flights,
        };

        let records = occupancy_records(&dataset);

        assert_eq!(records.len(), 3);
        for record in &records {
            assert!((0.0..=1.0).contains(&record.occupancy_rate));
        }
        assert_eq!(records[0].occupancy_rate, 0.5);
        assert_eq!(records[1].occupancy_rate, 1.0);
        assert_eq!(records[2].occupancy_rate, 0.0);
    }

    #[test]
    fn test_overbooked_flight_is_exact_ratio_above_one() {
        let dataset = RawDataset {
            flights: vec![flight(1, "A1")],
            seats: seats("A1", 2),
            ticket_flights: bookings(1, 3),
        };

        let records = occupancy_records(&dataset);

        assert_eq!(records[0].occupancy_rate, 1.5);
    }

    #[test]
    fn test_flight_order_preserved() {
        let dataset = RawDataset {
            flights: vec![flight(3, "A1"), flight(1, "A1"), flight(2, "A1")],
            seats: seats("A1", 2),
            ticket_flights: vec![],
        };

        let ids: Vec<i64> = occupancy_records(&dataset)
            .iter()
            .map(|r| r.flight_id)
            .collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_dataset_produces_no_records() {
        let records = occupancy_records(&RawDataset::default());
        assert!(records.is_empty());
    }
}
