//! Input boundary: the bulk relational read that feeds the pipeline.
//!
//! The pipeline only needs three logical relations (flights, seats,
//! ticket-flights); where they live is an implementation detail behind the
//! [`DataSource`] trait.

mod memory;
mod sqlite;

pub use memory::MemorySource;
pub use sqlite::SqliteSource;

use async_trait::async_trait;

use crate::error::AnalysisError;

/// One row of the flights relation.
#[derive(Debug, Clone)]
pub struct FlightRow {
    pub flight_id: i64,
    pub aircraft_code: String,
    pub departure_airport: String,
    pub arrival_airport: String,
}

/// One row of the seats relation: a single physical seat on an aircraft type.
#[derive(Debug, Clone)]
pub struct SeatRow {
    pub aircraft_code: String,
    pub seat_no: String,
}

/// One row of the ticket-flights relation: one booked seat on one flight.
#[derive(Debug, Clone)]
pub struct TicketFlightRow {
    pub flight_id: i64,
    pub ticket_no: String,
}

/// The three relations, read in full by a single bulk fetch.
#[derive(Debug, Clone, Default)]
pub struct RawDataset {
    pub flights: Vec<FlightRow>,
    pub seats: Vec<SeatRow>,
    pub ticket_flights: Vec<TicketFlightRow>,
}

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Reads all three relations in one shot.
    ///
    /// A failure aborts the run; callers never observe a partially
    /// populated dataset.
    async fn fetch_dataset(&self) -> Result<RawDataset, AnalysisError>;
}
