use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use super::{DataSource, FlightRow, RawDataset, SeatRow, TicketFlightRow};
use crate::error::AnalysisError;

/// Reads the flights, seats, and ticket_flights relations from a SQLite
/// database file.
///
/// Holds only the path. The connection is opened for the duration of one
/// bulk read and dropped before the dataset is returned, so no handle
/// outlives the fetch.
pub struct SqliteSource {
    path: PathBuf,
}

impl SqliteSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_all(path: &Path) -> rusqlite::Result<RawDataset> {
        // Read-only open: a missing file is an error, not a fresh database.
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let mut stmt = conn.prepare(
            "SELECT flight_id, aircraft_code, departure_airport, arrival_airport FROM flights",
        )?;
        let flights = stmt
            .query_map([], |row| {
                Ok(FlightRow {
                    flight_id: row.get(0)?,
                    aircraft_code: row.get(1)?,
                    departure_airport: row.get(2)?,
                    arrival_airport: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare("SELECT aircraft_code, seat_no FROM seats")?;
        let seats = stmt
            .query_map([], |row| {
                Ok(SeatRow {
                    aircraft_code: row.get(0)?,
                    seat_no: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare("SELECT flight_id, ticket_no FROM ticket_flights")?;
        let ticket_flights = stmt
            .query_map([], |row| {
                Ok(TicketFlightRow {
                    flight_id: row.get(0)?,
                    ticket_no: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(RawDataset {
            flights,
            seats,
            ticket_flights,
        })
    }
}

#[async_trait]
impl DataSource for SqliteSource {
    async fn fetch_dataset(&self) -> Result<RawDataset, AnalysisError> {
        let path = self.path.clone();
        debug!(path = %path.display(), "Opening bookings database");

        let dataset = tokio::task::spawn_blocking(move || Self::read_all(&path))
            .await
            .map_err(|e| AnalysisError::DataSource(e.to_string()))?
            .map_err(|e| AnalysisError::DataSource(e.to_string()))?;

        info!(
            flights = dataset.flights.len(),
            seats = dataset.seats.len(),
            ticket_flights = dataset.ticket_flights.len(),
            "Bulk read complete"
        );

        Ok(dataset)
    }
}
