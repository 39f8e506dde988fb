//! Occupancy aggregation and prioritization.
//!
//! This module rolls per-flight occupancy records up into per-aircraft
//! statistics, describes the dataset-wide rate distribution, and ranks the
//! aircraft types contributing the most low-occupancy flights.

pub mod aggregate;
pub mod analyzer;
pub mod rank;
pub mod types;
pub mod utility;
