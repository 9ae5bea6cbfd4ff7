//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Enumerated columns are stored as text and converted at the row
//! boundary; the objectives set is stored as JSONB.
//!
//! # Repositories
//!
//! - [`PgDestinationRepository`] - Destination catalog
//! - [`PgHotelRepository`] - Hotels per destination
//! - [`PgTransportRepository`] - Transport options
//! - [`PgPlanRepository`] - Travel plans and itinerary rows

pub mod pg_destination_repository;
pub mod pg_hotel_repository;
pub mod pg_plan_repository;
pub mod pg_transport_repository;

pub use pg_destination_repository::PgDestinationRepository;
pub use pg_hotel_repository::PgHotelRepository;
pub use pg_plan_repository::PgPlanRepository;
pub use pg_transport_repository::PgTransportRepository;

use crate::error::AppError;
use std::str::FromStr;

/// Parses a stored enum column, mapping corrupt values to internal errors.
///
/// The schema constrains these columns, so a parse failure means the
/// database and the code disagree about the allowed values.
fn parse_stored<T: FromStr>(value: &str, column: &str) -> Result<T, AppError> {
    value.parse::<T>().map_err(|_| {
        AppError::internal(
            "Corrupt enumerated column",
            serde_json::json!({ "column": column, "value": value }),
        )
    })
}
