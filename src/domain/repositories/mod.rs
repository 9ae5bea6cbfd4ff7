//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`, and mock
//! implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`DestinationRepository`] - Destination catalog access
//! - [`HotelRepository`] - Hotels scoped to destinations
//! - [`TransportRepository`] - Transport options
//! - [`PlanRepository`] - Travel plans and itinerary rows

pub mod destination_repository;
pub mod hotel_repository;
pub mod plan_repository;
pub mod transport_repository;

pub use destination_repository::DestinationRepository;
pub use hotel_repository::HotelRepository;
pub use plan_repository::PlanRepository;
pub use transport_repository::TransportRepository;

#[cfg(test)]
pub use destination_repository::MockDestinationRepository;
#[cfg(test)]
pub use hotel_repository::MockHotelRepository;
#[cfg(test)]
pub use plan_repository::MockPlanRepository;
#[cfg(test)]
pub use transport_repository::MockTransportRepository;
