//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic; the rule
//! engine in [`crate::domain::rules`] operates over them and the repository
//! traits in [`crate::domain::repositories`] persist them.
//!
//! # Entity Types
//!
//! - [`Destination`] - A catalog destination with category, budget band and
//!   supported objectives
//! - [`Hotel`] - A hotel owned by a destination
//! - [`Transport`] - A transport option resolved by distance
//! - [`TravelPlan`] / [`ItineraryDay`] - A plan and its generated day rows
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for
//! creation (`NewDestination`, ...) and partial updates
//! (`DestinationPatch`, ...).

pub mod destination;
pub mod hotel;
pub mod transport;
pub mod travel_plan;

pub use destination::{
    BudgetLevel, Destination, DestinationPatch, NewDestination, Objective, TravelCategory,
};
pub use hotel::{Hotel, HotelPatch, NewHotel};
pub use transport::{NewTransport, Transport, TransportMode, TransportPatch};
pub use travel_plan::{ItineraryDay, NewItineraryDay, NewTravelPlan, TravelPlan};
