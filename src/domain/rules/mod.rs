//! The rule-based recommendation and itinerary engine.
//!
//! Pure functions over in-memory catalog snapshots; no I/O, no framework
//! types. Services fetch the relevant records and hand them to these rules.
//!
//! # Modules
//!
//! - [`criteria`] - Normalization of raw request fields into a filter set
//! - [`recommend`] - Destination, hotel and transport candidate filtering
//! - [`itinerary`] - Deterministic day-plan synthesis from trip length

pub mod criteria;
pub mod itinerary;
pub mod recommend;

pub use criteria::{Criteria, RawCriteria};
pub use itinerary::{DayPlan, generate_itinerary};
pub use recommend::{
    mode_for_distance, recommend_destinations, recommend_hotels, recommend_transports, star_range,
};
