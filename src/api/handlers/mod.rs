//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod destinations;
pub mod health;
pub mod hotels;
pub mod plans;
pub mod transports;

pub use destinations::{
    create_destination_handler, delete_destination_handler, destination_get_handler,
    destination_list_handler, recommended_destinations_handler, update_destination_handler,
};
pub use health::health_handler;
pub use hotels::{
    create_hotel_handler, delete_hotel_handler, hotel_get_handler, hotel_list_handler,
    recommended_hotels_handler, update_hotel_handler,
};
pub use plans::{
    create_plan_handler, create_recommended_plan_handler, delete_plan_handler,
    generate_itinerary_handler, itinerary_handler, plan_cost_handler, plan_get_handler,
    plan_list_handler,
};
pub use transports::{
    create_transport_handler, delete_transport_handler, recommended_transport_handler,
    transport_get_handler, transport_list_handler, update_transport_handler,
};
