//! API route configuration.
//!
//! Public routes serve catalog reads, recommendations and plan management.
//! Admin routes mutate the catalog and require Bearer token authentication
//! via [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_destination_handler, create_hotel_handler, create_plan_handler,
    create_recommended_plan_handler, create_transport_handler, delete_destination_handler,
    delete_hotel_handler, delete_plan_handler, delete_transport_handler, destination_get_handler,
    destination_list_handler, generate_itinerary_handler, hotel_get_handler, hotel_list_handler,
    itinerary_handler, plan_cost_handler, plan_get_handler, plan_list_handler,
    recommended_destinations_handler, recommended_hotels_handler, recommended_transport_handler,
    transport_get_handler, transport_list_handler, update_destination_handler,
    update_hotel_handler, update_transport_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET  /destinations`               - List destinations
/// - `GET  /destinations/recommended`   - Rule-based destination recommendations
/// - `GET  /destinations/{id}`          - Single destination
/// - `GET  /hotels`                     - Hotels of a destination (`?destination_id=`)
/// - `GET  /hotels/recommended`         - Rule-based hotel recommendations
/// - `GET  /hotels/{id}`                - Single hotel
/// - `GET  /transports`                 - List transport options
/// - `GET  /transports/recommended`     - Distance-ladder transport recommendations
/// - `GET  /transports/{id}`            - Single transport option
/// - `POST /plans`                      - Create a plan from explicit selections
/// - `GET  /plans`                      - List plans
/// - `POST /plans/recommended`          - Create a plan from recommendations
/// - `GET|DELETE /plans/{id}`           - Single plan
/// - `POST|GET   /plans/{id}/itinerary` - Generate / read the itinerary
/// - `GET  /plans/{id}/cost`            - Cost estimate
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/destinations", get(destination_list_handler))
        .route(
            "/destinations/recommended",
            get(recommended_destinations_handler),
        )
        .route("/destinations/{id}", get(destination_get_handler))
        .route("/hotels", get(hotel_list_handler))
        .route("/hotels/recommended", get(recommended_hotels_handler))
        .route("/hotels/{id}", get(hotel_get_handler))
        .route("/transports", get(transport_list_handler))
        .route(
            "/transports/recommended",
            get(recommended_transport_handler),
        )
        .route("/transports/{id}", get(transport_get_handler))
        .route("/plans", post(create_plan_handler).get(plan_list_handler))
        .route("/plans/recommended", post(create_recommended_plan_handler))
        .route(
            "/plans/{id}",
            get(plan_get_handler).delete(delete_plan_handler),
        )
        .route(
            "/plans/{id}/itinerary",
            post(generate_itinerary_handler).get(itinerary_handler),
        )
        .route("/plans/{id}/cost", get(plan_cost_handler))
}

/// Admin catalog routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /destinations`        - Create a destination
/// - `PATCH  /destinations/{id}`   - Update a destination (including `is_active`)
/// - `DELETE /destinations/{id}`   - Delete a destination and its hotels
/// - `POST   /hotels`              - Create a hotel
/// - `PATCH  /hotels/{id}`         - Update a hotel
/// - `DELETE /hotels/{id}`         - Delete a hotel
/// - `POST   /transports`          - Create a transport option
/// - `PATCH  /transports/{id}`     - Update a transport option
/// - `DELETE /transports/{id}`     - Delete a transport option
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/destinations", post(create_destination_handler))
        .route(
            "/destinations/{id}",
            patch(update_destination_handler).delete(delete_destination_handler),
        )
        .route("/hotels", post(create_hotel_handler))
        .route(
            "/hotels/{id}",
            patch(update_hotel_handler).delete(delete_hotel_handler),
        )
        .route("/transports", post(create_transport_handler))
        .route(
            "/transports/{id}",
            delete(delete_transport_handler).patch(update_transport_handler),
        )
}
