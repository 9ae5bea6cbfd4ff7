//! Business logic services for the application layer.

pub mod auth_service;
pub mod catalog_service;
pub mod plan_service;
pub mod recommendation_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use plan_service::{
    CostBreakdown, ItineraryMode, PLACEHOLDER_DISTANCE_KM, PlanService, RecommendedPlanInput,
};
pub use recommendation_service::{RecommendationService, parse_distance_km};
