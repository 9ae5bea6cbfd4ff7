//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, CatalogService, PlanService, RecommendationService};

/// Handles to the application services, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub recommendation_service: Arc<RecommendationService>,
    pub plan_service: Arc<PlanService>,
    pub auth_service: Arc<AuthService>,
}
