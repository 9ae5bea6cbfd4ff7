//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`   - Health check: database connectivity (public)
//! - `/api/*`        - Catalog reads, recommendations, plans (public)
//! - `/api/admin/*`  - Catalog management (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on the admin nest
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let admin_router = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = api::routes::public_routes().nest("/admin", admin_router);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
