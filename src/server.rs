//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring and the Axum
//! server lifecycle.

use crate::application::services::{
    AuthService, CatalogService, PlanService, RecommendationService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgDestinationRepository, PgHotelRepository, PgPlanRepository, PgTransportRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Repositories and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let destination_repository = Arc::new(PgDestinationRepository::new(pool.clone()));
    let hotel_repository = Arc::new(PgHotelRepository::new(pool.clone()));
    let transport_repository = Arc::new(PgTransportRepository::new(pool.clone()));
    let plan_repository = Arc::new(PgPlanRepository::new(pool.clone()));

    let catalog_service = Arc::new(CatalogService::new(
        destination_repository.clone(),
        hotel_repository.clone(),
        transport_repository.clone(),
    ));
    let recommendation_service = Arc::new(RecommendationService::new(
        destination_repository,
        hotel_repository.clone(),
        transport_repository.clone(),
    ));
    let plan_service = Arc::new(PlanService::new(
        plan_repository,
        hotel_repository,
        transport_repository,
        recommendation_service.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(config.admin_token.clone()));

    let state = AppState {
        catalog_service,
        recommendation_service,
        plan_service,
        auth_service,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
