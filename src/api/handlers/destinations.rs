//! Handlers for destination endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::destinations::{
    CreateDestinationRequest, DestinationItem, DestinationListResponse,
    DestinationRecommendationsResponse, ListDestinationsQuery, RecommendDestinationsParams,
    UpdateDestinationRequest,
};
use crate::domain::entities::{DestinationPatch, NewDestination};
use crate::domain::rules::{Criteria, RawCriteria};
use crate::error::AppError;
use crate::state::AppState;

/// Lists catalog destinations.
///
/// # Endpoint
///
/// `GET /api/destinations?active_only=true`
pub async fn destination_list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListDestinationsQuery>,
) -> Result<Json<DestinationListResponse>, AppError> {
    let destinations = state
        .catalog_service
        .list_destinations(query.active_only)
        .await?;

    Ok(Json(DestinationListResponse {
        items: destinations.into_iter().map(DestinationItem::from).collect(),
    }))
}

/// Retrieves a single destination.
///
/// # Endpoint
///
/// `GET /api/destinations/{id}`
///
/// # Errors
///
/// Returns 404 if the destination does not exist.
pub async fn destination_get_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DestinationItem>, AppError> {
    let destination = state.catalog_service.get_destination(id).await?;
    Ok(Json(destination.into()))
}

/// Recommends destinations for the supplied criteria.
///
/// # Endpoint
///
/// `GET /api/destinations/recommended?budget=low&interest=beach&country=portugal`
///
/// All query parameters are optional; absent ones impose no constraint.
/// An empty recommendation list is a normal 200 response.
pub async fn recommended_destinations_handler(
    State(state): State<AppState>,
    Query(params): Query<RecommendDestinationsParams>,
) -> Result<Json<DestinationRecommendationsResponse>, AppError> {
    let criteria = Criteria::from_raw(RawCriteria {
        budget: params.budget,
        budget_min: params.budget_min,
        budget_max: params.budget_max,
        interest: params.interest,
        country: params.country,
        location: params.location,
        objective: params.objective,
    });

    let destinations = state
        .recommendation_service
        .recommend_destinations(&criteria)
        .await?;

    Ok(Json(DestinationRecommendationsResponse {
        count: destinations.len(),
        recommendations: destinations.into_iter().map(DestinationItem::from).collect(),
    }))
}

/// Creates a destination.
///
/// # Endpoint
///
/// `POST /api/admin/destinations`
///
/// # Errors
///
/// Returns 400 if validation fails.
pub async fn create_destination_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateDestinationRequest>,
) -> Result<(StatusCode, Json<DestinationItem>), AppError> {
    payload.validate()?;

    let destination = state
        .catalog_service
        .create_destination(NewDestination {
            name: payload.name,
            country: payload.country,
            city: payload.city,
            description: payload.description,
            location: payload.location,
            category: payload.category,
            best_season: payload.best_season,
            budget_level: payload.budget_level,
            budget_min: payload.budget_min,
            budget_max: payload.budget_max,
            objectives_supported: payload.objectives_supported,
            is_active: payload.is_active,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(destination.into())))
}

/// Partially updates a destination.
///
/// # Endpoint
///
/// `PATCH /api/admin/destinations/{id}`
///
/// `budget_min: null` / `budget_max: null` clear the bounds; absent fields
/// are left unchanged.
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the destination does not exist.
pub async fn update_destination_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateDestinationRequest>,
) -> Result<Json<DestinationItem>, AppError> {
    payload.validate()?;

    let patch = DestinationPatch {
        name: payload.name,
        country: payload.country,
        city: payload.city,
        description: payload.description,
        location: payload.location,
        category: payload.category,
        best_season: payload.best_season,
        budget_level: payload.budget_level,
        budget_min: payload.budget_min,
        budget_max: payload.budget_max,
        objectives_supported: payload.objectives_supported,
        is_active: payload.is_active,
    };

    let destination = state.catalog_service.update_destination(id, patch).await?;
    Ok(Json(destination.into()))
}

/// Deletes a destination and, via cascade, its hotels.
///
/// # Endpoint
///
/// `DELETE /api/admin/destinations/{id}`
///
/// # Errors
///
/// Returns 404 if the destination does not exist.
pub async fn delete_destination_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.catalog_service.delete_destination(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
