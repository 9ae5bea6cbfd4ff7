//! Handlers for transport endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::transports::{
    CreateTransportRequest, RecommendTransportParams, TransportItem, TransportListResponse,
    TransportRecommendationsResponse, UpdateTransportRequest,
};
use crate::application::services::parse_distance_km;
use crate::domain::entities::{NewTransport, TransportPatch};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all transport options.
///
/// # Endpoint
///
/// `GET /api/transports`
pub async fn transport_list_handler(
    State(state): State<AppState>,
) -> Result<Json<TransportListResponse>, AppError> {
    let transports = state.catalog_service.list_transports().await?;

    Ok(Json(TransportListResponse {
        items: transports.into_iter().map(TransportItem::from).collect(),
    }))
}

/// Retrieves a single transport option.
///
/// # Endpoint
///
/// `GET /api/transports/{id}`
///
/// # Errors
///
/// Returns 404 if the transport does not exist.
pub async fn transport_get_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TransportItem>, AppError> {
    let transport = state.catalog_service.get_transport(id).await?;
    Ok(Json(transport.into()))
}

/// Recommends transport for a distance.
///
/// # Endpoint
///
/// `GET /api/transports/recommended?distance_km=500&budget=low`
///
/// The distance selects the mode; `budget` is accepted but does not filter
/// the candidates.
///
/// # Errors
///
/// Returns 400 if `distance_km` is missing or not an integer.
pub async fn recommended_transport_handler(
    State(state): State<AppState>,
    Query(params): Query<RecommendTransportParams>,
) -> Result<Json<TransportRecommendationsResponse>, AppError> {
    let Some(raw_distance) = params.distance_km else {
        return Err(AppError::bad_request("distance_km is required", json!({})));
    };

    let distance_km = parse_distance_km(&raw_distance)?;

    let transports = state
        .recommendation_service
        .recommend_transports(distance_km, params.budget.as_deref())
        .await?;

    Ok(Json(TransportRecommendationsResponse {
        count: transports.len(),
        recommendations: transports.into_iter().map(TransportItem::from).collect(),
    }))
}

/// Creates a transport option.
///
/// # Endpoint
///
/// `POST /api/admin/transports`
///
/// # Errors
///
/// Returns 400 if validation fails.
pub async fn create_transport_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransportRequest>,
) -> Result<(StatusCode, Json<TransportItem>), AppError> {
    payload.validate()?;

    let transport = state
        .catalog_service
        .create_transport(NewTransport {
            origin: payload.origin,
            destination: payload.destination,
            mode: payload.mode,
            distance_km: payload.distance_km,
            price: payload.price,
            duration_hours: payload.duration_hours,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(transport.into())))
}

/// Partially updates a transport option.
///
/// # Endpoint
///
/// `PATCH /api/admin/transports/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the transport does not exist.
pub async fn update_transport_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateTransportRequest>,
) -> Result<Json<TransportItem>, AppError> {
    payload.validate()?;

    let patch = TransportPatch {
        origin: payload.origin,
        destination: payload.destination,
        mode: payload.mode,
        distance_km: payload.distance_km,
        price: payload.price,
        duration_hours: payload.duration_hours,
    };

    let transport = state.catalog_service.update_transport(id, patch).await?;
    Ok(Json(transport.into()))
}

/// Deletes a transport option.
///
/// # Endpoint
///
/// `DELETE /api/admin/transports/{id}`
///
/// # Errors
///
/// Returns 404 if the transport does not exist.
pub async fn delete_transport_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.catalog_service.delete_transport(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
