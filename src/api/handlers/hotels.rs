//! Handlers for hotel endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::hotels::{
    CreateHotelRequest, HotelItem, HotelListResponse, HotelRecommendationsResponse,
    ListHotelsQuery, RecommendHotelsParams, UpdateHotelRequest,
};
use crate::domain::entities::{HotelPatch, NewHotel};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the hotels of a destination.
///
/// # Endpoint
///
/// `GET /api/hotels?destination_id=3`
///
/// # Errors
///
/// Returns 400 if `destination_id` is missing.
pub async fn hotel_list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListHotelsQuery>,
) -> Result<Json<HotelListResponse>, AppError> {
    let Some(destination_id) = query.destination_id else {
        return Err(AppError::bad_request("destination_id is required", json!({})));
    };

    let hotels = state
        .catalog_service
        .hotels_for_destination(destination_id)
        .await?;

    Ok(Json(HotelListResponse {
        items: hotels.into_iter().map(HotelItem::from).collect(),
    }))
}

/// Retrieves a single hotel.
///
/// # Endpoint
///
/// `GET /api/hotels/{id}`
///
/// # Errors
///
/// Returns 404 if the hotel does not exist.
pub async fn hotel_get_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<HotelItem>, AppError> {
    let hotel = state.catalog_service.get_hotel(id).await?;
    Ok(Json(hotel.into()))
}

/// Recommends hotels for a destination and budget tier.
///
/// # Endpoint
///
/// `GET /api/hotels/recommended?destination_id=3&budget=low`
///
/// The star band and the budget category are filtered independently, so
/// the result can be empty even for a destination with hotels.
///
/// # Errors
///
/// Returns 400 if `destination_id` is missing.
pub async fn recommended_hotels_handler(
    State(state): State<AppState>,
    Query(params): Query<RecommendHotelsParams>,
) -> Result<Json<HotelRecommendationsResponse>, AppError> {
    let Some(destination_id) = params.destination_id else {
        return Err(AppError::bad_request("destination_id is required", json!({})));
    };

    let hotels = state
        .recommendation_service
        .recommend_hotels(destination_id, params.budget.as_deref())
        .await?;

    Ok(Json(HotelRecommendationsResponse {
        count: hotels.len(),
        recommendations: hotels.into_iter().map(HotelItem::from).collect(),
    }))
}

/// Creates a hotel.
///
/// # Endpoint
///
/// `POST /api/admin/hotels`
///
/// # Errors
///
/// Returns 400 if validation fails or the destination does not exist.
pub async fn create_hotel_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateHotelRequest>,
) -> Result<(StatusCode, Json<HotelItem>), AppError> {
    payload.validate()?;

    let hotel = state
        .catalog_service
        .create_hotel(NewHotel {
            destination_id: payload.destination_id,
            name: payload.name,
            stars: payload.stars,
            price_per_night: payload.price_per_night,
            budget_category: payload.budget_category,
            description: payload.description,
            amenities: payload.amenities,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(hotel.into())))
}

/// Partially updates a hotel.
///
/// # Endpoint
///
/// `PATCH /api/admin/hotels/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the hotel does not exist.
pub async fn update_hotel_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateHotelRequest>,
) -> Result<Json<HotelItem>, AppError> {
    payload.validate()?;

    let patch = HotelPatch {
        name: payload.name,
        stars: payload.stars,
        price_per_night: payload.price_per_night,
        budget_category: payload.budget_category,
        description: payload.description,
        amenities: payload.amenities,
    };

    let hotel = state.catalog_service.update_hotel(id, patch).await?;
    Ok(Json(hotel.into()))
}

/// Deletes a hotel.
///
/// # Endpoint
///
/// `DELETE /api/admin/hotels/{id}`
///
/// # Errors
///
/// Returns 404 if the hotel does not exist.
pub async fn delete_hotel_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.catalog_service.delete_hotel(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
