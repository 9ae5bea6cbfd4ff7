//! Handlers for travel plan and itinerary endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::plans::{
    CostResponse, CreatePlanRequest, GenerateItineraryRequest, ItineraryDayItem,
    ItineraryResponse, PlanItem, PlanListResponse, PlanWithItineraryResponse,
    RecommendedPlanRequest,
};
use crate::application::services::RecommendedPlanInput;
use crate::domain::entities::NewTravelPlan;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a plan from explicit selections.
///
/// # Endpoint
///
/// `POST /api/plans`
///
/// # Errors
///
/// Returns 400 if validation fails or the return date precedes the travel
/// date.
pub async fn create_plan_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanRequest>,
) -> Result<(StatusCode, Json<PlanItem>), AppError> {
    payload.validate()?;

    let plan = state
        .plan_service
        .create_plan(NewTravelPlan {
            destination_id: payload.destination_id,
            hotel_id: payload.hotel_id,
            transport_id: payload.transport_id,
            travel_date: payload.travel_date,
            return_date: payload.return_date,
            budget: payload.budget,
            num_travelers: payload.num_travelers,
            notes: payload.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(plan.into())))
}

/// Lists all plans.
///
/// # Endpoint
///
/// `GET /api/plans`
pub async fn plan_list_handler(
    State(state): State<AppState>,
) -> Result<Json<PlanListResponse>, AppError> {
    let plans = state.plan_service.list_plans().await?;

    Ok(Json(PlanListResponse {
        items: plans.into_iter().map(PlanItem::from).collect(),
    }))
}

/// Retrieves a single plan.
///
/// # Endpoint
///
/// `GET /api/plans/{id}`
///
/// # Errors
///
/// Returns 404 if the plan does not exist.
pub async fn plan_get_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PlanItem>, AppError> {
    let plan = state.plan_service.get_plan(id).await?;
    Ok(Json(plan.into()))
}

/// Deletes a plan and its itinerary.
///
/// # Endpoint
///
/// `DELETE /api/plans/{id}`
///
/// # Errors
///
/// Returns 404 if the plan does not exist.
pub async fn delete_plan_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.plan_service.delete_plan(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Builds a complete plan from recommendations.
///
/// # Endpoint
///
/// `POST /api/plans/recommended`
///
/// Picks the first recommended destination, hotel and transport, creates
/// the plan and generates its itinerary in one call.
///
/// # Errors
///
/// Returns 400 if validation fails or the trip length is not positive.
/// Returns 404 if no destination matches the criteria; nothing is
/// persisted in that case.
pub async fn create_recommended_plan_handler(
    State(state): State<AppState>,
    Json(payload): Json<RecommendedPlanRequest>,
) -> Result<(StatusCode, Json<PlanWithItineraryResponse>), AppError> {
    payload.validate()?;

    let (plan, days) = state
        .plan_service
        .create_plan_with_recommendations(RecommendedPlanInput {
            travel_date: payload.travel_date,
            return_date: payload.return_date,
            budget: payload.budget,
            num_travelers: payload.num_travelers,
            interest: payload.interest,
            country: payload.country,
            budget_amount: payload.budget_amount,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PlanWithItineraryResponse {
            plan: plan.into(),
            itinerary: days.into_iter().map(ItineraryDayItem::from).collect(),
        }),
    ))
}

/// Generates the itinerary for an existing plan.
///
/// # Endpoint
///
/// `POST /api/plans/{id}/itinerary`
///
/// The optional body selects what happens to previously generated rows:
/// `{"mode": "append"}` (default) keeps them, `{"mode": "replace"}` clears
/// them first.
///
/// # Errors
///
/// Returns 400 if the trip length is not positive.
/// Returns 404 if the plan does not exist.
pub async fn generate_itinerary_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    payload: Option<Json<GenerateItineraryRequest>>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let request = payload.map(|Json(r)| r).unwrap_or_default();

    let days = state.plan_service.generate_itinerary(id, request.mode).await?;

    Ok(Json(ItineraryResponse {
        days: days.into_iter().map(ItineraryDayItem::from).collect(),
    }))
}

/// Lists a plan's persisted itinerary.
///
/// # Endpoint
///
/// `GET /api/plans/{id}/itinerary`
///
/// # Errors
///
/// Returns 404 if the plan does not exist.
pub async fn itinerary_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let days = state.plan_service.itinerary(id).await?;

    Ok(Json(ItineraryResponse {
        days: days.into_iter().map(ItineraryDayItem::from).collect(),
    }))
}

/// Estimates the cost of a plan.
///
/// # Endpoint
///
/// `GET /api/plans/{id}/cost`
///
/// Missing hotel or transport selections contribute zero.
///
/// # Errors
///
/// Returns 404 if the plan does not exist.
pub async fn plan_cost_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CostResponse>, AppError> {
    let cost = state.plan_service.plan_cost(id).await?;
    Ok(Json(cost.into()))
}
