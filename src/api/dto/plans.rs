//! DTOs for travel plan and itinerary endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{CostBreakdown, ItineraryMode};
use crate::domain::entities::{ItineraryDay, TravelPlan};

/// Individual travel plan.
#[derive(Debug, Serialize)]
pub struct PlanItem {
    pub id: i64,
    pub destination_id: Option<i64>,
    pub hotel_id: Option<i64>,
    pub transport_id: Option<i64>,
    pub travel_date: NaiveDate,
    pub return_date: NaiveDate,
    pub budget: Option<Decimal>,
    pub num_travelers: i32,
    pub notes: String,
    pub trip_length_days: i64,
    pub created_at: DateTime<Utc>,
}

impl From<TravelPlan> for PlanItem {
    fn from(p: TravelPlan) -> Self {
        let trip_length_days = p.trip_length_days();
        Self {
            id: p.id,
            destination_id: p.destination_id,
            hotel_id: p.hotel_id,
            transport_id: p.transport_id,
            travel_date: p.travel_date,
            return_date: p.return_date,
            budget: p.budget,
            num_travelers: p.num_travelers,
            notes: p.notes,
            trip_length_days,
            created_at: p.created_at,
        }
    }
}

/// Response containing a list of plans.
#[derive(Debug, Serialize)]
pub struct PlanListResponse {
    pub items: Vec<PlanItem>,
}

/// Request to create a plan from explicit selections.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlanRequest {
    pub destination_id: Option<i64>,
    pub hotel_id: Option<i64>,
    pub transport_id: Option<i64>,
    pub travel_date: NaiveDate,
    pub return_date: NaiveDate,
    pub budget: Option<Decimal>,
    #[validate(range(min = 1))]
    pub num_travelers: i32,
    #[serde(default)]
    pub notes: String,
}

/// Request to build a plan from recommendations.
#[derive(Debug, Deserialize, Validate)]
pub struct RecommendedPlanRequest {
    pub travel_date: NaiveDate,
    pub return_date: NaiveDate,
    /// Budget tier driving the recommendation rules.
    #[validate(length(min = 1))]
    pub budget: String,
    #[validate(range(min = 1))]
    pub num_travelers: i32,
    pub interest: Option<String>,
    pub country: Option<String>,
    /// Optional monetary budget stored on the plan.
    pub budget_amount: Option<Decimal>,
}

/// One persisted itinerary row.
#[derive(Debug, Serialize)]
pub struct ItineraryDayItem {
    pub id: i64,
    pub day_number: i32,
    pub activities: String,
}

impl From<ItineraryDay> for ItineraryDayItem {
    fn from(d: ItineraryDay) -> Self {
        Self {
            id: d.id,
            day_number: d.day_number,
            activities: d.activities,
        }
    }
}

/// Request body for itinerary generation.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateItineraryRequest {
    /// What to do with previously generated rows.
    #[serde(default)]
    pub mode: ItineraryMode,
}

/// Response containing a plan's itinerary rows.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub days: Vec<ItineraryDayItem>,
}

/// Response for plan creation with recommendations.
#[derive(Debug, Serialize)]
pub struct PlanWithItineraryResponse {
    pub plan: PlanItem,
    pub itinerary: Vec<ItineraryDayItem>,
}

/// Cost estimate for a plan.
#[derive(Debug, Serialize)]
pub struct CostResponse {
    pub nights: i64,
    pub hotel_total: Decimal,
    pub transport_total: Decimal,
    pub total: Decimal,
}

impl From<CostBreakdown> for CostResponse {
    fn from(c: CostBreakdown) -> Self {
        Self {
            nights: c.nights,
            hotel_total: c.hotel_total,
            transport_total: c.transport_total,
            total: c.total,
        }
    }
}
