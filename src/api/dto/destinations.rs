//! DTOs for destination endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{BudgetLevel, Destination, Objective, TravelCategory};

/// Individual destination information.
#[derive(Debug, Serialize)]
pub struct DestinationItem {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub description: String,
    pub location: String,
    pub category: TravelCategory,
    pub best_season: String,
    pub budget_level: BudgetLevel,
    pub budget_min: Option<Decimal>,
    pub budget_max: Option<Decimal>,
    pub objectives_supported: Vec<Objective>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Destination> for DestinationItem {
    fn from(d: Destination) -> Self {
        Self {
            id: d.id,
            name: d.name,
            country: d.country,
            city: d.city,
            description: d.description,
            location: d.location,
            category: d.category,
            best_season: d.best_season,
            budget_level: d.budget_level,
            budget_min: d.budget_min,
            budget_max: d.budget_max,
            objectives_supported: d.objectives_supported,
            is_active: d.is_active,
            created_at: d.created_at,
        }
    }
}

/// Response containing a list of destinations.
#[derive(Debug, Serialize)]
pub struct DestinationListResponse {
    pub items: Vec<DestinationItem>,
}

/// Query for the plain destination listing.
#[derive(Debug, Deserialize)]
pub struct ListDestinationsQuery {
    /// When true, inactive destinations are excluded.
    #[serde(default)]
    pub active_only: bool,
}

/// Query parameters for destination recommendations.
///
/// Budget bounds arrive as raw strings: a malformed bound is dropped
/// silently instead of failing the request.
#[derive(Debug, Deserialize, Default)]
pub struct RecommendDestinationsParams {
    pub budget: Option<String>,
    pub budget_min: Option<String>,
    pub budget_max: Option<String>,
    pub interest: Option<String>,
    pub country: Option<String>,
    pub location: Option<String>,
    pub objective: Option<String>,
}

/// Recommendation response with its candidate count.
#[derive(Debug, Serialize)]
pub struct DestinationRecommendationsResponse {
    pub count: usize,
    pub recommendations: Vec<DestinationItem>,
}

/// Request to create a destination.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDestinationRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub category: TravelCategory,
    #[serde(default)]
    pub best_season: String,
    pub budget_level: BudgetLevel,
    pub budget_min: Option<Decimal>,
    pub budget_max: Option<Decimal>,
    #[serde(default)]
    pub objectives_supported: Vec<Objective>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Partial update for a destination.
///
/// All fields are optional; `budget_min: null` / `budget_max: null` clear
/// the respective bound.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDestinationRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<TravelCategory>,
    pub best_season: Option<String>,
    pub budget_level: Option<BudgetLevel>,
    #[serde(default, deserialize_with = "super::deserialize_some")]
    pub budget_min: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "super::deserialize_some")]
    pub budget_max: Option<Option<Decimal>>,
    pub objectives_supported: Option<Vec<Objective>>,
    pub is_active: Option<bool>,
}
