//! DTOs for hotel endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{BudgetLevel, Hotel};

/// Individual hotel information.
#[derive(Debug, Serialize)]
pub struct HotelItem {
    pub id: i64,
    pub destination_id: i64,
    pub name: String,
    pub stars: i32,
    pub price_per_night: Decimal,
    pub budget_category: BudgetLevel,
    pub description: String,
    pub amenities: String,
    pub created_at: DateTime<Utc>,
}

impl From<Hotel> for HotelItem {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id,
            destination_id: h.destination_id,
            name: h.name,
            stars: h.stars,
            price_per_night: h.price_per_night,
            budget_category: h.budget_category,
            description: h.description,
            amenities: h.amenities,
            created_at: h.created_at,
        }
    }
}

/// Response containing a list of hotels.
#[derive(Debug, Serialize)]
pub struct HotelListResponse {
    pub items: Vec<HotelItem>,
}

/// Query for listing the hotels of a destination.
#[derive(Debug, Deserialize)]
pub struct ListHotelsQuery {
    pub destination_id: Option<i64>,
}

/// Query parameters for hotel recommendations.
#[derive(Debug, Deserialize)]
pub struct RecommendHotelsParams {
    pub destination_id: Option<i64>,
    pub budget: Option<String>,
}

/// Recommendation response with its candidate count.
#[derive(Debug, Serialize)]
pub struct HotelRecommendationsResponse {
    pub count: usize,
    pub recommendations: Vec<HotelItem>,
}

/// Request to create a hotel.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHotelRequest {
    pub destination_id: i64,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 1, max = 5))]
    pub stars: i32,
    pub price_per_night: Decimal,
    pub budget_category: BudgetLevel,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: String,
}

/// Partial update for a hotel. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHotelRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub stars: Option<i32>,
    pub price_per_night: Option<Decimal>,
    pub budget_category: Option<BudgetLevel>,
    pub description: Option<String>,
    pub amenities: Option<String>,
}
