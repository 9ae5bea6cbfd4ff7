//! Hotel entity owned by a destination.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::entities::BudgetLevel;

/// A hotel belonging to exactly one destination.
///
/// `stars` and `budget_category` are independent columns; the recommendation
/// rule intersects them at read time and does not enforce consistency here.
#[derive(Debug, Clone)]
pub struct Hotel {
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

/// Input data for creating a new hotel.
#[derive(Debug, Clone)]
pub struct NewHotel {
    pub destination_id: i64,
    pub name: String,
    pub stars: i32,
    pub price_per_night: Decimal,
    pub budget_category: BudgetLevel,
    pub description: String,
    pub amenities: String,
}

/// Partial update for an existing hotel. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub stars: Option<i32>,
    pub price_per_night: Option<Decimal>,
    pub budget_category: Option<BudgetLevel>,
    pub description: Option<String>,
    pub amenities: Option<String>,
}
