//! DTOs for transport endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Transport, TransportMode};

/// Individual transport option.
#[derive(Debug, Serialize)]
pub struct TransportItem {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    pub distance_km: i64,
    pub price: Decimal,
    pub duration_hours: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Transport> for TransportItem {
    fn from(t: Transport) -> Self {
        Self {
            id: t.id,
            origin: t.origin,
            destination: t.destination,
            mode: t.mode,
            distance_km: t.distance_km,
            price: t.price,
            duration_hours: t.duration_hours,
            created_at: t.created_at,
        }
    }
}

/// Response containing a list of transport options.
#[derive(Debug, Serialize)]
pub struct TransportListResponse {
    pub items: Vec<TransportItem>,
}

/// Query parameters for transport recommendations.
///
/// `distance_km` stays a raw string so the handler can reject a malformed
/// value with a specific message instead of a generic extractor error.
#[derive(Debug, Deserialize)]
pub struct RecommendTransportParams {
    pub distance_km: Option<String>,
    pub budget: Option<String>,
}

/// Recommendation response with its candidate count.
#[derive(Debug, Serialize)]
pub struct TransportRecommendationsResponse {
    pub count: usize,
    pub recommendations: Vec<TransportItem>,
}

/// Request to create a transport option.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransportRequest {
    #[validate(length(min = 1, max = 100))]
    pub origin: String,
    #[validate(length(min = 1, max = 100))]
    pub destination: String,
    pub mode: TransportMode,
    #[validate(range(min = 1))]
    pub distance_km: i64,
    pub price: Decimal,
    pub duration_hours: f64,
}

/// Partial update for a transport option. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTransportRequest {
    #[validate(length(min = 1, max = 100))]
    pub origin: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub destination: Option<String>,
    pub mode: Option<TransportMode>,
    #[validate(range(min = 1))]
    pub distance_km: Option<i64>,
    pub price: Option<Decimal>,
    pub duration_hours: Option<f64>,
}
