//! Travel plan aggregate and its itinerary day rows.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// A user-facing travel plan.
///
/// Destination, hotel and transport are nullable: a plan may exist before
/// any selection is made, and referenced catalog rows may be removed later.
#[derive(Debug, Clone)]
pub struct TravelPlan {
    pub id: i64,
    pub destination_id: Option<i64>,
    pub hotel_id: Option<i64>,
    pub transport_id: Option<i64>,
    pub travel_date: NaiveDate,
    pub return_date: NaiveDate,
    pub budget: Option<Decimal>,
    pub num_travelers: i32,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl TravelPlan {
    /// Inclusive day count from travel date to return date.
    ///
    /// A same-day trip counts as 1; the value is non-positive when the
    /// return date precedes the travel date.
    pub fn trip_length_days(&self) -> i64 {
        (self.return_date - self.travel_date).num_days() + 1
    }
}

/// Input data for creating a new travel plan.
#[derive(Debug, Clone)]
pub struct NewTravelPlan {
    pub destination_id: Option<i64>,
    pub hotel_id: Option<i64>,
    pub transport_id: Option<i64>,
    pub travel_date: NaiveDate,
    pub return_date: NaiveDate,
    pub budget: Option<Decimal>,
    pub num_travelers: i32,
    pub notes: String,
}

/// One generated itinerary row belonging to a plan.
#[derive(Debug, Clone)]
pub struct ItineraryDay {
    pub id: i64,
    pub plan_id: i64,
    pub day_number: i32,
    pub activities: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for persisting a generated itinerary day.
#[derive(Debug, Clone)]
pub struct NewItineraryDay {
    pub day_number: i32,
    pub activities: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(travel: NaiveDate, ret: NaiveDate) -> TravelPlan {
        TravelPlan {
            id: 1,
            destination_id: None,
            hotel_id: None,
            transport_id: None,
            travel_date: travel,
            return_date: ret,
            budget: None,
            num_travelers: 2,
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_trip_length_inclusive() {
        let p = plan(
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 7, 5).unwrap(),
        );
        assert_eq!(p.trip_length_days(), 5);
    }

    #[test]
    fn test_trip_length_same_day() {
        let d = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        assert_eq!(plan(d, d).trip_length_days(), 1);
    }

    #[test]
    fn test_trip_length_inverted_dates() {
        let p = plan(
            NaiveDate::from_ymd_opt(2026, 7, 5).unwrap(),
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        );
        assert!(p.trip_length_days() <= 0);
    }
}
