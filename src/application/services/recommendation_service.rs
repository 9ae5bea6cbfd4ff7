//! Recommendation queries: catalog snapshot in, rule-filtered candidates out.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Destination, Hotel, Transport};
use crate::domain::repositories::{DestinationRepository, HotelRepository, TransportRepository};
use crate::domain::rules::{self, Criteria};
use crate::error::AppError;

/// Service answering the three recommendation operations.
///
/// Fetches the relevant catalog snapshot through the repositories and
/// delegates all decision logic to [`crate::domain::rules`]. Holds no
/// state of its own; every call works on fresh data.
pub struct RecommendationService {
    destinations: Arc<dyn DestinationRepository>,
    hotels: Arc<dyn HotelRepository>,
    transports: Arc<dyn TransportRepository>,
}

impl RecommendationService {
    /// Creates a new recommendation service.
    pub fn new(
        destinations: Arc<dyn DestinationRepository>,
        hotels: Arc<dyn HotelRepository>,
        transports: Arc<dyn TransportRepository>,
    ) -> Self {
        Self {
            destinations,
            hotels,
            transports,
        }
    }

    /// Destinations matching every supplied criterion, storage order.
    ///
    /// Operates on the active snapshot only. An empty result is a normal
    /// outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn recommend_destinations(
        &self,
        criteria: &Criteria,
    ) -> Result<Vec<Destination>, AppError> {
        let catalog = self.destinations.list(true).await?;
        Ok(rules::recommend_destinations(&catalog, criteria))
    }

    /// Hotels of one destination admitted by the budget tier.
    ///
    /// An unknown destination id yields an empty list, matching the
    /// behavior of an over-constrained filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn recommend_hotels(
        &self,
        destination_id: i64,
        budget: Option<&str>,
    ) -> Result<Vec<Hotel>, AppError> {
        let hotels = self.hotels.list_by_destination(destination_id).await?;
        Ok(rules::recommend_hotels(&hotels, budget))
    }

    /// Transport candidates for a distance.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn recommend_transports(
        &self,
        distance_km: i64,
        budget: Option<&str>,
    ) -> Result<Vec<Transport>, AppError> {
        let transports = self.transports.list().await?;
        Ok(rules::recommend_transports(&transports, distance_km, budget))
    }
}

/// Parses the mandatory `distance_km` input.
///
/// Unlike the budget bounds, distance is required for the transport rule,
/// so a missing or malformed value fails the request.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the value is not an integer.
pub fn parse_distance_km(raw: &str) -> Result<i64, AppError> {
    raw.trim().parse::<i64>().map_err(|_| {
        AppError::bad_request(
            "distance_km must be an integer",
            json!({ "distance_km": raw }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        BudgetLevel, Objective, TransportMode, TravelCategory,
    };
    use crate::domain::repositories::{
        MockDestinationRepository, MockHotelRepository, MockTransportRepository,
    };
    use crate::domain::rules::RawCriteria;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn destination(id: i64, category: TravelCategory) -> Destination {
        Destination {
            id,
            name: format!("Destination {id}"),
            country: "Kenya".to_string(),
            city: "Nairobi".to_string(),
            description: String::new(),
            location: String::new(),
            category,
            best_season: String::new(),
            budget_level: BudgetLevel::Medium,
            budget_min: None,
            budget_max: None,
            objectives_supported: vec![Objective::Adventure],
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn service(
        destinations: MockDestinationRepository,
        hotels: MockHotelRepository,
        transports: MockTransportRepository,
    ) -> RecommendationService {
        RecommendationService::new(Arc::new(destinations), Arc::new(hotels), Arc::new(transports))
    }

    #[tokio::test]
    async fn test_recommend_destinations_queries_active_snapshot() {
        let mut destinations = MockDestinationRepository::new();
        destinations
            .expect_list()
            .withf(|only_active| *only_active)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    destination(1, TravelCategory::Wildlife),
                    destination(2, TravelCategory::Beach),
                ])
            });

        let service = service(
            destinations,
            MockHotelRepository::new(),
            MockTransportRepository::new(),
        );

        let criteria = Criteria::from_raw(RawCriteria {
            interest: Some("wildlife".to_string()),
            ..Default::default()
        });

        let result = service.recommend_destinations(&criteria).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[tokio::test]
    async fn test_recommend_transports_selects_mode_by_distance() {
        let mut transports = MockTransportRepository::new();
        transports.expect_list().times(1).returning(|| {
            let base = Transport {
                id: 1,
                origin: "Nairobi".to_string(),
                destination: "Mombasa".to_string(),
                mode: TransportMode::Train,
                distance_km: 480,
                price: Decimal::from(40),
                duration_hours: 5.0,
                created_at: Utc::now(),
            };
            let flight = Transport {
                id: 2,
                mode: TransportMode::Flight,
                ..base.clone()
            };
            Ok(vec![base, flight])
        });

        let service = service(
            MockDestinationRepository::new(),
            MockHotelRepository::new(),
            transports,
        );

        let result = service.recommend_transports(500, None).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].mode, TransportMode::Train);
    }

    #[test]
    fn test_parse_distance_km() {
        assert_eq!(parse_distance_km("500").unwrap(), 500);
        assert_eq!(parse_distance_km(" 42 ").unwrap(), 42);

        let err = parse_distance_km("far").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
