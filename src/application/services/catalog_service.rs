//! Catalog management service for destinations, hotels and transports.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{
    Destination, DestinationPatch, Hotel, HotelPatch, NewDestination, NewHotel, NewTransport,
    Transport, TransportPatch,
};
use crate::domain::repositories::{DestinationRepository, HotelRepository, TransportRepository};
use crate::error::AppError;

/// Service behind the catalog read and admin CRUD endpoints.
///
/// Thin orchestration over the repositories plus the referential checks
/// the database alone would only report as opaque constraint failures.
pub struct CatalogService {
    destinations: Arc<dyn DestinationRepository>,
    hotels: Arc<dyn HotelRepository>,
    transports: Arc<dyn TransportRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
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

    // ── Destinations ────────────────────────────────────────────────────

    /// Creates a destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_destination(
        &self,
        new_destination: NewDestination,
    ) -> Result<Destination, AppError> {
        self.destinations.create(new_destination).await
    }

    /// Lists destinations, optionally restricted to active ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_destinations(&self, only_active: bool) -> Result<Vec<Destination>, AppError> {
        self.destinations.list(only_active).await
    }

    /// Retrieves a destination by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the destination does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_destination(&self, id: i64) -> Result<Destination, AppError> {
        self.destinations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Destination not found", json!({ "id": id })))
    }

    /// Partially updates a destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the destination does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_destination(
        &self,
        id: i64,
        patch: DestinationPatch,
    ) -> Result<Destination, AppError> {
        self.destinations.update(id, patch).await
    }

    /// Deletes a destination and, via cascade, its hotels.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the destination does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_destination(&self, id: i64) -> Result<(), AppError> {
        if !self.destinations.delete(id).await? {
            return Err(AppError::not_found(
                "Destination not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    /// Counts destinations; used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn destination_count(&self) -> Result<i64, AppError> {
        self.destinations.count().await
    }

    // ── Hotels ──────────────────────────────────────────────────────────

    /// Creates a hotel after confirming its destination exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the destination does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_hotel(&self, new_hotel: NewHotel) -> Result<Hotel, AppError> {
        if self
            .destinations
            .find_by_id(new_hotel.destination_id)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request(
                "Destination does not exist",
                json!({ "destination_id": new_hotel.destination_id }),
            ));
        }

        self.hotels.create(new_hotel).await
    }

    /// Lists the hotels of one destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn hotels_for_destination(
        &self,
        destination_id: i64,
    ) -> Result<Vec<Hotel>, AppError> {
        self.hotels.list_by_destination(destination_id).await
    }

    /// Retrieves a hotel by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hotel does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_hotel(&self, id: i64) -> Result<Hotel, AppError> {
        self.hotels
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Hotel not found", json!({ "id": id })))
    }

    /// Partially updates a hotel.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hotel does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_hotel(&self, id: i64, patch: HotelPatch) -> Result<Hotel, AppError> {
        self.hotels.update(id, patch).await
    }

    /// Deletes a hotel.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hotel does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_hotel(&self, id: i64) -> Result<(), AppError> {
        if !self.hotels.delete(id).await? {
            return Err(AppError::not_found("Hotel not found", json!({ "id": id })));
        }
        Ok(())
    }

    // ── Transports ──────────────────────────────────────────────────────

    /// Creates a transport option.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_transport(
        &self,
        new_transport: NewTransport,
    ) -> Result<Transport, AppError> {
        self.transports.create(new_transport).await
    }

    /// Lists all transport options.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_transports(&self) -> Result<Vec<Transport>, AppError> {
        self.transports.list().await
    }

    /// Retrieves a transport option by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the transport does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_transport(&self, id: i64) -> Result<Transport, AppError> {
        self.transports
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Transport not found", json!({ "id": id })))
    }

    /// Partially updates a transport option.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the transport does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_transport(
        &self,
        id: i64,
        patch: TransportPatch,
    ) -> Result<Transport, AppError> {
        self.transports.update(id, patch).await
    }

    /// Deletes a transport option.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the transport does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_transport(&self, id: i64) -> Result<(), AppError> {
        if !self.transports.delete(id).await? {
            return Err(AppError::not_found(
                "Transport not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BudgetLevel;
    use crate::domain::repositories::{
        MockDestinationRepository, MockHotelRepository, MockTransportRepository,
    };
    use rust_decimal::Decimal;

    fn new_hotel(destination_id: i64) -> NewHotel {
        NewHotel {
            destination_id,
            name: "Test Lodge".to_string(),
            stars: 3,
            price_per_night: Decimal::from(80),
            budget_category: BudgetLevel::Medium,
            description: String::new(),
            amenities: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_hotel_rejects_unknown_destination() {
        let mut destinations = MockDestinationRepository::new();
        destinations
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let mut hotels = MockHotelRepository::new();
        hotels.expect_create().times(0);

        let service = CatalogService::new(
            Arc::new(destinations),
            Arc::new(hotels),
            Arc::new(MockTransportRepository::new()),
        );

        let result = service.create_hotel(new_hotel(99)).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_destination_not_found() {
        let mut destinations = MockDestinationRepository::new();
        destinations.expect_delete().times(1).returning(|_| Ok(false));

        let service = CatalogService::new(
            Arc::new(destinations),
            Arc::new(MockHotelRepository::new()),
            Arc::new(MockTransportRepository::new()),
        );

        let result = service.delete_destination(12).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
