//! Repository trait for hotel catalog access.

use crate::domain::entities::{Hotel, HotelPatch, NewHotel};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for hotels, always scoped to their destination.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Creates a new hotel under its destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_hotel: NewHotel) -> Result<Hotel, AppError>;

    /// Finds a hotel by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Hotel>, AppError>;

    /// Lists the hotels of one destination in storage order.
    ///
    /// An unknown destination id yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_destination(&self, destination_id: i64) -> Result<Vec<Hotel>, AppError>;

    /// Partially updates a hotel. `None` fields are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no hotel matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: HotelPatch) -> Result<Hotel, AppError>;

    /// Deletes a hotel.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
