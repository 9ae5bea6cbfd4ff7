//! Repository trait for destination catalog access.

use crate::domain::entities::{Destination, DestinationPatch, NewDestination};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the destination catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDestinationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Creates a new destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_destination: NewDestination) -> Result<Destination, AppError>;

    /// Finds a destination by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Destination>, AppError>;

    /// Lists destinations in storage order.
    ///
    /// When `only_active` is set, inactive destinations are excluded; the
    /// recommendation path always queries the active snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, only_active: bool) -> Result<Vec<Destination>, AppError>;

    /// Counts all destinations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Partially updates a destination. `None` fields are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no destination matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: DestinationPatch) -> Result<Destination, AppError>;

    /// Deletes a destination.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
