//! Repository trait for transport catalog access.

use crate::domain::entities::{NewTransport, Transport, TransportPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for transport options.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransportRepository: Send + Sync {
    /// Creates a new transport option.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_transport: NewTransport) -> Result<Transport, AppError>;

    /// Finds a transport option by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Transport>, AppError>;

    /// Lists all transport options in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Transport>, AppError>;

    /// Partially updates a transport option. `None` fields are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no transport matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: TransportPatch) -> Result<Transport, AppError>;

    /// Deletes a transport option.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
