//! Repository trait for travel plans and their itinerary rows.

use crate::domain::entities::{ItineraryDay, NewItineraryDay, NewTravelPlan, TravelPlan};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for travel plans and owned itinerary days.
///
/// Itinerary rows are only ever written through their plan, so both live
/// behind one trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Creates a new travel plan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_plan: NewTravelPlan) -> Result<TravelPlan, AppError>;

    /// Finds a plan by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<TravelPlan>, AppError>;

    /// Lists all plans, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<TravelPlan>, AppError>;

    /// Deletes a plan and (via cascade) its itinerary days.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Appends generated day rows to a plan, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_days(
        &self,
        plan_id: i64,
        days: Vec<NewItineraryDay>,
    ) -> Result<Vec<ItineraryDay>, AppError>;

    /// Lists a plan's itinerary rows in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_days(&self, plan_id: i64) -> Result<Vec<ItineraryDay>, AppError>;

    /// Removes all itinerary rows of a plan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn clear_days(&self, plan_id: i64) -> Result<(), AppError>;
}
