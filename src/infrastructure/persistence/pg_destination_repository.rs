//! PostgreSQL implementation of the destination repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Destination, DestinationPatch, NewDestination};
use crate::domain::repositories::DestinationRepository;
use crate::error::AppError;

use super::parse_stored;

const COLUMNS: &str = "id, name, country, city, description, location, category, best_season, \
                       budget_level, budget_min, budget_max, objectives_supported, is_active, \
                       created_at";

/// PostgreSQL repository for the destination catalog.
pub struct PgDestinationRepository {
    pool: Arc<PgPool>,
}

impl PgDestinationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DestinationRow {
    id: i64,
    name: String,
    country: String,
    city: String,
    description: String,
    location: String,
    category: String,
    best_season: String,
    budget_level: String,
    budget_min: Option<Decimal>,
    budget_max: Option<Decimal>,
    objectives_supported: serde_json::Value,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl DestinationRow {
    fn into_entity(self) -> Result<Destination, AppError> {
        Ok(Destination {
            id: self.id,
            name: self.name,
            country: self.country,
            city: self.city,
            description: self.description,
            location: self.location,
            category: parse_stored(&self.category, "destinations.category")?,
            best_season: self.best_season,
            budget_level: parse_stored(&self.budget_level, "destinations.budget_level")?,
            budget_min: self.budget_min,
            budget_max: self.budget_max,
            objectives_supported: serde_json::from_value(self.objectives_supported).map_err(
                |e| {
                    AppError::internal(
                        "Corrupt objectives_supported value",
                        serde_json::json!({ "reason": e.to_string() }),
                    )
                },
            )?,
            is_active: self.is_active,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl DestinationRepository for PgDestinationRepository {
    async fn create(&self, new_destination: NewDestination) -> Result<Destination, AppError> {
        let objectives = serde_json::to_value(&new_destination.objectives_supported)
            .unwrap_or_else(|_| serde_json::Value::Array(vec![]));

        let row = sqlx::query_as::<_, DestinationRow>(&format!(
            r#"
            INSERT INTO destinations
                (name, country, city, description, location, category, best_season,
                 budget_level, budget_min, budget_max, objectives_supported, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new_destination.name)
        .bind(&new_destination.country)
        .bind(&new_destination.city)
        .bind(&new_destination.description)
        .bind(&new_destination.location)
        .bind(new_destination.category.as_str())
        .bind(&new_destination.best_season)
        .bind(new_destination.budget_level.as_str())
        .bind(new_destination.budget_min)
        .bind(new_destination.budget_max)
        .bind(objectives)
        .bind(new_destination.is_active)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_entity()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Destination>, AppError> {
        let row = sqlx::query_as::<_, DestinationRow>(&format!(
            "SELECT {COLUMNS} FROM destinations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(DestinationRow::into_entity).transpose()
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Destination>, AppError> {
        let rows = sqlx::query_as::<_, DestinationRow>(&format!(
            "SELECT {COLUMNS} FROM destinations WHERE is_active OR NOT $1 ORDER BY id"
        ))
        .bind(only_active)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(DestinationRow::into_entity).collect()
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM destinations")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: DestinationPatch) -> Result<Destination, AppError> {
        // Read-modify-write keeps the clearable Option<Option<_>> bounds
        // simple; admin edits are rare enough that racing writers are not
        // a concern here.
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Destination not found", serde_json::json!({ "id": id }))
            })?;

        let updated = Destination {
            id: current.id,
            created_at: current.created_at,
            name: patch.name.unwrap_or(current.name),
            country: patch.country.unwrap_or(current.country),
            city: patch.city.unwrap_or(current.city),
            description: patch.description.unwrap_or(current.description),
            location: patch.location.unwrap_or(current.location),
            category: patch.category.unwrap_or(current.category),
            best_season: patch.best_season.unwrap_or(current.best_season),
            budget_level: patch.budget_level.unwrap_or(current.budget_level),
            budget_min: patch.budget_min.unwrap_or(current.budget_min),
            budget_max: patch.budget_max.unwrap_or(current.budget_max),
            objectives_supported: patch
                .objectives_supported
                .unwrap_or(current.objectives_supported),
            is_active: patch.is_active.unwrap_or(current.is_active),
        };

        let objectives = serde_json::to_value(&updated.objectives_supported)
            .unwrap_or_else(|_| serde_json::Value::Array(vec![]));

        let row = sqlx::query_as::<_, DestinationRow>(&format!(
            r#"
            UPDATE destinations
            SET name = $2, country = $3, city = $4, description = $5, location = $6,
                category = $7, best_season = $8, budget_level = $9, budget_min = $10,
                budget_max = $11, objectives_supported = $12, is_active = $13
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&updated.name)
        .bind(&updated.country)
        .bind(&updated.city)
        .bind(&updated.description)
        .bind(&updated.location)
        .bind(updated.category.as_str())
        .bind(&updated.best_season)
        .bind(updated.budget_level.as_str())
        .bind(updated.budget_min)
        .bind(updated.budget_max)
        .bind(objectives)
        .bind(updated.is_active)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_entity()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM destinations WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
