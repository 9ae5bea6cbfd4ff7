//! PostgreSQL implementation of the hotel repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Hotel, HotelPatch, NewHotel};
use crate::domain::repositories::HotelRepository;
use crate::error::AppError;

use super::parse_stored;

const COLUMNS: &str =
    "id, destination_id, name, stars, price_per_night, budget_category, description, amenities, \
     created_at";

/// PostgreSQL repository for hotels.
pub struct PgHotelRepository {
    pool: Arc<PgPool>,
}

impl PgHotelRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i64,
    destination_id: i64,
    name: String,
    stars: i32,
    price_per_night: Decimal,
    budget_category: String,
    description: String,
    amenities: String,
    created_at: DateTime<Utc>,
}

impl HotelRow {
    fn into_entity(self) -> Result<Hotel, AppError> {
        Ok(Hotel {
            id: self.id,
            destination_id: self.destination_id,
            name: self.name,
            stars: self.stars,
            price_per_night: self.price_per_night,
            budget_category: parse_stored(&self.budget_category, "hotels.budget_category")?,
            description: self.description,
            amenities: self.amenities,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl HotelRepository for PgHotelRepository {
    async fn create(&self, new_hotel: NewHotel) -> Result<Hotel, AppError> {
        let row = sqlx::query_as::<_, HotelRow>(&format!(
            r#"
            INSERT INTO hotels
                (destination_id, name, stars, price_per_night, budget_category, description, amenities)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(new_hotel.destination_id)
        .bind(&new_hotel.name)
        .bind(new_hotel.stars)
        .bind(new_hotel.price_per_night)
        .bind(new_hotel.budget_category.as_str())
        .bind(&new_hotel.description)
        .bind(&new_hotel.amenities)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_entity()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Hotel>, AppError> {
        let row =
            sqlx::query_as::<_, HotelRow>(&format!("SELECT {COLUMNS} FROM hotels WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        row.map(HotelRow::into_entity).transpose()
    }

    async fn list_by_destination(&self, destination_id: i64) -> Result<Vec<Hotel>, AppError> {
        let rows = sqlx::query_as::<_, HotelRow>(&format!(
            "SELECT {COLUMNS} FROM hotels WHERE destination_id = $1 ORDER BY id"
        ))
        .bind(destination_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(HotelRow::into_entity).collect()
    }

    async fn update(&self, id: i64, patch: HotelPatch) -> Result<Hotel, AppError> {
        let current = self.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found("Hotel not found", serde_json::json!({ "id": id }))
        })?;

        let updated = Hotel {
            id: current.id,
            destination_id: current.destination_id,
            created_at: current.created_at,
            name: patch.name.unwrap_or(current.name),
            stars: patch.stars.unwrap_or(current.stars),
            price_per_night: patch.price_per_night.unwrap_or(current.price_per_night),
            budget_category: patch.budget_category.unwrap_or(current.budget_category),
            description: patch.description.unwrap_or(current.description),
            amenities: patch.amenities.unwrap_or(current.amenities),
        };

        let row = sqlx::query_as::<_, HotelRow>(&format!(
            r#"
            UPDATE hotels
            SET name = $2, stars = $3, price_per_night = $4, budget_category = $5,
                description = $6, amenities = $7
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&updated.name)
        .bind(updated.stars)
        .bind(updated.price_per_night)
        .bind(updated.budget_category.as_str())
        .bind(&updated.description)
        .bind(&updated.amenities)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_entity()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
