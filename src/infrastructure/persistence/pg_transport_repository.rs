//! PostgreSQL implementation of the transport repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTransport, Transport, TransportPatch};
use crate::domain::repositories::TransportRepository;
use crate::error::AppError;

use super::parse_stored;

const COLUMNS: &str = "id, origin, destination, mode, distance_km, price, duration_hours, created_at";

/// PostgreSQL repository for transport options.
pub struct PgTransportRepository {
    pool: Arc<PgPool>,
}

impl PgTransportRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TransportRow {
    id: i64,
    origin: String,
    destination: String,
    mode: String,
    distance_km: i64,
    price: Decimal,
    duration_hours: f64,
    created_at: DateTime<Utc>,
}

impl TransportRow {
    fn into_entity(self) -> Result<Transport, AppError> {
        Ok(Transport {
            id: self.id,
            origin: self.origin,
            destination: self.destination,
            mode: parse_stored(&self.mode, "transports.mode")?,
            distance_km: self.distance_km,
            price: self.price,
            duration_hours: self.duration_hours,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl TransportRepository for PgTransportRepository {
    async fn create(&self, new_transport: NewTransport) -> Result<Transport, AppError> {
        let row = sqlx::query_as::<_, TransportRow>(&format!(
            r#"
            INSERT INTO transports
                (origin, destination, mode, distance_km, price, duration_hours)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new_transport.origin)
        .bind(&new_transport.destination)
        .bind(new_transport.mode.as_str())
        .bind(new_transport.distance_km)
        .bind(new_transport.price)
        .bind(new_transport.duration_hours)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_entity()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Transport>, AppError> {
        let row = sqlx::query_as::<_, TransportRow>(&format!(
            "SELECT {COLUMNS} FROM transports WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(TransportRow::into_entity).transpose()
    }

    async fn list(&self) -> Result<Vec<Transport>, AppError> {
        let rows = sqlx::query_as::<_, TransportRow>(&format!(
            "SELECT {COLUMNS} FROM transports ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(TransportRow::into_entity).collect()
    }

    async fn update(&self, id: i64, patch: TransportPatch) -> Result<Transport, AppError> {
        let current = self.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found("Transport not found", serde_json::json!({ "id": id }))
        })?;

        let updated = Transport {
            id: current.id,
            created_at: current.created_at,
            origin: patch.origin.unwrap_or(current.origin),
            destination: patch.destination.unwrap_or(current.destination),
            mode: patch.mode.unwrap_or(current.mode),
            distance_km: patch.distance_km.unwrap_or(current.distance_km),
            price: patch.price.unwrap_or(current.price),
            duration_hours: patch.duration_hours.unwrap_or(current.duration_hours),
        };

        let row = sqlx::query_as::<_, TransportRow>(&format!(
            r#"
            UPDATE transports
            SET origin = $2, destination = $3, mode = $4, distance_km = $5, price = $6,
                duration_hours = $7
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&updated.origin)
        .bind(&updated.destination)
        .bind(updated.mode.as_str())
        .bind(updated.distance_km)
        .bind(updated.price)
        .bind(updated.duration_hours)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_entity()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM transports WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
