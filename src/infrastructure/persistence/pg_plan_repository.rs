//! PostgreSQL implementation of the travel plan repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    ItineraryDay, NewItineraryDay, NewTravelPlan, TravelPlan,
};
use crate::domain::repositories::PlanRepository;
use crate::error::AppError;

const PLAN_COLUMNS: &str = "id, destination_id, hotel_id, transport_id, travel_date, return_date, \
                            budget, num_travelers, notes, created_at";

const DAY_COLUMNS: &str = "id, plan_id, day_number, activities, created_at";

/// PostgreSQL repository for travel plans and their itinerary rows.
pub struct PgPlanRepository {
    pool: Arc<PgPool>,
}

impl PgPlanRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PlanRow {
    id: i64,
    destination_id: Option<i64>,
    hotel_id: Option<i64>,
    transport_id: Option<i64>,
    travel_date: NaiveDate,
    return_date: NaiveDate,
    budget: Option<Decimal>,
    num_travelers: i32,
    notes: String,
    created_at: DateTime<Utc>,
}

impl From<PlanRow> for TravelPlan {
    fn from(row: PlanRow) -> Self {
        TravelPlan {
            id: row.id,
            destination_id: row.destination_id,
            hotel_id: row.hotel_id,
            transport_id: row.transport_id,
            travel_date: row.travel_date,
            return_date: row.return_date,
            budget: row.budget,
            num_travelers: row.num_travelers,
            notes: row.notes,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DayRow {
    id: i64,
    plan_id: i64,
    day_number: i32,
    activities: String,
    created_at: DateTime<Utc>,
}

impl From<DayRow> for ItineraryDay {
    fn from(row: DayRow) -> Self {
        ItineraryDay {
            id: row.id,
            plan_id: row.plan_id,
            day_number: row.day_number,
            activities: row.activities,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PlanRepository for PgPlanRepository {
    async fn create(&self, new_plan: NewTravelPlan) -> Result<TravelPlan, AppError> {
        let row = sqlx::query_as::<_, PlanRow>(&format!(
            r#"
            INSERT INTO travel_plans
                (destination_id, hotel_id, transport_id, travel_date, return_date,
                 budget, num_travelers, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PLAN_COLUMNS}
            "#
        ))
        .bind(new_plan.destination_id)
        .bind(new_plan.hotel_id)
        .bind(new_plan.transport_id)
        .bind(new_plan.travel_date)
        .bind(new_plan.return_date)
        .bind(new_plan.budget)
        .bind(new_plan.num_travelers)
        .bind(&new_plan.notes)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TravelPlan>, AppError> {
        let row = sqlx::query_as::<_, PlanRow>(&format!(
            "SELECT {PLAN_COLUMNS} FROM travel_plans WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<TravelPlan>, AppError> {
        let rows = sqlx::query_as::<_, PlanRow>(&format!(
            "SELECT {PLAN_COLUMNS} FROM travel_plans ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM travel_plans WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_days(
        &self,
        plan_id: i64,
        days: Vec<NewItineraryDay>,
    ) -> Result<Vec<ItineraryDay>, AppError> {
        // One transaction so a failed insert never leaves a partial
        // itinerary behind.
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(days.len());

        for day in days {
            let row = sqlx::query_as::<_, DayRow>(&format!(
                r#"
                INSERT INTO itinerary_days (plan_id, day_number, activities)
                VALUES ($1, $2, $3)
                RETURNING {DAY_COLUMNS}
                "#
            ))
            .bind(plan_id)
            .bind(day.day_number)
            .bind(&day.activities)
            .fetch_one(&mut *tx)
            .await?;

            created.push(row.into());
        }

        tx.commit().await?;

        Ok(created)
    }

    async fn list_days(&self, plan_id: i64) -> Result<Vec<ItineraryDay>, AppError> {
        let rows = sqlx::query_as::<_, DayRow>(&format!(
            "SELECT {DAY_COLUMNS} FROM itinerary_days WHERE plan_id = $1 ORDER BY id"
        ))
        .bind(plan_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn clear_days(&self, plan_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM itinerary_days WHERE plan_id = $1")
            .bind(plan_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
