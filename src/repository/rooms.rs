//! Rooms repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::room::Room,
};

#[derive(Clone)]
pub struct RoomsRepository {
    pool: Pool<Postgres>,
}

impl RoomsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get room by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Room> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room with id {} not found", id)))
    }

    /// Persist the serialized calendar override columns for a room
    pub async fn update_calendar(
        &self,
        id: i32,
        daily_prices: &str,
        weekday_prices: &str,
        quotas: &str,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE rooms SET daily_prices = $1, weekday_prices = $2, quotas = $3 WHERE id = $4",
        )
        .bind(daily_prices)
        .bind(weekday_prices)
        .bind(quotas)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Room with id {} not found", id)));
        }

        Ok(())
    }
}
