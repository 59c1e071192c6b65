//! Reservations repository for database operations

use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::reservation::{CreateReservation, Reservation, ReservationStatus},
};

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create a new reservation. `total_price` is the server-computed
    /// figure, never the client's advisory value.
    pub async fn create(
        &self,
        reservation: &CreateReservation,
        total_price: Decimal,
    ) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO reservations
                (room_id, guest_name, guest_email, guest_count, check_in, check_out, total_price, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(reservation.room_id)
        .bind(&reservation.guest_name)
        .bind(&reservation.guest_email)
        .bind(reservation.guest_count as i32)
        .bind(reservation.check_in)
        .bind(reservation.check_out)
        .bind(total_price)
        .bind(i16::from(ReservationStatus::Pending))
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Reservations for a room, upcoming first
    pub async fn list_for_room(&self, room_id: i32) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE room_id = $1 ORDER BY check_in",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }
}
