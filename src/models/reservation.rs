//! Reservation model and related types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Reservation lifecycle status, stored as a smallint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum ReservationStatus {
    Pending = 0,
    Confirmed = 1,
    Cancelled = 2,
}

impl From<i16> for ReservationStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => ReservationStatus::Confirmed,
            2 => ReservationStatus::Cancelled,
            _ => ReservationStatus::Pending,
        }
    }
}

impl From<ReservationStatus> for i16 {
    fn from(s: ReservationStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", label)
    }
}

/// Reservation row from the database. `total_price` is always the figure the
/// server computed itself at acceptance time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: i32,
    pub room_id: i32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_count: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: Decimal,
    pub status: i16,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn status(&self) -> ReservationStatus {
        self.status.into()
    }
}

/// Create reservation request, as the services layer consumes it.
/// `quoted_total` is the client's advisory figure and is never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservation {
    pub room_id: i32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_count: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub quoted_total: Option<Decimal>,
}
