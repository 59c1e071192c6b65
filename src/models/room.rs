//! Room model and its serialized calendar columns

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::calendar::RoomCalendar;

/// Room row from the database. The three calendar columns hold serialized
/// override lists maintained by the admin console; they stay opaque text
/// until a [`RoomCalendar`] snapshot is built for one resolution.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub daily_prices: Option<String>,
    pub weekday_prices: Option<String>,
    pub quotas: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Build the indexed calendar snapshot for this room. Unparseable
    /// columns degrade to empty override lists.
    pub fn calendar(&self) -> RoomCalendar {
        RoomCalendar::from_raw(
            self.daily_prices.as_deref(),
            self.weekday_prices.as_deref(),
            self.quotas.as_deref(),
        )
    }
}
