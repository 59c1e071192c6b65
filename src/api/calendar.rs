//! Calendar administration endpoints
//!
//! The admin edit screens mutate a room's override lists exclusively through
//! these handlers. Payloads are validated here, so a negative price or a
//! bogus weekday index never reaches the stored lists.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    error::{AppError, AppResult},
    models::calendar::{DailyPriceOverride, QuotaOverride, WeekdayPriceRule},
};

/// A room's parsed override lists
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalendarResponse {
    pub daily_prices: Vec<DailyPriceOverride>,
    pub weekday_prices: Vec<WeekdayPriceRule>,
    pub quotas: Vec<QuotaOverride>,
}

/// Single-date price edit
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertDailyPriceRequest {
    pub date: NaiveDate,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

/// Date-range bulk price edit (inclusive of both endpoints)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertDailyPriceRangeRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

/// Weekday fallback price edit, 0=Sunday .. 6=Saturday
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertWeekdayPriceRequest {
    #[validate(range(max = 6, message = "Weekday index must be 0-6"))]
    pub weekday_index: u8,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

/// Single-date inventory edit
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertQuotaRequest {
    pub date: NaiveDate,
    pub count: u32,
}

/// Date-range bulk inventory edit (inclusive of both endpoints)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertQuotaRangeRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub count: u32,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("price_negative"));
    }
    Ok(())
}

fn check(payload: &impl Validate) -> AppResult<()> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// Get a room's calendar overrides
#[utoipa::path(
    get,
    path = "/rooms/{id}/calendar",
    tag = "calendar",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Parsed override lists", body = CalendarResponse),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_calendar(
    State(state): State<crate::AppState>,
    Path(room_id): Path<i32>,
) -> AppResult<Json<CalendarResponse>> {
    let calendar = state.services.calendar.get_calendar(room_id).await?;
    Ok(Json(calendar))
}

/// Set the price for one date
#[utoipa::path(
    put,
    path = "/rooms/{id}/calendar/daily-prices",
    tag = "calendar",
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpsertDailyPriceRequest,
    responses(
        (status = 200, description = "Updated override lists", body = CalendarResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn upsert_daily_price(
    State(state): State<crate::AppState>,
    Path(room_id): Path<i32>,
    Json(payload): Json<UpsertDailyPriceRequest>,
) -> AppResult<Json<CalendarResponse>> {
    check(&payload)?;
    let calendar = state
        .services
        .calendar
        .set_daily_price(room_id, payload.date, payload.price)
        .await?;
    Ok(Json(calendar))
}

/// Set the price for every date in a range
#[utoipa::path(
    put,
    path = "/rooms/{id}/calendar/daily-prices/range",
    tag = "calendar",
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpsertDailyPriceRangeRequest,
    responses(
        (status = 200, description = "Updated override lists", body = CalendarResponse),
        (status = 400, description = "Invalid payload or range"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn upsert_daily_price_range(
    State(state): State<crate::AppState>,
    Path(room_id): Path<i32>,
    Json(payload): Json<UpsertDailyPriceRangeRequest>,
) -> AppResult<Json<CalendarResponse>> {
    check(&payload)?;
    let calendar = state
        .services
        .calendar
        .set_daily_price_range(room_id, payload.start_date, payload.end_date, payload.price)
        .await?;
    Ok(Json(calendar))
}

/// Remove the price override for one date
#[utoipa::path(
    delete,
    path = "/rooms/{id}/calendar/daily-prices/{date}",
    tag = "calendar",
    params(
        ("id" = i32, Path, description = "Room ID"),
        ("date" = String, Path, description = "Calendar date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Updated override lists", body = CalendarResponse),
        (status = 404, description = "Room not found")
    )
)]
pub async fn delete_daily_price(
    State(state): State<crate::AppState>,
    Path((room_id, date)): Path<(i32, NaiveDate)>,
) -> AppResult<Json<CalendarResponse>> {
    let calendar = state.services.calendar.remove_daily_price(room_id, date).await?;
    Ok(Json(calendar))
}

/// Set the fallback price for one weekday
#[utoipa::path(
    put,
    path = "/rooms/{id}/calendar/weekday-prices",
    tag = "calendar",
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpsertWeekdayPriceRequest,
    responses(
        (status = 200, description = "Updated override lists", body = CalendarResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn upsert_weekday_price(
    State(state): State<crate::AppState>,
    Path(room_id): Path<i32>,
    Json(payload): Json<UpsertWeekdayPriceRequest>,
) -> AppResult<Json<CalendarResponse>> {
    check(&payload)?;
    let calendar = state
        .services
        .calendar
        .set_weekday_price(room_id, payload.weekday_index, payload.price)
        .await?;
    Ok(Json(calendar))
}

/// Remove the fallback price for one weekday
#[utoipa::path(
    delete,
    path = "/rooms/{id}/calendar/weekday-prices/{weekday}",
    tag = "calendar",
    params(
        ("id" = i32, Path, description = "Room ID"),
        ("weekday" = u8, Path, description = "Weekday index, 0=Sunday .. 6=Saturday")
    ),
    responses(
        (status = 200, description = "Updated override lists", body = CalendarResponse),
        (status = 400, description = "Invalid weekday index"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn delete_weekday_price(
    State(state): State<crate::AppState>,
    Path((room_id, weekday)): Path<(i32, u8)>,
) -> AppResult<Json<CalendarResponse>> {
    let calendar = state
        .services
        .calendar
        .remove_weekday_price(room_id, weekday)
        .await?;
    Ok(Json(calendar))
}

/// Set the remaining inventory for one date
#[utoipa::path(
    put,
    path = "/rooms/{id}/calendar/quotas",
    tag = "calendar",
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpsertQuotaRequest,
    responses(
        (status = 200, description = "Updated override lists", body = CalendarResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn upsert_quota(
    State(state): State<crate::AppState>,
    Path(room_id): Path<i32>,
    Json(payload): Json<UpsertQuotaRequest>,
) -> AppResult<Json<CalendarResponse>> {
    check(&payload)?;
    let calendar = state
        .services
        .calendar
        .set_quota(room_id, payload.date, payload.count)
        .await?;
    Ok(Json(calendar))
}

/// Set the remaining inventory for every date in a range
#[utoipa::path(
    put,
    path = "/rooms/{id}/calendar/quotas/range",
    tag = "calendar",
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpsertQuotaRangeRequest,
    responses(
        (status = 200, description = "Updated override lists", body = CalendarResponse),
        (status = 400, description = "Invalid payload or range"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn upsert_quota_range(
    State(state): State<crate::AppState>,
    Path(room_id): Path<i32>,
    Json(payload): Json<UpsertQuotaRangeRequest>,
) -> AppResult<Json<CalendarResponse>> {
    check(&payload)?;
    let calendar = state
        .services
        .calendar
        .set_quota_range(room_id, payload.start_date, payload.end_date, payload.count)
        .await?;
    Ok(Json(calendar))
}

/// Remove the inventory record for one date
#[utoipa::path(
    delete,
    path = "/rooms/{id}/calendar/quotas/{date}",
    tag = "calendar",
    params(
        ("id" = i32, Path, description = "Room ID"),
        ("date" = String, Path, description = "Calendar date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Updated override lists", body = CalendarResponse),
        (status = 404, description = "Room not found")
    )
)]
pub async fn delete_quota(
    State(state): State<crate::AppState>,
    Path((room_id, date)): Path<(i32, NaiveDate)>,
) -> AppResult<Json<CalendarResponse>> {
    let calendar = state.services.calendar.remove_quota(room_id, date).await?;
    Ok(Json(calendar))
}
