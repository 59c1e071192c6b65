//! Room storefront endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::room::Room,
    pricing::{StayQuote, StayRequest, UnbookableReason},
};

/// Stay quote query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct QuoteParams {
    /// First night of the stay
    pub check_in: NaiveDate,
    /// Day of departure (exclusive, not stayed)
    pub check_out: NaiveDate,
    /// Number of guests (defaults to 1)
    pub guests: Option<u32>,
}

/// Stay quote with a user-facing availability message
#[derive(Serialize, ToSchema)]
pub struct QuoteResponse {
    pub room_id: i32,
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub night_count: u32,
    /// Server-computed total for the stay
    pub total_price: Decimal,
    pub all_nights_priced: bool,
    pub first_unpriced_date: Option<NaiveDate>,
    pub min_available_quota: u32,
    pub sold_out: bool,
    pub low_availability: bool,
    pub reason: Option<UnbookableReason>,
    /// Display message matching the booking state
    pub message: String,
}

impl QuoteResponse {
    pub fn build(room: &Room, request: &StayRequest, quote: StayQuote) -> Self {
        let message = match quote.reason {
            Some(UnbookableReason::InvalidDateRange) => "Invalid date selection".to_string(),
            Some(UnbookableReason::MissingPrice) => match quote.first_unpriced_date {
                Some(date) => format!("No pricing configured for {}", date),
                None => "No pricing configured for the selected dates".to_string(),
            },
            Some(UnbookableReason::NoAvailability) => {
                "Room is sold out for the selected dates".to_string()
            }
            None => {
                if quote.low_availability() {
                    format!("Only {} room(s) left for these dates", quote.min_available_quota)
                } else {
                    "Available for booking".to_string()
                }
            }
        };

        Self {
            room_id: room.id,
            room_name: room.name.clone(),
            check_in: request.check_in,
            check_out: request.check_out,
            night_count: quote.night_count,
            total_price: quote.total_price,
            all_nights_priced: quote.all_nights_priced,
            first_unpriced_date: quote.first_unpriced_date,
            min_available_quota: quote.min_available_quota,
            sold_out: quote.sold_out,
            low_availability: quote.low_availability(),
            reason: quote.reason,
            message,
        }
    }
}

/// Quote a stay for a room
#[utoipa::path(
    get,
    path = "/rooms/{id}/quote",
    tag = "rooms",
    params(
        ("id" = i32, Path, description = "Room ID"),
        QuoteParams
    ),
    responses(
        (status = 200, description = "Stay quote", body = QuoteResponse),
        (status = 400, description = "Invalid parameters"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn quote_stay(
    State(state): State<crate::AppState>,
    Path(room_id): Path<i32>,
    Query(params): Query<QuoteParams>,
) -> AppResult<Json<QuoteResponse>> {
    let guest_count = params.guests.unwrap_or(1);
    if guest_count == 0 {
        return Err(AppError::BadRequest("Guest count must be at least 1".to_string()));
    }

    let request = StayRequest {
        check_in: params.check_in,
        check_out: params.check_out,
        guest_count,
    };

    let quote = state.services.quotes.quote_stay(room_id, request).await?;
    Ok(Json(quote))
}
