//! Reservation endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::reservation::{CreateReservation, Reservation},
};

/// Create reservation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    /// Room ID
    pub room_id: i32,
    #[validate(length(min = 1, message = "Guest name is required"))]
    pub guest_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub guest_email: String,
    #[validate(range(min = 1, message = "Guest count must be at least 1"))]
    pub guest_count: u32,
    /// First night of the stay
    pub check_in: NaiveDate,
    /// Day of departure (exclusive)
    pub check_out: NaiveDate,
    /// Total the client displayed. Advisory only: the server recomputes the
    /// authoritative figure and persists that.
    pub total_price: Option<Decimal>,
}

/// Reservation response with the authoritative total
#[derive(Serialize, ToSchema)]
pub struct ReservationResponse {
    /// Reservation ID
    pub id: i32,
    /// Room ID
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Server-computed total for the stay
    pub total_price: Decimal,
    /// Status message
    pub message: String,
}

/// Create a reservation
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 400, description = "Invalid request or date selection"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room sold out for the selected dates"),
        (status = 422, description = "A night in the stay has no price configured")
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reservation = CreateReservation {
        room_id: request.room_id,
        guest_name: request.guest_name,
        guest_email: request.guest_email,
        guest_count: request.guest_count,
        check_in: request.check_in,
        check_out: request.check_out,
        quoted_total: request.total_price,
    };

    let (id, total_price) = state
        .services
        .reservations
        .create_reservation(reservation)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationResponse {
            id,
            room_id: request.room_id,
            check_in: request.check_in,
            check_out: request.check_out,
            total_price,
            message: "Reservation created successfully".to_string(),
        }),
    ))
}

/// List reservations for a room
#[utoipa::path(
    get,
    path = "/rooms/{id}/reservations",
    tag = "reservations",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Reservations for the room", body = Vec<Reservation>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn list_room_reservations(
    State(state): State<crate::AppState>,
    Path(room_id): Path<i32>,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state.services.reservations.list_for_room(room_id).await?;
    Ok(Json(reservations))
}
