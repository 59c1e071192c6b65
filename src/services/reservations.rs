//! Reservation service
//!
//! Acceptance path for bookings. The client may send the total it displayed,
//! but that value is advisory only: the stay is re-resolved here against the
//! server-held calendar and the recomputed figure is what gets persisted.

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::reservation::{CreateReservation, Reservation},
    pricing::{self, StayQuote, StayRequest, UnbookableReason},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReservationsService {
    repository: Repository,
}

impl ReservationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Accept a reservation. Returns the new id and the authoritative total.
    pub async fn create_reservation(
        &self,
        request: CreateReservation,
    ) -> AppResult<(i32, Decimal)> {
        let room = self.repository.rooms.get_by_id(request.room_id).await?;

        if request.guest_count == 0 {
            return Err(AppError::Validation("Guest count must be at least 1".to_string()));
        }
        if request.guest_count > room.capacity.max(0) as u32 {
            return Err(AppError::Validation(format!(
                "Guest count {} exceeds room capacity {}",
                request.guest_count, room.capacity
            )));
        }

        let stay = StayRequest {
            check_in: request.check_in,
            check_out: request.check_out,
            guest_count: request.guest_count,
        };
        let quote = pricing::resolve_stay(&stay, &room.calendar());

        if let Some(err) = unbookable_error(&quote) {
            return Err(err);
        }

        if let Some(client_total) = request.quoted_total {
            if client_total != quote.total_price {
                tracing::warn!(
                    room_id = request.room_id,
                    client_total = %client_total,
                    server_total = %quote.total_price,
                    "Client-quoted total does not match server computation, persisting server figure"
                );
            }
        }

        let id = self
            .repository
            .reservations
            .create(&request, quote.total_price)
            .await?;

        tracing::info!(
            reservation_id = id,
            room_id = request.room_id,
            nights = quote.night_count,
            total = %quote.total_price,
            "Reservation created"
        );

        Ok((id, quote.total_price))
    }

    /// Reservations for a room (admin console)
    pub async fn list_for_room(&self, room_id: i32) -> AppResult<Vec<Reservation>> {
        // Verify room exists
        self.repository.rooms.get_by_id(room_id).await?;
        self.repository.reservations.list_for_room(room_id).await
    }
}

/// Map an unbookable quote to the matching error, with the message the
/// storefront shows for the same state.
fn unbookable_error(quote: &StayQuote) -> Option<AppError> {
    match quote.reason? {
        UnbookableReason::InvalidDateRange => {
            Some(AppError::InvalidDateRange("Invalid date selection".to_string()))
        }
        UnbookableReason::MissingPrice => {
            let message = match quote.first_unpriced_date {
                Some(date) => format!("No pricing configured for {}", date),
                None => "No pricing configured for the selected dates".to_string(),
            };
            Some(AppError::UnpricedDate(message))
        }
        UnbookableReason::NoAvailability => {
            Some(AppError::SoldOut("Room is sold out for the selected dates".to_string()))
        }
    }
}
