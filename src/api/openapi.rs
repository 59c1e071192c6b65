//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{calendar, health, reservations, rooms};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rezerva API",
        version = "1.0.0",
        description = "Hotel Booking System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Rezerva Team", email = "contact@rezerva.app")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Rooms
        rooms::quote_stay,
        // Calendar administration
        calendar::get_calendar,
        calendar::upsert_daily_price,
        calendar::upsert_daily_price_range,
        calendar::delete_daily_price,
        calendar::upsert_weekday_price,
        calendar::delete_weekday_price,
        calendar::upsert_quota,
        calendar::upsert_quota_range,
        calendar::delete_quota,
        // Reservations
        reservations::create_reservation,
        reservations::list_room_reservations,
    ),
    components(
        schemas(
            // Rooms
            rooms::QuoteParams,
            rooms::QuoteResponse,
            crate::pricing::UnbookableReason,
            // Calendar
            calendar::CalendarResponse,
            calendar::UpsertDailyPriceRequest,
            calendar::UpsertDailyPriceRangeRequest,
            calendar::UpsertWeekdayPriceRequest,
            calendar::UpsertQuotaRequest,
            calendar::UpsertQuotaRangeRequest,
            crate::models::calendar::DailyPriceOverride,
            crate::models::calendar::WeekdayPriceRule,
            crate::models::calendar::QuotaOverride,
            // Reservations
            reservations::CreateReservationRequest,
            reservations::ReservationResponse,
            crate::models::reservation::Reservation,
            crate::models::reservation::ReservationStatus,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rooms", description = "Storefront stay quotes"),
        (name = "calendar", description = "Room calendar administration"),
        (name = "reservations", description = "Reservation management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
