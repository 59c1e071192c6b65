//! Data models for Rezerva

pub mod calendar;
pub mod reservation;
pub mod room;

// Re-export commonly used types
pub use calendar::{DailyPriceOverride, QuotaOverride, RoomCalendar, WeekdayPriceRule};
pub use reservation::{CreateReservation, Reservation, ReservationStatus};
pub use room::Room;
