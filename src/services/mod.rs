//! Business logic services

pub mod calendar;
pub mod quotes;
pub mod reservations;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub quotes: quotes::QuotesService,
    pub reservations: reservations::ReservationsService,
    pub calendar: calendar::CalendarService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            quotes: quotes::QuotesService::new(repository.clone()),
            reservations: reservations::ReservationsService::new(repository.clone()),
            calendar: calendar::CalendarService::new(repository),
        }
    }
}
