//! Rezerva Hotel Booking System
//!
//! A Rust implementation of the Rezerva hotel booking server, providing a
//! REST JSON API for stay quotes, reservations and room calendar
//! administration. Nightly pricing and availability are resolved by one
//! shared pure module (`pricing`) that every surface consumes.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
