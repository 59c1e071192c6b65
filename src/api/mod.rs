//! API handlers for Rezerva REST endpoints

pub mod calendar;
pub mod health;
pub mod openapi;
pub mod reservations;
pub mod rooms;
