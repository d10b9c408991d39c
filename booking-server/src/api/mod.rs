//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`rooms`] - room and room-type inventory, availability checks
//! - [`bookings`] - booking lifecycle
//! - [`pricing`] - cost preview and pricing calendar
//! - [`seasonal_rates`] - seasonal pricing rule management
//! - [`services`] - bookable add-on service catalog

pub mod bookings;
pub mod health;
pub mod pricing;
pub mod rooms;
pub mod seasonal_rates;
pub mod services;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(rooms::router())
        .merge(bookings::router())
        .merge(pricing::router())
        .merge(seasonal_rates::router())
        .merge(services::router())
}
