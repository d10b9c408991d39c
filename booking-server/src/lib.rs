//! Booking Server - hotel room booking and pricing service
//!
//! # Overview
//!
//! - **availability** (`bookings::availability`): half-open date-range
//!   overlap checks against committed bookings
//! - **pricing** (`pricing`): per-night seasonal rule resolution, holiday
//!   calendar, stay quotes with service line items
//! - **lifecycle** (`bookings`): the pending → confirmed → checked_in →
//!   checked_out state machine with audit logging
//! - **HTTP API** (`api`): RESTful interface
//!
//! # Module layout
//!
//! ```text
//! booking-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # principal extraction, staff gate
//! ├── api/           # HTTP routes and handlers
//! ├── bookings/      # availability, lifecycle guards, manager
//! ├── pricing/       # calendar, resolver, engine
//! ├── db/            # pool setup, repositories, migrations
//! └── utils/         # errors, logging, time helpers
//! ```

pub mod api;
pub mod auth;
pub mod bookings;
pub mod core;
pub mod db;
pub mod pricing;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, Role};
pub use bookings::BookingManager;
pub use core::{Config, Server, ServerState};
pub use pricing::{HolidayCalendar, PricingEngine};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env (if present) and initialize logging from the environment.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
