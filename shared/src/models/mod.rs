//! Data models
//!
//! Shared between booking-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).
//! Calendar dates are `chrono::NaiveDate` (stored as `YYYY-MM-DD` TEXT),
//! instants are `i64` Unix millis.

pub mod activity;
pub mod booking;
pub mod room;
pub mod room_type;
pub mod seasonal_rate;
pub mod service_item;

// Re-exports
pub use activity::*;
pub use booking::*;
pub use room::*;
pub use room_type::*;
pub use seasonal_rate::*;
pub use service_item::*;
