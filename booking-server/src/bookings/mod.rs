//! Booking domain: availability, lifecycle guards, and the manager that
//! drives transitions transactionally.

pub mod availability;
pub mod lifecycle;
pub mod manager;

pub use manager::BookingManager;
