//! Booking Model
//!
//! The booking row plus its status enum and API payloads. Status changes go
//! through the lifecycle manager only; rows are never deleted (cancellation
//! is a status, not a deletion).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking lifecycle status
///
/// `pending → confirmed → checked_in → checked_out`, with cancellation
/// possible from `pending` and `confirmed`. `checked_out` and `cancelled`
/// are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    /// Whether a direct transition to `target` is defined by the lifecycle.
    ///
    /// Exhaustive by construction: adding a status forces every call site
    /// through the compiler.
    pub fn can_transition_to(self, target: BookingStatus) -> bool {
        use BookingStatus::*;
        match (self, target) {
            (Pending, Confirmed) | (Pending, Cancelled) => true,
            (Confirmed, CheckedIn) | (Confirmed, Cancelled) => true,
            (CheckedIn, CheckedOut) => true,
            // Terminal states
            (CheckedOut, _) | (Cancelled, _) => false,
            _ => false,
        }
    }

    /// Statuses that hold the room: only these block availability.
    pub fn blocks_availability(self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::CheckedIn)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::CheckedOut | BookingStatus::Cancelled)
    }
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub customer_id: i64,
    pub room_id: i64,
    /// Half-open stay: the check-out day is neither charged nor occupied
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: i32,
    pub total_amount: f64,
    pub booking_status: BookingStatus,
    pub special_requests: Option<String>,
    /// Set on physical check-in (Unix millis)
    pub check_in_time: Option<i64>,
    pub check_out_time: Option<i64>,
    pub checked_in_by: Option<i64>,
    pub checked_out_by: Option<i64>,
    /// Append-only log of staff remarks
    pub staff_notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Booked service line item
///
/// `unit_price` is captured at booking time so later catalog price changes
/// never retroactively alter historical bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BookingService {
    pub id: i64,
    pub booking_id: i64,
    pub service_id: i64,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Requested service line on booking creation / cost preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub service_id: i64,
    pub quantity: i32,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: i32,
    #[serde(default)]
    pub services: Vec<ServiceRequest>,
    pub special_requests: Option<String>,
}

/// Staff status update payload (`pending → confirmed | cancelled`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
    pub notes: Option<String>,
}

/// Check-out payload: extra charges settled at the desk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutRequest {
    #[serde(default)]
    pub additional_charges: f64,
    pub notes: Option<String>,
}

/// Check-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub notes: Option<String>,
}
