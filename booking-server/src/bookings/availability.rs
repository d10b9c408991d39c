//! Availability Checker
//!
//! A room is unavailable for a candidate half-open range iff a confirmed or
//! checked-in booking on that room overlaps it. Pending bookings never
//! block: confirmation at the desk is the commit point, so two customers
//! may hold pending bookings for the same dates and staff confirms one.

use chrono::NaiveDate;
use shared::models::Booking;

use crate::db::repository::booking;
use crate::utils::AppResult;

/// Half-open overlap test: `[a_start, a_end)` meets `[b_start, b_end)` iff
/// `a_start < b_end && b_start < a_end`. Symmetric; back-to-back stays
/// (checkout day == next check-in day) do not overlap.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Read-only availability check.
///
/// Accepts any executor: pass the pool for a plain query, or the open
/// transaction when re-checking under isolation during booking creation.
pub async fn is_available(
    db: impl sqlx::SqliteExecutor<'_>,
    room_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    excluding_booking_id: Option<i64>,
) -> AppResult<bool> {
    let blocking =
        booking::find_blocking(db, room_id, check_in, check_out, excluding_booking_id).await?;
    Ok(blocking.is_empty())
}

/// The bookings that make a range unavailable, for conflict reporting.
pub async fn blocking_bookings(
    db: impl sqlx::SqliteExecutor<'_>,
    room_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    excluding_booking_id: Option<i64>,
) -> AppResult<Vec<Booking>> {
    Ok(booking::find_blocking(db, room_id, check_in, check_out, excluding_booking_id).await?)
}
