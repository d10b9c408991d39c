//! Booking Repository
//!
//! Overlap queries and lifecycle mutations. Every mutating function accepts
//! the caller's executor: the availability re-check, the INSERT, and the
//! room status flip must share one transaction (see `bookings::manager`).

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{Booking, BookingService, BookingStatus};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, customer_id, room_id, check_in_date, check_out_date, \
    number_of_guests, total_amount, booking_status, special_requests, \
    check_in_time, check_out_time, checked_in_by, checked_out_by, \
    staff_notes, created_at, updated_at";

pub async fn find_by_id(
    db: impl sqlx::SqliteExecutor<'_>,
    id: i64,
) -> RepoResult<Option<Booking>> {
    let row = sqlx::query_as::<_, Booking>(&format!("SELECT {COLUMNS} FROM booking WHERE id = ?"))
        .bind(id)
        .fetch_optional(db)
        .await?;
    Ok(row)
}

pub async fn find_by_customer(pool: &SqlitePool, customer_id: i64) -> RepoResult<Vec<Booking>> {
    let rows = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {COLUMNS} FROM booking WHERE customer_id = ? ORDER BY created_at DESC"
    ))
    .bind(customer_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Bookings on `room_id` that hold the room (confirmed / checked_in) and
/// overlap the half-open candidate range `[check_in, check_out)`.
///
/// Two ranges overlap iff `a_start < b_end AND b_start < a_end`; on ISO
/// `YYYY-MM-DD` TEXT that comparison is plain lexicographic `<`.
pub async fn find_blocking(
    db: impl sqlx::SqliteExecutor<'_>,
    room_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    excluding_booking_id: Option<i64>,
) -> RepoResult<Vec<Booking>> {
    let rows = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {COLUMNS} FROM booking \
         WHERE room_id = ?1 \
         AND booking_status IN ('confirmed', 'checked_in') \
         AND check_in_date < ?3 AND ?2 < check_out_date \
         AND (?4 IS NULL OR id != ?4)"
    ))
    .bind(room_id)
    .bind(check_in)
    .bind(check_out)
    .bind(excluding_booking_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Insert a new booking row. Status starts as `pending`.
#[allow(clippy::too_many_arguments)]
pub async fn insert(
    db: impl sqlx::SqliteExecutor<'_>,
    id: i64,
    customer_id: i64,
    room_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    number_of_guests: i32,
    total_amount: f64,
    special_requests: Option<&str>,
    now: i64,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO booking (id, customer_id, room_id, check_in_date, check_out_date, \
         number_of_guests, total_amount, booking_status, special_requests, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, 'pending', ?, ?, ?)",
    )
    .bind(id)
    .bind(customer_id)
    .bind(room_id)
    .bind(check_in)
    .bind(check_out)
    .bind(number_of_guests)
    .bind(total_amount)
    .bind(special_requests)
    .bind(now)
    .bind(now)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn update_status(
    db: impl sqlx::SqliteExecutor<'_>,
    id: i64,
    status: BookingStatus,
    now: i64,
) -> RepoResult<()> {
    let result = sqlx::query("UPDATE booking SET booking_status = ?, updated_at = ? WHERE id = ?")
        .bind(status)
        .bind(now)
        .bind(id)
        .execute(db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Booking {} not found", id)));
    }
    Ok(())
}

/// Record the physical check-in: timestamp + staff attribution.
pub async fn record_check_in(
    db: impl sqlx::SqliteExecutor<'_>,
    id: i64,
    staff_id: i64,
    now: i64,
) -> RepoResult<()> {
    sqlx::query(
        "UPDATE booking SET booking_status = 'checked_in', check_in_time = ?, \
         checked_in_by = ?, updated_at = ? WHERE id = ?",
    )
    .bind(now)
    .bind(staff_id)
    .bind(now)
    .bind(id)
    .execute(db)
    .await?;
    Ok(())
}

/// Record the physical check-out: timestamp, staff attribution, final total.
pub async fn record_check_out(
    db: impl sqlx::SqliteExecutor<'_>,
    id: i64,
    staff_id: i64,
    new_total: f64,
    now: i64,
) -> RepoResult<()> {
    sqlx::query(
        "UPDATE booking SET booking_status = 'checked_out', check_out_time = ?, \
         checked_out_by = ?, total_amount = ?, updated_at = ? WHERE id = ?",
    )
    .bind(now)
    .bind(staff_id)
    .bind(new_total)
    .bind(now)
    .bind(id)
    .execute(db)
    .await?;
    Ok(())
}

/// Append a line to the staff notes log (never overwrites).
pub async fn append_staff_note(
    db: impl sqlx::SqliteExecutor<'_>,
    id: i64,
    note: &str,
    now: i64,
) -> RepoResult<()> {
    sqlx::query(
        "UPDATE booking SET staff_notes = COALESCE(staff_notes || char(10), '') || ?, \
         updated_at = ? WHERE id = ?",
    )
    .bind(note)
    .bind(now)
    .bind(id)
    .execute(db)
    .await?;
    Ok(())
}

// ========== Service line items ==========

pub async fn insert_service(
    db: impl sqlx::SqliteExecutor<'_>,
    id: i64,
    booking_id: i64,
    service_id: i64,
    quantity: i32,
    unit_price: f64,
    total_price: f64,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO booking_service (id, booking_id, service_id, quantity, unit_price, total_price) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(booking_id)
    .bind(service_id)
    .bind(quantity)
    .bind(unit_price)
    .bind(total_price)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn find_services(pool: &SqlitePool, booking_id: i64) -> RepoResult<Vec<BookingService>> {
    let rows = sqlx::query_as::<_, BookingService>(
        "SELECT id, booking_id, service_id, quantity, unit_price, total_price \
         FROM booking_service WHERE booking_id = ?",
    )
    .bind(booking_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
