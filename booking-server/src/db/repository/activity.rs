//! Booking Activity Repository
//!
//! Append-only: there is no update or delete here by design of the audit log.

use super::RepoResult;
use shared::models::BookingActivity;
use sqlx::SqlitePool;

/// Append an activity record. Runs on the caller's executor so the audit
/// row commits (or rolls back) with the transition it describes.
///
/// The id is assigned by SQLite (AUTOINCREMENT), so id order is append order.
pub async fn append(
    db: impl sqlx::SqliteExecutor<'_>,
    booking_id: i64,
    actor_id: i64,
    actor_role: &str,
    action: &str,
    notes: Option<&str>,
    now: i64,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO booking_activity (booking_id, actor_id, actor_role, action, notes, created_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(booking_id)
    .bind(actor_id)
    .bind(actor_role)
    .bind(action)
    .bind(notes)
    .bind(now)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn find_by_booking(
    pool: &SqlitePool,
    booking_id: i64,
) -> RepoResult<Vec<BookingActivity>> {
    let rows = sqlx::query_as::<_, BookingActivity>(
        "SELECT id, booking_id, actor_id, actor_role, action, notes, created_at \
         FROM booking_activity WHERE booking_id = ? ORDER BY id",
    )
    .bind(booking_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
