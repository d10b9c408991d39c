//! Room Repository

use super::RepoResult;
use chrono::NaiveDate;
use shared::models::{CleaningStatus, Room, RoomStatus};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, room_number, room_type_id, status, cleaning_status, created_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Room>> {
    let rows = sqlx::query_as::<_, Room>(&format!(
        "SELECT {COLUMNS} FROM room ORDER BY room_number"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(db: impl sqlx::SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Room>> {
    let row = sqlx::query_as::<_, Room>(&format!("SELECT {COLUMNS} FROM room WHERE id = ?"))
        .bind(id)
        .fetch_optional(db)
        .await?;
    Ok(row)
}

/// Flip a room's occupancy status (and optionally its cleaning status).
///
/// Runs on the caller's executor so lifecycle transitions can flip the room
/// inside the same transaction as the booking update.
pub async fn update_status(
    db: impl sqlx::SqliteExecutor<'_>,
    id: i64,
    status: RoomStatus,
    cleaning_status: Option<CleaningStatus>,
) -> RepoResult<()> {
    match cleaning_status {
        Some(cleaning) => {
            sqlx::query("UPDATE room SET status = ?, cleaning_status = ? WHERE id = ?")
                .bind(status)
                .bind(cleaning)
                .bind(id)
                .execute(db)
                .await?;
        }
        None => {
            sqlx::query("UPDATE room SET status = ? WHERE id = ?")
                .bind(status)
                .bind(id)
                .execute(db)
                .await?;
        }
    }
    Ok(())
}

/// Rooms with no confirmed/checked_in booking overlapping [check_in, check_out).
///
/// Rooms out of service (maintenance / out_of_order) are excluded from the
/// search result; they are bookable again once staff restores them.
pub async fn find_free_for_range(
    pool: &SqlitePool,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> RepoResult<Vec<Room>> {
    let rows = sqlx::query_as::<_, Room>(&format!(
        "SELECT {COLUMNS} FROM room \
         WHERE status NOT IN ('maintenance', 'out_of_order') \
         AND id NOT IN ( \
             SELECT room_id FROM booking \
             WHERE booking_status IN ('confirmed', 'checked_in') \
             AND check_in_date < ?2 AND ?1 < check_out_date \
         ) \
         ORDER BY room_number"
    ))
    .bind(check_in)
    .bind(check_out)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
