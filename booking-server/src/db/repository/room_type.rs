//! Room Type Repository

use super::RepoResult;
use shared::models::RoomType;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<RoomType>> {
    let rows = sqlx::query_as::<_, RoomType>(
        "SELECT id, name, base_price, max_occupancy, amenities, created_at FROM room_type ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(
    db: impl sqlx::SqliteExecutor<'_>,
    id: i64,
) -> RepoResult<Option<RoomType>> {
    let row = sqlx::query_as::<_, RoomType>(
        "SELECT id, name, base_price, max_occupancy, amenities, created_at FROM room_type WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}
