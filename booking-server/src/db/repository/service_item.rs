//! Service Catalog Repository

use super::RepoResult;
use shared::models::ServiceItem;
use sqlx::SqlitePool;

pub async fn find_all_active(pool: &SqlitePool) -> RepoResult<Vec<ServiceItem>> {
    let rows = sqlx::query_as::<_, ServiceItem>(
        "SELECT id, name, unit_price, is_active FROM service_item WHERE is_active = 1 ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(
    db: impl sqlx::SqliteExecutor<'_>,
    id: i64,
) -> RepoResult<Option<ServiceItem>> {
    let row = sqlx::query_as::<_, ServiceItem>(
        "SELECT id, name, unit_price, is_active FROM service_item WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}
