//! Seasonal Pricing Rule Repository
//!
//! Create/update validate the same-priority non-overlap invariant inside a
//! transaction, so two concurrent rule writes cannot both pass the check
//! and both commit.

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{SeasonalPricingRule, SeasonalRateCreate, SeasonalRateUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, room_type_id, season_name, start_date, end_date, base_price, \
    weekend_multiplier, holiday_multiplier, min_stay_nights, max_stay_nights, \
    priority, is_active, created_at";

pub async fn find_by_id(
    db: impl sqlx::SqliteExecutor<'_>,
    id: i64,
) -> RepoResult<Option<SeasonalPricingRule>> {
    let row = sqlx::query_as::<_, SeasonalPricingRule>(&format!(
        "SELECT {COLUMNS} FROM seasonal_pricing_rule WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<SeasonalPricingRule>> {
    let rows = sqlx::query_as::<_, SeasonalPricingRule>(&format!(
        "SELECT {COLUMNS} FROM seasonal_pricing_rule ORDER BY room_type_id, priority DESC, start_date"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Active rules for a room type, resolver ordering: priority DESC, ties by
/// earliest start_date.
pub async fn find_active_for_room_type(
    db: impl sqlx::SqliteExecutor<'_>,
    room_type_id: i64,
) -> RepoResult<Vec<SeasonalPricingRule>> {
    let rows = sqlx::query_as::<_, SeasonalPricingRule>(&format!(
        "SELECT {COLUMNS} FROM seasonal_pricing_rule \
         WHERE room_type_id = ? AND is_active = 1 \
         ORDER BY priority DESC, start_date"
    ))
    .bind(room_type_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Active rules for the same room type and priority whose inclusive date
/// range intersects `[start, end]`, excluding `exclude_id` on update.
///
/// Intersection test: `existing.start <= new.end AND new.start <= existing.end`.
pub async fn find_conflicting(
    db: impl sqlx::SqliteExecutor<'_>,
    room_type_id: i64,
    priority: i32,
    start: NaiveDate,
    end: NaiveDate,
    exclude_id: Option<i64>,
) -> RepoResult<Vec<SeasonalPricingRule>> {
    let rows = sqlx::query_as::<_, SeasonalPricingRule>(&format!(
        "SELECT {COLUMNS} FROM seasonal_pricing_rule \
         WHERE room_type_id = ?1 AND priority = ?2 AND is_active = 1 \
         AND start_date <= ?4 AND ?3 <= end_date \
         AND (?5 IS NULL OR id != ?5)"
    ))
    .bind(room_type_id)
    .bind(priority)
    .bind(start)
    .bind(end)
    .bind(exclude_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

fn validate_dates(start: NaiveDate, end: NaiveDate) -> RepoResult<()> {
    if end < start {
        return Err(RepoError::Validation(format!(
            "end_date {} is before start_date {}",
            end, start
        )));
    }
    Ok(())
}

/// A zero or negative multiplier would silently zero out or invert nightly
/// prices, so pricing inputs are range-checked at the write boundary.
fn validate_pricing(base_price: f64, weekend: f64, holiday: f64) -> RepoResult<()> {
    if !base_price.is_finite() || base_price < 0.0 {
        return Err(RepoError::Validation(format!(
            "base_price must be a non-negative amount, got {}",
            base_price
        )));
    }
    for (name, value) in [("weekend_multiplier", weekend), ("holiday_multiplier", holiday)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(RepoError::Validation(format!(
                "{} must be a positive number, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

fn overlap_error(conflicts: &[SeasonalPricingRule]) -> RepoError {
    let ranges: Vec<String> = conflicts
        .iter()
        .map(|r| format!("'{}' {}..{}", r.season_name, r.start_date, r.end_date))
        .collect();
    RepoError::Duplicate(format!(
        "overlapping seasonal pricing periods detected: {}",
        ranges.join(", ")
    ))
}

/// Create a new seasonal rule. Overlap check and INSERT share a transaction.
pub async fn create(
    pool: &SqlitePool,
    data: SeasonalRateCreate,
) -> RepoResult<SeasonalPricingRule> {
    validate_dates(data.start_date, data.end_date)?;
    validate_pricing(
        data.base_price,
        data.weekend_multiplier.unwrap_or(1.0),
        data.holiday_multiplier.unwrap_or(1.0),
    )?;
    let priority = data.priority.unwrap_or(0);

    let mut tx = pool.begin().await?;

    let conflicts = find_conflicting(
        &mut *tx,
        data.room_type_id,
        priority,
        data.start_date,
        data.end_date,
        None,
    )
    .await?;
    if !conflicts.is_empty() {
        return Err(overlap_error(&conflicts));
    }

    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO seasonal_pricing_rule (id, room_type_id, season_name, start_date, end_date, \
         base_price, weekend_multiplier, holiday_multiplier, min_stay_nights, max_stay_nights, \
         priority, is_active, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1, ?)",
    )
    .bind(id)
    .bind(data.room_type_id)
    .bind(&data.season_name)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(data.base_price)
    .bind(data.weekend_multiplier.unwrap_or(1.0))
    .bind(data.holiday_multiplier.unwrap_or(1.0))
    .bind(data.min_stay_nights)
    .bind(data.max_stay_nights)
    .bind(priority)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create seasonal rule".to_string()))
}

/// Update a seasonal rule. The merged range/priority is re-validated against
/// every other active rule inside the same transaction as the UPDATE.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: SeasonalRateUpdate,
) -> RepoResult<SeasonalPricingRule> {
    let mut tx = pool.begin().await?;

    let existing = find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Seasonal rule {} not found", id)))?;

    let start = data.start_date.unwrap_or(existing.start_date);
    let end = data.end_date.unwrap_or(existing.end_date);
    let priority = data.priority.unwrap_or(existing.priority);
    let is_active = data.is_active.unwrap_or(existing.is_active);
    validate_dates(start, end)?;
    validate_pricing(
        data.base_price.unwrap_or(existing.base_price),
        data.weekend_multiplier.unwrap_or(existing.weekend_multiplier),
        data.holiday_multiplier.unwrap_or(existing.holiday_multiplier),
    )?;

    // A rule being deactivated can't conflict with anything.
    if is_active {
        let conflicts =
            find_conflicting(&mut *tx, existing.room_type_id, priority, start, end, Some(id))
                .await?;
        if !conflicts.is_empty() {
            return Err(overlap_error(&conflicts));
        }
    }

    sqlx::query(
        "UPDATE seasonal_pricing_rule SET season_name = ?, start_date = ?, end_date = ?, \
         base_price = ?, weekend_multiplier = ?, holiday_multiplier = ?, \
         min_stay_nights = ?, max_stay_nights = ?, priority = ?, is_active = ? WHERE id = ?",
    )
    .bind(data.season_name.unwrap_or(existing.season_name))
    .bind(start)
    .bind(end)
    .bind(data.base_price.unwrap_or(existing.base_price))
    .bind(data.weekend_multiplier.unwrap_or(existing.weekend_multiplier))
    .bind(data.holiday_multiplier.unwrap_or(existing.holiday_multiplier))
    .bind(data.min_stay_nights.or(existing.min_stay_nights))
    .bind(data.max_stay_nights.or(existing.max_stay_nights))
    .bind(priority)
    .bind(is_active)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Seasonal rule {} not found", id)))
}

/// Hard delete a seasonal rule
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM seasonal_pricing_rule WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
