//! Seasonal Pricing Rule API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{room_type, seasonal_rate};
use crate::utils::{AppError, AppResult};
use shared::models::{SeasonalPricingRule, SeasonalRateCreate, SeasonalRateUpdate};

/// GET /api/seasonal-rates - every rule, grouped by room type then priority
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SeasonalPricingRule>>> {
    let rules = seasonal_rate::find_all(&state.db).await?;
    Ok(Json(rules))
}

/// GET /api/seasonal-rates/for-room-type/:room_type_id - active rules in resolver order
pub async fn list_for_room_type(
    State(state): State<ServerState>,
    Path(room_type_id): Path<i64>,
) -> AppResult<Json<Vec<SeasonalPricingRule>>> {
    let rules = seasonal_rate::find_active_for_room_type(&state.db, room_type_id).await?;
    Ok(Json(rules))
}

/// GET /api/seasonal-rates/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SeasonalPricingRule>> {
    let rule = seasonal_rate::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Seasonal rule {} not found", id)))?;
    Ok(Json(rule))
}

/// POST /api/seasonal-rates - create a rule
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SeasonalRateCreate>,
) -> AppResult<Json<SeasonalPricingRule>> {
    room_type::find_by_id(&state.db, payload.room_type_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Room type {} not found", payload.room_type_id))
        })?;
    let rule = seasonal_rate::create(&state.db, payload).await?;
    tracing::info!(rule_id = rule.id, season = %rule.season_name, "Seasonal rule created");
    Ok(Json(rule))
}

/// PUT /api/seasonal-rates/:id - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SeasonalRateUpdate>,
) -> AppResult<Json<SeasonalPricingRule>> {
    let rule = seasonal_rate::update(&state.db, id, payload).await?;
    tracing::info!(rule_id = rule.id, "Seasonal rule updated");
    Ok(Json(rule))
}

/// DELETE /api/seasonal-rates/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = seasonal_rate::delete(&state.db, id).await?;
    if deleted {
        tracing::info!(rule_id = id, "Seasonal rule deleted");
    }
    Ok(Json(deleted))
}
