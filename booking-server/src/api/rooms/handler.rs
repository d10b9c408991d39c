//! Room inventory API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bookings::availability;
use crate::core::ServerState;
use crate::db::repository::{room, room_type};
use crate::utils::{AppError, AppResult};
use shared::models::{CleaningStatus, Room, RoomStatus, RoomType};

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

fn validate_range(q: &DateRangeQuery) -> AppResult<()> {
    if q.check_out_date <= q.check_in_date {
        return Err(AppError::Validation(
            "check_out_date must be after check_in_date".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/rooms - full room inventory
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Room>>> {
    let rooms = room::find_all(&state.db).await?;
    Ok(Json(rooms))
}

/// GET /api/rooms/:id - single room
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Room>> {
    let room = room::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))?;
    Ok(Json(room))
}

/// GET /api/room-types - room type catalog
pub async fn list_room_types(State(state): State<ServerState>) -> AppResult<Json<Vec<RoomType>>> {
    let types = room_type::find_all(&state.db).await?;
    Ok(Json(types))
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub available: bool,
}

/// GET /api/rooms/:id/availability?check_in_date=..&check_out_date=..
pub async fn availability(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    validate_range(&query)?;
    room::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))?;

    let available = availability::is_available(
        &state.db,
        id,
        query.check_in_date,
        query.check_out_date,
        None,
    )
    .await?;
    Ok(Json(AvailabilityResponse {
        room_id: id,
        check_in_date: query.check_in_date,
        check_out_date: query.check_out_date,
        available,
    }))
}

/// GET /api/rooms/free?check_in_date=..&check_out_date=.. - rooms open for the range
pub async fn list_free(
    State(state): State<ServerState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<Vec<Room>>> {
    validate_range(&query)?;
    let rooms =
        room::find_free_for_range(&state.db, query.check_in_date, query.check_out_date).await?;
    Ok(Json(rooms))
}

#[derive(Debug, Deserialize)]
pub struct RoomStatusUpdate {
    pub status: RoomStatus,
    pub cleaning_status: Option<CleaningStatus>,
}

/// PUT /api/rooms/:id/status - staff sets occupancy / housekeeping state
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RoomStatusUpdate>,
) -> AppResult<Json<Room>> {
    room::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))?;

    room::update_status(&state.db, id, payload.status, payload.cleaning_status).await?;
    let room = room::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))?;
    Ok(Json(room))
}
