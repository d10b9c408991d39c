//! Booking lifecycle API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{activity, booking as booking_repo};
use crate::utils::{AppError, AppResult};
use shared::models::{
    Booking, BookingActivity, BookingCreate, BookingService, BookingStatusUpdate, CheckInRequest,
    CheckOutRequest,
};

/// Booking with its service line items
#[derive(Debug, Serialize)]
pub struct BookingDetail {
    #[serde(flatten)]
    pub booking: Booking,
    pub services: Vec<BookingService>,
}

/// POST /api/bookings - create a pending booking
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager().create(&user, payload).await?;
    Ok(Json(booking))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub customer_id: Option<i64>,
}

/// GET /api/bookings - the caller's bookings; staff may pass ?customer_id=
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let customer_id = match query.customer_id {
        Some(id) if user.role.is_staff() => id,
        Some(id) if id != user.id => {
            return Err(AppError::Forbidden(
                "customers can only list their own bookings".to_string(),
            ));
        }
        _ => user.id,
    };
    let bookings = booking_repo::find_by_customer(&state.db, customer_id).await?;
    Ok(Json(bookings))
}

/// GET /api/bookings/:id - booking detail with service lines
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<BookingDetail>> {
    let booking = state.booking_manager().get(id).await?;
    if !user.role.is_staff() && booking.customer_id != user.id {
        return Err(AppError::Forbidden(
            "bookings are visible to their owner and staff".to_string(),
        ));
    }
    let services = booking_repo::find_services(&state.db, id).await?;
    Ok(Json(BookingDetail { booking, services }))
}

/// PATCH /api/bookings/:id/status - staff confirms or rejects a pending booking
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<BookingStatusUpdate>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .booking_manager()
        .update_status(&user, id, payload)
        .await?;
    Ok(Json(booking))
}

/// POST /api/bookings/:id/check-in
pub async fn check_in(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<CheckInRequest>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager().check_in(&user, id, payload).await?;
    Ok(Json(booking))
}

/// POST /api/bookings/:id/check-out
pub async fn check_out(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<CheckOutRequest>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .booking_manager()
        .check_out(&user, id, payload)
        .await?;
    Ok(Json(booking))
}

#[derive(Debug, Deserialize, Default)]
pub struct CancelRequest {
    pub notes: Option<String>,
}

/// POST /api/bookings/:id/cancel - owner or staff
pub async fn cancel(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    payload: Option<Json<CancelRequest>>,
) -> AppResult<Json<Booking>> {
    let notes = payload.and_then(|Json(p)| p.notes);
    let booking = state.booking_manager().cancel(&user, id, notes).await?;
    Ok(Json(booking))
}

/// GET /api/bookings/:id/activity - staff audit trail
pub async fn activity_log(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<BookingActivity>>> {
    state.booking_manager().get(id).await?;
    let entries = activity::find_by_booking(&state.db, id).await?;
    Ok(Json(entries))
}
