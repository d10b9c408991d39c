//! Booking lifecycle API

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::auth::require_staff;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let customer_routes = Router::new()
        .route("/api/bookings", post(handler::create).get(handler::list))
        .route("/api/bookings/{id}", get(handler::get_by_id))
        .route("/api/bookings/{id}/cancel", post(handler::cancel));

    let staff_routes = Router::new()
        .route("/api/bookings/{id}/status", patch(handler::update_status))
        .route("/api/bookings/{id}/check-in", post(handler::check_in))
        .route("/api/bookings/{id}/check-out", post(handler::check_out))
        .route("/api/bookings/{id}/activity", get(handler::activity_log))
        .layer(middleware::from_fn(require_staff));

    customer_routes.merge(staff_routes)
}
