//! Room inventory API

mod handler;

use axum::{Router, middleware, routing::get, routing::put};

use crate::auth::require_staff;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/api/rooms", get(handler::list))
        .route("/api/rooms/free", get(handler::list_free))
        .route("/api/rooms/{id}", get(handler::get_by_id))
        .route("/api/rooms/{id}/availability", get(handler::availability))
        .route("/api/room-types", get(handler::list_room_types));

    let staff_routes = Router::new()
        .route("/api/rooms/{id}/status", put(handler::update_status))
        .layer(middleware::from_fn(require_staff));

    read_routes.merge(staff_routes)
}
