//! Seasonal Pricing Rule API

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_staff;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/api/seasonal-rates", get(handler::list))
        .route("/api/seasonal-rates/{id}", get(handler::get_by_id))
        .route(
            "/api/seasonal-rates/for-room-type/{room_type_id}",
            get(handler::list_for_room_type),
        );

    let write_routes = Router::new()
        .route("/api/seasonal-rates", axum::routing::post(handler::create))
        .route(
            "/api/seasonal-rates/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
        .layer(middleware::from_fn(require_staff));

    read_routes.merge(write_routes)
}
