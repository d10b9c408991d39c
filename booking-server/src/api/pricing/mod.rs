//! Pricing API: cost preview and the per-day pricing calendar

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pricing/quote", post(handler::quote))
        .route("/api/pricing/calendar", get(handler::calendar))
}
