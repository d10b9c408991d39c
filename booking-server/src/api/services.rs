//! Service catalog

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use crate::db::repository::service_item;
use crate::utils::AppResult;
use shared::models::ServiceItem;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/services", get(list))
}

/// GET /api/services - bookable add-on services (active only)
async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ServiceItem>>> {
    let services = service_item::find_all_active(&state.db).await?;
    Ok(Json(services))
}
