//! Pricing API handlers

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::{room_type, seasonal_rate};
use crate::pricing::{Quote, resolver};
use crate::utils::{AppError, AppResult};
use shared::models::ServiceRequest;

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: i32,
    #[serde(default)]
    pub services: Vec<ServiceRequest>,
}

/// POST /api/pricing/quote - price a candidate stay without booking it
pub async fn quote(
    State(state): State<ServerState>,
    Json(payload): Json<QuoteRequest>,
) -> AppResult<Json<Quote>> {
    let quote = state
        .pricing_engine()
        .quote(
            payload.room_id,
            payload.check_in_date,
            payload.check_out_date,
            payload.number_of_guests,
            &payload.services,
        )
        .await?;
    Ok(Json(quote))
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub room_type_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub price: f64,
    pub season_name: Option<String>,
}

/// GET /api/pricing/calendar?room_type_id=..&start_date=..&end_date=..
///
/// Per-day resolved prices for a room type, inclusive of both endpoints.
/// Prices assume a one-night stay, so stay-length constraints on rules do
/// not filter here.
pub async fn calendar(
    State(state): State<ServerState>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<Vec<CalendarDay>>> {
    if query.end_date < query.start_date {
        return Err(AppError::Validation(
            "end_date must not be before start_date".to_string(),
        ));
    }
    const MAX_CALENDAR_DAYS: i64 = 366;
    if (query.end_date - query.start_date).num_days() >= MAX_CALENDAR_DAYS {
        return Err(AppError::Validation(format!(
            "calendar range is limited to {} days",
            MAX_CALENDAR_DAYS
        )));
    }

    let room_type = room_type::find_by_id(&state.db, query.room_type_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Room type {} not found", query.room_type_id))
        })?;
    let rules = seasonal_rate::find_active_for_room_type(&state.db, query.room_type_id).await?;
    let fallback = Decimal::from_f64(room_type.base_price).unwrap_or_default();

    let mut days = Vec::new();
    let mut day = query.start_date;
    while day <= query.end_date {
        let price = resolver::resolve_daily_price(
            &rules,
            fallback,
            day,
            1,
            &state.calendar,
            state.config.currency_scale,
        );
        let season_name = resolver::select_rule(&rules, day, 1).map(|r| r.season_name.clone());
        days.push(CalendarDay {
            date: day,
            price: price.to_f64().unwrap_or_default(),
            season_name,
        });
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    Ok(Json(days))
}
