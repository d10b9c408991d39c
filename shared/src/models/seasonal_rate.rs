//! Seasonal Pricing Rule Model
//!
//! Date-ranged nightly price override per room type. Active rules for the
//! same room type at the same priority must not overlap; the resolver picks
//! the highest priority among applicable rules, ties broken by earliest
//! start date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Seasonal pricing rule entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SeasonalPricingRule {
    pub id: i64,
    pub room_type_id: i64,
    pub season_name: String,
    /// Inclusive date range
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Overrides the room type base price inside the window
    pub base_price: f64,
    pub weekend_multiplier: f64,
    pub holiday_multiplier: f64,
    pub min_stay_nights: Option<i32>,
    pub max_stay_nights: Option<i32>,
    /// Higher wins when ranges at different priorities overlap
    pub priority: i32,
    pub is_active: bool,
    pub created_at: i64,
}

impl SeasonalPricingRule {
    /// Inclusive membership test for a calendar day.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether the rule admits a stay of `nights` nights.
    pub fn admits_stay(&self, nights: i64) -> bool {
        if let Some(min) = self.min_stay_nights
            && nights < min as i64
        {
            return false;
        }
        if let Some(max) = self.max_stay_nights
            && nights > max as i64
        {
            return false;
        }
        true
    }
}

/// Create seasonal rule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalRateCreate {
    pub room_type_id: i64,
    pub season_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base_price: f64,
    pub weekend_multiplier: Option<f64>,
    pub holiday_multiplier: Option<f64>,
    pub min_stay_nights: Option<i32>,
    pub max_stay_nights: Option<i32>,
    pub priority: Option<i32>,
}

/// Update seasonal rule payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonalRateUpdate {
    pub season_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub base_price: Option<f64>,
    pub weekend_multiplier: Option<f64>,
    pub holiday_multiplier: Option<f64>,
    pub min_stay_nights: Option<i32>,
    pub max_stay_nights: Option<i32>,
    pub priority: Option<i32>,
    pub is_active: Option<bool>,
}
