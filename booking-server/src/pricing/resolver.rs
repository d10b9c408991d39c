//! Seasonal Pricing Rule Resolver
//!
//! Picks the rule that prices a single calendar day: among active rules
//! covering the day (and admitting the stay length), highest priority wins,
//! ties broken by earliest start date. Weekend and holiday multipliers
//! compose multiplicatively, weekend first.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use shared::models::SeasonalPricingRule;

use super::calendar::HolidayCalendar;
use super::round_money;

/// Select the applicable rule for a day, if any.
pub fn select_rule<'a>(
    rules: &'a [SeasonalPricingRule],
    date: NaiveDate,
    stay_nights: i64,
) -> Option<&'a SeasonalPricingRule> {
    rules
        .iter()
        .filter(|r| r.is_active && r.covers(date) && r.admits_stay(stay_nights))
        .max_by_key(|r| (r.priority, std::cmp::Reverse(r.start_date)))
}

/// Resolve the nightly price for one calendar day.
///
/// No applicable rule → the room type's base price. Rounded half-up to the
/// currency's minor unit, per day.
pub fn resolve_daily_price(
    rules: &[SeasonalPricingRule],
    fallback_base_price: Decimal,
    date: NaiveDate,
    stay_nights: i64,
    calendar: &HolidayCalendar,
    currency_scale: u32,
) -> Decimal {
    let price = match select_rule(rules, date, stay_nights) {
        None => fallback_base_price,
        Some(rule) => {
            let mut price = Decimal::from_f64(rule.base_price).unwrap_or_default();
            if is_weekend(date) {
                price *= Decimal::from_f64(rule.weekend_multiplier).unwrap_or(Decimal::ONE);
            }
            if calendar.is_holiday(date) {
                price *= Decimal::from_f64(rule.holiday_multiplier).unwrap_or(Decimal::ONE);
            }
            price
        }
    };
    round_money(price, currency_scale)
}

/// Saturday/Sunday carry the weekend multiplier.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
