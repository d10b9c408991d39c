//! Pricing Module
//!
//! - [`calendar`] - injected holiday calendar
//! - [`resolver`] - per-day seasonal rule resolution
//! - [`engine`] - stay cost computation (nightly breakdown + services)

pub mod calendar;
pub mod engine;
pub mod resolver;

pub use calendar::HolidayCalendar;
pub use engine::{PricingEngine, Quote};

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary value to the currency's minor unit, half-up.
///
/// Applied once per night, not once at the end of the stay.
pub fn round_money(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}
