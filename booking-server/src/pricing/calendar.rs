//! Holiday Calendar
//!
//! The set of dates that trigger a rule's holiday multiplier. Injected
//! configuration (env / config file), never hardcoded in the pricing logic.

use chrono::NaiveDate;
use std::collections::HashSet;

/// Fixed set of holiday dates
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Parse a comma-separated `YYYY-MM-DD` list (the HOLIDAY_DATES env
    /// format). Unparseable entries are logged and skipped rather than
    /// failing startup.
    pub fn from_csv(csv: &str) -> Self {
        let mut dates = HashSet::new();
        for part in csv.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match NaiveDate::parse_from_str(part, "%Y-%m-%d") {
                Ok(date) => {
                    dates.insert(date);
                }
                Err(e) => {
                    tracing::warn!("Ignoring invalid holiday date '{}': {}", part, e);
                }
            }
        }
        Self { dates }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
