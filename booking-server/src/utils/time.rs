//! Time utilities — business-timezone date handling
//!
//! All stay logic compares calendar dates, never instants: "today", "the
//! check-in day has arrived" and the cancellation window are evaluated in
//! the property's business timezone so a UTC offset can't shift a stay by
//! a day.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Today's calendar date in the business timezone
pub fn business_today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Day start (00:00:00) → Unix millis in the business timezone
///
/// DST gap fallback: if the local midnight doesn't exist, fall back to UTC.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Number of nights between two dates (half-open stay)
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}
