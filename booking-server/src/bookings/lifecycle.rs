//! Booking Lifecycle Guards
//!
//! Pure precondition checks for every transition. The manager evaluates a
//! guard, then applies the transition and its side effects inside one
//! transaction; a failed guard never mutates anything.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::auth::Role;
use crate::utils::time::day_start_millis;
use crate::utils::{AppError, AppResult};
use shared::models::{Booking, BookingStatus};

/// Customer cancellations of a confirmed booking are rejected inside this
/// window before the check-in day starts.
const CANCELLATION_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Staff status update: only `pending → confirmed | cancelled`.
pub fn guard_status_update(current: BookingStatus, target: BookingStatus) -> AppResult<()> {
    if !matches!(target, BookingStatus::Confirmed | BookingStatus::Cancelled) {
        return Err(AppError::Validation(format!(
            "invalid status target: {:?} (use check-in / check-out operations)",
            target
        )));
    }
    if current != BookingStatus::Pending {
        return Err(AppError::BusinessRule(
            "only pending bookings can be updated".to_string(),
        ));
    }
    debug_assert!(current.can_transition_to(target));
    Ok(())
}

/// Check-in: confirmed, not yet checked in, and the check-in day has
/// arrived in the business timezone.
pub fn guard_check_in(booking: &Booking, today: NaiveDate) -> AppResult<()> {
    if booking.booking_status != BookingStatus::Confirmed {
        return Err(AppError::BusinessRule(
            "only confirmed bookings can be checked in".to_string(),
        ));
    }
    if booking.check_in_time.is_some() {
        return Err(AppError::BusinessRule(
            "booking is already checked in".to_string(),
        ));
    }
    if today < booking.check_in_date {
        return Err(AppError::BusinessRule(
            "check-in date has not arrived yet".to_string(),
        ));
    }
    Ok(())
}

/// Check-out: checked in and not yet checked out.
pub fn guard_check_out(booking: &Booking) -> AppResult<()> {
    if booking.check_in_time.is_none() {
        return Err(AppError::BusinessRule(
            "booking has not been checked in".to_string(),
        ));
    }
    if booking.check_out_time.is_some() {
        return Err(AppError::BusinessRule(
            "booking is already checked out".to_string(),
        ));
    }
    Ok(())
}

/// Cancellation: never past check-in; customers additionally face the
/// 24-hour window on confirmed bookings.
pub fn guard_cancel(
    booking: &Booking,
    actor_role: Role,
    now_millis: i64,
    tz: Tz,
) -> AppResult<()> {
    match booking.booking_status {
        BookingStatus::CheckedIn | BookingStatus::CheckedOut => {
            return Err(AppError::BusinessRule(
                "cannot cancel a booking already checked in or completed".to_string(),
            ));
        }
        BookingStatus::Cancelled => {
            return Err(AppError::BusinessRule(
                "booking is already cancelled".to_string(),
            ));
        }
        BookingStatus::Pending | BookingStatus::Confirmed => {}
    }

    if actor_role == Role::Customer && booking.booking_status == BookingStatus::Confirmed {
        let check_in_start = day_start_millis(booking.check_in_date, tz);
        if check_in_start - now_millis < CANCELLATION_WINDOW_MS {
            return Err(AppError::BusinessRule(
                "confirmed bookings cannot be cancelled within 24 hours of check-in".to_string(),
            ));
        }
    }
    Ok(())
}
