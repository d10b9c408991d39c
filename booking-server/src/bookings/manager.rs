//! Booking Manager
//!
//! Owns the booking lifecycle: creation and every status transition, each
//! executed as one transaction so the re-checked availability, the booking
//! row, the room status flip and the audit record commit together or not
//! at all.

use chrono_tz::Tz;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use sqlx::SqlitePool;

use crate::auth::{CurrentUser, Role};
use crate::db::repository::{activity, booking as booking_repo, room as room_repo};
use crate::pricing::{PricingEngine, Quote, round_money};
use crate::utils::time::business_today;
use crate::utils::{AppError, AppResult};
use shared::models::{
    Booking, BookingCreate, BookingStatus, BookingStatusUpdate, CheckInRequest, CheckOutRequest,
    CleaningStatus, RoomStatus,
};
use shared::util::{now_millis, snowflake_id};

use super::availability;
use super::lifecycle;

/// Booking lifecycle manager - explicit dependencies, no globals
#[derive(Clone)]
pub struct BookingManager {
    pool: SqlitePool,
    pricing: PricingEngine,
    tz: Tz,
    currency_scale: u32,
}

impl BookingManager {
    pub fn new(pool: SqlitePool, pricing: PricingEngine, tz: Tz, currency_scale: u32) -> Self {
        Self {
            pool,
            pricing,
            tz,
            currency_scale,
        }
    }

    pub async fn get(&self, id: i64) -> AppResult<Booking> {
        booking_repo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Create a booking in `pending` state.
    ///
    /// The availability check runs twice: once up front for a fast, friendly
    /// rejection, and again inside the INSERT transaction so a concurrent
    /// committed booking is seen before this one commits.
    pub async fn create(&self, actor: &CurrentUser, req: BookingCreate) -> AppResult<Booking> {
        let today = business_today(self.tz);
        if req.check_in_date < today {
            return Err(AppError::Validation(
                "check_in_date cannot be in the past".to_string(),
            ));
        }

        // Validates dates, guest count and services; prices the stay.
        let quote: Quote = self
            .pricing
            .quote(
                req.room_id,
                req.check_in_date,
                req.check_out_date,
                req.number_of_guests,
                &req.services,
            )
            .await?;

        if !availability::is_available(
            &self.pool,
            req.room_id,
            req.check_in_date,
            req.check_out_date,
            None,
        )
        .await?
        {
            return self
                .availability_conflict(req.room_id, &req, None)
                .await;
        }

        let id = snowflake_id();
        let now = now_millis();

        let mut tx = self.pool.begin().await?;

        // Re-check under the transaction: a concurrent writer either commits
        // before us (and is visible here) or blocks on the write lock.
        let blocking = availability::blocking_bookings(
            &mut *tx,
            req.room_id,
            req.check_in_date,
            req.check_out_date,
            None,
        )
        .await?;
        if !blocking.is_empty() {
            drop(tx);
            return self.availability_conflict(req.room_id, &req, Some(blocking)).await;
        }

        booking_repo::insert(
            &mut *tx,
            id,
            actor.id,
            req.room_id,
            req.check_in_date,
            req.check_out_date,
            req.number_of_guests,
            quote.total_amount,
            req.special_requests.as_deref(),
            now,
        )
        .await?;

        for line in &quote.services {
            booking_repo::insert_service(
                &mut *tx,
                snowflake_id(),
                id,
                line.service_id,
                line.quantity,
                line.unit_price,
                line.total_price,
            )
            .await?;
        }

        activity::append(
            &mut *tx,
            id,
            actor.id,
            actor.role.as_str(),
            "created",
            req.special_requests.as_deref(),
            now,
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            booking_id = id,
            room_id = req.room_id,
            check_in = %req.check_in_date,
            check_out = %req.check_out_date,
            total = quote.total_amount,
            "Booking created"
        );

        self.get(id).await
    }

    /// Staff confirmation or rejection of a pending booking.
    ///
    /// Confirmation is the commit point for the room: overlapping pending
    /// bookings coexist freely, so availability must be checked here, under
    /// the same transaction that flips the status. Of several overlapping
    /// pendings only the first confirmation can succeed.
    pub async fn update_status(
        &self,
        actor: &CurrentUser,
        id: i64,
        update: BookingStatusUpdate,
    ) -> AppResult<Booking> {
        self.require_staff(actor)?;
        let booking = self.get(id).await?;
        lifecycle::guard_status_update(booking.booking_status, update.status)?;

        let now = now_millis();
        let action = match update.status {
            BookingStatus::Confirmed => "confirmed",
            _ => "cancelled",
        };

        let mut tx = self.pool.begin().await?;
        if update.status == BookingStatus::Confirmed {
            let blocking = availability::blocking_bookings(
                &mut *tx,
                booking.room_id,
                booking.check_in_date,
                booking.check_out_date,
                Some(id),
            )
            .await?;
            if !blocking.is_empty() {
                drop(tx);
                let ranges: Vec<String> = blocking
                    .iter()
                    .map(|b| format!("{}..{}", b.check_in_date, b.check_out_date))
                    .collect();
                return Err(AppError::Conflict(format!(
                    "room is no longer available for {}..{} (booked {})",
                    booking.check_in_date,
                    booking.check_out_date,
                    ranges.join(", ")
                )));
            }
        }
        booking_repo::update_status(&mut *tx, id, update.status, now).await?;
        if let Some(notes) = update.notes.as_deref() {
            booking_repo::append_staff_note(&mut *tx, id, notes, now).await?;
        }
        activity::append(
            &mut *tx,
            id,
            actor.id,
            actor.role.as_str(),
            action,
            update.notes.as_deref(),
            now,
        )
        .await?;
        tx.commit().await?;

        tracing::info!(booking_id = id, status = action, "Booking status updated");
        self.get(id).await
    }

    /// Physical check-in: booking → checked_in, room → occupied.
    pub async fn check_in(
        &self,
        actor: &CurrentUser,
        id: i64,
        req: CheckInRequest,
    ) -> AppResult<Booking> {
        self.require_staff(actor)?;
        let booking = self.get(id).await?;
        lifecycle::guard_check_in(&booking, business_today(self.tz))?;

        let now = now_millis();
        let mut tx = self.pool.begin().await?;
        booking_repo::record_check_in(&mut *tx, id, actor.id, now).await?;
        room_repo::update_status(&mut *tx, booking.room_id, RoomStatus::Occupied, None).await?;
        if let Some(notes) = req.notes.as_deref() {
            booking_repo::append_staff_note(&mut *tx, id, notes, now).await?;
        }
        activity::append(
            &mut *tx,
            id,
            actor.id,
            actor.role.as_str(),
            "checked_in",
            req.notes.as_deref(),
            now,
        )
        .await?;
        tx.commit().await?;

        tracing::info!(booking_id = id, room_id = booking.room_id, "Guest checked in");
        self.get(id).await
    }

    /// Physical check-out: booking → checked_out, extra charges settled,
    /// room released for housekeeping.
    pub async fn check_out(
        &self,
        actor: &CurrentUser,
        id: i64,
        req: CheckOutRequest,
    ) -> AppResult<Booking> {
        self.require_staff(actor)?;
        let booking = self.get(id).await?;
        lifecycle::guard_check_out(&booking)?;

        if !req.additional_charges.is_finite() || req.additional_charges < 0.0 {
            return Err(AppError::Validation(
                "additional_charges must be a non-negative amount".to_string(),
            ));
        }
        let total = Decimal::from_f64(booking.total_amount).unwrap_or_default()
            + Decimal::from_f64(req.additional_charges).unwrap_or_default();
        let new_total = round_money(total, self.currency_scale)
            .to_f64()
            .unwrap_or(booking.total_amount);

        let now = now_millis();
        let mut tx = self.pool.begin().await?;
        booking_repo::record_check_out(&mut *tx, id, actor.id, new_total, now).await?;
        room_repo::update_status(
            &mut *tx,
            booking.room_id,
            RoomStatus::Available,
            Some(CleaningStatus::Dirty),
        )
        .await?;
        if let Some(notes) = req.notes.as_deref() {
            booking_repo::append_staff_note(&mut *tx, id, notes, now).await?;
        }
        activity::append(
            &mut *tx,
            id,
            actor.id,
            actor.role.as_str(),
            "checked_out",
            req.notes.as_deref(),
            now,
        )
        .await?;
        tx.commit().await?;

        tracing::info!(
            booking_id = id,
            room_id = booking.room_id,
            total = new_total,
            "Guest checked out"
        );
        self.get(id).await
    }

    /// Cancellation by the customer who owns the booking, or by staff.
    pub async fn cancel(
        &self,
        actor: &CurrentUser,
        id: i64,
        notes: Option<String>,
    ) -> AppResult<Booking> {
        let booking = self.get(id).await?;
        if actor.role == Role::Customer && booking.customer_id != actor.id {
            return Err(AppError::Forbidden(
                "bookings can only be cancelled by their owner".to_string(),
            ));
        }
        lifecycle::guard_cancel(&booking, actor.role, now_millis(), self.tz)?;

        let now = now_millis();
        let mut tx = self.pool.begin().await?;
        booking_repo::update_status(&mut *tx, id, BookingStatus::Cancelled, now).await?;
        activity::append(
            &mut *tx,
            id,
            actor.id,
            actor.role.as_str(),
            "cancelled",
            notes.as_deref(),
            now,
        )
        .await?;
        tx.commit().await?;

        tracing::info!(booking_id = id, actor = actor.id, "Booking cancelled");
        self.get(id).await
    }

    fn require_staff(&self, actor: &CurrentUser) -> AppResult<()> {
        if !actor.role.is_staff() {
            return Err(AppError::Forbidden("staff role required".to_string()));
        }
        Ok(())
    }

    /// Build the conflict error carrying the blocking date ranges so the
    /// caller can adjust and retry.
    async fn availability_conflict(
        &self,
        room_id: i64,
        req: &BookingCreate,
        blocking: Option<Vec<Booking>>,
    ) -> AppResult<Booking> {
        let blocking = match blocking {
            Some(b) => b,
            None => {
                availability::blocking_bookings(
                    &self.pool,
                    room_id,
                    req.check_in_date,
                    req.check_out_date,
                    None,
                )
                .await?
            }
        };
        let ranges: Vec<String> = blocking
            .iter()
            .map(|b| format!("{}..{}", b.check_in_date, b.check_out_date))
            .collect();
        Err(AppError::Conflict(format!(
            "room is not available for {}..{} (booked {})",
            req.check_in_date,
            req.check_out_date,
            ranges.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::seeded_pool;
    use crate::pricing::HolidayCalendar;
    use chrono::{Duration, NaiveDate};
    use shared::models::ServiceRequest;
    use std::sync::Arc;

    fn manager(pool: SqlitePool) -> BookingManager {
        let tz: Tz = "Asia/Ho_Chi_Minh".parse().unwrap();
        let pricing = PricingEngine::new(pool.clone(), Arc::new(HolidayCalendar::default()), 0);
        BookingManager::new(pool, pricing, tz, 0)
    }

    fn customer(id: i64) -> CurrentUser {
        CurrentUser {
            id,
            role: Role::Customer,
        }
    }

    fn staff(id: i64) -> CurrentUser {
        CurrentUser {
            id,
            role: Role::Staff,
        }
    }

    fn tz() -> Tz {
        "Asia/Ho_Chi_Minh".parse().unwrap()
    }

    /// A check-in date far enough ahead that the 24h window never triggers.
    fn future_date(days: i64) -> NaiveDate {
        business_today(tz()) + Duration::days(days)
    }

    fn create_req(room_id: i64, days_ahead: i64, nights: i64) -> BookingCreate {
        BookingCreate {
            room_id,
            check_in_date: future_date(days_ahead),
            check_out_date: future_date(days_ahead + nights),
            number_of_guests: 2,
            services: vec![],
            special_requests: None,
        }
    }

    #[tokio::test]
    async fn create_booking_lands_pending_with_priced_total() {
        let pool = seeded_pool().await;
        let mgr = manager(pool.clone());

        let booking = mgr.create(&customer(10), create_req(101, 30, 2)).await.unwrap();
        assert_eq!(booking.booking_status, BookingStatus::Pending);
        assert_eq!(booking.customer_id, 10);
        // 2 nights at base 500,000 (no seasonal rules seeded)
        assert_eq!(booking.total_amount, 1_000_000.0);

        let acts = activity::find_by_booking(&pool, booking.id).await.unwrap();
        assert_eq!(acts.len(), 1);
        assert_eq!(acts[0].action, "created");
    }

    #[tokio::test]
    async fn create_booking_with_services_captures_line_prices() {
        let pool = seeded_pool().await;
        let mgr = manager(pool.clone());

        let mut req = create_req(101, 30, 2);
        req.services = vec![ServiceRequest {
            service_id: 1,
            quantity: 2,
        }];
        let booking = mgr.create(&customer(10), req).await.unwrap();
        // 1,000,000 base + 2 × 150,000 breakfast
        assert_eq!(booking.total_amount, 1_300_000.0);

        let lines = booking_repo::find_services(&pool, booking.id).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].unit_price, 150_000.0);
        assert_eq!(lines[0].total_price, 300_000.0);
    }

    #[tokio::test]
    async fn create_rejects_past_check_in() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let mut req = create_req(101, 0, 2);
        req.check_in_date = business_today(tz()) - Duration::days(1);
        req.check_out_date = business_today(tz()) + Duration::days(1);
        let err = mgr.create(&customer(10), req).await.unwrap_err();
        assert!(err.to_string().contains("past"));
    }

    #[tokio::test]
    async fn create_rejects_excess_guests() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let mut req = create_req(101, 30, 2);
        req.number_of_guests = 3; // Standard sleeps 2
        let err = mgr.create(&customer(10), req).await.unwrap_err();
        assert!(err.to_string().contains("occupancy"));
    }

    #[tokio::test]
    async fn pending_bookings_do_not_block_each_other() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        // Two customers race for the same dates; both may hold pending.
        mgr.create(&customer(10), create_req(101, 30, 2)).await.unwrap();
        mgr.create(&customer(11), create_req(101, 30, 2)).await.unwrap();
    }

    #[tokio::test]
    async fn confirmed_booking_blocks_second_create() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let first = mgr.create(&customer(10), create_req(101, 30, 2)).await.unwrap();
        mgr.update_status(
            &staff(1),
            first.id,
            BookingStatusUpdate {
                status: BookingStatus::Confirmed,
                notes: None,
            },
        )
        .await
        .unwrap();

        let err = mgr
            .create(&customer(11), create_req(101, 31, 2))
            .await
            .unwrap_err();
        match err {
            AppError::Conflict(msg) => assert!(msg.contains("not available")),
            other => panic!("expected conflict, got {other:?}"),
        }

        // A back-to-back stay starting on the checkout day is fine.
        mgr.create(&customer(11), create_req(101, 32, 2)).await.unwrap();
    }

    #[tokio::test]
    async fn overlapping_pendings_confirm_only_once() {
        let pool = seeded_pool().await;
        let mgr = manager(pool.clone());

        // Two customers hold pendings for the same room and dates.
        let first = mgr.create(&customer(10), create_req(101, 30, 2)).await.unwrap();
        let second = mgr.create(&customer(11), create_req(101, 30, 2)).await.unwrap();

        mgr.update_status(
            &staff(1),
            first.id,
            BookingStatusUpdate {
                status: BookingStatus::Confirmed,
                notes: None,
            },
        )
        .await
        .unwrap();

        // Confirmation is the commit point: the second must lose.
        let err = mgr
            .update_status(
                &staff(1),
                second.id,
                BookingStatusUpdate {
                    status: BookingStatus::Confirmed,
                    notes: None,
                },
            )
            .await
            .unwrap_err();
        match err {
            AppError::Conflict(msg) => assert!(msg.contains("no longer available")),
            other => panic!("expected conflict, got {other:?}"),
        }

        // The loser is untouched and can still be cancelled.
        let after = mgr.get(second.id).await.unwrap();
        assert_eq!(after.booking_status, BookingStatus::Pending);

        // Exactly one confirmed booking holds the room.
        let blocking = availability::blocking_bookings(
            &pool,
            101,
            first.check_in_date,
            first.check_out_date,
            None,
        )
        .await
        .unwrap();
        assert_eq!(blocking.len(), 1);
        assert_eq!(blocking[0].id, first.id);
    }

    #[tokio::test]
    async fn partially_overlapping_pending_confirm_rejected() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let first = mgr.create(&customer(10), create_req(101, 30, 2)).await.unwrap();
        // Shifted by one night: still overlaps the middle day.
        let second = mgr.create(&customer(11), create_req(101, 31, 2)).await.unwrap();

        mgr.update_status(
            &staff(1),
            first.id,
            BookingStatusUpdate {
                status: BookingStatus::Confirmed,
                notes: None,
            },
        )
        .await
        .unwrap();

        let err = mgr
            .update_status(
                &staff(1),
                second.id,
                BookingStatusUpdate {
                    status: BookingStatus::Confirmed,
                    notes: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // Rejecting the loser still works: cancellation needs no room.
        let cancelled = mgr
            .update_status(
                &staff(1),
                second.id,
                BookingStatusUpdate {
                    status: BookingStatus::Cancelled,
                    notes: Some("room taken".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(cancelled.booking_status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn update_status_only_from_pending() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let b = mgr.create(&customer(10), create_req(101, 30, 2)).await.unwrap();
        let confirmed = mgr
            .update_status(
                &staff(1),
                b.id,
                BookingStatusUpdate {
                    status: BookingStatus::Confirmed,
                    notes: Some("deposit received".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(confirmed.booking_status, BookingStatus::Confirmed);
        assert!(confirmed.staff_notes.unwrap().contains("deposit received"));

        // Confirming again is a state error.
        let err = mgr
            .update_status(
                &staff(1),
                b.id,
                BookingStatusUpdate {
                    status: BookingStatus::Confirmed,
                    notes: None,
                },
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("only pending"));
    }

    #[tokio::test]
    async fn update_status_requires_staff() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let b = mgr.create(&customer(10), create_req(101, 30, 2)).await.unwrap();
        let err = mgr
            .update_status(
                &customer(10),
                b.id,
                BookingStatusUpdate {
                    status: BookingStatus::Confirmed,
                    notes: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    async fn confirmed_booking_starting_today(
        mgr: &BookingManager,
        room_id: i64,
        nights: i64,
    ) -> Booking {
        let req = BookingCreate {
            room_id,
            check_in_date: business_today(tz()),
            check_out_date: business_today(tz()) + Duration::days(nights),
            number_of_guests: 2,
            services: vec![],
            special_requests: None,
        };
        let b = mgr.create(&customer(10), req).await.unwrap();
        mgr.update_status(
            &staff(1),
            b.id,
            BookingStatusUpdate {
                status: BookingStatus::Confirmed,
                notes: None,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn check_in_flips_room_to_occupied() {
        let pool = seeded_pool().await;
        let mgr = manager(pool.clone());

        let b = confirmed_booking_starting_today(&mgr, 101, 2).await;
        let checked_in = mgr
            .check_in(&staff(7), b.id, CheckInRequest { notes: None })
            .await
            .unwrap();
        assert_eq!(checked_in.booking_status, BookingStatus::CheckedIn);
        assert_eq!(checked_in.checked_in_by, Some(7));
        assert!(checked_in.check_in_time.is_some());

        let room = room_repo::find_by_id(&pool, 101).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);
    }

    #[tokio::test]
    async fn early_check_in_rejected() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let b = mgr.create(&customer(10), create_req(101, 1, 2)).await.unwrap();
        mgr.update_status(
            &staff(1),
            b.id,
            BookingStatusUpdate {
                status: BookingStatus::Confirmed,
                notes: None,
            },
        )
        .await
        .unwrap();

        let err = mgr
            .check_in(&staff(1), b.id, CheckInRequest { notes: None })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("has not arrived"));
    }

    #[tokio::test]
    async fn check_out_settles_charges_and_releases_room() {
        let pool = seeded_pool().await;
        let mgr = manager(pool.clone());

        let b = confirmed_booking_starting_today(&mgr, 101, 2).await;
        mgr.check_in(&staff(7), b.id, CheckInRequest { notes: None })
            .await
            .unwrap();

        let done = mgr
            .check_out(
                &staff(8),
                b.id,
                CheckOutRequest {
                    additional_charges: 200_000.0,
                    notes: Some("minibar".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(done.booking_status, BookingStatus::CheckedOut);
        assert_eq!(done.checked_out_by, Some(8));
        assert_eq!(done.total_amount, 1_200_000.0);
        assert!(done.staff_notes.unwrap().contains("minibar"));

        let room = room_repo::find_by_id(&pool, 101).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Available);
        assert_eq!(room.cleaning_status, CleaningStatus::Dirty);

        let acts = activity::find_by_booking(&pool, b.id).await.unwrap();
        let actions: Vec<&str> = acts.iter().map(|a| a.action.as_str()).collect();
        assert_eq!(actions, ["created", "confirmed", "checked_in", "checked_out"]);
    }

    #[tokio::test]
    async fn check_out_without_check_in_rejected() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let b = confirmed_booking_starting_today(&mgr, 101, 2).await;
        let err = mgr
            .check_out(
                &staff(8),
                b.id,
                CheckOutRequest {
                    additional_charges: 0.0,
                    notes: None,
                },
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not been checked in"));
    }

    #[tokio::test]
    async fn cancel_checked_in_booking_never_mutates() {
        let pool = seeded_pool().await;
        let mgr = manager(pool.clone());

        let b = confirmed_booking_starting_today(&mgr, 101, 2).await;
        mgr.check_in(&staff(7), b.id, CheckInRequest { notes: None })
            .await
            .unwrap();

        let err = mgr.cancel(&staff(1), b.id, None).await.unwrap_err();
        assert!(err.to_string().contains("cannot cancel"));

        let after = mgr.get(b.id).await.unwrap();
        assert_eq!(after.booking_status, BookingStatus::CheckedIn);
    }

    #[tokio::test]
    async fn customer_cancels_own_pending_booking() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let b = mgr.create(&customer(10), create_req(101, 30, 2)).await.unwrap();
        let cancelled = mgr.cancel(&customer(10), b.id, None).await.unwrap();
        assert_eq!(cancelled.booking_status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn customer_cannot_cancel_someone_elses_booking() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let b = mgr.create(&customer(10), create_req(101, 30, 2)).await.unwrap();
        let err = mgr.cancel(&customer(99), b.id, None).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn customer_blocked_by_24h_window_on_confirmed() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        // Check-in tomorrow: day-start is always within 24h of now.
        let b = confirmed_booking(&mgr, 101, 1).await;
        let err = mgr.cancel(&customer(10), b.id, None).await.unwrap_err();
        assert!(err.to_string().contains("24 hours"));

        // Staff overrides the window.
        let cancelled = mgr.cancel(&staff(1), b.id, None).await.unwrap();
        assert_eq!(cancelled.booking_status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn customer_cancels_confirmed_outside_window() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let b = confirmed_booking(&mgr, 101, 30).await;
        let cancelled = mgr.cancel(&customer(10), b.id, None).await.unwrap();
        assert_eq!(cancelled.booking_status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn cancelled_booking_frees_the_dates() {
        let pool = seeded_pool().await;
        let mgr = manager(pool);

        let b = confirmed_booking(&mgr, 101, 30).await;
        mgr.cancel(&staff(1), b.id, None).await.unwrap();

        // Same dates, same room: available again.
        mgr.create(&customer(11), create_req(101, 30, 2)).await.unwrap();
    }

    async fn confirmed_booking(mgr: &BookingManager, room_id: i64, days_ahead: i64) -> Booking {
        let b = mgr
            .create(&customer(10), create_req(room_id, days_ahead, 2))
            .await
            .unwrap();
        mgr.update_status(
            &staff(1),
            b.id,
            BookingStatusUpdate {
                status: BookingStatus::Confirmed,
                notes: None,
            },
        )
        .await
        .unwrap()
    }
}
