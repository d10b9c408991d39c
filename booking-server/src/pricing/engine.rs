//! Pricing Engine
//!
//! Computes the full cost of a stay: one resolved price per night plus
//! catalog-priced service lines. All arithmetic runs in `Decimal`; `f64`
//! appears only in the serialized result.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::Serialize;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::db::repository::{room, room_type, seasonal_rate, service_item};
use crate::utils::time::nights_between;
use crate::utils::{AppError, AppResult};
use shared::models::ServiceRequest;

use super::calendar::HolidayCalendar;
use super::resolver::resolve_daily_price;
use super::round_money;

/// Resolved price for a single night
#[derive(Debug, Clone, Serialize)]
pub struct NightlyRate {
    pub date: NaiveDate,
    pub price: f64,
}

/// Priced service line
#[derive(Debug, Clone, Serialize)]
pub struct ServiceLine {
    pub service_id: i64,
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Cost breakdown for a candidate stay
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub nights: i64,
    pub base_amount: f64,
    pub services_amount: f64,
    pub total_amount: f64,
    pub nightly: Vec<NightlyRate>,
    pub services: Vec<ServiceLine>,
}

/// Pricing engine - explicit dependencies, no globals
#[derive(Clone)]
pub struct PricingEngine {
    pool: SqlitePool,
    calendar: Arc<HolidayCalendar>,
    currency_scale: u32,
}

impl PricingEngine {
    pub fn new(pool: SqlitePool, calendar: Arc<HolidayCalendar>, currency_scale: u32) -> Self {
        Self {
            pool,
            calendar,
            currency_scale,
        }
    }

    /// Compute the cost of a stay. Read-only: this is also the public
    /// cost-preview operation, so it must never write.
    pub async fn quote(
        &self,
        room_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guest_count: i32,
        services: &[ServiceRequest],
    ) -> AppResult<Quote> {
        let nights = nights_between(check_in, check_out);
        if nights < 1 {
            return Err(AppError::Validation(
                "check_out_date must be after check_in_date".to_string(),
            ));
        }

        let room = room::find_by_id(&self.pool, room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", room_id)))?;
        let room_type = room_type::find_by_id(&self.pool, room.room_type_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("Room type {} missing for room {}", room.room_type_id, room_id))
            })?;

        if guest_count < 1 {
            return Err(AppError::Validation(
                "number_of_guests must be at least 1".to_string(),
            ));
        }
        if guest_count > room_type.max_occupancy {
            return Err(AppError::Validation(format!(
                "number_of_guests {} exceeds maximum occupancy {} for room type '{}'",
                guest_count, room_type.max_occupancy, room_type.name
            )));
        }

        let rules = seasonal_rate::find_active_for_room_type(&self.pool, room.room_type_id).await?;
        let fallback = Decimal::from_f64(room_type.base_price).unwrap_or_default();

        let mut base_amount = Decimal::ZERO;
        let mut nightly = Vec::with_capacity(nights as usize);
        let mut day = check_in;
        while day < check_out {
            let price = resolve_daily_price(
                &rules,
                fallback,
                day,
                nights,
                &self.calendar,
                self.currency_scale,
            );
            base_amount += price;
            nightly.push(NightlyRate {
                date: day,
                price: price.to_f64().unwrap_or_default(),
            });
            day = day.succ_opt().ok_or_else(|| {
                AppError::Validation(format!("check_out_date {} is out of range", check_out))
            })?;
        }

        let (services_amount, lines) = self.price_services(services).await?;

        let total = base_amount + services_amount;
        Ok(Quote {
            nights,
            base_amount: base_amount.to_f64().unwrap_or_default(),
            services_amount: services_amount.to_f64().unwrap_or_default(),
            total_amount: total.to_f64().unwrap_or_default(),
            nightly,
            services: lines,
        })
    }

    /// Price requested add-on services from the catalog.
    async fn price_services(
        &self,
        services: &[ServiceRequest],
    ) -> AppResult<(Decimal, Vec<ServiceLine>)> {
        let mut total = Decimal::ZERO;
        let mut lines = Vec::with_capacity(services.len());

        for req in services {
            if req.quantity < 1 {
                return Err(AppError::Validation(format!(
                    "service {} quantity must be at least 1",
                    req.service_id
                )));
            }
            let item = service_item::find_by_id(&self.pool, req.service_id)
                .await?
                .filter(|s| s.is_active)
                .ok_or_else(|| {
                    AppError::NotFound(format!("Service {} not found", req.service_id))
                })?;

            let unit = Decimal::from_f64(item.unit_price).unwrap_or_default();
            let line_total = round_money(unit * Decimal::from(req.quantity), self.currency_scale);
            total += line_total;
            lines.push(ServiceLine {
                service_id: item.id,
                name: item.name,
                quantity: req.quantity,
                unit_price: item.unit_price,
                total_price: line_total.to_f64().unwrap_or_default(),
            });
        }

        Ok((total, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::seeded_pool;
    use shared::models::SeasonalRateCreate;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn engine(pool: SqlitePool, calendar: HolidayCalendar) -> PricingEngine {
        PricingEngine::new(pool, Arc::new(calendar), 0)
    }

    async fn summer_rule(pool: &SqlitePool, weekend: f64, holiday: f64) {
        crate::db::repository::seasonal_rate::create(
            pool,
            SeasonalRateCreate {
                room_type_id: 1,
                season_name: "summer".to_string(),
                start_date: d("2025-06-01"),
                end_date: d("2025-08-31"),
                base_price: 800_000.0,
                weekend_multiplier: Some(weekend),
                holiday_multiplier: Some(holiday),
                min_stay_nights: None,
                max_stay_nights: None,
                priority: Some(10),
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn quote_without_rules_uses_room_type_base() {
        let pool = seeded_pool().await;
        let engine = engine(pool, HolidayCalendar::default());

        let quote = engine
            .quote(101, d("2025-03-10"), d("2025-03-13"), 2, &[])
            .await
            .unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.base_amount, 1_500_000.0);
        assert_eq!(quote.services_amount, 0.0);
        assert_eq!(quote.total_amount, 1_500_000.0);
        assert_eq!(quote.nightly.len(), 3);
        assert!(quote.nightly.iter().all(|n| n.price == 500_000.0));
    }

    #[tokio::test]
    async fn seasonal_rule_and_weekend_multiplier_apply_per_night() {
        let pool = seeded_pool().await;
        summer_rule(&pool, 1.2, 1.0).await;
        let engine = engine(pool, HolidayCalendar::default());

        // Fri Jun 6 (800k), Sat Jun 7 (960k), Sun Jun 8 (960k)
        let quote = engine
            .quote(101, d("2025-06-06"), d("2025-06-09"), 2, &[])
            .await
            .unwrap();
        assert_eq!(quote.base_amount, 2_720_000.0);
        assert_eq!(quote.nightly[0].price, 800_000.0);
        assert_eq!(quote.nightly[1].price, 960_000.0);
        assert_eq!(quote.nightly[2].price, 960_000.0);
    }

    #[tokio::test]
    async fn holiday_multiplier_composes_with_weekend() {
        let pool = seeded_pool().await;
        summer_rule(&pool, 1.2, 1.5).await;
        // Sat Jun 7 is also declared a holiday: 800k * 1.2 * 1.5
        let engine = engine(pool, HolidayCalendar::new([d("2025-06-07")]));

        let quote = engine
            .quote(101, d("2025-06-07"), d("2025-06-08"), 2, &[])
            .await
            .unwrap();
        assert_eq!(quote.base_amount, 1_440_000.0);
    }

    #[tokio::test]
    async fn services_priced_from_catalog() {
        let pool = seeded_pool().await;
        let engine = engine(pool, HolidayCalendar::default());

        let services = vec![
            ServiceRequest {
                service_id: 1,
                quantity: 2,
            },
            ServiceRequest {
                service_id: 2,
                quantity: 1,
            },
        ];
        let quote = engine
            .quote(101, d("2025-03-10"), d("2025-03-11"), 2, &services)
            .await
            .unwrap();
        // 2 × 150,000 breakfast + 1 × 350,000 pickup
        assert_eq!(quote.services_amount, 650_000.0);
        assert_eq!(quote.total_amount, 500_000.0 + 650_000.0);
        assert_eq!(quote.services.len(), 2);
        assert_eq!(quote.services[0].name, "Breakfast");
    }

    #[tokio::test]
    async fn unknown_or_inactive_service_rejected() {
        let pool = seeded_pool().await;
        sqlx::query("UPDATE service_item SET is_active = 0 WHERE id = 2")
            .execute(&pool)
            .await
            .unwrap();
        let engine = engine(pool, HolidayCalendar::default());

        let unknown = vec![ServiceRequest {
            service_id: 999,
            quantity: 1,
        }];
        assert!(matches!(
            engine
                .quote(101, d("2025-03-10"), d("2025-03-11"), 2, &unknown)
                .await,
            Err(AppError::NotFound(_))
        ));

        let inactive = vec![ServiceRequest {
            service_id: 2,
            quantity: 1,
        }];
        assert!(matches!(
            engine
                .quote(101, d("2025-03-10"), d("2025-03-11"), 2, &inactive)
                .await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn zero_or_negative_nights_rejected() {
        let pool = seeded_pool().await;
        let engine = engine(pool, HolidayCalendar::default());

        for (check_in, check_out) in [
            ("2025-03-10", "2025-03-10"),
            ("2025-03-10", "2025-03-09"),
        ] {
            assert!(matches!(
                engine.quote(101, d(check_in), d(check_out), 2, &[]).await,
                Err(AppError::Validation(_))
            ));
        }
    }

    #[tokio::test]
    async fn unknown_room_rejected() {
        let pool = seeded_pool().await;
        let engine = engine(pool, HolidayCalendar::default());

        assert!(matches!(
            engine.quote(999, d("2025-03-10"), d("2025-03-11"), 2, &[]).await,
            Err(AppError::NotFound(_))
        ));
    }
}
