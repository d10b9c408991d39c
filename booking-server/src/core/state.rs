use std::sync::Arc;

use sqlx::SqlitePool;

use crate::bookings::BookingManager;
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::pricing::{HolidayCalendar, PricingEngine};

/// Shared server state
///
/// Cloned into every handler; all fields are cheap to clone (pool handle,
/// Arcs, small config).
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: SqlitePool,
    pub calendar: Arc<HolidayCalendar>,
}

impl ServerState {
    /// Open the database, run migrations and build the holiday calendar.
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let db = DbService::new(&config.database_path)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;

        let calendar = HolidayCalendar::from_csv(&config.holiday_dates);
        tracing::info!(
            holidays = calendar.len(),
            tz = %config.business_tz,
            "Server state initialized"
        );

        Ok(Self {
            config: Arc::new(config.clone()),
            db: db.pool,
            calendar: Arc::new(calendar),
        })
    }

    pub fn pricing_engine(&self) -> PricingEngine {
        PricingEngine::new(
            self.db.clone(),
            self.calendar.clone(),
            self.config.currency_scale,
        )
    }

    pub fn booking_manager(&self) -> BookingManager {
        BookingManager::new(
            self.db.clone(),
            self.pricing_engine(),
            self.config.business_tz,
            self.config.currency_scale,
        )
    }
}
