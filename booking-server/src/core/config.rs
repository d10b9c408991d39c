use chrono_tz::Tz;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/booking | working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DATABASE_PATH | <WORK_DIR>/booking.db | SQLite database file |
/// | BUSINESS_TZ | Asia/Ho_Chi_Minh | timezone for calendar-day logic |
/// | CURRENCY_SCALE | 0 | decimal places of the currency minor unit |
/// | HOLIDAY_DATES | (empty) | comma-separated YYYY-MM-DD holiday list |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing filter directive |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/booking HTTP_PORT=8080 HOLIDAY_DATES=2025-12-25,2026-01-01 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// All check-in/check-out day arithmetic runs in this timezone
    pub business_tz: Tz,
    /// Decimal places prices are rounded to (0 for VND, 2 for USD)
    pub currency_scale: u32,
    /// Official holidays, fed into the pricing holiday calendar
    pub holiday_dates: String,
    /// Running environment: development | staging | production
    pub environment: String,
    /// tracing filter directive
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/booking".into());
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| format!("{}/booking.db", work_dir));
        Self {
            work_dir,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path,
            business_tz: std::env::var("BUSINESS_TZ")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::Asia::Ho_Chi_Minh),
            currency_scale: std::env::var("CURRENCY_SCALE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
            holiday_dates: std::env::var("HOLIDAY_DATES").unwrap_or_default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
