//! Service Catalog Model

use serde::{Deserialize, Serialize};

/// Additional service offered with a stay (breakfast, airport pickup, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ServiceItem {
    pub id: i64,
    pub name: String,
    pub unit_price: f64,
    pub is_active: bool,
}
