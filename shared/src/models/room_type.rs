//! Room Type Model
//!
//! Immutable reference data: nightly base price fallback and capacity.

use serde::{Deserialize, Serialize};

/// Room type entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RoomType {
    pub id: i64,
    pub name: String,
    /// Nightly rate used when no seasonal rule applies
    pub base_price: f64,
    pub max_occupancy: i32,
    /// Amenity labels (JSON TEXT at the storage edge)
    #[cfg_attr(feature = "db", sqlx(json))]
    pub amenities: Vec<String>,
    pub created_at: i64,
}
