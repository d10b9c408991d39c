//! Room Model

use serde::{Deserialize, Serialize};

/// Room occupancy status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    OutOfOrder,
}

/// Housekeeping status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum CleaningStatus {
    Clean,
    Dirty,
    InProgress,
}

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Room {
    pub id: i64,
    /// Unique display label, e.g. "301"
    pub room_number: String,
    pub room_type_id: i64,
    pub status: RoomStatus,
    pub cleaning_status: CleaningStatus,
    pub created_at: i64,
}
