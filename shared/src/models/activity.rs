//! Booking Activity Model
//!
//! Append-only audit trail: one row per lifecycle transition.

use serde::{Deserialize, Serialize};

/// Booking activity record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BookingActivity {
    pub id: i64,
    pub booking_id: i64,
    /// Acting principal (customer or staff id)
    pub actor_id: i64,
    pub actor_role: String,
    /// Transition name: "created", "confirmed", "cancelled", "checked_in", "checked_out"
    pub action: String,
    pub notes: Option<String>,
    pub created_at: i64,
}
