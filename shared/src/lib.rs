//! Shared types for the booking platform
//!
//! Domain models and small utilities used by the booking server and its
//! API consumers.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
