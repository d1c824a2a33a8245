//! Enumeration types for the city admin.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lifecycle tag of a scheduled event.
///
/// The seed catalog only contains upcoming events; the remaining variants
/// exist so the API can describe events after they take place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum EventStatus {
    /// Scheduled and open for registration.
    Upcoming,
    /// Already held.
    Completed,
    /// Called off by the organizers.
    Cancelled,
}
