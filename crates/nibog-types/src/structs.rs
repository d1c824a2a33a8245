//! Core entity structs: cities, venues, events, and the editable city draft.
//!
//! Records are flat and denormalized. The `venues` / `events` counters on a
//! [`City`] are display values carried with the record; nothing recomputes
//! them from the venue and event collections, so they can drift.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use crate::enums::EventStatus;
use crate::ids::{CityId, EventId, VenueId};

// ---------------------------------------------------------------------------
// City
// ---------------------------------------------------------------------------

/// A named administrative region where events are held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct City {
    /// Unique city identifier.
    pub id: CityId,
    /// Display name (e.g. "Hyderabad").
    pub name: String,
    /// State or province the city belongs to.
    pub state: String,
    /// Denormalized venue count.
    pub venues: u32,
    /// Denormalized event count.
    pub events: u32,
    /// Whether the city is currently accepting events.
    pub is_active: bool,
}

impl City {
    /// Case-insensitive substring match against name or state.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.state.to_lowercase().contains(needle)
    }
}

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

/// A physical location in a city where events take place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Venue {
    /// Unique venue identifier.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// Owning city.
    pub city_id: CityId,
    /// Owning city's display name at seed time.
    pub city: String,
    /// Street address.
    pub address: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Denormalized event count.
    pub events: u32,
    /// Whether the venue is currently in use.
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A scheduled event at a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Event title (e.g. "Baby Crawling").
    pub title: String,
    /// City the event is held in.
    pub city_id: CityId,
    /// City display name at seed time.
    pub city: String,
    /// Venue hosting the event.
    pub venue_id: VenueId,
    /// Venue display name at seed time.
    pub venue: String,
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Number of registrations received so far.
    pub registrations: u32,
    /// Lifecycle tag.
    pub status: EventStatus,
}

// ---------------------------------------------------------------------------
// CityDraft
// ---------------------------------------------------------------------------

/// Editable field state of the create and edit forms.
///
/// `name` and `state` are required; the HTML forms mark them `required`
/// and [`Validate`] applies the same rule to API submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CityDraft {
    /// City name.
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// State or province.
    #[validate(custom(function = "not_blank"))]
    pub state: String,
    /// Active flag. New cities default to active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CityDraft {
    /// Prefill a draft from an existing city, as the edit form does.
    pub fn from_city(city: &City) -> Self {
        Self {
            name: city.name.clone(),
            state: city.state.clone(),
            is_active: city.is_active,
        }
    }
}

impl Default for CityDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            state: String::new(),
            is_active: default_active(),
        }
    }
}

const fn default_active() -> bool {
    true
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("required"));
    }
    Ok(())
}
