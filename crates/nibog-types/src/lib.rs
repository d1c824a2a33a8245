//! Shared type definitions for the NIBOG city admin.
//!
//! This crate is the single source of truth for the entities served by the
//! admin API. Types flow downstream to `TypeScript` via `ts-rs` for the
//! admin frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifier wrappers
//! - [`enums`] -- Enumeration types
//! - [`structs`] -- Entity structs and the editable city draft

pub mod enums;
pub mod ids;
pub mod structs;

pub use enums::EventStatus;
pub use ids::{CityId, EventId, ParseIdError, VenueId};
pub use structs::{City, CityDraft, Event, Venue};

#[cfg(test)]
mod tests {
    #[test]
    fn export_bindings() {
        use ts_rs::TS;

        let _ = crate::ids::CityId::export_all();
        let _ = crate::ids::VenueId::export_all();
        let _ = crate::ids::EventId::export_all();

        let _ = crate::enums::EventStatus::export_all();

        let _ = crate::structs::City::export_all();
        let _ = crate::structs::Venue::export_all();
        let _ = crate::structs::Event::export_all();
        let _ = crate::structs::CityDraft::export_all();
    }
}
