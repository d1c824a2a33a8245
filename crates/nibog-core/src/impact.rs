//! Human-readable summary shown before a city is deleted.

use nibog_types::City;
use serde::Serialize;

/// What deleting a city will affect, worded for the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteImpact {
    /// Fixed warning line.
    pub warning: String,
    /// What gets removed.
    pub summary: String,
    /// Associated data the city still carries, if any.
    pub associated: String,
    /// Whether the city still has venues or events attached.
    pub has_associated_data: bool,
}

impl DeleteImpact {
    /// Build the confirmation text for `city` from its counters.
    pub fn for_city(city: &City) -> Self {
        let has_associated_data = city.venues > 0 || city.events > 0;
        let associated = if has_associated_data {
            format!(
                "This city has {} and {}. Deleting it may affect existing data.",
                count_noun(city.venues, "venue"),
                count_noun(city.events, "event"),
            )
        } else {
            String::from("This city has no venues or events.")
        };

        Self {
            warning: String::from("This action cannot be undone."),
            summary: format!(
                "This will permanently delete the city \"{}\" and all associated data.",
                city.name
            ),
            associated,
            has_associated_data,
        }
    }
}

fn count_noun(n: u32, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
