//! Submission state of the edit forms and in-flight deletes.
//!
//! Each edit form moves through `Idle -> Submitting -> Idle`, with a
//! transient "saved" indicator after a successful save. A form has at most
//! one save in flight, and a city has at most one delete in flight. Time is
//! read from [`tokio::time::Instant`] so paused-clock tests can drive it.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use nibog_types::CityId;
use serde::Serialize;
use tokio::time::Instant;
use tracing::warn;

use crate::error::CatalogError;

/// Observable phase of an edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    /// Nothing happening.
    Idle,
    /// A simulated save is in flight; the submit button is disabled.
    Submitting,
    /// The last save finished and the "saved" indicator is showing.
    Saved,
}

/// Submission state of a single edit form.
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    in_flight: bool,
    saved_until: Option<Instant>,
}

impl FormSubmission {
    /// Start a save.
    ///
    /// Clears any lingering "saved" indicator.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SubmissionInFlight`] if a save is already running.
    pub fn begin(&mut self, city: CityId) -> Result<(), CatalogError> {
        if self.in_flight {
            return Err(CatalogError::SubmissionInFlight(city));
        }
        self.in_flight = true;
        self.saved_until = None;
        Ok(())
    }

    /// Finish a successful save and raise the indicator for `indicator`.
    pub fn finish(&mut self, now: Instant, indicator: Duration) {
        self.in_flight = false;
        self.saved_until = now.checked_add(indicator);
    }

    /// Finish a save that did not go through. No indicator is shown.
    pub const fn abort(&mut self) {
        self.in_flight = false;
        self.saved_until = None;
    }

    /// The phase as seen at `now`.
    pub fn phase(&self, now: Instant) -> FormPhase {
        if self.in_flight {
            FormPhase::Submitting
        } else if self.saved_until.is_some_and(|until| now < until) {
            FormPhase::Saved
        } else {
            FormPhase::Idle
        }
    }
}

/// Tracks every edit form's submission and every in-flight delete.
#[derive(Debug, Default)]
pub struct SubmissionBoard {
    edits: BTreeMap<CityId, FormSubmission>,
    deletes: BTreeSet<CityId>,
}

impl SubmissionBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a save on the city's edit form.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SubmissionInFlight`] if one is already running.
    pub fn begin_edit(&mut self, city: CityId) -> Result<(), CatalogError> {
        self.edits.entry(city).or_default().begin(city).inspect_err(|e| {
            warn!(city_id = %city, error = %e, "Rejected overlapping save");
        })
    }

    /// Finish a successful save and raise the "saved" indicator.
    pub fn finish_edit(&mut self, city: CityId, now: Instant, indicator: Duration) {
        self.edits.entry(city).or_default().finish(now, indicator);
    }

    /// Finish a save that failed.
    pub fn abort_edit(&mut self, city: CityId) {
        if let Some(form) = self.edits.get_mut(&city) {
            form.abort();
        }
    }

    /// The city's edit form phase at `now`.
    pub fn edit_phase(&self, city: CityId, now: Instant) -> FormPhase {
        self.edits
            .get(&city)
            .map_or(FormPhase::Idle, |form| form.phase(now))
    }

    /// Mark the city as being deleted.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DeleteInFlight`] if a delete is already running.
    pub fn begin_delete(&mut self, city: CityId) -> Result<(), CatalogError> {
        if self.deletes.insert(city) {
            Ok(())
        } else {
            warn!(city_id = %city, "Rejected overlapping delete");
            Err(CatalogError::DeleteInFlight(city))
        }
    }

    /// Whether a delete is running for the city.
    pub fn is_deleting(&self, city: CityId) -> bool {
        self.deletes.contains(&city)
    }

    /// Clear the in-flight delete mark and forget the city's edit form.
    pub fn finish_delete(&mut self, city: CityId) {
        self.deletes.remove(&city);
        self.edits.remove(&city);
    }
}
