//! Shared application state for the admin server.
//!
//! [`AppState`] owns the city catalog, the form/delete submission board,
//! the simulated latency settings, and the page renderer. The create,
//! save, and delete operations live here so the HTML pages and the JSON
//! API run exactly the same sequence: check, mark in flight, wait out the
//! simulated request, apply, clear.

use nibog_core::config::LatencyConfig;
use nibog_core::{CatalogError, CityStore, FormPhase, SubmissionBoard};
use nibog_types::{City, CityDraft, CityId};
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

use crate::error::AdminError;
use crate::templates::PageRenderer;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Locks are never held across the simulated delay.
#[derive(Debug)]
pub struct AppState {
    /// The city catalog.
    pub store: RwLock<CityStore>,
    /// In-flight saves and deletes.
    pub board: Mutex<SubmissionBoard>,
    /// Simulated request timing.
    pub latency: LatencyConfig,
    /// HTML page renderer.
    pub pages: PageRenderer,
}

impl AppState {
    /// Create application state around an existing catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Template`] if the page templates fail to compile.
    pub fn new(store: CityStore, latency: LatencyConfig) -> Result<Self, AdminError> {
        Ok(Self {
            store: RwLock::new(store),
            board: Mutex::new(SubmissionBoard::new()),
            latency,
            pages: PageRenderer::new()?,
        })
    }

    /// Wait out one simulated backend request.
    async fn simulate_request(&self) {
        tokio::time::sleep(self.latency.request_delay()).await;
    }

    /// Resolve a URL identifier to a city that exists right now.
    async fn existing_city(&self, raw: &str) -> Result<City, CatalogError> {
        self.store.read().await.lookup(raw).cloned()
    }

    /// Create a city after the simulated delay.
    ///
    /// Blank required fields are rejected before any delay, the way a
    /// browser blocks submission of a `required` input.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingField`] for blank required fields.
    pub async fn create_city(&self, draft: &CityDraft) -> Result<City, CatalogError> {
        nibog_core::store::check_required(draft)?;
        self.simulate_request().await;
        self.store.write().await.create(draft)
    }

    /// Save the edit form of the city identified by `raw`.
    ///
    /// Moves the form to `Submitting`, waits, applies the draft, and
    /// raises the transient "saved" indicator.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CityNotFound`] for unknown cities,
    /// [`CatalogError::MissingField`] for blank required fields, or
    /// [`CatalogError::SubmissionInFlight`] if the form is already saving.
    pub async fn save_city(&self, raw: &str, draft: &CityDraft) -> Result<City, CatalogError> {
        let id = self.existing_city(raw).await?.id;
        nibog_core::store::check_required(draft)?;
        self.board.lock().await.begin_edit(id)?;

        self.simulate_request().await;

        let result = self.store.write().await.update(id, draft);
        let mut board = self.board.lock().await;
        match &result {
            Ok(_) => board.finish_edit(id, Instant::now(), self.latency.saved_indicator()),
            Err(_) => board.abort_edit(id),
        }
        result
    }

    /// Delete the city identified by `raw` after the simulated delay.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CityNotFound`] for unknown cities or
    /// [`CatalogError::DeleteInFlight`] if a delete is already running.
    pub async fn delete_city(&self, raw: &str) -> Result<City, CatalogError> {
        let id = self.existing_city(raw).await?.id;
        self.board.lock().await.begin_delete(id)?;

        self.simulate_request().await;

        let result = self.store.write().await.remove(id);
        self.board.lock().await.finish_delete(id);
        result
    }

    /// Current phase of the city's edit form.
    pub async fn edit_phase(&self, id: CityId) -> FormPhase {
        self.board.lock().await.edit_phase(id, Instant::now())
    }

    /// Whether a delete is running for the city.
    pub async fn is_deleting(&self, id: CityId) -> bool {
        self.board.lock().await.is_deleting(id)
    }
}
