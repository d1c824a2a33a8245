//! JSON API endpoint handlers.
//!
//! The API mirrors the admin pages one-to-one and is the read / list /
//! create / update / delete contract a real backend would take over.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/cities` | List cities (`?q=` filters by name or state) |
//! | `POST` | `/api/cities` | Create a city |
//! | `GET` | `/api/cities/{id}` | City with its venues, events, and delete impact |
//! | `PUT` | `/api/cities/{id}` | Save the edit form |
//! | `DELETE` | `/api/cities/{id}` | Delete a city |
//! | `GET` | `/api/cities/{id}/form` | Edit form phase |
//!
//! Undecodable request bodies are reported through [`AdminError`] like
//! every other failure, so API clients always receive a JSON error.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use nibog_types::CityDraft;

use crate::error::AdminError;
use crate::state::AppState;

/// Query parameters for city listings.
#[derive(Debug, Default, serde::Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring to match against name or state.
    #[serde(default)]
    pub q: String,
}

// ---------------------------------------------------------------------------
// GET /api/cities
// ---------------------------------------------------------------------------

/// List cities, filtered by the optional search string.
pub async fn list_cities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, AdminError> {
    let store = state.store.read().await;
    let cities = store.search(&params.q);

    Ok(Json(serde_json::json!({
        "count": cities.len(),
        "cities": cities,
    })))
}

// ---------------------------------------------------------------------------
// POST /api/cities
// ---------------------------------------------------------------------------

/// Create a city after the simulated request delay.
pub async fn create_city(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CityDraft>, JsonRejection>,
) -> Result<impl IntoResponse, AdminError> {
    let Json(draft) = payload?;
    let city = state.create_city(&draft).await?;
    Ok((StatusCode::CREATED, Json(city)))
}

// ---------------------------------------------------------------------------
// GET /api/cities/{id}
// ---------------------------------------------------------------------------

/// Return a city together with its venues, events, and delete impact.
pub async fn get_city(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    let detail = state.store.read().await.detail(&id)?;
    Ok(Json(serde_json::to_value(detail)?))
}

// ---------------------------------------------------------------------------
// PUT /api/cities/{id}
// ---------------------------------------------------------------------------

/// Save the edit form after the simulated request delay.
pub async fn update_city(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<CityDraft>, JsonRejection>,
) -> Result<impl IntoResponse, AdminError> {
    let Json(draft) = payload?;
    let city = state.save_city(&id, &draft).await?;
    Ok(Json(serde_json::json!({
        "city": city,
        "saved": true,
    })))
}

// ---------------------------------------------------------------------------
// DELETE /api/cities/{id}
// ---------------------------------------------------------------------------

/// Delete a city after the simulated request delay.
pub async fn delete_city(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    let city = state.delete_city(&id).await?;
    Ok(Json(serde_json::json!({
        "deleted": city.id,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/cities/{id}/form
// ---------------------------------------------------------------------------

/// Report the edit form phase for a city.
pub async fn get_form_phase(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    let city_id = state.store.read().await.lookup(&id)?.id;
    let phase = state.edit_phase(city_id).await;
    Ok(Json(serde_json::json!({
        "id": city_id,
        "phase": phase,
    })))
}
