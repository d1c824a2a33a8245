//! Axum router construction for the admin server.
//!
//! Assembles the HTML pages and the JSON API into a single [`Router`]
//! with request tracing and CORS enabled for a separately hosted frontend.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::pages;
use crate::state::AppState;

/// Build the complete Axum router for the admin server.
///
/// The router includes:
/// - `GET /` -- redirect to the city list
/// - `/admin/cities/...` -- server-rendered list, detail, create, edit,
///   and delete pages
/// - `/api/cities/...` -- JSON list, detail, create, update, delete, and
///   edit-form phase
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::index))
        // Admin pages
        .route(
            "/admin/cities",
            get(pages::list_page).post(pages::create_submit),
        )
        .route("/admin/cities/new", get(pages::new_page))
        .route("/admin/cities/{id}", get(pages::detail_page))
        .route(
            "/admin/cities/{id}/edit",
            get(pages::edit_page).post(pages::edit_submit),
        )
        .route(
            "/admin/cities/{id}/delete",
            get(pages::delete_page).post(pages::delete_submit),
        )
        // JSON API
        .route(
            "/api/cities",
            get(handlers::list_cities).post(handlers::create_city),
        )
        .route(
            "/api/cities/{id}",
            get(handlers::get_city)
                .put(handlers::update_city)
                .delete(handlers::delete_city),
        )
        .route("/api/cities/{id}/form", get(handlers::get_form_phase))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
