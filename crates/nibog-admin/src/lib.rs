//! Admin server for NIBOG cities.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Admin pages** under `/admin/cities`: the searchable city list, city
//!   detail with venue and event tables, create and edit forms, and a
//!   delete confirmation
//! - **JSON API** under `/api/cities` with the same operations
//!
//! # Architecture
//!
//! All requests read from and write to the in-memory
//! [`CityStore`](nibog_core::CityStore) held in [`AppState`]. Writes go
//! through a simulated request delay standing in for a backend call; the
//! edit forms and deletes track their in-flight state on a
//! [`SubmissionBoard`](nibog_core::SubmissionBoard).

pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod server;
pub mod state;
pub mod templates;

// Re-export primary types for convenience.
pub use error::AdminError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
