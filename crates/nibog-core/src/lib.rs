//! City catalog, form submission state, and configuration for the NIBOG
//! city admin.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `nibog-admin.yaml` into
//!   strongly-typed structs.
//! - [`seed`] -- The built-in mock catalog.
//! - [`store`] -- [`CityStore`]: search, lookup, venue/event join, and
//!   create / update / delete.
//! - [`form`] -- Edit-form and delete submission state.
//! - [`impact`] -- Delete confirmation wording.
//!
//! [`CityStore`]: store::CityStore

pub mod config;
pub mod error;
pub mod form;
pub mod impact;
pub mod seed;
pub mod store;

pub use error::CatalogError;
pub use form::{FormPhase, SubmissionBoard};
pub use impact::DeleteImpact;
pub use seed::seed_catalog;
pub use store::{CityDetail, CityStore};
