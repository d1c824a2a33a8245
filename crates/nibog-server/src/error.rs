//! Error types for the server binary.

/// Top-level error for the server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: nibog_core::config::ConfigError,
    },

    /// The seed catalog could not be built.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: nibog_core::CatalogError,
    },

    /// Application state could not be assembled.
    #[error("admin error: {source}")]
    Admin {
        /// The underlying admin error.
        #[from]
        source: nibog_admin::AdminError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: nibog_admin::ServerError,
    },
}
