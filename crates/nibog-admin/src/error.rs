//! Error types for the admin API.
//!
//! [`AdminError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nibog_core::CatalogError;

/// Errors that can occur in the admin HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// The requested city does not exist.
    #[error("city not found: {0}")]
    NotFound(String),

    /// A save or delete is already running for the same city.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Required form fields were left empty.
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// The JSON request body was missing, malformed, or of the wrong shape.
    #[error("invalid request body: {message}")]
    InvalidBody {
        /// Status chosen by the body extractor (400, 415, or 422).
        status: StatusCode,
        /// Why the body was rejected.
        message: String,
    },

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A page template failed to render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for AdminError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::CityNotFound(id) => Self::NotFound(id),
            CatalogError::SubmissionInFlight(_) | CatalogError::DeleteInFlight(_) => {
                Self::Conflict(err.to_string())
            }
            CatalogError::MissingField(fields) => Self::MissingFields(fields),
            CatalogError::IdsExhausted | CatalogError::InvalidSeed(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AdminError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::MissingFields(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidBody { status, .. } => *status,
            Self::Serialization(_) | Self::Template(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nibog_types::CityId;

    #[test]
    fn catalog_errors_map_to_statuses() {
        let cases = [
            (CatalogError::CityNotFound(String::from("x")), StatusCode::NOT_FOUND),
            (CatalogError::SubmissionInFlight(CityId(1)), StatusCode::CONFLICT),
            (CatalogError::DeleteInFlight(CityId(1)), StatusCode::CONFLICT),
            (
                CatalogError::MissingField(vec![String::from("name")]),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (CatalogError::IdsExhausted, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            let response = AdminError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }
}
