//! Request-path error taxonomy and its JSON representation
//!
//! Validation and not-found failures are detected synchronously and answered
//! immediately; storage failures surface as an opaque 500. Everything the
//! harvest pipeline can get wrong stays inside the pipeline and never reaches
//! this module.

use crate::storage::StorageError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// A single offending field in a 422 response
///
/// `loc` names where the field lives (`["body", <name>]` or `["path", "id"]`),
/// `msg` is human-readable, and `kind` is a stable machine-readable tag.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    /// A required body field was absent
    pub fn missing_body_field(field: &str) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: "field required".to_string(),
            kind: "value_error.missing".to_string(),
        }
    }

    /// A body field did not parse as a URL at all
    pub fn invalid_url(field: &str) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: "invalid URL format".to_string(),
            kind: "value_error.url".to_string(),
        }
    }

    /// A body field parsed as a URL but with a disallowed scheme
    pub fn url_scheme_not_permitted(field: &str) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: "URL scheme not permitted".to_string(),
            kind: "value_error.url.scheme".to_string(),
        }
    }

    /// The path identifier was not a positive integer
    pub fn non_positive_id() -> Self {
        Self {
            loc: vec!["path".to_string(), "id".to_string()],
            msg: "ensure this value is greater than 0".to_string(),
            kind: "value_error.number.not_gt".to_string(),
        }
    }
}

/// Errors a request handler can answer with
#[derive(Debug)]
pub enum ApiError {
    /// One or more input fields failed validation (422)
    Validation(Vec<FieldError>),

    /// The targeted record does not exist (404)
    NotFound,

    /// The persistence layer failed (500)
    Internal,
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        tracing::error!("storage failure on request path: {}", e);
        Self::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors })),
            )
                .into_response(),

            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "SubLinkList not found" })),
            )
                .into_response(),

            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "internal server error" })),
            )
                .into_response(),
        }
    }
}
