//! Error types for OAuth request validation.
//!
//! Uses `thiserror` for structured error handling. A rejected request is
//! always a [`ValidationError`]: one OAuth error kind plus a description that
//! is safe to return to the client as the RFC 6749 §5.2 error body.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// OAuth error codes produced by the validation layer.
///
/// Token-issuance failures (`invalid_grant`, `invalid_client`, ...) belong to
/// the surrounding token endpoint, not to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthErrorKind {
    /// Missing, malformed or otherwise invalid parameter.
    InvalidRequest,
    /// `grant_type` is not one the server supports.
    UnsupportedGrantType,
}

impl OAuthErrorKind {
    /// Wire value of the error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::UnsupportedGrantType => "unsupported_grant_type",
        }
    }

    /// HTTP status the error response should carry.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::UnsupportedGrantType => StatusCode::BAD_REQUEST,
        }
    }
}

impl std::fmt::Display for OAuthErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected OAuth request.
///
/// Serializes to `{"error": "...", "error_description": "..."}`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{kind}: {description}")]
pub struct ValidationError {
    /// OAuth error code.
    #[serde(rename = "error")]
    pub kind: OAuthErrorKind,

    /// Human-readable description naming the failing field and rule.
    #[serde(rename = "error_description")]
    pub description: String,
}

impl ValidationError {
    /// Create an `invalid_request` error.
    #[must_use]
    pub fn invalid_request(description: impl Into<String>) -> Self {
        Self {
            kind: OAuthErrorKind::InvalidRequest,
            description: description.into(),
        }
    }

    /// Create an `unsupported_grant_type` error.
    #[must_use]
    pub fn unsupported_grant_type(description: impl Into<String>) -> Self {
        Self {
            kind: OAuthErrorKind::UnsupportedGrantType,
            description: description.into(),
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }
}

/// Error response with the cache headers required by RFC 6749 §5.1.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let mut response = (self.status_code(), Json(&self)).into_response();

        let headers = response.headers_mut();
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        response
    }
}

/// Result type alias for validator operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
