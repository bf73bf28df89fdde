//! HTTP error types for the `bizpage` server.
//!
//! Maps resolution errors from `bizpage-core` onto HTTP responses. A lookup
//! miss and a sheet failure keep distinct status codes, but both render the
//! same visitor-facing "not found" page with no diagnostic detail.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use bizpage_core::ResolveError;

use crate::render;

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// No business record exists for the requested subdomain.
    NotFound(String),
    /// The business sheet could not be fetched.
    SourceUnavailable(String),
}

impl AppError {
    /// Status code for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::SourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = match self {
            Self::NotFound(msg) | Self::SourceUnavailable(msg) => msg,
        };

        tracing::debug!(status = status.as_u16(), reason = %reason, "rendering not-found page");

        (status, Html(render::not_found_page())).into_response()
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound { .. } => Self::NotFound(err.to_string()),
            ResolveError::Source(_) => Self::SourceUnavailable(err.to_string()),
        }
    }
}
