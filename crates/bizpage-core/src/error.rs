//! Error types for `bizpage-core`.
//!
//! A lookup miss and a fetch failure are distinct variants so callers and
//! tests can tell them apart, even though the page shows the same thing for
//! both.

use bizpage_source::SourceError;

/// Errors from record resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No row's normalized key matched.
    #[error("no business record for key '{key}'")]
    NotFound { key: String },

    /// The sheet could not be fetched.
    #[error("sheet source error: {0}")]
    Source(#[from] SourceError),
}

impl ResolveError {
    /// Whether this is a genuine absence rather than a fetch failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
