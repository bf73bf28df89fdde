//! Shared application state for the `bizpage` server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. It is immutable: the sheet is fetched per request
//! by the resolver, never stored here.

use std::sync::Arc;

use bizpage_core::{BusinessRecord, Resolver, ResolverOptions};
use bizpage_source::{HttpSheetSource, MemorySheetSource, SheetSource, SourceError};
use tracing::info;

use crate::config::{MissPolicy, ServerConfig, SheetSourceType};

/// Shared application state passed to all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// Subdomain → record resolver over the configured sheet source.
    pub resolver: Resolver,
    /// What to render when resolution fails.
    pub miss_policy: MissPolicy,
    /// Record substituted under [`MissPolicy::DefaultRecord`].
    pub default_record: BusinessRecord,
    /// Read the host from `X-Forwarded-Host` when present.
    pub trust_forwarded_host: bool,
    /// Fixed subdomain used instead of the request host.
    pub subdomain_override: Option<String>,
    /// Maximum number of page renders in flight.
    pub max_concurrent_renders: usize,
}

impl AppState {
    /// Build the state from configuration, constructing the sheet source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Client`] if the HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self, SourceError> {
        let source: Arc<dyn SheetSource> = match &config.sheet_source {
            SheetSourceType::Http { url } => {
                info!(url = %url, "using published sheet source");
                Arc::new(HttpSheetSource::new(url.clone(), config.fetch_timeout)?)
            }
            SheetSourceType::Inline { text } => {
                info!(bytes = text.len(), "using inline sheet source (development only)");
                Arc::new(MemorySheetSource::new(text.clone()))
            }
        };

        Ok(Self::with_source(source, config))
    }

    /// Build the state around an existing source.
    #[must_use]
    pub fn with_source(source: Arc<dyn SheetSource>, config: &ServerConfig) -> Self {
        let options = ResolverOptions {
            discard_short_rows: config.discard_short_rows,
        };

        Self {
            resolver: Resolver::new(source, options),
            miss_policy: config.miss_policy,
            default_record: config.default_record.clone(),
            trust_forwarded_host: config.trust_forwarded_host,
            subdomain_override: config.subdomain_override.clone(),
            max_concurrent_renders: config.max_concurrent_renders,
        }
    }
}
