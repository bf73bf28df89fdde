//! Subdomain → business record resolution.
//!
//! The [`Resolver`] fetches the sheet through a [`SheetSource`], parses it,
//! and returns the first row whose normalized key equals the normalized
//! subdomain. The whole sheet is fetched on every call; nothing is cached.

use std::sync::Arc;

use bizpage_source::SheetSource;
use tracing::{debug, warn};

use crate::csv;
use crate::error::ResolveError;
use crate::normalize::normalize_key;
use crate::record::{BusinessRecord, KEY_COLUMN, MIN_ROW_FIELDS};

/// Lookup behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Skip rows with fewer than [`MIN_ROW_FIELDS`] fields before matching.
    pub discard_short_rows: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            discard_short_rows: true,
        }
    }
}

/// Resolves subdomains against a sheet source.
pub struct Resolver {
    source: Arc<dyn SheetSource>,
    options: ResolverOptions,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("source", &self.source.describe())
            .field("options", &self.options)
            .finish()
    }
}

impl Resolver {
    /// Create a resolver over `source`.
    #[must_use]
    pub fn new(source: Arc<dyn SheetSource>, options: ResolverOptions) -> Self {
        Self { source, options }
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Fetch the sheet and resolve `raw_subdomain` against it.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Source`] if the sheet could not be fetched.
    /// - [`ResolveError::NotFound`] if no row matches.
    pub async fn resolve(&self, raw_subdomain: &str) -> Result<BusinessRecord, ResolveError> {
        let text = self.source.fetch().await.map_err(|e| {
            warn!(
                source = %self.source.describe(),
                subdomain = %raw_subdomain,
                error = %e,
                "sheet fetch failed"
            );
            ResolveError::from(e)
        })?;

        self.resolve_text(&text, raw_subdomain)
    }

    /// Resolve `raw_subdomain` against already-fetched CSV text.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] if no row matches.
    pub fn resolve_text(
        &self,
        text: &str,
        raw_subdomain: &str,
    ) -> Result<BusinessRecord, ResolveError> {
        let key = normalize_key(raw_subdomain);
        let rows = csv::parse(text);

        match lookup(&rows, &key, self.options.discard_short_rows) {
            Some(row) => {
                debug!(key = %key, rows = rows.len(), "business record resolved");
                Ok(BusinessRecord::from_row(key, row))
            }
            None => {
                debug!(key = %key, rows = rows.len(), "no business record for key");
                Err(ResolveError::NotFound { key })
            }
        }
    }
}

/// Return the first row whose normalized key column equals `key`.
///
/// `key` must already be normalized. With `discard_short_rows`, rows with
/// fewer than [`MIN_ROW_FIELDS`] fields never match.
#[must_use]
pub fn lookup<'a>(rows: &'a [Vec<String>], key: &str, discard_short_rows: bool) -> Option<&'a [String]> {
    rows.iter()
        .filter(|row| !discard_short_rows || row.len() >= MIN_ROW_FIELDS)
        .find(|row| {
            row.get(KEY_COLUMN)
                .is_some_and(|cell| normalize_key(cell) == key)
        })
        .map(Vec::as_slice)
}
