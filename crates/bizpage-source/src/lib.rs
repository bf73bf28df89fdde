//! Sheet source abstraction for `bizpage`.
//!
//! This crate defines the [`SheetSource`] trait, a fetch-only interface that
//! returns the raw CSV text of the published business spreadsheet. It knows
//! nothing about rows, keys or records; parsing and lookup happen in
//! `bizpage-core`.
//!
//! Two implementations are provided:
//!
//! - [`HttpSheetSource`]: production default, one HTTP GET per fetch (feature `http-source`)
//! - [`MemorySheetSource`]: fixed text held in memory, for tests and local development

mod error;
#[cfg(feature = "http-source")]
mod http;
mod memory;

pub use error::SourceError;
#[cfg(feature = "http-source")]
pub use http::HttpSheetSource;
pub use memory::MemorySheetSource;

/// A pluggable source of CSV text.
///
/// Every call to [`fetch`](SheetSource::fetch) retrieves the full document.
/// Implementations must not cache between calls; the dataset is re-read on
/// every page render.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait SheetSource: Send + Sync + 'static {
    /// Fetch the whole CSV document as text.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the document could not be retrieved.
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Short description used in logs (URL or backend name).
    fn describe(&self) -> String;
}
