//! In-memory sheet source.
//!
//! Holds a CSV document behind a `RwLock`. Used by unit tests, router tests,
//! and local development (`BIZPAGE_SHEET_INLINE`) where no published sheet is
//! reachable.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{SheetSource, SourceError};

/// A sheet source that returns text held in memory.
///
/// Clones share the same document, so a test can swap the contents after the
/// source has been handed to a resolver.
///
/// # Examples
///
/// ```
/// # use bizpage_source::{MemorySheetSource, SheetSource};
/// # #[tokio::main]
/// # async fn main() {
/// let source = MemorySheetSource::new("locan,Star Hills");
/// assert_eq!(source.fetch().await.unwrap(), "locan,Star Hills");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MemorySheetSource {
    text: Arc<RwLock<String>>,
}

impl MemorySheetSource {
    /// Create a source that serves `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Arc::new(RwLock::new(text.into())),
        }
    }

    /// Replace the served document.
    pub async fn replace(&self, text: impl Into<String>) {
        *self.text.write().await = text.into();
    }
}

impl Default for MemorySheetSource {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[async_trait::async_trait]
impl SheetSource for MemorySheetSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.text.read().await.clone())
    }

    fn describe(&self) -> String {
        "memory".to_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_is_empty() {
        let source = MemorySheetSource::default();
        assert_eq!(source.fetch().await.unwrap(), "");
    }

    #[tokio::test]
    async fn fetch_returns_text() {
        let source = MemorySheetSource::new("a,b\nc,d\n");
        assert_eq!(source.fetch().await.unwrap(), "a,b\nc,d\n");
    }

    #[tokio::test]
    async fn replace_is_visible_through_clone() {
        let source = MemorySheetSource::new("old");
        let clone = source.clone();
        source.replace("new").await;
        assert_eq!(clone.fetch().await.unwrap(), "new");
    }

    #[test]
    fn describe_names_backend() {
        assert_eq!(MemorySheetSource::default().describe(), "memory");
    }
}
