//! HTTP sheet source, the production default.
//!
//! Issues one `GET` against the published CSV URL per fetch. The URL carries
//! its own publish token, so no authentication or query parameters are added.
//! The body is decoded as UTF-8 regardless of the declared content type.

use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, HeaderValue};

use crate::{SheetSource, SourceError};

/// Default request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A sheet source that downloads a published CSV document.
///
/// The inner `reqwest::Client` pools connections and is cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpSheetSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSheetSource {
    /// Create a source for `url` with the given request timeout.
    ///
    /// A zero timeout falls back to [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Client`] if the TLS backend fails to initialize.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let timeout = if timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bizpage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Client {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Return the URL this source downloads.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl SheetSource for HttpSheetSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        let resp = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .send()
            .await
            .map_err(|e| SourceError::Transport {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await.map_err(|e| SourceError::Body {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!(url = %self.url, bytes = bytes.len(), "sheet fetched");

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral local port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn sheet_router() -> Router {
        Router::new()
            .route(
                "/sheet.csv",
                get(|| async { "locan,Star Hills,\"Lộc An, Bảo Lâm\",DOC-1,0900000000\n" }),
            )
            .route(
                "/gone.csv",
                get(|| async { (StatusCode::NOT_FOUND, "gone") }),
            )
            .route(
                "/broken.csv",
                get(|| async { vec![b'a', 0xff, b'b'] }),
            )
    }

    #[tokio::test]
    async fn fetch_returns_body_text() {
        let base = serve(sheet_router()).await;
        let source = HttpSheetSource::new(format!("{base}/sheet.csv"), DEFAULT_TIMEOUT).unwrap();

        let text = source.fetch().await.unwrap();
        assert!(text.starts_with("locan,Star Hills,"));
        assert!(text.contains("Lộc An"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let base = serve(sheet_router()).await;
        let source = HttpSheetSource::new(format!("{base}/gone.csv"), DEFAULT_TIMEOUT).unwrap();

        let result = source.fetch().await;
        assert!(matches!(result, Err(SourceError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced() {
        let base = serve(sheet_router()).await;
        let source = HttpSheetSource::new(format!("{base}/broken.csv"), DEFAULT_TIMEOUT).unwrap();

        let text = source.fetch().await.unwrap();
        assert_eq!(text, "a\u{FFFD}b");
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        // Bind then drop so the port is closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source =
            HttpSheetSource::new(format!("http://{addr}/sheet.csv"), Duration::from_secs(2))
                .unwrap();
        let result = source.fetch().await;
        assert!(matches!(result, Err(SourceError::Transport { .. })));
    }

    #[test]
    fn zero_timeout_uses_default() {
        let source = HttpSheetSource::new("http://localhost/x.csv", Duration::ZERO).unwrap();
        assert_eq!(source.url(), "http://localhost/x.csv");
        assert_eq!(source.describe(), "http://localhost/x.csv");
    }
}
