//! Landing page routes.
//!
//! `GET /` resolves the request's subdomain against the business sheet and
//! renders the page for the matching record. `POST /dang-ky` simulates the
//! contact form: it checks the required fields, logs, and redirects back to
//! the form with a confirmation flag. Nothing is stored or forwarded.

use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::HeaderMap;
use axum::http::header::HOST;
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use tracing::info;

use bizpage_core::host::subdomain_of;

use crate::config::MissPolicy;
use crate::error::AppError;
use crate::render::{self, FormNotice};
use crate::state::AppState;

/// Header set by reverse proxies carrying the original host.
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Build the landing router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(landing_page))
        .route("/dang-ky", post(submit_contact))
}

// ── Request types ────────────────────────────────────────────────────

/// Query parameters for `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// `1` after a successful form post, `0` after a rejected one.
    pub sent: Option<String>,
}

impl PageParams {
    fn notice(&self) -> Option<FormNotice> {
        match self.sent.as_deref() {
            Some("1") => Some(FormNotice::Sent),
            Some("0") => Some(FormNotice::MissingFields),
            _ => None,
        }
    }
}

/// Body of `POST /dang-ky`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    /// Visitor name (required).
    pub name: String,
    /// Visitor phone (required).
    pub phone: String,
    /// Visitor email (optional).
    pub email: String,
    /// Free-text message (optional).
    pub message: String,
}

impl ContactForm {
    /// Whether both required fields are non-blank.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}

// ── Handlers ─────────────────────────────────────────────────────────

/// Determine the visiting host name, lowercased.
///
/// With `trust_forwarded`, the first `X-Forwarded-Host` value wins over
/// `Host`. Returns an empty string when neither header is usable.
#[must_use]
pub fn request_host(headers: &HeaderMap, trust_forwarded: bool) -> String {
    let forwarded = if trust_forwarded {
        headers
            .get(X_FORWARDED_HOST)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    } else {
        None
    };

    forwarded
        .or_else(|| headers.get(HOST).and_then(|v| v.to_str().ok()))
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

async fn landing_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let host = request_host(&headers, state.trust_forwarded_host);
    let raw_subdomain = state
        .subdomain_override
        .as_deref()
        .unwrap_or_else(|| subdomain_of(&host));

    let record = match state.resolver.resolve(raw_subdomain).await {
        Ok(record) => record,
        Err(err) if state.miss_policy == MissPolicy::DefaultRecord => {
            info!(host = %host, error = %err, "substituting default business record");
            state.default_record.clone()
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Html(render::landing_page(&record, &host, params.notice())))
}

async fn submit_contact(Form(form): Form<ContactForm>) -> Redirect {
    if !form.has_required_fields() {
        info!("contact form rejected: missing name or phone");
        return Redirect::to("/?sent=0#dangky");
    }

    info!(
        has_email = !form.email.trim().is_empty(),
        has_message = !form.message.trim().is_empty(),
        "contact form accepted (not stored)"
    );
    Redirect::to("/?sent=1#dangky")
}
