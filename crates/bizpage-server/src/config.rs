//! Server configuration for `bizpage`.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `BIZPAGE_*` environment variables.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use bizpage_core::BusinessRecord;

/// Published CSV export of the business sheet.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQmi6oayoemKBJXEWi4pkVHDsm166ap0XCwbopYrukBQnwj2gERseGlDnJVBrtciHwKEFj5bTqFLGiQ/pub?gid=0&single=true&output=csv";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Where the business sheet comes from.
    pub sheet_source: SheetSourceType,
    /// Timeout for one sheet fetch.
    pub fetch_timeout: Duration,
    /// Whether rows with fewer than two fields are skipped during lookup.
    pub discard_short_rows: bool,
    /// What to render when no record can be resolved.
    pub miss_policy: MissPolicy,
    /// Record substituted under [`MissPolicy::DefaultRecord`].
    pub default_record: BusinessRecord,
    /// Use `X-Forwarded-Host` instead of `Host` (behind a trusted proxy).
    pub trust_forwarded_host: bool,
    /// Fixed subdomain used for every request (local development).
    pub subdomain_override: Option<String>,
    /// Maximum number of page renders in flight.
    pub max_concurrent_renders: usize,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
}

/// Supported sheet source types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSourceType {
    /// Published CSV downloaded on every render.
    Http { url: String },
    /// CSV text given directly in the environment (development only).
    Inline { text: String },
}

/// Behaviour when the subdomain has no record or the sheet is unreachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissPolicy {
    /// Render the "not found" page.
    #[default]
    NotFoundPage,
    /// Render the configured default record as if it had matched.
    DefaultRecord,
}

impl FromStr for MissPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "not-found" | "not_found" | "notfound" => Ok(Self::NotFoundPage),
            "default-record" | "default_record" | "default" => Ok(Self::DefaultRecord),
            other => Err(format!("unknown miss policy '{other}'")),
        }
    }
}

/// Built-in record used when `BIZPAGE_DEFAULT_RECORD` is unset or invalid.
#[must_use]
pub fn builtin_default_record() -> BusinessRecord {
    BusinessRecord {
        key: String::new(),
        name: "Star Hills Lộc An".to_owned(),
        address: "Lộc An, Bảo Lâm, Lâm Đồng".to_owned(),
        document: String::new(),
        phone: String::new(),
        image: None,
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: port to bind on (binds to `0.0.0.0`)
    /// - `BIZPAGE_BIND_ADDR`: full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `BIZPAGE_SHEET_URL`: published CSV URL (default: the project sheet)
    /// - `BIZPAGE_SHEET_INLINE`: CSV text served from memory instead of fetching
    /// - `BIZPAGE_FETCH_TIMEOUT_SECS`: sheet fetch timeout (default: `10`)
    /// - `BIZPAGE_DISCARD_SHORT_ROWS`: skip rows with < 2 fields (default: `true`)
    /// - `BIZPAGE_ON_MISS`: `not-found` or `default-record` (default: `not-found`)
    /// - `BIZPAGE_DEFAULT_RECORD`: JSON business record for `default-record`
    /// - `BIZPAGE_TRUST_FORWARDED_HOST`: read `X-Forwarded-Host` (default: `false`)
    /// - `BIZPAGE_SUBDOMAIN`: fixed subdomain for every request (optional)
    /// - `BIZPAGE_MAX_CONCURRENT_RENDERS`: in-flight page limit (default: `64`)
    /// - `BIZPAGE_LOG_LEVEL`: log filter (default: `info`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        // Priority: BIZPAGE_BIND_ADDR > PORT > default 127.0.0.1:3000
        let bind_addr = if let Some(addr) = var("BIZPAGE_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 3000)))
        } else if let Some(port_str) = var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(3000);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 3000))
        };

        let sheet_source = match var("BIZPAGE_SHEET_INLINE") {
            Some(text) => SheetSourceType::Inline { text },
            None => SheetSourceType::Http {
                url: var("BIZPAGE_SHEET_URL")
                    .filter(|u| !u.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SHEET_URL.to_owned()),
            },
        };

        let fetch_timeout = Duration::from_secs(
            var("BIZPAGE_FETCH_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        );

        let discard_short_rows = var("BIZPAGE_DISCARD_SHORT_ROWS")
            .is_none_or(|v| v != "false" && v != "0");

        let miss_policy = var("BIZPAGE_ON_MISS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let default_record = var("BIZPAGE_DEFAULT_RECORD")
            .and_then(|v| serde_json::from_str(&v).ok())
            .unwrap_or_else(builtin_default_record);

        let trust_forwarded_host = var("BIZPAGE_TRUST_FORWARDED_HOST")
            .is_some_and(|v| v == "true" || v == "1");

        let subdomain_override = var("BIZPAGE_SUBDOMAIN").filter(|v| !v.trim().is_empty());

        let max_concurrent_renders = var("BIZPAGE_MAX_CONCURRENT_RENDERS")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(64);

        let log_level = var("BIZPAGE_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        Self {
            bind_addr,
            sheet_source,
            fetch_timeout,
            discard_short_rows,
            miss_policy,
            default_record,
            trust_forwarded_host,
            subdomain_override,
            max_concurrent_renders,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]);
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(
            config.sheet_source,
            SheetSourceType::Http {
                url: DEFAULT_SHEET_URL.to_owned()
            }
        );
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert!(config.discard_short_rows);
        assert_eq!(config.miss_policy, MissPolicy::NotFoundPage);
        assert_eq!(config.default_record, builtin_default_record());
        assert!(!config.trust_forwarded_host);
        assert_eq!(config.subdomain_override, None);
        assert_eq!(config.max_concurrent_renders, 64);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn port_binds_all_interfaces() {
        let config = load(&[("PORT", "8080")]);
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn bind_addr_overrides_port() {
        let config = load(&[("PORT", "8080"), ("BIZPAGE_BIND_ADDR", "127.0.0.1:9000")]);
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
    }

    #[test]
    fn inline_sheet_wins_over_url() {
        let config = load(&[
            ("BIZPAGE_SHEET_URL", "https://example.com/x.csv"),
            ("BIZPAGE_SHEET_INLINE", "locan,Star Hills"),
        ]);
        assert_eq!(
            config.sheet_source,
            SheetSourceType::Inline {
                text: "locan,Star Hills".to_owned()
            }
        );
    }

    #[test]
    fn miss_policy_parsing() {
        assert_eq!("default-record".parse::<MissPolicy>(), Ok(MissPolicy::DefaultRecord));
        assert_eq!("NOT_FOUND".parse::<MissPolicy>(), Ok(MissPolicy::NotFoundPage));
        assert!("explode".parse::<MissPolicy>().is_err());

        let config = load(&[("BIZPAGE_ON_MISS", "default-record")]);
        assert_eq!(config.miss_policy, MissPolicy::DefaultRecord);

        let config = load(&[("BIZPAGE_ON_MISS", "bogus")]);
        assert_eq!(config.miss_policy, MissPolicy::NotFoundPage);
    }

    #[test]
    fn default_record_from_json() {
        let config = load(&[(
            "BIZPAGE_DEFAULT_RECORD",
            r#"{"name":"Fallback Co","phone":"0900000000"}"#,
        )]);
        assert_eq!(config.default_record.name, "Fallback Co");
        assert_eq!(config.default_record.phone, "0900000000");

        let config = load(&[("BIZPAGE_DEFAULT_RECORD", "{not json")]);
        assert_eq!(config.default_record, builtin_default_record());
    }

    #[test]
    fn flags() {
        let config = load(&[
            ("BIZPAGE_DISCARD_SHORT_ROWS", "false"),
            ("BIZPAGE_TRUST_FORWARDED_HOST", "1"),
            ("BIZPAGE_SUBDOMAIN", "locan"),
            ("BIZPAGE_MAX_CONCURRENT_RENDERS", "0"),
        ]);
        assert!(!config.discard_short_rows);
        assert!(config.trust_forwarded_host);
        assert_eq!(config.subdomain_override.as_deref(), Some("locan"));
        assert_eq!(config.max_concurrent_renders, 64);
    }
}
