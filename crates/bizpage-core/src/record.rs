//! Business records and their positional sheet mapping.

use serde::{Deserialize, Serialize};

use crate::fallback::{is_plausible_url, pick_fallback};

/// Column holding the subdomain key.
pub const KEY_COLUMN: usize = 0;

/// Rows shorter than this are dropped when short-row filtering is enabled.
pub const MIN_ROW_FIELDS: usize = 2;

/// One tenant's public identity, as shown on the landing page.
///
/// Sheet layout: `subdomain | name | address | document | phone | image`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessRecord {
    /// Normalized lookup key this record was found under.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Postal / physical address.
    pub address: String,
    /// Registration or license identifier.
    pub document: String,
    /// Contact phone number.
    pub phone: String,
    /// Hero image URL, if the sheet provided one.
    pub image: Option<String>,
}

impl BusinessRecord {
    /// Map a sheet row onto a record. Missing columns become empty strings.
    #[must_use]
    pub fn from_row(key: impl Into<String>, row: &[String]) -> Self {
        let field = |idx: usize| row.get(idx).cloned().unwrap_or_default();

        let image = row
            .get(5)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned);

        Self {
            key: key.into(),
            name: field(1),
            address: field(2),
            document: field(3),
            phone: field(4),
            image,
        }
    }

    /// The image to render in the hero section.
    ///
    /// Returns the record's own image when it looks like a URL, otherwise a
    /// fallback chosen by the record key (or `host` when the key is empty).
    #[must_use]
    pub fn hero_image<'a>(&'a self, host: &str) -> &'a str {
        match self.image.as_deref() {
            Some(url) if is_plausible_url(url) => url,
            _ if self.key.is_empty() => pick_fallback(host),
            _ => pick_fallback(&self.key),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fallback::FALLBACK_IMAGES;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn full_row_maps_positionally() {
        let r = BusinessRecord::from_row(
            "locan",
            &row(&["locan", "Star Hills", "Addr 1", "Doc1", "0900000000", "https://img.example/a.jpg"]),
        );
        assert_eq!(r.key, "locan");
        assert_eq!(r.name, "Star Hills");
        assert_eq!(r.address, "Addr 1");
        assert_eq!(r.document, "Doc1");
        assert_eq!(r.phone, "0900000000");
        assert_eq!(r.image.as_deref(), Some("https://img.example/a.jpg"));
    }

    #[test]
    fn missing_columns_default_to_empty() {
        let r = BusinessRecord::from_row("locan", &row(&["locan", "Star Hills"]));
        assert_eq!(r.name, "Star Hills");
        assert_eq!(r.address, "");
        assert_eq!(r.document, "");
        assert_eq!(r.phone, "");
        assert_eq!(r.image, None);
    }

    #[test]
    fn blank_image_is_none() {
        let r = BusinessRecord::from_row("locan", &row(&["locan", "a", "b", "c", "d", "  "]));
        assert_eq!(r.image, None);
    }

    #[test]
    fn hero_uses_own_image_when_plausible() {
        let r = BusinessRecord::from_row(
            "locan",
            &row(&["locan", "a", "b", "c", "d", "https://img.example/a.jpg"]),
        );
        assert_eq!(r.hero_image("locan.example.com"), "https://img.example/a.jpg");
    }

    #[test]
    fn hero_falls_back_for_short_image() {
        let r = BusinessRecord::from_row("locan", &row(&["locan", "a", "b", "c", "d", "x.jpg"]));
        assert_eq!(r.hero_image("locan.example.com"), pick_fallback("locan"));
    }

    #[test]
    fn hero_seeds_with_host_when_key_empty() {
        let r = BusinessRecord::default();
        let hero = r.hero_image("example.com");
        assert_eq!(hero, pick_fallback("example.com"));
        assert!(FALLBACK_IMAGES.contains(&hero));
    }

    #[test]
    fn deserializes_with_defaults() {
        let r: BusinessRecord =
            serde_json::from_str(r#"{"name":"Star Hills","phone":"0900"}"#).unwrap();
        assert_eq!(r.name, "Star Hills");
        assert_eq!(r.phone, "0900");
        assert_eq!(r.address, "");
        assert_eq!(r.image, None);
    }
}
