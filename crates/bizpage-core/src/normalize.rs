//! Lookup key normalization.
//!
//! Both the visiting subdomain and the first column of every sheet row go
//! through [`normalize_key`] before they are compared.

use unicode_normalization::UnicodeNormalization;

/// Byte-order mark that spreadsheet exports prepend to the first cell.
const BOM: char = '\u{FEFF}';

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Convert a raw identifier into a `[a-z0-9]*` comparison key.
///
/// Trims, drops a leading BOM, lowercases, strips accents via NFD
/// decomposition, then removes everything that is not an ASCII lowercase
/// letter or digit. Never fails; empty input yields an empty key.
///
/// Letters with no decomposition (such as `đ`) are removed, not transliterated.
///
/// ```
/// use bizpage_core::normalize::normalize_key;
///
/// assert_eq!(normalize_key("Lộc-An"), "locan");
/// assert_eq!(normalize_key("LỘC_AN"), "locan");
/// ```
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix(BOM).unwrap_or(trimmed).trim();

    trimmed
        .to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equivalent_spellings_share_a_key() {
        for raw in ["Lộc-An", "loc an", "LỘC_AN", "  lộc.an  ", "LocAn"] {
            assert_eq!(normalize_key(raw), "locan", "input {raw:?}");
        }
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key("   "), "");
        assert_eq!(normalize_key("---"), "");
    }

    #[test]
    fn leading_bom_is_stripped() {
        assert_eq!(normalize_key("\u{FEFF}locan"), "locan");
        assert_eq!(normalize_key(" \u{FEFF}Lộc An"), "locan");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(normalize_key("Block-7B"), "block7b");
    }

    #[test]
    fn undecomposable_letters_are_dropped() {
        assert_eq!(normalize_key("Đà Lạt"), "alat");
    }

    #[test]
    fn vietnamese_tone_marks_stack() {
        // ệ carries two marks (circumflex + dot below).
        assert_eq!(normalize_key("Bệnh Viện"), "benhvien");
        assert_eq!(normalize_key("Bảo Lâm"), "baolam");
    }

    #[test]
    fn idempotent() {
        let once = normalize_key("Star Hills Lộc An");
        assert_eq!(normalize_key(&once), once);
    }
}
