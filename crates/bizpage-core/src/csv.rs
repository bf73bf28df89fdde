//! Minimal quote-aware CSV parser.
//!
//! Handles exactly what a published spreadsheet export produces for this
//! use: `,` separators, `"` quoting, `""` escapes inside quotes. Fields never
//! span lines; a quote left open at end of line closes with the line. The
//! parser never fails.

const SEPARATOR: char = ',';
const QUOTE: char = '"';

/// Split one line into trimmed fields.
///
/// ```
/// use bizpage_core::csv::parse_line;
///
/// assert_eq!(parse_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
/// assert_eq!(parse_line(r#"a,"b""c",d"#), vec!["a", "b\"c", "d"]);
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                current.push(QUOTE);
                chars.next();
            }
            QUOTE => in_quotes = !in_quotes,
            SEPARATOR if !in_quotes => {
                fields.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_owned());
    fields
}

/// Parse a whole document into rows.
///
/// Carriage returns are removed, the text is split on `\n`, and lines that
/// are blank after trimming are skipped. Row order follows the document.
#[must_use]
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let text = text.replace('\r', "");

    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields() {
        assert_eq!(parse_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn quoted_comma_is_data() {
        assert_eq!(parse_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn doubled_quote_is_literal() {
        assert_eq!(parse_line(r#"a,"b""c",d"#), vec!["a", "b\"c", "d"]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(parse_line("  a ,\tb  ,  \" c \" "), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_fields_are_kept() {
        assert_eq!(parse_line("a,,c,"), vec!["a", "", "c", ""]);
        assert_eq!(parse_line(""), vec![""]);
    }

    #[test]
    fn unterminated_quote_runs_to_end_of_line() {
        assert_eq!(parse_line(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn stray_trailing_quote_is_absorbed() {
        assert_eq!(parse_line(r#"a,b""#), vec!["a", "b"]);
    }

    #[test]
    fn quote_outside_a_quoted_field_toggles() {
        // A doubled quote outside quotes opens then closes immediately.
        assert_eq!(parse_line(r#"a""b,c"#), vec!["ab", "c"]);
    }

    #[test]
    fn document_skips_blank_lines_and_carriage_returns() {
        let text = "k1,n1\r\n\r\n   \nk2,\"n, 2\"\r\n";
        assert_eq!(
            parse(text),
            vec![vec!["k1", "n1"], vec!["k2", "n, 2"]],
        );
    }

    #[test]
    fn empty_document_has_no_rows() {
        assert!(parse("").is_empty());
        assert!(parse("\n\r\n  \n").is_empty());
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let rows = parse("locan,Star Hills,\"Lộc An, Bảo Lâm, Lâm Đồng\"");
        assert_eq!(rows[0][2], "Lộc An, Bảo Lâm, Lâm Đồng");
    }
}
