//! Subdomain extraction from a request host.

/// Return the label used as the raw lookup key for `host`.
///
/// The port (if any) is ignored. The first dot-separated label is used,
/// unless it is `www` and another label follows, in which case the second
/// label is used. The result is not normalized; pass it through
/// [`normalize_key`](crate::normalize::normalize_key).
///
/// ```
/// use bizpage_core::host::subdomain_of;
///
/// assert_eq!(subdomain_of("locan.example.com"), "locan");
/// assert_eq!(subdomain_of("www.locan.example.com:8080"), "locan");
/// ```
#[must_use]
pub fn subdomain_of(host: &str) -> &str {
    let host = strip_port(host.trim());
    let mut labels = host.split('.');
    let first = labels.next().unwrap_or_default();

    if first.eq_ignore_ascii_case("www") {
        labels.next().unwrap_or(first)
    } else {
        first
    }
}

fn strip_port(host: &str) -> &str {
    // Bracketed IPv6 literals keep their colons.
    if host.starts_with('[') {
        return host
            .find(']')
            .map_or(host, |end| &host[..=end]);
    }
    host.rsplit_once(':').map_or(host, |(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_label() {
        assert_eq!(subdomain_of("locan.example.com"), "locan");
        assert_eq!(subdomain_of("Loc-An.example.vn"), "Loc-An");
    }

    #[test]
    fn www_is_skipped() {
        assert_eq!(subdomain_of("www.locan.example.com"), "locan");
        assert_eq!(subdomain_of("WWW.locan.example.com"), "locan");
    }

    #[test]
    fn bare_www_stays() {
        assert_eq!(subdomain_of("www"), "www");
    }

    #[test]
    fn port_is_ignored() {
        assert_eq!(subdomain_of("locan.localhost:3000"), "locan");
        assert_eq!(subdomain_of("localhost:8080"), "localhost");
    }

    #[test]
    fn ipv6_literal() {
        assert_eq!(subdomain_of("[::1]:8080"), "[::1]");
    }

    #[test]
    fn empty_host() {
        assert_eq!(subdomain_of(""), "");
        assert_eq!(subdomain_of(".example.com"), "");
    }
}
