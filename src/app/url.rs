//! URL normalization and validation utilities.

use std::fmt;

use log::warn;

/// Maximum URL length (2048 characters) to prevent DoS attacks via extremely long URLs.
/// This matches common browser and server limits (e.g., IE, Apache, Nginx default limits).
pub const MAX_URL_LENGTH: usize = 2048;

/// Why a normalized URL cannot be analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlDefect {
    /// Not parseable as a URL at all
    Malformed,
    /// Parsed, but the scheme is not http/https
    UnsupportedScheme,
    /// Parsed, but there is no host
    MissingHost,
    /// Longer than `MAX_URL_LENGTH`
    TooLong,
}

impl UrlDefect {
    /// Human-readable message shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            UrlDefect::Malformed => "Invalid URL",
            UrlDefect::UnsupportedScheme => "Only HTTP and HTTPS protocols are supported",
            UrlDefect::MissingHost => "The URL is missing a domain name",
            UrlDefect::TooLong => "The URL is too long",
        }
    }
}

impl fmt::Display for UrlDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Splits `"<scheme>://<rest>"` when `scheme` is a syntactically valid URL scheme.
fn split_scheme(url: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = url.split_once("://")?;
    let mut chars = scheme.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if first_ok && tail_ok {
        Some((scheme, rest))
    } else {
        None
    }
}

/// Normalizes a user-supplied address into the canonical cache/seed identity.
///
/// - surrounding whitespace is trimmed and the whole string lower-cased
/// - a missing scheme, or `http://`, becomes `https://`
/// - other explicit schemes are kept so that validation can reject them
/// - trailing slashes (and whitespace they were hiding) are removed
///
/// The function is total and idempotent: `normalize_url(&normalize_url(u)) == normalize_url(u)`.
///
/// # Examples
///
/// ```
/// use site_audit::app::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("HTTP://Example.com/"), "https://example.com");
/// ```
pub fn normalize_url(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let (scheme, rest) = match split_scheme(&lowered) {
        Some(("http", rest)) | Some(("https", rest)) => ("https", rest),
        Some((scheme, rest)) => (scheme, rest),
        None => ("https", lowered.as_str()),
    };

    let rest = rest.trim_end_matches(|c: char| c == '/' || c.is_whitespace());
    format!("{scheme}://{rest}")
}

/// Validates a (normalized) URL: length, syntax, http/https scheme and non-empty host.
///
/// Logs a warning and returns the defect if the URL cannot be analyzed.
pub fn validate_url(url: &str) -> Result<url::Url, UrlDefect> {
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return Err(UrlDefect::TooLong);
    }

    let parsed = match url::Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Rejecting invalid URL {url}: {e}");
            return Err(UrlDefect::Malformed);
        }
    };

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            warn!("Rejecting unsupported scheme '{scheme}' for URL: {url}");
            return Err(UrlDefect::UnsupportedScheme);
        }
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => {
            warn!("Rejecting URL without host: {url}");
            Err(UrlDefect::MissingHost)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_adds_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_upgrades_http_and_lowercases() {
        assert_eq!(normalize_url("HTTP://Example.com/"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_preserves_https() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_trims_whitespace_and_slashes() {
        assert_eq!(normalize_url("  example.com//  "), "https://example.com");
        assert_eq!(normalize_url("example.com / "), "https://example.com");
        assert_eq!(normalize_url("example.com/docs/"), "https://example.com/docs");
    }

    #[test]
    fn test_normalize_keeps_port_and_query() {
        assert_eq!(normalize_url("example.com:8080"), "https://example.com:8080");
        assert_eq!(normalize_url("Example.com/a?B=1"), "https://example.com/a?b=1");
    }

    #[test]
    fn test_normalize_keeps_foreign_scheme() {
        assert_eq!(normalize_url("FTP://example.com/"), "ftp://example.com");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_url(""), "https://");
        assert_eq!(normalize_url("https://"), "https://");
    }

    #[test]
    fn test_validate_accepts_http_and_https() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://foo.bar").is_ok());
    }

    #[test]
    fn test_validate_rejects_unsupported_scheme() {
        assert_eq!(
            validate_url("ftp://example.com").unwrap_err(),
            UrlDefect::UnsupportedScheme
        );
        assert_eq!(
            validate_url("mailto:test@example.com").unwrap_err(),
            UrlDefect::UnsupportedScheme
        );
    }

    #[test]
    fn test_validate_rejects_malformed() {
        assert_eq!(validate_url("notaurl").unwrap_err(), UrlDefect::Malformed);
        assert_eq!(validate_url("").unwrap_err(), UrlDefect::Malformed);
        assert_eq!(
            validate_url("https://exa mple.com").unwrap_err(),
            UrlDefect::Malformed
        );
    }

    #[test]
    fn test_validate_rejects_missing_host() {
        // normalize_url("") produces a scheme with nothing after it
        let defect = validate_url(&normalize_url("")).unwrap_err();
        assert!(matches!(defect, UrlDefect::Malformed | UrlDefect::MissingHost));
    }

    #[test]
    fn test_validate_rejects_too_long_url() {
        let long_url = format!("https://example.com/{}", "a".repeat(2100));
        assert_eq!(validate_url(&long_url).unwrap_err(), UrlDefect::TooLong);
    }

    #[test]
    fn test_validate_accepts_url_at_limit() {
        // "https://example.com/" is 20 chars, so path can be 2028 chars (20 + 2028 = 2048)
        let url_at_limit = format!("https://example.com/{}", "a".repeat(2028));
        assert_eq!(url_at_limit.len(), MAX_URL_LENGTH);
        assert!(validate_url(&url_at_limit).is_ok());
    }

    #[test]
    fn test_defect_messages() {
        assert_eq!(
            UrlDefect::UnsupportedScheme.to_string(),
            "Only HTTP and HTTPS protocols are supported"
        );
        assert_eq!(UrlDefect::MissingHost.message(), "The URL is missing a domain name");
    }

    proptest! {
        #[test]
        fn test_normalization_idempotent(url in "[ -~]{0,80}") {
            let once = normalize_url(&url);
            let twice = normalize_url(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_normalized_always_has_scheme(url in "[ -~]{0,80}") {
            let normalized = normalize_url(&url);
            prop_assert!(normalized.contains("://"));
            prop_assert!(!normalized.starts_with("http://"));
        }

        #[test]
        fn test_bare_domains_validate(
            subdomain in "[a-z]{2,10}",
            domain in "[a-z]{3,15}",
            tld in "(com|org|net)"
        ) {
            let url = normalize_url(&format!("{subdomain}.{domain}.{tld}/"));
            prop_assert!(url.starts_with("https://"));
            prop_assert!(validate_url(&url).is_ok());
        }
    }
}
