use thiserror::Error;
use url::Url;

/// Schemes that identify a complete URL even without a `://` separator.
/// `localhost:8080`-style host:port inputs are deliberately not covered.
const OPAQUE_SCHEME_PREFIXES: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "about:",
    "mailto:",
    "blob:",
    "vbscript:",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Client-side copy of the server's address normalizer.
///
/// This is the optimistic check run before calling the endpoint; the server
/// re-runs the same logic as the authoritative gate. Bare addresses get an
/// `https://` prefix, everything that is not http(s) after parsing is
/// rejected.
pub fn normalize_address(input: &str) -> Result<Url, NormalizeError> {
    let trimmed = input.trim();

    let has_scheme = trimmed.contains("://")
        || OPAQUE_SCHEME_PREFIXES.iter().any(|prefix| {
            trimmed
                .get(..prefix.len())
                .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
        });

    let candidate = if has_scheme {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate).map_err(|e| NormalizeError::InvalidUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(NormalizeError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domain_gets_https_prefix() {
        assert_eq!(
            normalize_address("example.com").unwrap().as_str(),
            "https://example.com/"
        );
    }

    #[test]
    fn explicit_schemes_survive() {
        assert_eq!(
            normalize_address("http://localhost:8080").unwrap().as_str(),
            "http://localhost:8080/"
        );
    }

    #[test]
    fn dangerous_schemes_never_pass_the_optimistic_check() {
        assert!(matches!(
            normalize_address("javascript:alert(1)"),
            Err(NormalizeError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            normalize_address("data:text/plain,hi"),
            Err(NormalizeError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn garbage_input_is_invalid() {
        assert!(matches!(
            normalize_address("https://exa mple.com"),
            Err(NormalizeError::InvalidUrl(_))
        ));
    }
}
