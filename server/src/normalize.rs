use thiserror::Error;
use url::Url;

/// Inputs starting with one of these already name a scheme even though they
/// carry no `://` separator. A bare `host:port` like `localhost:8080` is not
/// on the list and gets the `https://` prefix instead.
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

/// Canonicalizes a user-supplied address into an absolute http(s) URL.
///
/// Bare addresses like `example.com` get an `https://` prefix before parsing.
/// Anything that ends up with a scheme other than `http` or `https` is
/// rejected, so `javascript:`, `data:` and `file:` inputs can never reach the
/// fetch stage. The same check runs in the client before calling the endpoint
/// and here as the authoritative gate; the server never trusts the caller.
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
