//! Absolute-URL syntax checking.
//!
//! Embedded frames accept the author's URL at face value (the content
//! is first-party), so only the shape is checked: a scheme, `://`,
//! and a non-empty authority. Scheme and host are never vetted.

use crate::error::EmbedError;

/// Returns `Ok(())` when `url` is a syntactically valid absolute URL.
///
/// # Examples
///
/// ```
/// use mdlog_core::url::ensure_absolute_url;
///
/// assert!(ensure_absolute_url("https://example.com/x").is_ok());
/// assert!(ensure_absolute_url("/img/logo.png").is_err());
/// ```
pub fn ensure_absolute_url(url: &str) -> Result<(), EmbedError> {
    if is_absolute_url(url) {
        Ok(())
    } else {
        Err(EmbedError::InvalidUrl(url.to_string()))
    }
}

/// Checks whether `url` has the shape `scheme://authority[...]`.
pub fn is_absolute_url(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };

    // Scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    let mut bytes = scheme.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() => {}
        _ => return false,
    }
    if !bytes.all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'-' || b == b'.') {
        return false;
    }

    // Authority: at least one character before any path/query/fragment.
    let authority_end = rest
        .find(['/', '?', '#'])
        .unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    !authority.is_empty() && !authority.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_absolute_urls() {
        assert!(is_absolute_url("https://example.com"));
        assert!(is_absolute_url("http://example.com/path?q=1#frag"));
        assert!(is_absolute_url("git+ssh://host/repo"));
    }

    #[test]
    fn rejects_relative_and_schemeless() {
        assert!(!is_absolute_url("/img/logo.png"));
        assert!(!is_absolute_url("example.com/x"));
        assert!(!is_absolute_url("//example.com/x"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn rejects_malformed_scheme() {
        assert!(!is_absolute_url("1http://example.com"));
        assert!(!is_absolute_url("ht tp://example.com"));
        assert!(!is_absolute_url("://example.com"));
    }

    #[test]
    fn rejects_empty_authority() {
        assert!(!is_absolute_url("https://"));
        assert!(!is_absolute_url("https:///path"));
        assert!(!is_absolute_url("https://host name"));
    }

    #[test]
    fn ensure_reports_the_offending_url() {
        let err = ensure_absolute_url("not-a-url").unwrap_err();
        assert!(err.to_string().contains("not-a-url"));
    }
}
