use crate::error::ValidationError;
use url::Url;

/// Parses `input` as an absolute `http`/`https` URL.
///
/// Surrounding whitespace is trimmed before parsing.
pub fn validate_url(input: &str) -> std::result::Result<Url, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let url = Url::parse(input).map_err(|e| ValidationError::MalformedUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ValidationError::UnsupportedScheme(other.to_owned())),
    }
}

/// Returns whether `input` is an absolute `http`/`https` URL.
pub fn is_valid_url(input: &str) -> bool {
    validate_url(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/very/long/path?x=1"));
        assert!(is_valid_url("HTTPS://EXAMPLE.COM"));
        assert!(is_valid_url("  https://example.com  "));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(validate_url(""), Err(ValidationError::EmptyUrl));
        assert_eq!(validate_url("   "), Err(ValidationError::EmptyUrl));
    }

    #[test]
    fn rejects_relative_and_garbage() {
        assert!(matches!(
            validate_url("not-a-valid-url"),
            Err(ValidationError::MalformedUrl(_))
        ));
        assert!(matches!(
            validate_url("/just/a/path"),
            Err(ValidationError::MalformedUrl(_))
        ));
        assert!(matches!(
            validate_url("http://"),
            Err(ValidationError::MalformedUrl(_))
        ));
    }

    #[test]
    fn rejects_other_schemes() {
        for input in [
            "ftp://example.com",
            "javascript:alert(1)",
            "file:///etc/passwd",
            "mailto:someone@example.com",
        ] {
            assert!(
                matches!(validate_url(input), Err(ValidationError::UnsupportedScheme(_))),
                "{input}"
            );
        }
    }
}
