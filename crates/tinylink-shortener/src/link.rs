use tinylink_core::ShortCode;
use url::Url;

/// How a short code is turned into a short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStyle {
    /// `<base>#<code>`: the code travels in the address fragment, which is
    /// what [`Shortener::resolve`](crate::Shortener::resolve) reads.
    Fragment { base: Url },
    /// `<origin of the original URL>/<code>`.
    Origin,
}

impl LinkStyle {
    pub fn fragment(base: Url) -> Self {
        Self::Fragment { base }
    }

    /// Composes the short link for `code`, given the URL being shortened.
    pub fn compose(&self, original: &Url, code: &ShortCode) -> String {
        match self {
            LinkStyle::Fragment { base } => {
                let mut link = base.clone();
                link.set_fragment(Some(code.as_str()));
                link.to_string()
            }
            LinkStyle::Origin => {
                let origin = original.origin().ascii_serialization();
                format!("{}/{}", origin.trim_end_matches('/'), code)
            }
        }
    }
}

/// Pulls the short code out of a short link in either style.
///
/// A fragment, even an empty one, decides the result; without a fragment
/// the last non-empty path segment is used. Input that is not a URL is
/// taken as a bare code, with one optional leading `#`.
pub fn extract_code(link: &str) -> Option<String> {
    let link = link.trim();

    let Ok(url) = Url::parse(link) else {
        let code = link.strip_prefix('#').unwrap_or(link);
        return (!code.is_empty()).then(|| code.to_owned());
    };

    match url.fragment() {
        Some("") => return None,
        Some(fragment) => return Some(fragment.to_owned()),
        None => {}
    }

    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    #[test]
    fn fragment_style() {
        let style = LinkStyle::fragment(url("https://tiny.link/"));
        let original = url("https://example.com/very/long/path?x=1");

        assert_eq!(
            style.compose(&original, &code("my-link")),
            "https://tiny.link/#my-link"
        );
    }

    #[test]
    fn fragment_style_keeps_base_path_and_replaces_fragment() {
        let style = LinkStyle::fragment(url("https://example.github.io/shortener/index.html#old"));
        let original = url("https://example.com");

        assert_eq!(
            style.compose(&original, &code("abc123")),
            "https://example.github.io/shortener/index.html#abc123"
        );
    }

    #[test]
    fn origin_style_uses_original_origin() {
        let original = url("https://analytics.google.com/analytics/web/#/report?id=42");

        assert_eq!(
            LinkStyle::Origin.compose(&original, &code("aB3xY9")),
            "https://analytics.google.com/aB3xY9"
        );
    }

    #[test]
    fn origin_style_keeps_non_default_port() {
        let original = url("http://localhost:3000/some/page");

        assert_eq!(
            LinkStyle::Origin.compose(&original, &code("abc123")),
            "http://localhost:3000/abc123"
        );
    }

    #[test]
    fn extract_from_fragment_link() {
        assert_eq!(
            extract_code("https://tiny.link/#my-link").as_deref(),
            Some("my-link")
        );
    }

    #[test]
    fn extract_from_path_link() {
        assert_eq!(
            extract_code("https://analytics.google.com/aB3xY9").as_deref(),
            Some("aB3xY9")
        );
        assert_eq!(
            extract_code("https://analytics.google.com/aB3xY9/").as_deref(),
            Some("aB3xY9")
        );
    }

    #[test]
    fn extract_bare_code() {
        assert_eq!(extract_code("#my-link").as_deref(), Some("my-link"));
        assert_eq!(extract_code("my-link").as_deref(), Some("my-link"));
        assert_eq!(extract_code(" my-link ").as_deref(), Some("my-link"));
    }

    #[test]
    fn extract_nothing() {
        assert_eq!(extract_code(""), None);
        assert_eq!(extract_code("#"), None);
        assert_eq!(extract_code("https://tiny.link/"), None);
    }

    #[test]
    fn empty_fragment_does_not_fall_back_to_path() {
        assert_eq!(extract_code("https://tiny.link/app/#"), None);
        assert_eq!(extract_code("https://tiny.link/app/").as_deref(), Some("app"));
    }

    #[test]
    fn bare_code_loses_a_single_hash() {
        assert_eq!(extract_code("##home").as_deref(), Some("#home"));
    }
}
