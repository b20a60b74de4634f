use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the history list.
pub const HISTORY_LIMIT: usize = 10;

/// One persisted mapping from an original URL to its short code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// The original URL that was shortened.
    pub original_url: String,
    /// The short code the URL is reachable under.
    pub short_code: String,
    /// The precomputed short link, when the writer stored one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    /// When the entry was created.
    pub created_at: Timestamp,
}

impl HistoryEntry {
    /// The link to show for this entry: the stored short URL, or `#code`.
    pub fn display_link(&self) -> String {
        match &self.short_url {
            Some(url) => url.clone(),
            None => format!("#{}", self.short_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(short_url: Option<&str>) -> HistoryEntry {
        HistoryEntry {
            original_url: "https://example.com/very/long/path?x=1".to_string(),
            short_code: "my-link".to_string(),
            short_url: short_url.map(str::to_string),
            created_at: Timestamp::from_second(1_700_000_000).unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(entry(Some("https://example.com/my-link"))).unwrap();

        assert_eq!(json["originalUrl"], "https://example.com/very/long/path?x=1");
        assert_eq!(json["shortCode"], "my-link");
        assert_eq!(json["shortUrl"], "https://example.com/my-link");
        assert_eq!(json["createdAt"], "2023-11-14T22:13:20Z");
    }

    #[test]
    fn omits_absent_short_url() {
        let json = serde_json::to_value(entry(None)).unwrap();
        assert!(json.get("shortUrl").is_none());
    }

    #[test]
    fn reads_entries_written_with_milliseconds() {
        let raw = r#"{
            "originalUrl": "https://example.com",
            "shortCode": "aB3xY9",
            "createdAt": "2025-03-01T08:30:00.123Z"
        }"#;

        let parsed: HistoryEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.short_code, "aB3xY9");
        assert_eq!(parsed.short_url, None);
    }

    #[test]
    fn display_link_falls_back_to_fragment() {
        assert_eq!(entry(None).display_link(), "#my-link");
        assert_eq!(
            entry(Some("https://example.com/my-link")).display_link(),
            "https://example.com/my-link"
        );
    }
}
