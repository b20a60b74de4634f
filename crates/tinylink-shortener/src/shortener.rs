use crate::report::LengthReport;
use tinylink_core::{HistoryEntry, Result, ShortCode};

/// Parameters for creating a shortened URL.
#[derive(Debug, Clone, Default)]
pub struct ShortenParams {
    /// The original URL to be shortened, as the user typed it.
    pub original_url: String,
    /// Optional custom alias. Blank is treated as absent.
    pub custom_alias: Option<String>,
}

impl ShortenParams {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            custom_alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.custom_alias = Some(alias.into());
        self
    }
}

/// The outcome of a successful shorten call.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortened {
    pub short_code: ShortCode,
    pub short_url: String,
    pub original_url: String,
    pub report: LengthReport,
    /// `true` when the URL was already in the history and its code was reused.
    pub reused: bool,
}

pub trait Shortener: Send + Sync + 'static {
    /// Validates, stores and returns the short link for a URL.
    fn shorten(&self, params: ShortenParams) -> Result<Shortened>;

    /// Looks up an address fragment (with or without the leading `#`).
    /// Returns `None` for an empty fragment or an unknown code.
    fn resolve(&self, fragment: &str) -> Option<HistoryEntry>;

    /// The stored history, newest first.
    fn history(&self) -> Vec<HistoryEntry>;
}
