use crate::link::{extract_code, LinkStyle};
use crate::report::{LengthReport, SHORT_URL_THRESHOLD};
use crate::shortener::{ShortenParams, Shortened, Shortener};
use tinylink_core::{
    validate_url, Clock, HistoryEntry, KeyValueStore, Result, ShortCode, ShortenerError,
    StorageError, SystemClock,
};
use tinylink_generator::Generator;
use tinylink_storage::HistoryStore;
use tracing::{debug, info, trace};
use typed_builder::TypedBuilder;
use url::Url;

/// How many generated codes are tried before giving up on a free one.
pub const MAX_GENERATION_ATTEMPTS: usize = 8;

/// Configures a [`ShortenerService`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// How short codes are composed into links.
    pub link_style: LinkStyle,
    /// Originals at or under this length are reported as already short.
    #[builder(default = SHORT_URL_THRESHOLD)]
    pub short_url_threshold: usize,
}

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a [`HistoryStore`] and a [`Generator`] to handle:
/// - URL and alias validation
/// - Short code generation (auto-generated or custom)
/// - Link composition and the length report
/// - Redirect lookup by fragment
#[derive(Debug, Clone)]
pub struct ShortenerService<S, G, C = SystemClock> {
    history: HistoryStore<S, C>,
    generator: G,
    settings: ShortenerSettings,
}

impl<S: KeyValueStore, G: Generator> ShortenerService<S, G, SystemClock> {
    pub fn new(store: S, generator: G, settings: ShortenerSettings) -> Self {
        Self::with_history(HistoryStore::new(store), generator, settings)
    }
}

impl<S: KeyValueStore, G: Generator, C: Clock + 'static> ShortenerService<S, G, C> {
    pub fn with_history(
        history: HistoryStore<S, C>,
        generator: G,
        settings: ShortenerSettings,
    ) -> Self {
        Self {
            history,
            generator,
            settings,
        }
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    /// Resolves a full short link in either style, or a bare code.
    pub fn resolve_link(&self, link: &str) -> Option<HistoryEntry> {
        let code = extract_code(link)?;
        self.lookup(&code)
    }

    /// Drops the stored history. Returns `true` if there was one.
    pub fn clear_history(&self) -> std::result::Result<bool, StorageError> {
        self.history.clear()
    }

    fn resolve_alias(&self, alias: Option<&str>) -> Result<Option<ShortCode>> {
        let Some(alias) = alias.map(str::trim).filter(|a| !a.is_empty()) else {
            return Ok(None);
        };

        let code = ShortCode::alias(alias)?;
        self.history.ensure_alias_available(&code)?;
        Ok(Some(code))
    }

    /// Draws codes until one is not already stored.
    fn generate_unused_code(&self) -> Result<ShortCode> {
        let history = self.history.get_history();

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = self.generator.generate();
            if !history.iter().any(|e| e.short_code == code.as_str()) {
                return Ok(code);
            }
            debug!(code = %code, attempt, "generated code collides with history, retrying");
        }

        Err(ShortenerError::CodeSpaceExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    fn lookup(&self, code: &str) -> Option<HistoryEntry> {
        if code.is_empty() {
            return None;
        }

        match self.history.find_by_code(code) {
            Some(entry) => {
                debug!(code = %code, url = %entry.original_url, "resolved short code");
                Some(entry)
            }
            None => {
                trace!(code = %code, "short code not found");
                None
            }
        }
    }

    fn link_for(&self, original: &Url, entry: &HistoryEntry) -> String {
        match &entry.short_url {
            Some(url) => url.clone(),
            None => self
                .settings
                .link_style
                .compose(original, &ShortCode::new_unchecked(&entry.short_code)),
        }
    }
}

impl<S: KeyValueStore, G: Generator, C: Clock + 'static> Shortener for ShortenerService<S, G, C> {
    fn shorten(&self, params: ShortenParams) -> Result<Shortened> {
        let original_url = params.original_url.trim();
        let parsed = validate_url(original_url)?;

        let code = match self.resolve_alias(params.custom_alias.as_deref())? {
            Some(alias) => alias,
            None => self.generate_unused_code()?,
        };

        let short_url = self.settings.link_style.compose(&parsed, &code);
        let saved = self
            .history
            .save_to_history(original_url, &code, Some(short_url))?;
        let reused = saved.is_existing();
        let entry = saved.into_entry();

        let short_code = if reused {
            ShortCode::new_unchecked(&entry.short_code)
        } else {
            code
        };
        let short_url = self.link_for(&parsed, &entry);
        let report = LengthReport::measure(
            original_url,
            &short_url,
            self.settings.short_url_threshold,
        );

        info!(
            code = %short_code,
            url = %original_url,
            reused,
            "shortened url"
        );

        Ok(Shortened {
            short_code,
            short_url,
            original_url: entry.original_url,
            report,
            reused,
        })
    }

    fn resolve(&self, fragment: &str) -> Option<HistoryEntry> {
        let fragment = fragment.trim();
        self.lookup(fragment.strip_prefix('#').unwrap_or(fragment))
    }

    fn history(&self) -> Vec<HistoryEntry> {
        self.history.get_history()
    }
}
