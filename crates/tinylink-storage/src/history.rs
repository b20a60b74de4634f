use tinylink_core::store::Result;
use tinylink_core::{
    Clock, HistoryEntry, KeyValueStore, ShortCode, ShortenerError, StorageError, SystemClock,
    HISTORY_LIMIT,
};
use tracing::{debug, trace, warn};

/// Key the history list is stored under.
pub const STORAGE_KEY: &str = "urlShortenerHistory";

/// Result of [`HistoryStore::save_to_history`].
#[derive(Debug, Clone, PartialEq)]
pub enum Saved {
    /// A new entry was written at the front of the list.
    Inserted(HistoryEntry),
    /// The URL was already in the list; nothing was written.
    Existing(HistoryEntry),
}

impl Saved {
    pub fn entry(&self) -> &HistoryEntry {
        match self {
            Saved::Inserted(entry) | Saved::Existing(entry) => entry,
        }
    }

    pub fn into_entry(self) -> HistoryEntry {
        match self {
            Saved::Inserted(entry) | Saved::Existing(entry) => entry,
        }
    }

    pub fn short_code(&self) -> &str {
        &self.entry().short_code
    }

    pub fn is_existing(&self) -> bool {
        matches!(self, Saved::Existing(_))
    }
}

/// The bounded, newest-first list of shortened URLs.
///
/// The list lives as one JSON array under [`STORAGE_KEY`] and is read and
/// written whole on every operation. At most [`HISTORY_LIMIT`] entries are
/// kept; inserting past the limit drops the oldest.
#[derive(Debug, Clone)]
pub struct HistoryStore<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore> HistoryStore<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> HistoryStore<S, C> {
    /// Creates a history store that stamps entries with `clock`.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Returns the stored list, newest first.
    ///
    /// An absent key, an unreadable store, or unparseable data all read as
    /// an empty list.
    pub fn get_history(&self) -> Vec<HistoryEntry> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "history store unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
            Ok(mut history) => {
                history.truncate(HISTORY_LIMIT);
                history
            }
            Err(e) => {
                warn!(error = %e, "stored history is corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Records `original_url` under `code`.
    ///
    /// Saving a URL that is already in the list returns the existing entry
    /// and writes nothing.
    pub fn save_to_history(
        &self,
        original_url: &str,
        code: &ShortCode,
        short_url: Option<String>,
    ) -> Result<Saved> {
        let mut history = self.get_history();

        if let Some(existing) = history.iter().find(|e| e.original_url == original_url) {
            debug!(
                url = %original_url,
                code = %existing.short_code,
                "url already shortened, reusing code"
            );
            return Ok(Saved::Existing(existing.clone()));
        }

        let entry = HistoryEntry {
            original_url: original_url.to_owned(),
            short_code: code.as_str().to_owned(),
            short_url,
            created_at: self.clock.now(),
        };
        history.insert(0, entry.clone());

        if history.len() > HISTORY_LIMIT {
            let evicted = history.split_off(HISTORY_LIMIT);
            for old in &evicted {
                debug!(code = %old.short_code, "evicting oldest history entry");
            }
        }

        self.write(&history)?;
        debug!(code = %entry.short_code, len = history.len(), "history entry saved");
        Ok(Saved::Inserted(entry))
    }

    /// Fails with [`ShortenerError::DuplicateAlias`] if `alias` is already a stored code.
    pub fn ensure_alias_available(&self, alias: &ShortCode) -> std::result::Result<(), ShortenerError> {
        if self.contains_code(alias.as_str()) {
            return Err(ShortenerError::DuplicateAlias(alias.to_string()));
        }
        Ok(())
    }

    pub fn find_by_code(&self, code: &str) -> Option<HistoryEntry> {
        trace!(code = %code, "looking up short code");
        self.get_history().into_iter().find(|e| e.short_code == code)
    }

    pub fn find_by_original_url(&self, original_url: &str) -> Option<HistoryEntry> {
        self.get_history()
            .into_iter()
            .find(|e| e.original_url == original_url)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.get_history().iter().any(|e| e.short_code == code)
    }

    /// Drops the whole list. Returns `true` if there was one.
    pub fn clear(&self) -> Result<bool> {
        let removed = self.store.remove(STORAGE_KEY)?;
        debug!(removed, "history cleared");
        Ok(removed)
    }

    fn write(&self, history: &[HistoryEntry]) -> Result<()> {
        let json = serde_json::to_string(history)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(STORAGE_KEY, &json)
    }
}
