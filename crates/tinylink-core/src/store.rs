use crate::error::StorageError;

/// Result type for key-value store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A string-keyed, string-valued persistent slot store.
///
/// This is the shape of browser local storage: whole values are read and
/// written at once, with no partial updates. Implementations can be backed
/// by memory, a file on disk, or anything else that can hold strings.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Returns `true` if a value was present.
    fn remove(&self, key: &str) -> Result<bool>;
}

impl<S: KeyValueStore> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}
