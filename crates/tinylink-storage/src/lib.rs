pub mod file;
pub mod history;
pub mod memory;

pub use file::FileStore;
pub use history::{HistoryStore, Saved, STORAGE_KEY};
pub use memory::InMemoryStore;
pub use tinylink_core::{KeyValueStore, StorageError};
