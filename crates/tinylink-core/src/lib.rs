//! Core types and traits for the tinylink URL shortener.
//!
//! This crate provides the types shared by the generator, the history
//! store and the shortener service: short codes, history entries, input
//! validation, and the store and clock abstractions they are written against.

pub mod clock;
pub mod error;
pub mod history;
pub mod shortcode;
pub mod store;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, ShortenerError, StorageError, ValidationError};
pub use history::{HistoryEntry, HISTORY_LIMIT};
pub use shortcode::{is_valid_alias, ShortCode};
pub use store::KeyValueStore;
pub use validation::{is_valid_url, validate_url};
