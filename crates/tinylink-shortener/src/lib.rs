//! URL shortener service implementation.
//!
//! This crate ties the history store and the code generator together into
//! the shortening workflow and the redirect lookup. Core types are
//! re-exported from `tinylink_core`.

pub mod link;
pub mod report;
pub mod service;
pub mod shortener;

pub use link::{extract_code, LinkStyle};
pub use report::{LengthReport, SHORT_URL_THRESHOLD};
pub use service::{ShortenerService, ShortenerSettings, MAX_GENERATION_ATTEMPTS};
pub use shortener::{ShortenParams, Shortened, Shortener};
pub use tinylink_core::{HistoryEntry, ShortCode, ShortenerError};
