use thiserror::Error;

/// Result type for the shortening workflow.
pub type Result<T> = std::result::Result<T, ShortenerError>;

/// Rejected user input: the URL or the custom alias.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("URL cannot be empty")]
    EmptyUrl,
    #[error("malformed URL: {0}")]
    MalformedUrl(String),
    #[error("URL scheme must be http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("invalid alias: {0}")]
    InvalidAlias(String),
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(String),
    #[error("storage serialization failed: {0}")]
    Serialization(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("alias \"{0}\" is already in use, choose another one")]
    DuplicateAlias(String),
    #[error("could not generate an unused short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
