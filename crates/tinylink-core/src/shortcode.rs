use crate::error::ValidationError;
use std::fmt::Display;

/// The identifier appended to a base address to reference a stored URL.
///
/// Aliases must be 2-20 characters long and contain only ASCII
/// alphanumeric characters or hyphens.
///
/// Two codes are equal when their text is equal, whatever their origin.
#[derive(Clone, Debug)]
pub enum ShortCode {
    /// A system-generated short code (e.g. from a random generator).
    Generated(String),
    /// A user-provided custom alias.
    Alias(String),
    /// A code read back from history, origin unknown.
    Stored(String),
}

pub const MIN_ALIAS_LENGTH: usize = 2;
pub const MAX_ALIAS_LENGTH: usize = 20;

impl ShortCode {
    /// Wraps a code produced by a trusted generator.
    pub fn generated(code: impl Into<String>) -> Self {
        Self::Generated(code.into())
    }

    /// Creates an alias after validating the input.
    ///
    /// Surrounding whitespace is trimmed before validation.
    pub fn alias(alias: impl AsRef<str>) -> std::result::Result<Self, ValidationError> {
        let alias = alias.as_ref().trim();
        Self::validate(alias)?;
        Ok(Self::Alias(alias.to_owned()))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes read back from a trusted store.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self::Stored(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            ShortCode::Generated(s) | ShortCode::Alias(s) | ShortCode::Stored(s) => s.as_str(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, ShortCode::Generated(_))
    }

    fn validate(alias: &str) -> std::result::Result<(), ValidationError> {
        let length = alias.chars().count();
        if !(MIN_ALIAS_LENGTH..=MAX_ALIAS_LENGTH).contains(&length) {
            return Err(ValidationError::InvalidAlias(format!(
                "length must be between {} and {}, got {}",
                MIN_ALIAS_LENGTH, MAX_ALIAS_LENGTH, length
            )));
        }

        if !alias.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ValidationError::InvalidAlias(format!(
                "must contain only letters, digits, or hyphens: '{}'",
                alias
            )));
        }

        Ok(())
    }
}

/// Returns whether `alias` is an acceptable custom alias.
///
/// Agrees with [`ShortCode::alias`], including its trimming.
pub fn is_valid_alias(alias: &str) -> bool {
    ShortCode::validate(alias.trim()).is_ok()
}

impl PartialEq for ShortCode {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ShortCode {}

impl std::hash::Hash for ShortCode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
