use std::fmt::Display;

/// URLs at or under this many characters are considered short already.
pub const SHORT_URL_THRESHOLD: usize = 50;

/// How the short link compares in length to the original URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthReport {
    /// The original was at or under the threshold to begin with.
    AlreadyShort { length: usize },
    /// The short link saves `saved` characters.
    Saved {
        saved: usize,
        original: usize,
        shortened: usize,
    },
    /// The short link is no shorter than the original.
    NoSavings { original: usize, shortened: usize },
}

impl LengthReport {
    /// Compares lengths in characters, not bytes.
    pub fn measure(original_url: &str, short_url: &str, threshold: usize) -> Self {
        let original = original_url.chars().count();
        let shortened = short_url.chars().count();

        if original <= threshold {
            LengthReport::AlreadyShort { length: original }
        } else if shortened < original {
            LengthReport::Saved {
                saved: original - shortened,
                original,
                shortened,
            }
        } else {
            LengthReport::NoSavings {
                original,
                shortened,
            }
        }
    }
}

impl Display for LengthReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthReport::AlreadyShort { length } => {
                write!(f, "This URL is already short enough ({length} characters)")
            }
            LengthReport::Saved {
                saved,
                original,
                shortened,
            } => write!(
                f,
                "Shortened by {saved} characters ({original} -> {shortened} characters)"
            ),
            LengthReport::NoSavings {
                original,
                shortened,
            } => write!(
                f,
                "The short link is not shorter than the original ({original} -> {shortened} characters)"
            ),
        }
    }
}
