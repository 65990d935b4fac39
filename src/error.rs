//! Error types
//!
//! Library-level errors. The binary wraps these in `anyhow` at the top level.

use thiserror::Error;

/// Failure to obtain the dictionary
#[derive(Debug, Error)]
pub enum SourceError {
    /// The configured location is not a usable URL
    #[error("bad word list source '{location}': {reason}")]
    BadSource { location: String, reason: String },

    /// The request failed or the server answered with an error status
    #[error("failed to fetch word list: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The response body could not be decoded into text
    #[error("failed to parse word list: {0}")]
    Parse(String),
}

impl SourceError {
    pub(crate) fn bad_source(location: &str, reason: impl ToString) -> Self {
        Self::BadSource {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Failure to build the filter from feedback
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid green pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Failure while reading feedback from the user
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before the {0} could be read")]
    UnexpectedEof(&'static str),
}
