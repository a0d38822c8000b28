//! Error types shared across the classifier crates

use thiserror::Error;

/// Errors raised while building or mutating classifier state.
///
/// Classification itself never fails for string input; these only surface
/// from table construction, operator feedback and configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Keyword phrase is unusable (empty after trimming)
    #[error("invalid keyword phrase: {0:?}")]
    InvalidKeyword(String),

    #[error("unknown complaint category: {0}")]
    UnknownCategory(String),

    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    #[error("unknown language tag: {0}")]
    UnknownLanguage(String),

    /// Boundary pattern failed to compile for a phrase
    #[error("failed to compile pattern for {phrase:?}: {reason}")]
    Pattern { phrase: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
