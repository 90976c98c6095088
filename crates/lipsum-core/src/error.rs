//! Error types for lipsum-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while parsing or validating a [`Bounds`](crate::Bounds).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    /// The bounds string is not `N` or `N:M`.
    #[error("invalid bounds {input:?}: {reason}")]
    Parse {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The range end lies below its start.
    #[error("invalid range {start}:{end}: end must be >= start")]
    InvalidRange {
        /// Lower end of the range.
        start: usize,
        /// Upper end of the range.
        end: usize,
    },

    /// A count that must be at least one can sample zero.
    #[error("{name} must be at least 1, got {start}")]
    NonPositive {
        /// Which count was rejected (e.g. "paragraphs").
        name: &'static str,
        /// The offending lower bound.
        start: usize,
    },
}

/// Result type alias using [`BoundsError`].
pub type BoundsResult<T> = Result<T, BoundsError>;

/// Errors that can occur while setting up text generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// A count range was malformed or non-positive.
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    /// The comma probability lies outside `[0, 1]`.
    #[error("comma_percentage must be between 0.0 and 1.0, got {0}")]
    InvalidCommaPercentage(f64),

    /// The dictionary has no words to sample from.
    #[error("dictionary is empty")]
    EmptyDictionary,

    /// The dictionary lists the same word twice.
    #[error("dictionary contains duplicate word {0:?}")]
    DuplicateWord(String),

    /// The dictionary contains a word that is empty, has whitespace, or is not lowercase.
    #[error("dictionary word {0:?} must be a single lowercase token")]
    InvalidWord(String),
}

/// Result type alias using [`GenerateError`].
pub type GenerateResult<T> = Result<T, GenerateError>;
