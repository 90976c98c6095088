//! Integer bounds used to size sentences, paragraphs, and documents.
//!
//! A [`Bounds`] is either a fixed value (`"5"`) or an inclusive range
//! (`"4:7"`). Ranges are validated when they are built, so sampling never
//! sees an inverted range.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BoundsError, BoundsResult};

/// Default number of words per sentence.
pub const DEFAULT_WORDS_PER_SENTENCE: Bounds = Bounds::range_unchecked(4, 15);

/// Default number of sentences per paragraph.
pub const DEFAULT_SENTENCES_PER_PARAGRAPH: Bounds = Bounds::range_unchecked(4, 7);

/// Default number of paragraphs per document.
pub const DEFAULT_PARAGRAPHS: Bounds = Bounds::fixed(5);

/// A fixed integer or an inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    start: usize,
    end: Option<usize>,
}

impl Bounds {
    /// Bounds that always sample `value`.
    pub const fn fixed(value: usize) -> Self {
        Self {
            start: value,
            end: None,
        }
    }

    /// Inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::InvalidRange`] when `end < start`.
    pub fn new(start: usize, end: usize) -> BoundsResult<Self> {
        if end < start {
            return Err(BoundsError::InvalidRange { start, end });
        }
        Ok(Self::range_unchecked(start, end))
    }

    const fn range_unchecked(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Lower end (or the fixed value).
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Upper end, if this is a range.
    pub const fn end(&self) -> Option<usize> {
        self.end
    }

    /// Largest value [`generate`](Self::generate) can return.
    pub fn max(&self) -> usize {
        self.end.unwrap_or(self.start)
    }

    /// Returns `true` when sampling consumes no randomness.
    pub const fn is_fixed(&self) -> bool {
        self.end.is_none()
    }

    /// Reject bounds that can sample zero.
    ///
    /// `name` identifies the count in the error message.
    pub fn require_positive(self, name: &'static str) -> BoundsResult<Self> {
        if self.start == 0 {
            return Err(BoundsError::NonPositive {
                name,
                start: self.start,
            });
        }
        Ok(self)
    }

    /// Sample a value.
    ///
    /// Fixed bounds return `start` without touching `rng`; ranges draw
    /// uniformly from `[start, end]`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> usize {
        match self.end {
            None => self.start,
            Some(end) => rng.random_range(self.start..=end),
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            None => write!(f, "{}", self.start),
            Some(end) => write!(f, "{}:{end}", self.start),
        }
    }
}

impl FromStr for Bounds {
    type Err = BoundsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parse_part = |part: &str, which: &str| {
            part.trim().parse::<usize>().map_err(|e| BoundsError::Parse {
                input: text.to_string(),
                reason: format!("{which} {part:?} is not a non-negative integer ({e})"),
            })
        };

        match text.split_once(':') {
            None => Ok(Self::fixed(parse_part(text, "value")?)),
            Some((_, rest)) if rest.contains(':') => Err(BoundsError::Parse {
                input: text.to_string(),
                reason: "expected N or N:M".to_string(),
            }),
            Some((start, end)) => Self::new(parse_part(start, "start")?, parse_part(end, "end")?),
        }
    }
}

impl Serialize for Bounds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Bounds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        /// Accept both `5` and `"4:7"` in config files.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(usize),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self::fixed(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
