//! Sentence shaping rules: length and comma/semicolon placement.

use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, DEFAULT_WORDS_PER_SENTENCE};
use crate::error::{GenerateError, GenerateResult};

/// Probability that an inserted mark is a comma rather than a semicolon.
pub const COMMA_PROBABILITY: f64 = 0.8;

/// Rules governing how a single sentence is built.
///
/// Deserialized with `#[serde(default)]`, so a config file only needs to
/// name the fields it overrides. Values loaded that way should be passed
/// through [`SentenceRules::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SentenceRules {
    /// Chance in `[0, 1]` that an eligible sentence gets a comma or semicolon.
    pub comma_percentage: f64,
    /// Sentences shorter than this never get a mark.
    pub comma_min_words: usize,
    /// Words that must precede the marked word.
    pub min_words_before_comma: usize,
    /// Words that must follow the marked word.
    pub min_words_after_comma: usize,
    /// Sentence length.
    pub number_of_words: Bounds,
}

impl Default for SentenceRules {
    fn default() -> Self {
        Self {
            comma_percentage: 0.66,
            comma_min_words: 7,
            min_words_before_comma: 3,
            min_words_after_comma: 1,
            number_of_words: DEFAULT_WORDS_PER_SENTENCE,
        }
    }
}

impl SentenceRules {
    /// Build validated rules.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidCommaPercentage`] when
    /// `comma_percentage` is outside `[0, 1]`, or a bounds error when
    /// `number_of_words` can sample zero.
    pub fn new(
        comma_percentage: f64,
        comma_min_words: usize,
        min_words_before_comma: usize,
        min_words_after_comma: usize,
        number_of_words: Bounds,
    ) -> GenerateResult<Self> {
        Self {
            comma_percentage,
            comma_min_words,
            min_words_before_comma,
            min_words_after_comma,
            number_of_words,
        }
        .validate()
    }

    /// Replace the sentence length, revalidating.
    pub fn with_number_of_words(self, number_of_words: Bounds) -> GenerateResult<Self> {
        Self {
            number_of_words,
            ..self
        }
        .validate()
    }

    /// Check invariants, returning the rules unchanged when they hold.
    pub fn validate(self) -> GenerateResult<Self> {
        if !(0.0..=1.0).contains(&self.comma_percentage) {
            return Err(GenerateError::InvalidCommaPercentage(self.comma_percentage));
        }
        self.number_of_words.require_positive("words")?;
        Ok(self)
    }

    /// Smallest sentence that has room for a mark.
    ///
    /// Saturates at `usize::MAX`, which no sentence can reach.
    pub const fn min_words_for_comma(&self) -> usize {
        self.min_words_before_comma
            .saturating_add(self.min_words_after_comma)
            .saturating_add(1)
    }
}
