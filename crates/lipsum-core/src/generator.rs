//! Randomized placeholder prose.
//!
//! [`LipsumGenerator`] owns the dictionary and the one random generator
//! used for a run. Every sample (sentence length, word order, comma
//! placement, paragraph sizes) is drawn from that generator, so a fixed
//! seed reproduces the same document.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::bounds::Bounds;
use crate::dictionary::Dictionary;
use crate::error::GenerateResult;
use crate::rules::{COMMA_PROBABILITY, SentenceRules};

/// Lead-in used when the caller does not supply one.
pub const DEFAULT_START: &str = "Lorem ipsum dolor amet";

/// Composes sentences, paragraphs, and documents from a [`Dictionary`].
#[derive(Debug)]
pub struct LipsumGenerator<R = StdRng> {
    dictionary: Dictionary,
    rng: R,
}

impl LipsumGenerator<StdRng> {
    /// Generator seeded from the operating system.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Generator with a reproducible seed.
    pub fn with_seed(dictionary: Dictionary, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LipsumGenerator<R> {
    /// Generator driven by a caller-supplied random source.
    pub fn with_rng(dictionary: Dictionary, rng: R) -> Self {
        Self { dictionary, rng }
    }

    /// The dictionary words are drawn from.
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Build one sentence.
    ///
    /// Words are taken from a fresh permutation of the dictionary, so no
    /// word repeats within a sentence and the length is capped at the
    /// dictionary size. The first word is capitalized and the sentence
    /// ends with a period.
    pub fn make_a_sentence(&mut self, rules: &SentenceRules) -> String {
        let mut indices: Vec<usize> = (0..self.dictionary.len()).collect();
        indices.shuffle(&mut self.rng);

        let word_count = rules
            .number_of_words
            .generate(&mut self.rng)
            .min(indices.len());

        let mut words: Vec<String> = indices[..word_count]
            .iter()
            .filter_map(|&i| self.dictionary.get(i))
            .map(str::to_string)
            .collect();

        if let Some(first) = words.first_mut() {
            *first = capitalize(first);
        }

        if word_count >= rules.comma_min_words
            && self.rng.random::<f64>() <= rules.comma_percentage
        {
            self.add_comma(&mut words, rules);
        }

        let mut sentence = words.join(" ");
        sentence.push('.');
        sentence
    }

    /// Mark one word with `,` or `;`, leaving room on either side.
    ///
    /// Sentences too short to satisfy the rules are left alone.
    fn add_comma(&mut self, words: &mut [String], rules: &SentenceRules) {
        let Some(slack) = words.len().checked_sub(rules.min_words_for_comma()) else {
            return;
        };

        // slack fits, so before + slack + after + 1 == len
        let comma_index = rules.min_words_before_comma + self.rng.random_range(0..=slack);
        let mark = if self.rng.random::<f64>() < COMMA_PROBABILITY {
            ','
        } else {
            ';'
        };
        words[comma_index].push(mark);
    }

    /// Build a paragraph of independently generated sentences.
    pub fn make_a_paragraph(&mut self, sentences: &Bounds, rules: &SentenceRules) -> String {
        let count = sentences.generate(&mut self.rng);
        (0..count)
            .map(|_| self.make_a_sentence(rules))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Build a document of paragraphs.
    ///
    /// When `start_text` is non-blank it leads the first paragraph and the
    /// generated text after it is lowercased. Returns exactly as many
    /// paragraphs as `paragraphs` samples.
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `paragraphs` or `sentences` can sample
    /// zero. Nothing is drawn from the generator in that case.
    #[instrument(skip_all, fields(paragraphs = %paragraphs, sentences = %sentences))]
    pub fn make_many_paragraphs(
        &mut self,
        paragraphs: &Bounds,
        start_text: &str,
        sentences: &Bounds,
        rules: &SentenceRules,
    ) -> GenerateResult<Vec<String>> {
        paragraphs.require_positive("paragraphs")?;
        sentences.require_positive("sentences")?;

        let paragraph_count = paragraphs.generate(&mut self.rng);
        debug!(paragraph_count, "sampled paragraph count");

        let mut output = Vec::with_capacity(paragraph_count);
        let first = self.make_a_paragraph(sentences, rules);
        if start_text.trim().is_empty() {
            output.push(first.trim_end().to_string());
        } else {
            output.push(format!(
                "{start_text} {}",
                first.to_lowercase().trim_end()
            ));
        }

        for _ in 1..paragraph_count {
            let paragraph = self.make_a_paragraph(sentences, rules);
            output.push(paragraph.trim_end().to_string());
        }

        Ok(output)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
