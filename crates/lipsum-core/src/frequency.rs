//! Word frequency accumulation and ranking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A word and how often it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Normalized word.
    pub word: String,
    /// Occurrences.
    pub count: usize,
}

impl WordCount {
    /// Render as `word (N)`, or `word<sep>N` when a separator is given.
    pub fn render(&self, sep: Option<&str>) -> String {
        match sep {
            None => format!("{} ({})", self.word, self.count),
            Some(sep) => format!("{}{sep}{}", self.word, self.count),
        }
    }
}

/// Ranked view of a [`FrequencyTable`] plus its totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyReport {
    /// Ranked (and possibly truncated) words.
    pub words: Vec<WordCount>,
    /// Sum of all counts in the table, regardless of truncation.
    pub total: usize,
    /// Distinct words in the table, regardless of truncation.
    pub unique: usize,
}

/// Word counts that remember first-occurrence order.
///
/// Ranking is by descending count; ties keep the order in which the words
/// were first seen.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word in `words`.
    pub fn update<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            let word = word.into();
            match self.index.get(&word) {
                Some(&slot) => self.entries[slot].count += 1,
                None => {
                    self.index.insert(word.clone(), self.entries.len());
                    self.entries.push(WordCount { word, count: 1 });
                }
            }
            self.total += 1;
        }
    }

    /// Occurrences of `word` (zero if unseen).
    pub fn count(&self, word: &str) -> usize {
        self.index.get(word).map_or(0, |&slot| self.entries[slot].count)
    }

    /// Sum of all counts.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words.
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by descending count, ties in first-occurrence order.
    ///
    /// `reverse` flips the whole sorted sequence (so ties come out in
    /// reverse first-occurrence order), and `top` keeps only the first
    /// `top` entries of the result.
    pub fn ranked(&self, reverse: bool, top: Option<usize>) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, so equal counts keep insertion order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        if reverse {
            ranked.reverse();
        }
        if let Some(top) = top {
            ranked.truncate(top);
        }
        ranked
    }

    /// Ranked view bundled with totals.
    pub fn report(&self, reverse: bool, top: Option<usize>) -> FrequencyReport {
        FrequencyReport {
            words: self.ranked(reverse, top),
            total: self.total,
            unique: self.unique(),
        }
    }
}
