//! The word list placeholder text is sampled from.

use std::collections::HashSet;

use crate::error::{GenerateError, GenerateResult};

/// Built-in lorem ipsum vocabulary: distinct lowercase pseudo-Latin words.
pub const WORDS_LOREM: &[&str] = &[
    "sed", "in", "ut", "et", "ac", "nec", "vel", "sit", "amet", "a", "quis", "eu", "id", "vitae",
    "at", "non", "eget", "nulla", "mauris", "pellentesque", "nunc", "tincidunt", "vestibulum",
    "aliquam", "ante", "donec", "ipsum", "orci", "turpis", "lorem", "dolor", "urna", "risus",
    "erat", "nibh", "lacus", "dui", "mi", "elit", "ligula", "libero", "magna", "quam", "enim",
    "sapien", "purus", "ex", "velit", "nisl", "odio", "arcu", "est", "justo", "sem", "tellus",
    "diam", "malesuada", "nisi", "felis", "eros", "tortor", "lectus", "augue", "massa", "metus",
    "tristique", "leo", "neque", "cursus", "posuere", "faucibus", "vehicula", "egestas",
    "volutpat", "suspendisse", "interdum", "scelerisque", "bibendum", "ultrices", "convallis",
    "luctus", "consectetur", "efficitur", "imperdiet", "congue", "rhoncus", "tempus", "ornare",
    "mollis", "auctor", "pharetra", "morbi", "pretium", "mattis", "facilisis", "eleifend",
    "sollicitudin", "lobortis", "dictum", "ullamcorper", "tempor", "lacinia", "iaculis",
    "hendrerit", "rutrum", "viverra", "aenean", "elementum", "phasellus", "porttitor", "nullam",
    "condimentum", "varius", "pulvinar", "feugiat", "suscipit", "semper", "dapibus", "vulputate",
    "euismod", "accumsan", "blandit", "venenatis", "commodo", "dignissim", "porta", "cras",
    "finibus", "fermentum", "placerat", "maximus", "maecenas", "sodales", "etiam", "nam",
    "praesent", "consequat", "aliquet", "molestie", "gravida", "sagittis", "laoreet", "proin",
    "duis", "curabitur", "fringilla", "fusce", "ultricies", "integer", "quisque", "vivamus",
    "fames", "per", "primis", "habitant", "senectus", "netus", "facilisi", "potenti",
    "adipiscing", "class", "aptent", "taciti", "sociosqu", "ad", "litora", "torquent", "conubia",
    "nostra", "inceptos", "himenaeos", "natoque", "penatibus", "magnis", "dis", "parturient",
    "montes", "nascetur", "ridiculus", "mus", "cubilia", "curae", "hac", "habitasse", "platea",
    "dictumst",
];

/// An immutable, ordered list of distinct lowercase words.
///
/// Sentences index into this list, so its order matters for reproducible
/// output under a fixed seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary, validating that every word is a distinct,
    /// non-empty lowercase token.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::EmptyDictionary`] when `words` is empty.
    /// - [`GenerateError::InvalidWord`] for empty, whitespace-bearing, or
    ///   non-lowercase entries.
    /// - [`GenerateError::DuplicateWord`] when a word appears twice.
    pub fn new<I, S>(words: I) -> GenerateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(GenerateError::EmptyDictionary);
        }

        let mut seen = HashSet::with_capacity(words.len());
        for word in &words {
            if word.is_empty()
                || word.chars().any(char::is_whitespace)
                || word.to_lowercase() != *word
            {
                return Err(GenerateError::InvalidWord(word.clone()));
            }
            if !seen.insert(word.as_str()) {
                return Err(GenerateError::DuplicateWord(word.clone()));
            }
        }

        Ok(Self { words })
    }

    /// The built-in lorem ipsum dictionary.
    pub fn lorem() -> Self {
        Self {
            words: WORDS_LOREM.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: construction rejects empty word lists.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// All words, in dictionary order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns `true` if `word` is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::lorem()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lorem_words_pass_validation() {
        let dict = Dictionary::new(WORDS_LOREM.iter().copied()).unwrap();
        assert_eq!(dict, Dictionary::lorem());
        assert_eq!(dict.len(), 186);
        assert_eq!(dict.get(0), Some("sed"));
        assert!(dict.contains("lorem"));
        assert!(!dict.contains("Lorem"));
    }

    #[test]
    fn rejects_empty_list() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(Dictionary::new(empty), Err(GenerateError::EmptyDictionary));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Dictionary::new(["alpha", "beta", "alpha"]),
            Err(GenerateError::DuplicateWord("alpha".into()))
        );
    }

    #[test]
    fn rejects_uppercase_and_blank_words() {
        for bad in ["Alpha", "", "two words"] {
            assert_eq!(
                Dictionary::new(["ok", bad]),
                Err(GenerateError::InvalidWord(bad.into()))
            );
        }
    }
}
