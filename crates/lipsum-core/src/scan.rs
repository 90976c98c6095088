//! Word extraction for frequency analysis.
//!
//! Tokens are split on whitespace and trimmed in a single fixed-order pass:
//! at most one trailing `,`, then at most one trailing `.`, then at most one
//! trailing `;`. Repeated trailing punctuation beyond that is kept, so
//! `"word.,"` normalizes to `"word"` but `"word,,"` normalizes to `"word,"`.

use std::io::BufRead;

use tracing::instrument;

use crate::frequency::FrequencyTable;

/// Normalize one raw token, returning `None` if nothing is left.
pub fn normalize_token(raw: &str) -> Option<String> {
    let word = raw.strip_suffix(',').unwrap_or(raw);
    let word = word.strip_suffix('.').unwrap_or(word);
    let word = word.strip_suffix(';').unwrap_or(word);
    (!word.is_empty()).then(|| word.to_lowercase())
}

/// Normalized words of a single line, in order.
pub fn scan_line(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace().filter_map(normalize_token)
}

/// Normalized words of many lines, concatenated in input order.
pub fn scan_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = Vec::new();
    for line in lines {
        words.extend(scan_line(line.as_ref()));
    }
    words
}

/// Stream lines from `reader` into a fresh [`FrequencyTable`].
///
/// # Errors
///
/// Propagates read failures, including invalid UTF-8.
#[instrument(skip_all)]
pub fn scan_reader<R: BufRead>(reader: R) -> std::io::Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    for line in reader.lines() {
        table.update(scan_line(&line?));
    }
    tracing::debug!(
        total = table.total(),
        unique = table.unique(),
        "scan complete"
    );
    Ok(table)
}
