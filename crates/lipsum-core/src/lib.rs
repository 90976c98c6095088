//! Core library for lipsum.
//!
//! Two engines live here:
//!
//! - **Generation**: [`LipsumGenerator`] composes placeholder sentences,
//!   paragraphs, and documents from a [`Dictionary`], shaped by
//!   [`SentenceRules`] and [`Bounds`].
//! - **Analysis**: [`scan`] normalizes raw text into words and
//!   [`FrequencyTable`] ranks them by count.
//!
//! # Modules
//!
//! - [`bounds`] - Fixed values and inclusive ranges
//! - [`dictionary`] - The word list text is sampled from
//! - [`rules`] - Sentence length and punctuation rules
//! - [`generator`] - Sentence, paragraph, and document composition
//! - [`scan`] - Tokenizing and normalizing input text
//! - [`frequency`] - Word counting and ranking
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use lipsum_core::{Bounds, Dictionary, FrequencyTable, LipsumGenerator, SentenceRules};
//!
//! let mut generator = LipsumGenerator::with_seed(Dictionary::lorem(), 7);
//! let paragraphs = generator
//!     .make_many_paragraphs(&Bounds::fixed(2), "", &Bounds::fixed(3), &SentenceRules::default())
//!     .unwrap();
//! assert_eq!(paragraphs.len(), 2);
//!
//! let mut table = FrequencyTable::new();
//! table.update(lipsum_core::scan::scan_lines(&paragraphs));
//! assert!(table.total() >= 2 * 3 * 4);
//! ```
#![deny(unsafe_code)]

pub mod bounds;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod frequency;
pub mod generator;
pub mod rules;
pub mod scan;

pub use bounds::Bounds;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use dictionary::Dictionary;
pub use error::{
    BoundsError, BoundsResult, ConfigError, ConfigResult, GenerateError, GenerateResult,
};
pub use frequency::{FrequencyReport, FrequencyTable, WordCount};
pub use generator::LipsumGenerator;
pub use rules::SentenceRules;

/// Default maximum input size for `scan` (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
