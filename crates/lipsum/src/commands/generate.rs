//! Generate command: write placeholder paragraphs.

use std::io::Write;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use lipsum_core::{Bounds, Config, Dictionary, LipsumGenerator};

use super::open_output;

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Words per sentence: N or N:M.
    #[arg(long, value_name = "N|N:M")]
    pub words: Option<Bounds>,

    /// Number of paragraphs: N or N:M.
    #[arg(long, value_name = "N|N:M")]
    pub paragraphs: Option<Bounds>,

    /// Sentences per paragraph: N or N:M.
    #[arg(long, value_name = "N|N:M")]
    pub sentences: Option<Bounds>,

    /// Lead-in text for the first paragraph ("" to disable).
    #[arg(long)]
    pub start: Option<String>,

    /// Write a blank line after each paragraph.
    #[arg(
        long = "include_newline",
        visible_alias = "include-newline",
        overrides_with = "no_include_newline"
    )]
    pub include_newline: bool,

    /// Suppress the blank line even when the config enables it.
    #[arg(
        long = "no_include_newline",
        visible_alias = "no-include-newline",
        overrides_with = "include_newline"
    )]
    pub no_include_newline: bool,

    /// Output file (default: stdout; "-" also means stdout).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    paragraphs: &'a [String],
}

/// Generate paragraphs and write them to the requested output.
///
/// Flags override the loaded configuration; the configuration fills in
/// everything the user left unset.
#[instrument(name = "cmd_generate", skip_all)]
pub fn cmd_generate(args: GenerateArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(?args, "executing generate command");

    let paragraphs = args.paragraphs.unwrap_or(config.paragraphs);
    let sentences = args.sentences.unwrap_or(config.sentences);
    let start = args.start.as_deref().unwrap_or(&config.start);
    let include_newline = if args.no_include_newline {
        false
    } else {
        args.include_newline || config.include_newline
    };
    let seed = args.seed.or(config.seed);

    let rules = match args.words {
        Some(words) => config.sentence_rules.with_number_of_words(words),
        None => config.sentence_rules.validate(),
    }
    .context("invalid sentence rules")?;

    let dictionary = Dictionary::lorem();
    let mut generator = match seed {
        Some(seed) => LipsumGenerator::with_seed(dictionary, seed),
        None => LipsumGenerator::new(dictionary),
    };

    let text = generator
        .make_many_paragraphs(&paragraphs, start, &sentences, &rules)
        .context("failed to generate text")?;
    debug!(paragraphs = text.len(), ?seed, "generated text");

    let target = args.output.as_deref();
    let mut out = open_output(target)?;
    if global_json {
        serde_json::to_writer_pretty(&mut out, &GenerateOutput { paragraphs: &text })?;
        writeln!(out)?;
    } else {
        write_paragraphs(&mut out, &text, include_newline)?;
    }
    out.flush().with_context(|| match target {
        Some(path) => format!("failed to write {path}"),
        None => "failed to write to stdout".to_string(),
    })?;

    Ok(())
}

/// One paragraph per line, optionally followed by a blank line.
pub fn write_paragraphs<W: Write>(
    out: &mut W,
    paragraphs: &[String],
    include_newline: bool,
) -> std::io::Result<()> {
    for paragraph in paragraphs {
        writeln!(out, "{paragraph}")?;
        if include_newline {
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(paragraphs: &[&str], include_newline: bool) -> String {
        let owned: Vec<String> = paragraphs.iter().map(|p| (*p).to_string()).collect();
        let mut buf = Vec::new();
        write_paragraphs(&mut buf, &owned, include_newline).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn one_paragraph_per_line() {
        assert_eq!(render(&["A b.", "C d."], false), "A b.\nC d.\n");
    }

    #[test]
    fn include_newline_adds_blank_line_after_each() {
        assert_eq!(render(&["A b.", "C d."], true), "A b.\n\nC d.\n\n");
    }

    #[test]
    fn output_file_receives_paragraphs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("out.txt")).unwrap();
        let args = GenerateArgs {
            paragraphs: Some(Bounds::fixed(3)),
            output: Some(path.clone()),
            seed: Some(1),
            ..GenerateArgs::default()
        };
        cmd_generate(args, false, &Config::default()).unwrap();

        let written = std::fs::read_to_string(path.as_std_path()).unwrap();
        assert_eq!(written.lines().count(), 3);
        assert!(written.starts_with("Lorem ipsum dolor amet "));
    }

    #[test]
    fn no_include_newline_overrides_config() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("out.txt")).unwrap();
        let config = Config {
            include_newline: true,
            ..Config::default()
        };
        let args = GenerateArgs {
            paragraphs: Some(Bounds::fixed(2)),
            no_include_newline: true,
            output: Some(path.clone()),
            seed: Some(4),
            ..GenerateArgs::default()
        };
        cmd_generate(args, false, &config).unwrap();

        let written = std::fs::read_to_string(path.as_std_path()).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(!written.contains("\n\n"));
    }

    #[test]
    fn rejects_zero_words() {
        let args = GenerateArgs {
            words: Some(Bounds::fixed(0)),
            output: Some(Utf8PathBuf::from("-")),
            ..GenerateArgs::default()
        };
        let err = cmd_generate(args, false, &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("words must be at least 1"));
    }
}
