//! Scan command: rank the words of a text by frequency.

use std::io::Write;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use lipsum_core::scan::scan_reader;
use lipsum_core::{Config, FrequencyReport};

use super::open_input;

/// Arguments for the `scan` subcommand.
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Text to read words from (default: stdin; "-" also means stdin).
    pub input: Option<Utf8PathBuf>,

    /// Print only the X most frequent words.
    #[arg(long, value_name = "X")]
    pub top: Option<usize>,

    /// Print each word's count plus total and unique summaries.
    #[arg(long = "include_count", visible_alias = "include-count")]
    pub include_count: bool,

    /// List the least frequent words first.
    #[arg(long)]
    pub reverse: bool,

    /// Separator between word and count (default renders "word (N)").
    #[arg(long)]
    pub sep: Option<String>,
}

/// Scan the input and print its ranked word list.
#[instrument(name = "cmd_scan", skip_all, fields(input = ?args.input))]
pub fn cmd_scan(
    args: ScanArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(top = ?args.top, reverse = args.reverse, "executing scan command");

    let input = args.input.as_deref();
    let reader = open_input(input, max_input_bytes)?;
    let table = scan_reader(reader).with_context(|| match input {
        Some(path) => format!("failed to read {path}"),
        None => "failed to read stdin".to_string(),
    })?;

    let report = table.report(args.reverse, args.top);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if global_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        let sep = args.sep.as_deref().or(config.sep.as_deref());
        write_report(&mut out, &report, args.include_count, sep)?;
    }
    out.flush()?;

    Ok(())
}

/// Render a report as plain text.
///
/// Without `include_count` only the words are printed. With it, each line
/// carries its count and a blank line plus total/unique summaries follow.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &FrequencyReport,
    include_count: bool,
    sep: Option<&str>,
) -> std::io::Result<()> {
    for entry in &report.words {
        if include_count {
            writeln!(out, "{}", entry.render(sep))?;
        } else {
            writeln!(out, "{}", entry.word)?;
        }
    }

    if include_count {
        writeln!(out)?;
        writeln!(out, "{} total words read", report.total)?;
        writeln!(out, "{} unique words read", report.unique)?;
    }
    Ok(())
}
