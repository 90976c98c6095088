//! Command implementations.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Context;
use camino::Utf8Path;

pub mod generate;
pub mod info;
pub mod scan;

/// Path that stands for stdin or stdout.
pub const STDIO_PATH: &str = "-";

/// Open `path` for buffered reading, or stdin for `None` / `-`.
///
/// Files are size-checked against `max_bytes` before opening so oversized
/// input fails fast. Stdin is never size-checked.
pub fn open_input(
    path: Option<&Utf8Path>,
    max_bytes: Option<usize>,
) -> anyhow::Result<Box<dyn BufRead>> {
    let Some(path) = path.filter(|p| p.as_str() != STDIO_PATH) else {
        return Ok(Box::new(io::stdin().lock()));
    };

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let file = File::open(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Create (or truncate) `path` for writing, or stdout for `None` / `-`.
pub fn open_output(path: Option<&Utf8Path>) -> anyhow::Result<Box<dyn Write>> {
    match path.filter(|p| p.as_str() != STDIO_PATH) {
        None => Ok(Box::new(io::stdout().lock())),
        Some(path) => {
            let file = File::create(path.as_std_path())
                .with_context(|| format!("failed to create {path}"))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
    }
}
