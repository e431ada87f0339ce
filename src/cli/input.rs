//! Raw transcript input: file-type checks, decoding and the size limit.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// Default transcript size limit, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 50_000;

/// File extensions the CLI accepts. An empty string means "no extension".
pub const ACCEPTED_EXTENSIONS: &[&str] = &["txt", "md", "json", ""];

/// Problems with the raw input, found before it reaches the engine.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Unsupported file type: {0} (expected .txt, .md or .json)")]
    UnsupportedFileType(String),

    #[error("Transcript is {actual} characters long; the limit is {limit}")]
    TooLong { actual: usize, limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolve the transcript size limit.
///
/// Priority:
/// 1. `AICS_MAX_INPUT_CHARS` env var
/// 2. [`DEFAULT_MAX_INPUT_CHARS`]
pub fn max_input_chars() -> anyhow::Result<usize> {
    match std::env::var("AICS_MAX_INPUT_CHARS") {
        Ok(raw) => parse_limit(&raw),
        Err(_) => Ok(DEFAULT_MAX_INPUT_CHARS),
    }
}

fn parse_limit(raw: &str) -> anyhow::Result<usize> {
    let limit: usize = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("AICS_MAX_INPUT_CHARS is not a number: {}", raw))?;
    anyhow::ensure!(limit > 0, "AICS_MAX_INPUT_CHARS must be greater than zero");
    Ok(limit)
}

/// Read a transcript file, rejecting formats the engine cannot take as text.
pub fn read_file(path: &Path, limit: usize) -> Result<String, InputError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(InputError::UnsupportedFileType(path.display().to_string()));
    }

    let file = std::fs::File::open(path)?;
    read_input(file, limit)
}

/// Read and decode a transcript. Invalid UTF-8 is replaced, a leading BOM
/// is dropped, and input over `limit` characters is refused.
pub fn read_input<R: Read>(mut reader: R, limit: usize) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let text = decode(&bytes);
    check_length(&text, limit)?;
    Ok(text)
}

/// Refuse text longer than `limit` characters.
pub fn check_length(text: &str, limit: usize) -> Result<(), InputError> {
    let actual = text.chars().count();
    if actual > limit {
        return Err(InputError::TooLong { actual, limit });
    }
    Ok(())
}

fn decode(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&text).to_string()
}
