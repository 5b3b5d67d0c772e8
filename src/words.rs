//! Loading word lists at the crate boundary.
//!
//! The pair finder itself never fails; anything that is not a list of strings
//! is rejected here before it reaches the core.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Errors returned while loading a word list.
#[derive(thiserror::Error, Debug)]
pub enum WordListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON word list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON word list must be an array of strings")]
    NotAnArray,
    #[error("Element {position} of the JSON word list is not a string")]
    NonString { position: usize },
    #[error("Line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },
}

/// On-disk layout of a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum WordFormat {
    /// One word per line.
    Lines,
    /// A JSON array of strings.
    Json,
}

impl WordFormat {
    /// `.json` files are read as JSON, everything else line by line.
    pub fn infer(path: &Path) -> Self {
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::Json
        } else {
            Self::Lines
        }
    }
}

/// Options for [`parse_words`] and [`load_words`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordListOptions {
    /// Explicit format. When unset, [`load_words`] infers it from the file
    /// extension and [`parse_words`] reads lines.
    pub format: Option<WordFormat>,
    /// Keep blank lines as empty words instead of skipping them.
    pub keep_blank: bool,
}

/// Read a word list from `path`.
pub fn load_words(path: &Path, options: WordListOptions) -> Result<Vec<String>, WordListError> {
    let format = options.format.unwrap_or_else(|| WordFormat::infer(path));
    let file = File::open(path)?;
    let words = parse_words(
        BufReader::new(file),
        WordListOptions {
            format: Some(format),
            ..options
        },
    )?;
    log::info!(
        "Loaded {} words from {} ({:?})",
        words.len(),
        path.display(),
        format
    );
    Ok(words)
}

/// Parse a word list from any buffered reader.
pub fn parse_words<R: BufRead>(
    reader: R,
    options: WordListOptions,
) -> Result<Vec<String>, WordListError> {
    match options.format.unwrap_or(WordFormat::Lines) {
        WordFormat::Lines => parse_lines(reader, options.keep_blank),
        WordFormat::Json => parse_json(reader),
    }
}

fn parse_lines<R: BufRead>(mut reader: R, keep_blank: bool) -> Result<Vec<String>, WordListError> {
    let mut words = Vec::new();
    let mut buf: Vec<u8> = Vec::new();
    let mut line = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        let word = std::str::from_utf8(&buf).map_err(|_| WordListError::InvalidUtf8 { line })?;
        if word.is_empty() && !keep_blank {
            continue;
        }
        words.push(word.to_string());
    }

    Ok(words)
}

fn parse_json<R: Read>(reader: R) -> Result<Vec<String>, WordListError> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    let serde_json::Value::Array(items) = value else {
        return Err(WordListError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| match item {
            serde_json::Value::String(word) => Ok(word),
            _ => Err(WordListError::NonString { position }),
        })
        .collect()
}
