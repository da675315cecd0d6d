//! Loading question/answer pairs from disk.
//!
//! A corpus file is a JSON or YAML list. Each row is one of:
//! - a pair: `{question: ..., answer: ...}`
//! - a group of pairs: `[{question: ..., answer: ...}, ...]`
//! - a string holding a JSON-encoded group (rows exported from a spreadsheet)
//!
//! Rows that cannot be decoded are skipped with a warning. A missing (or null)
//! question or answer is kept as an empty string.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::FaqError;

/// One question with its answer, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPair {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRow {
    Pair(RawPair),
    Group(Vec<RawPair>),
    Encoded(String),
}

/// Read the corpus at `path`; the format follows the file extension.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<FaqEntry>, FaqError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| FaqError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let rows: Vec<Value> = match extension.as_str() {
        "json" => serde_json::from_str(&content)?,
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        other => return Err(FaqError::UnsupportedFormat(other.to_string())),
    };

    let entries = parse_rows(rows);
    tracing::debug!(
        path = %path.display(),
        entries = entries.len(),
        "FAQ corpus parsed"
    );
    Ok(entries)
}

/// Flatten decoded rows into entries, skipping undecodable rows.
pub fn parse_rows(rows: Vec<Value>) -> Vec<FaqEntry> {
    let mut entries = Vec::new();
    for (idx, row) in rows.into_iter().enumerate() {
        match decode_row(row) {
            Ok(pairs) => entries.extend(pairs.into_iter().map(into_entry)),
            Err(e) => warn!(row = idx, error = %e, "Skipping undecodable FAQ row"),
        }
    }
    entries
}

fn decode_row(row: Value) -> Result<Vec<RawPair>, serde_json::Error> {
    match serde_json::from_value::<RawRow>(row)? {
        RawRow::Pair(pair) => Ok(vec![pair]),
        RawRow::Group(pairs) => Ok(pairs),
        RawRow::Encoded(text) => match serde_json::from_str::<RawRow>(&text)? {
            RawRow::Pair(pair) => Ok(vec![pair]),
            RawRow::Group(pairs) => Ok(pairs),
            RawRow::Encoded(_) => Err(serde::de::Error::custom("doubly encoded row")),
        },
    }
}

fn into_entry(pair: RawPair) -> FaqEntry {
    let question = pair.question.unwrap_or_default();
    let answer = pair.answer.unwrap_or_default();
    FaqEntry::new(question.trim(), answer.trim())
}
