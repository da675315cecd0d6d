//! Error types for the widget and the answer service.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single `/ask` round trip.
///
/// The widget never shows these to the user: every variant collapses into the
/// same fallback message. They exist so failures can be traced.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The response body was not JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response body was the JSON literal `null`.
    #[error("response body was null")]
    NullBody,
}

/// Failure while loading or indexing the FAQ corpus.
#[derive(Error, Debug)]
pub enum FaqError {
    /// The corpus file could not be read.
    #[error("failed to read FAQ corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus file is not a JSON list.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The corpus file is not a YAML list.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is neither JSON nor YAML.
    #[error("unsupported FAQ corpus format: {0}")]
    UnsupportedFormat(String),

    /// No question in the corpus produced a single indexable term.
    #[error("empty vocabulary; the FAQ corpus contains no indexable questions")]
    EmptyVocabulary,
}
