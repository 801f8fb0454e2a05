use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading and normalizing the font catalog.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Neither a snapshot path nor an API key was supplied.
    #[error("precondition failed: either a local data path or an API key is required")]
    MissingSource,

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON from {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog endpoint {url}: {message}")]
    InvalidEndpoint { url: String, message: String },

    /// Transport failure; the request URL is stripped so the API key stays out
    /// of the message.
    #[error("catalog request failed")]
    Network(#[source] reqwest::Error),

    #[error("catalog request returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("catalog document from {origin} has no `items` array")]
    MissingItems { origin: String },

    #[error("catalog item {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("catalog item {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("catalog item {index} field `{field}` must be {expected}")]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            origin: origin.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for IngestError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.without_url())
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
