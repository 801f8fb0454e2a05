use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize table to {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
