use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("dataframe error: {0}")]
    Polars(#[from] PolarsError),
    #[error("column `{name}` is not in the font table")]
    MissingColumn { name: String },
    #[error("row {row} is out of range for a table of {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },
}

pub type Result<T> = std::result::Result<T, TransformError>;
