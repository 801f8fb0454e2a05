//! CSV output for the font annotation table.

mod csv;
mod error;

pub use crate::csv::{CSV_EXTENSION, ensure_csv_extension, write_font_table};
pub use crate::error::{OutputError, Result};
