use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, SerWriter};
use tracing::info;

use gfonts_transform::FontTable;

use crate::error::{OutputError, Result};

/// Extension guaranteed on every written table.
pub const CSV_EXTENSION: &str = ".csv";

/// Append `.csv` unless the path already ends with it.
///
/// The check is a plain suffix test on the path text, so `out.CSV` becomes
/// `out.CSV.csv`.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use gfonts_output::ensure_csv_extension;
///
/// assert_eq!(ensure_csv_extension(Path::new("out")), PathBuf::from("out.csv"));
/// assert_eq!(ensure_csv_extension(Path::new("data/a.csv")), PathBuf::from("data/a.csv"));
/// ```
pub fn ensure_csv_extension(path: &Path) -> PathBuf {
    if path.as_os_str().to_string_lossy().ends_with(CSV_EXTENSION) {
        return path.to_path_buf();
    }
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(CSV_EXTENSION);
    PathBuf::from(raw)
}

/// Write the table as comma-separated text with a header row and no index
/// column. Returns the path actually written.
pub fn write_font_table(table: &FontTable, path: &Path) -> Result<PathBuf> {
    let path = ensure_csv_extension(path);
    let file = File::create(&path).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let mut data = table.data.clone();
    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut data)
        .map_err(|source| OutputError::Csv {
            path: path.clone(),
            source,
        })?;
    writer.flush().map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;
    info!(
        path = %path.display(),
        record_count = table.record_count(),
        column_count = data.width(),
        "font table written"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_missing_extension() {
        assert_eq!(
            ensure_csv_extension(Path::new("out")),
            PathBuf::from("out.csv")
        );
        assert_eq!(
            ensure_csv_extension(Path::new("dir/annotations.txt")),
            PathBuf::from("dir/annotations.txt.csv")
        );
    }

    #[test]
    fn keeps_existing_extension() {
        assert_eq!(
            ensure_csv_extension(Path::new("data/google-fonts-annotation.csv")),
            PathBuf::from("data/google-fonts-annotation.csv")
        );
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        assert_eq!(
            ensure_csv_extension(Path::new("out.CSV")),
            PathBuf::from("out.CSV.csv")
        );
    }
}
