//! Annotation pipeline with explicit stages.
//!
//! 1. **Load**: read the catalog snapshot or fetch it from the API
//! 2. **Normalize**: flatten items and select the annotation fields
//! 3. **Encode**: binarize variants and subsets, one-hot the category,
//!    rename variant columns
//! 4. **Write**: serialize the table to CSV
//!
//! [`create_font_annotations`] runs all stages and returns the table.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use gfonts_ingest::{
    CatalogSource, catalog_items, load_catalog, normalize_items, write_snapshot,
};
use gfonts_model::FontRecord;
use gfonts_output::write_font_table;
use gfonts_transform::{FontTable, build_font_table};

/// Default location of the downloaded catalog snapshot.
pub const DEFAULT_DATA_PATH: &str = "data/webfonts.json";

/// Default location of the annotation table.
pub const DEFAULT_SAVE_PATH: &str = "data/google-fonts-annotation.csv";

/// Inputs for one annotation run.
#[derive(Debug, Clone)]
pub struct AnnotationRequest {
    /// Local catalog snapshot; takes precedence over `api_key`.
    pub data_path: Option<PathBuf>,
    /// API key for the remote catalog.
    pub api_key: Option<String>,
    /// Catalog endpoint override.
    pub endpoint: Option<String>,
    /// Output path; `.csv` is appended when missing.
    pub save_path: PathBuf,
    /// Where to store a fetched catalog document.
    pub snapshot_path: Option<PathBuf>,
}

impl Default for AnnotationRequest {
    fn default() -> Self {
        Self {
            data_path: Some(PathBuf::from(DEFAULT_DATA_PATH)),
            api_key: None,
            endpoint: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            snapshot_path: None,
        }
    }
}

impl AnnotationRequest {
    /// Request that reads a local snapshot.
    pub fn from_snapshot(data_path: impl Into<PathBuf>, save_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: Some(data_path.into()),
            save_path: save_path.into(),
            ..Self::default()
        }
    }

    /// Request that fetches the remote catalog.
    pub fn from_api_key(api_key: impl Into<String>, save_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: None,
            api_key: Some(api_key.into()),
            save_path: save_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    #[must_use]
    pub fn with_snapshot_path(mut self, path: Option<PathBuf>) -> Self {
        self.snapshot_path = path;
        self
    }
}

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct AnnotationResult {
    /// Description of where the catalog came from (path or endpoint).
    pub source: String,
    /// Path the table was written to.
    pub output_path: PathBuf,
    /// The table as written.
    pub table: FontTable,
}

// ============================================================================
// Stage 1-2: Load and normalize
// ============================================================================

/// Records loaded from the catalog.
#[derive(Debug)]
pub struct LoadResult {
    pub source: CatalogSource,
    pub records: Vec<FontRecord>,
}

/// Load the catalog and normalize its items.
///
/// A fetched document is written to `snapshot_path` before normalization.
pub fn load(request: &AnnotationRequest) -> Result<LoadResult> {
    let source = CatalogSource::resolve(
        request.data_path.as_deref(),
        request.api_key.as_deref(),
        request.endpoint.as_deref(),
    )?;
    debug!(source = %source, remote = source.is_remote(), "catalog source selected");

    let document = load_catalog(&source).with_context(|| format!("load catalog from {source}"))?;
    if source.is_remote()
        && let Some(path) = request.snapshot_path.as_deref()
    {
        write_snapshot(path, &document).context("save catalog snapshot")?;
    }
    let items = catalog_items(document, &source.to_string())?;
    let records = normalize_items(&items).context("normalize catalog items")?;
    Ok(LoadResult { source, records })
}

// ============================================================================
// Stage 3-4: Encode and write
// ============================================================================

/// Build the table and write it to `save_path`.
pub fn encode_and_write(records: &[FontRecord], save_path: &Path) -> Result<(FontTable, PathBuf)> {
    let table = build_font_table(records).context("build font table")?;
    let output_path = write_font_table(&table, save_path)
        .with_context(|| format!("write {}", save_path.display()))?;
    Ok((table, output_path))
}

/// Build the font annotation table and save it as CSV.
///
/// Reads the catalog from `data_path` when set, otherwise fetches it with
/// `api_key`. Returns the table alongside the path written.
///
/// # Errors
///
/// Fails with [`gfonts_ingest::IngestError::MissingSource`] when neither a
/// data path nor an API key is given; no file is written in that case.
pub fn create_font_annotations(request: &AnnotationRequest) -> Result<AnnotationResult> {
    let span = info_span!("annotate", save_path = %request.save_path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let LoadResult { source, records } = load(request)?;
    info!(source = %source, record_count = records.len(), "catalog loaded");

    let (table, output_path) = encode_and_write(&records, &request.save_path)?;
    info!(
        output = %output_path.display(),
        record_count = table.record_count(),
        column_count = table.schema.width(),
        duration_ms = start.elapsed().as_millis(),
        "annotation complete"
    );

    Ok(AnnotationResult {
        source: source.to_string(),
        output_path,
        table,
    })
}
