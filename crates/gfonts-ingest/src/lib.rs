//! Font catalog ingestion.
//!
//! Loads the catalog document from a local snapshot or the remote API and
//! normalizes its items into [`gfonts_model::FontRecord`]s.

pub mod error;
pub mod normalize;
pub mod source;

pub use error::{IngestError, Result};
pub use normalize::{KEY_SEPARATOR, flatten_item, normalize_items, strip_whitespace};
pub use source::{
    CatalogSource, DEFAULT_CATALOG_URL, catalog_items, catalog_url, load_catalog, load_items,
    read_snapshot, write_snapshot,
};
