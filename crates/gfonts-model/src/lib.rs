//! Data model for the font catalog annotation pipeline.
//!
//! This crate holds the types shared by the ingest, transform, and output
//! crates: the normalized [`FontRecord`], the [`TableSchema`] describing the
//! encoded column groups, and the fixed variant style-name table.

pub mod record;
pub mod schema;
pub mod variants;

pub use record::FontRecord;
pub use schema::{
    CATEGORY_PREFIX, ColumnGroup, FAMILY_COLUMN, SUBSET_PREFIX, TableSchema, VARIANT_PREFIX,
};
pub use variants::{VARIANT_STYLE_NAMES, variant_column_name, variant_style_name};
