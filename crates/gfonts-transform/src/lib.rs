//! Encoding of font records into the annotation table.
//!
//! - [`encode`]: multi-label binarization of variants and subsets, one-hot
//!   encoding of the category
//! - [`rename`]: variant codes to `variants_<style>` column names
//! - [`frame`]: the DataFrame-backed [`FontTable`]

pub mod encode;
pub mod error;
pub mod frame;
pub mod pipeline;
pub mod rename;

pub use encode::{
    EncodedColumn, EncodedTable, distinct_values, encode_records, multi_label_binarize, one_hot,
};
pub use error::{Result, TransformError};
pub use frame::FontTable;
pub use pipeline::build_font_table;
pub use rename::{RenamedVariants, rename_variant_columns};
