use std::time::Instant;

use tracing::info;

use gfonts_model::FontRecord;

use crate::encode::{EncodedTable, encode_records};
use crate::error::Result;
use crate::frame::FontTable;
use crate::rename::{RenamedVariants, rename_variant_columns};

/// Encode, rename, and assemble the annotation table for a record batch.
pub fn build_font_table(records: &[FontRecord]) -> Result<FontTable> {
    let start = Instant::now();
    let EncodedTable {
        families,
        variants,
        subsets,
        categories,
    } = encode_records(records);
    let RenamedVariants { columns, unrenamed } = rename_variant_columns(variants);
    let table = FontTable::from_columns(families, columns, subsets, categories, unrenamed)?;
    info!(
        record_count = table.record_count(),
        variant_columns = table.schema.variant_columns.len(),
        subset_columns = table.schema.subset_columns.len(),
        category_columns = table.schema.category_columns.len(),
        unrenamed_variants = table.schema.unrenamed_variants.len(),
        duration_ms = start.elapsed().as_millis(),
        "font table built"
    );
    Ok(table)
}
