//! The annotation table.
//!
//! [`FontTable`] wraps a Polars DataFrame holding one row per font family
//! together with the [`TableSchema`] that says which encoded group each
//! column belongs to.

use polars::prelude::{ChunkAgg, Column, DataFrame, NamedFrom, Series};

use gfonts_model::{FAMILY_COLUMN, TableSchema};

use crate::encode::EncodedColumn;
use crate::error::{Result, TransformError};

/// One row per font family: `family`, then 0/1 variant, subset, and category
/// columns.
#[derive(Debug, Clone)]
pub struct FontTable {
    /// The table contents.
    pub data: DataFrame,
    /// Column groups and unrenamed variant codes.
    pub schema: TableSchema,
}

impl FontTable {
    /// Assemble the DataFrame from the family names and encoded groups.
    ///
    /// Fails if two columns end up with the same name.
    pub fn from_columns(
        families: Vec<String>,
        variants: Vec<EncodedColumn>,
        subsets: Vec<EncodedColumn>,
        categories: Vec<EncodedColumn>,
        unrenamed_variants: Vec<String>,
    ) -> Result<Self> {
        let schema = TableSchema {
            variant_columns: names(&variants),
            subset_columns: names(&subsets),
            category_columns: names(&categories),
            unrenamed_variants,
        };

        let mut columns: Vec<Column> = Vec::with_capacity(schema.width());
        columns.push(Series::new(FAMILY_COLUMN.into(), families).into());
        for encoded in variants.into_iter().chain(subsets).chain(categories) {
            columns.push(Series::new(encoded.name.as_str().into(), encoded.values).into());
        }
        let data = DataFrame::new(columns)?;
        Ok(Self { data, schema })
    }

    /// Returns the number of font families in the table.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str().to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.data.column(name).is_ok()
    }

    /// Family names in row order.
    pub fn families(&self) -> Result<Vec<String>> {
        let column = self.column(FAMILY_COLUMN)?;
        let values = column.as_materialized_series().str()?;
        Ok(values
            .into_iter()
            .map(|value| value.unwrap_or_default().to_string())
            .collect())
    }

    /// Flag value of an encoded column at `row`.
    pub fn flag(&self, row: usize, name: &str) -> Result<i64> {
        let column = self.column(name)?;
        let values = column.as_materialized_series().i64()?;
        values.get(row).ok_or(TransformError::RowOutOfRange {
            row,
            rows: self.record_count(),
        })
    }

    /// Number of rows flagged in an encoded column.
    pub fn column_total(&self, name: &str) -> Result<i64> {
        let column = self.column(name)?;
        let values = column.as_materialized_series().i64()?;
        Ok(values.sum().unwrap_or_default())
    }

    fn column(&self, name: &str) -> Result<&Column> {
        self.data
            .column(name)
            .map_err(|_| TransformError::MissingColumn {
                name: name.to_string(),
            })
    }
}

fn names(columns: &[EncodedColumn]) -> Vec<String> {
    columns.iter().map(|column| column.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FontTable {
        FontTable::from_columns(
            vec!["Lato".to_string(), "Lora".to_string()],
            vec![EncodedColumn::new("variants_regular", vec![1, 1])],
            vec![EncodedColumn::new("subsets_latin", vec![1, 0])],
            vec![
                EncodedColumn::new("category_sans-serif", vec![1, 0]),
                EncodedColumn::new("category_serif", vec![0, 1]),
            ],
            Vec::new(),
        )
        .expect("build table")
    }

    #[test]
    fn builds_columns_in_group_order() {
        let table = table();
        assert_eq!(table.record_count(), 2);
        assert_eq!(table.column_names(), table.schema.column_names());
        assert_eq!(table.families().unwrap(), vec!["Lato", "Lora"]);
    }

    #[test]
    fn reads_flags_and_totals() {
        let table = table();
        assert_eq!(table.flag(1, "category_serif").unwrap(), 1);
        assert_eq!(table.flag(1, "subsets_latin").unwrap(), 0);
        assert_eq!(table.column_total("variants_regular").unwrap(), 2);
        assert!(matches!(
            table.column_total("subsets_greek"),
            Err(TransformError::MissingColumn { .. })
        ));
    }

    #[test]
    fn flag_past_last_row_is_an_error() {
        let table = table();
        assert!(matches!(
            table.flag(2, "variants_regular"),
            Err(TransformError::RowOutOfRange { row: 2, rows: 2 })
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = FontTable::from_columns(
            vec!["Lato".to_string()],
            vec![EncodedColumn::new("family", vec![1])],
            Vec::new(),
            Vec::new(),
            vec!["family".to_string()],
        );
        assert!(matches!(result, Err(TransformError::Polars(_))));
    }

    #[test]
    fn empty_batch_keeps_family_column() {
        let table =
            FontTable::from_columns(Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new())
                .expect("build table");
        assert_eq!(table.record_count(), 0);
        assert_eq!(table.column_names(), vec!["family"]);
        assert!(table.has_column("family"));
    }
}
