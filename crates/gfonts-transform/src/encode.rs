//! Multi-label and one-hot encoding.
//!
//! Distinct values are collected over the whole batch before any row is
//! encoded, so every row shares one schema.

use std::collections::BTreeSet;

use gfonts_model::{CATEGORY_PREFIX, FontRecord, SUBSET_PREFIX};

/// A named 0/1 column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedColumn {
    pub name: String,
    pub values: Vec<i64>,
}

impl EncodedColumn {
    pub fn new(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Set every row flagged in `other` (logical OR).
    pub fn merge(&mut self, other: &EncodedColumn) {
        for (value, flag) in self.values.iter_mut().zip(&other.values) {
            *value = (*value).max(*flag);
        }
    }
}

/// Encoded form of a record batch, before variant renaming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedTable {
    pub families: Vec<String>,
    /// One column per distinct variant code, named by the raw code.
    pub variants: Vec<EncodedColumn>,
    pub subsets: Vec<EncodedColumn>,
    pub categories: Vec<EncodedColumn>,
}

/// Sorted distinct values across every row.
pub fn distinct_values<'a, I>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut values = BTreeSet::new();
    for row in rows {
        for value in row {
            values.insert(value.as_str());
        }
    }
    values.into_iter().map(str::to_string).collect()
}

/// Multi-label binarization: one column per distinct value, 1 where the
/// row's list contains it. Column names are `prefix` + value.
pub fn multi_label_binarize(rows: &[&[String]], prefix: &str) -> Vec<EncodedColumn> {
    let classes = distinct_values(rows.iter().copied());
    classes
        .into_iter()
        .map(|class| {
            let values = rows
                .iter()
                .map(|row| i64::from(row.iter().any(|value| *value == class)))
                .collect();
            EncodedColumn::new(format!("{prefix}{class}"), values)
        })
        .collect()
}

/// One-hot encoding of a scalar field: exactly one 1 per row.
pub fn one_hot(values: &[&str], prefix: &str) -> Vec<EncodedColumn> {
    let classes: BTreeSet<&str> = values.iter().copied().collect();
    classes
        .into_iter()
        .map(|class| {
            let flags = values
                .iter()
                .map(|value| i64::from(*value == class))
                .collect();
            EncodedColumn::new(format!("{prefix}{class}"), flags)
        })
        .collect()
}

/// Encode a batch of records.
///
/// Variant columns are left with their raw codes; see
/// [`crate::rename::rename_variant_columns`].
pub fn encode_records(records: &[FontRecord]) -> EncodedTable {
    let variants: Vec<&[String]> = records.iter().map(|r| r.variants.as_slice()).collect();
    let subsets: Vec<&[String]> = records.iter().map(|r| r.subsets.as_slice()).collect();
    let categories: Vec<&str> = records.iter().map(|r| r.category.as_str()).collect();

    EncodedTable {
        families: records.iter().map(|r| r.family.clone()).collect(),
        variants: multi_label_binarize(&variants, ""),
        subsets: multi_label_binarize(&subsets, SUBSET_PREFIX),
        categories: one_hot(&categories, CATEGORY_PREFIX),
    }
}
