//! Column naming for the annotation table.

use serde::{Deserialize, Serialize};

/// Name of the family column, always first in the table.
pub const FAMILY_COLUMN: &str = "family";

/// Prefix applied to renamed variant columns.
pub const VARIANT_PREFIX: &str = "variants_";

/// Prefix applied to every subset column.
pub const SUBSET_PREFIX: &str = "subsets_";

/// Prefix applied to every category column.
pub const CATEGORY_PREFIX: &str = "category_";

/// The encoded column groups, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnGroup {
    Variant,
    Subset,
    Category,
}

impl ColumnGroup {
    pub const ALL: [Self; 3] = [Self::Variant, Self::Subset, Self::Category];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Variant => "Variants",
            Self::Subset => "Subsets",
            Self::Category => "Categories",
        }
    }
}

/// Column layout of an encoded font table.
///
/// The table itself is ordered `family`, variant columns, subset columns,
/// category columns; each group is sorted by the raw value it encodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub variant_columns: Vec<String>,
    pub subset_columns: Vec<String>,
    pub category_columns: Vec<String>,
    /// Variant codes with no style name; their columns keep the raw code.
    pub unrenamed_variants: Vec<String>,
}

impl TableSchema {
    /// Columns of one group, in table order.
    pub fn columns(&self, group: ColumnGroup) -> &[String] {
        match group {
            ColumnGroup::Variant => &self.variant_columns,
            ColumnGroup::Subset => &self.subset_columns,
            ColumnGroup::Category => &self.category_columns,
        }
    }

    /// Every column name in table order, starting with `family`.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.width());
        names.push(FAMILY_COLUMN.to_string());
        for group in ColumnGroup::ALL {
            names.extend(self.columns(group).iter().cloned());
        }
        names
    }

    pub fn width(&self) -> usize {
        1 + ColumnGroup::ALL
            .into_iter()
            .map(|group| self.columns(group).len())
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> TableSchema {
        TableSchema {
            variant_columns: vec!["variants_bold".to_string(), "1000".to_string()],
            subset_columns: vec!["subsets_latin".to_string()],
            category_columns: vec!["category_serif".to_string()],
            unrenamed_variants: vec!["1000".to_string()],
        }
    }

    #[test]
    fn column_names_follow_group_order() {
        assert_eq!(
            schema().column_names(),
            vec![
                "family",
                "variants_bold",
                "1000",
                "subsets_latin",
                "category_serif"
            ]
        );
        assert_eq!(schema().width(), 5);
    }
}
