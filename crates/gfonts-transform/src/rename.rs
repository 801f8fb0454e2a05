//! Variant column renaming.

use tracing::warn;

use gfonts_model::variant_column_name;

use crate::encode::EncodedColumn;

/// Variant columns after renaming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamedVariants {
    pub columns: Vec<EncodedColumn>,
    /// Codes without a style name; their columns keep the raw code.
    pub unrenamed: Vec<String>,
}

/// Rename raw variant-code columns to `variants_<style>`.
///
/// Codes missing from the style table keep their raw, unprefixed name and
/// are listed in [`RenamedVariants::unrenamed`]. Codes that share a style
/// name ("400" and "regular") are merged into the first column carrying it.
pub fn rename_variant_columns(columns: Vec<EncodedColumn>) -> RenamedVariants {
    let mut renamed = RenamedVariants::default();
    for mut column in columns {
        match variant_column_name(&column.name) {
            Some(name) => column.name = name,
            None => {
                warn!(variant = %column.name, "variant code has no style name, keeping raw column name");
                renamed.unrenamed.push(column.name.clone());
            }
        }
        if let Some(existing) = renamed.columns.iter_mut().find(|c| c.name == column.name) {
            existing.merge(&column);
        } else {
            renamed.columns.push(column);
        }
    }
    renamed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_are_renamed() {
        let renamed = rename_variant_columns(vec![
            EncodedColumn::new("700", vec![1]),
            EncodedColumn::new("700italic", vec![1]),
            EncodedColumn::new("regular", vec![1]),
        ]);
        let names: Vec<&str> = renamed.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["variants_bold", "variants_bolditalic", "variants_regular"]
        );
        assert!(renamed.unrenamed.is_empty());
    }

    #[test]
    fn unknown_codes_keep_raw_name() {
        let renamed = rename_variant_columns(vec![
            EncodedColumn::new("1000", vec![1, 0]),
            EncodedColumn::new("900", vec![0, 1]),
        ]);
        let names: Vec<&str> = renamed.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["1000", "variants_black"]);
        assert_eq!(renamed.unrenamed, vec!["1000"]);
    }

    #[test]
    fn aliases_merge_into_one_column() {
        let renamed = rename_variant_columns(vec![
            EncodedColumn::new("400", vec![1, 0, 0]),
            EncodedColumn::new("700", vec![0, 0, 1]),
            EncodedColumn::new("regular", vec![0, 1, 0]),
        ]);
        assert_eq!(
            renamed.columns,
            vec![
                EncodedColumn::new("variants_regular", vec![1, 1, 0]),
                EncodedColumn::new("variants_bold", vec![0, 0, 1]),
            ]
        );
    }
}
