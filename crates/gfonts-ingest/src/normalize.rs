//! Flatten catalog items and select the annotation fields.

use serde_json::{Map, Value};
use tracing::debug;

use gfonts_model::FontRecord;

use crate::error::{IngestError, Result};

/// Separator used for flattened nested keys (`files.regular`).
pub const KEY_SEPARATOR: char = '.';

/// Flatten nested objects of a catalog item into dotted top-level keys.
///
/// Arrays are kept as values. Returns `None` when `item` is not an object.
pub fn flatten_item(item: &Value) -> Option<Map<String, Value>> {
    let object = item.as_object()?;
    let mut flat = Map::new();
    flatten_into(None, object, &mut flat);
    Some(flat)
}

fn flatten_into(prefix: Option<&str>, object: &Map<String, Value>, out: &mut Map<String, Value>) {
    for (key, value) in object {
        let name = match prefix {
            Some(prefix) => format!("{prefix}{KEY_SEPARATOR}{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(nested) if !nested.is_empty() => {
                flatten_into(Some(&name), nested, out);
            }
            other => {
                out.insert(name, other.clone());
            }
        }
    }
}

/// Remove every whitespace character from a family name.
///
/// # Examples
///
/// ```
/// use gfonts_ingest::strip_whitespace;
///
/// assert_eq!(strip_whitespace("Open Sans"), "OpenSans");
/// assert_eq!(strip_whitespace(" Noto\tSans  JP "), "NotoSansJP");
/// ```
pub fn strip_whitespace(name: &str) -> String {
    name.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Normalize raw catalog items into [`FontRecord`]s.
///
/// Every item must carry `family`, `variants`, `subsets`, and `category`;
/// the first offending item aborts the whole batch.
pub fn normalize_items(items: &[Value]) -> Result<Vec<FontRecord>> {
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let flat = flatten_item(item).ok_or(IngestError::NotAnObject { index })?;
        records.push(select_fields(&flat, index)?);
    }
    debug!(record_count = records.len(), "catalog items normalized");
    Ok(records)
}

fn select_fields(flat: &Map<String, Value>, index: usize) -> Result<FontRecord> {
    let family = string_field(flat, index, "family")?;
    let variants = string_list_field(flat, index, "variants")?;
    let subsets = string_list_field(flat, index, "subsets")?;
    let category = string_field(flat, index, "category")?;
    Ok(FontRecord {
        family: strip_whitespace(&family),
        variants,
        subsets,
        category,
    })
}

fn field<'a>(flat: &'a Map<String, Value>, index: usize, field: &'static str) -> Result<&'a Value> {
    flat.get(field)
        .ok_or(IngestError::MissingField { index, field })
}

fn string_field(flat: &Map<String, Value>, index: usize, name: &'static str) -> Result<String> {
    field(flat, index, name)?
        .as_str()
        .map(str::to_string)
        .ok_or(IngestError::InvalidField {
            index,
            field: name,
            expected: "a string",
        })
}

fn string_list_field(
    flat: &Map<String, Value>,
    index: usize,
    name: &'static str,
) -> Result<Vec<String>> {
    let invalid = IngestError::InvalidField {
        index,
        field: name,
        expected: "an array of strings",
    };
    let Some(values) = field(flat, index, name)?.as_array() else {
        return Err(invalid);
    };
    let mut list = Vec::with_capacity(values.len());
    for value in values {
        match value.as_str() {
            Some(text) => list.push(text.to_string()),
            None => return Err(invalid),
        }
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_objects() {
        let item = json!({
            "family": "Roboto",
            "files": { "regular": "http://x/r.ttf", "700": "http://x/b.ttf" },
            "axes": [{ "tag": "wght" }],
            "meta": { "a": { "b": 1 } },
        });
        let flat = flatten_item(&item).unwrap();
        assert_eq!(flat["files.regular"], "http://x/r.ttf");
        assert_eq!(flat["files.700"], "http://x/b.ttf");
        assert_eq!(flat["meta.a.b"], 1);
        assert!(flat["axes"].is_array());
        assert!(!flat.contains_key("files"));
    }

    #[test]
    fn flatten_rejects_non_objects() {
        assert!(flatten_item(&json!("Roboto")).is_none());
        assert!(flatten_item(&json!([1])).is_none());
    }

    #[test]
    fn normalizes_record() {
        let items = vec![json!({
            "kind": "webfonts#webfont",
            "family": "Open Sans",
            "variants": ["regular", "700"],
            "subsets": ["latin"],
            "category": "sans-serif",
            "version": "v40",
        })];
        let records = normalize_items(&items).unwrap();
        assert_eq!(
            records,
            vec![FontRecord::new(
                "OpenSans",
                ["regular", "700"],
                ["latin"],
                "sans-serif"
            )]
        );
    }

    #[test]
    fn missing_field_names_item() {
        let items = vec![
            json!({ "family": "A", "variants": [], "subsets": [], "category": "serif" }),
            json!({ "family": "B", "variants": [], "category": "serif" }),
        ];
        let error = normalize_items(&items).unwrap_err();
        assert!(matches!(
            error,
            IngestError::MissingField {
                index: 1,
                field: "subsets"
            }
        ));
    }

    #[test]
    fn wrong_types_are_rejected() {
        let items = vec![json!({
            "family": "A",
            "variants": "regular",
            "subsets": [],
            "category": "serif",
        })];
        assert!(matches!(
            normalize_items(&items),
            Err(IngestError::InvalidField {
                field: "variants",
                ..
            })
        ));

        let items = vec![json!({
            "family": "A",
            "variants": [],
            "subsets": ["latin", 3],
            "category": "serif",
        })];
        assert!(matches!(
            normalize_items(&items),
            Err(IngestError::InvalidField {
                field: "subsets",
                ..
            })
        ));

        let items = vec![json!({
            "family": 7,
            "variants": [],
            "subsets": [],
            "category": "serif",
        })];
        assert!(matches!(
            normalize_items(&items),
            Err(IngestError::InvalidField {
                field: "family",
                ..
            })
        ));
    }

    #[test]
    fn non_object_item_fails() {
        let items = vec![json!("Roboto")];
        assert!(matches!(
            normalize_items(&items),
            Err(IngestError::NotAnObject { index: 0 })
        ));
    }
}
