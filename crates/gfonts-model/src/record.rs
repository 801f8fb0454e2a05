use serde::{Deserialize, Serialize};

/// One font family from the catalog, reduced to the fields the annotation
/// table is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRecord {
    /// Family name with whitespace removed (e.g. "OpenSans").
    pub family: String,
    /// Style identifiers such as "regular", "700", "700italic".
    pub variants: Vec<String>,
    /// Character-set identifiers such as "latin", "cyrillic".
    pub subsets: Vec<String>,
    /// Catalog category such as "serif" or "sans-serif".
    pub category: String,
}

impl FontRecord {
    pub fn new<V, S>(
        family: impl Into<String>,
        variants: V,
        subsets: S,
        category: impl Into<String>,
    ) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            family: family.into(),
            variants: variants.into_iter().map(Into::into).collect(),
            subsets: subsets.into_iter().map(Into::into).collect(),
            category: category.into(),
        }
    }
}
