//! Style names for catalog variant codes.
//!
//! The catalog reports styles as CSS weight codes ("100".."900"), optionally
//! suffixed with "italic", plus the legacy aliases "regular" and "italic".
//! The downstream sampler expects human-readable names instead.

use crate::schema::VARIANT_PREFIX;

/// Variant code to style name, in weight order.
pub const VARIANT_STYLE_NAMES: [(&str, &str); 20] = [
    ("100", "thin"),
    ("100italic", "thinitalic"),
    ("200", "extralight"),
    ("200italic", "extralightitalic"),
    ("300", "light"),
    ("300italic", "lightitalic"),
    ("400", "regular"),
    ("regular", "regular"),
    ("400italic", "italic"),
    ("italic", "italic"),
    ("500", "medium"),
    ("500italic", "mediumitalic"),
    ("600", "semibold"),
    ("600italic", "semibolditalic"),
    ("700", "bold"),
    ("700italic", "bolditalic"),
    ("800", "extrabold"),
    ("800italic", "extrabolditalic"),
    ("900", "black"),
    ("900italic", "blackitalic"),
];

/// Look up the style name for a variant code.
///
/// # Examples
///
/// ```
/// use gfonts_model::variant_style_name;
///
/// assert_eq!(variant_style_name("700italic"), Some("bolditalic"));
/// assert_eq!(variant_style_name("regular"), Some("regular"));
/// assert_eq!(variant_style_name("950"), None);
/// ```
pub fn variant_style_name(code: &str) -> Option<&'static str> {
    VARIANT_STYLE_NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Column name for a known variant code (`variants_<style>`).
///
/// Returns `None` for codes outside the table; callers keep the raw code.
pub fn variant_column_name(code: &str) -> Option<String> {
    variant_style_name(code).map(|name| format!("{VARIANT_PREFIX}{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_and_italics() {
        assert_eq!(variant_style_name("100"), Some("thin"));
        assert_eq!(variant_style_name("400italic"), Some("italic"));
        assert_eq!(variant_style_name("900italic"), Some("blackitalic"));
    }

    #[test]
    fn aliases_share_names() {
        assert_eq!(variant_style_name("400"), variant_style_name("regular"));
        assert_eq!(variant_style_name("400italic"), variant_style_name("italic"));
    }

    #[test]
    fn column_names_are_prefixed() {
        assert_eq!(
            variant_column_name("700italic").as_deref(),
            Some("variants_bolditalic")
        );
        assert_eq!(variant_column_name("1000"), None);
        assert_eq!(variant_column_name("Regular"), None);
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = VARIANT_STYLE_NAMES.iter().map(|(code, _)| *code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), VARIANT_STYLE_NAMES.len());
    }
}
