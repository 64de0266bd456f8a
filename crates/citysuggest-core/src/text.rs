// crates/citysuggest-core/src/text.rs

/// Separator between a city name and its region/country suffix.
pub const LABEL_SEPARATOR: &str = ", ";

/// Convert a string into a folded key suitable for collation and
/// accent-insensitive comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Bogotá` -> `Bogota`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use citysuggest_core::text::fold_key;
///
/// assert_eq!(fold_key("Bogotá"), "bogota");
/// assert_eq!(fold_key("Łódź"), "lodz");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Lowercased, trimmed form of a raw query as used for matching.
///
/// Returns `None` for blank input.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// The part of a label shown to the user after a selection: everything
/// before the first `", "`.
///
/// ```rust
/// use citysuggest_core::text::display_name;
///
/// assert_eq!(display_name("Madrid, España"), "Madrid");
/// assert_eq!(display_name("Singapur"), "Singapur");
/// ```
pub fn display_name(label: &str) -> &str {
    label
        .split_once(LABEL_SEPARATOR)
        .map_or(label, |(name, _)| name)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_keeps_multi_word_names() {
        assert_eq!(display_name("Ciudad de México, México"), "Ciudad de México");
        assert_eq!(display_name("Ho Chi Minh, Vietnam"), "Ho Chi Minh");
    }

    #[test]
    fn display_name_only_splits_on_first_separator() {
        assert_eq!(display_name("Springfield, Illinois, USA"), "Springfield");
    }

    #[test]
    fn display_name_of_free_text() {
        assert_eq!(display_name("Atlantis"), "Atlantis");
        assert_eq!(display_name("  Atlantis  "), "Atlantis");
    }

    #[test]
    fn normalize_query_blank_is_none() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   \t"), None);
        assert_eq!(normalize_query("  MaD "), Some("mad".to_string()));
    }

    #[test]
    fn fold_key_strips_accents_and_case() {
        assert_eq!(fold_key("Seúl, Corea del Sur"), "seul, corea del sur");
        assert_eq!(fold_key("MÁLAGA"), "malaga");
    }
}
