// crates/citysuggest-core/src/catalog.rs
use crate::data::POPULAR_CITIES;
use crate::text::{display_name, fold_key};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static BUILTIN: Lazy<CityCatalog> =
    Lazy::new(|| CityCatalog::from_labels(POPULAR_CITIES.iter().copied()));

/// One catalog label with its precomputed matching keys.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    label: String,
    /// Unicode lowercase form, used for substring/prefix matching.
    lower: String,
    /// Transliterated lowercase form, used for collation and
    /// accent-insensitive matching.
    folded: String,
}

impl CatalogEntry {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            lower: label.to_lowercase(),
            folded: fold_key(label),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }

    pub fn display_name(&self) -> &str {
        display_name(&self.label)
    }
}

/// The fixed, ordered list of known city labels.
///
/// A catalog is immutable once built. Labels are unique by exact string
/// equality; duplicates keep their first position and blank labels are
/// dropped.
#[derive(Clone, Debug, Default)]
pub struct CityCatalog {
    entries: Vec<CatalogEntry>,
}

impl CityCatalog {
    /// The process-wide built-in catalog of popular cities.
    ///
    /// Initialised on first use and shared read-only afterwards.
    pub fn builtin() -> &'static CityCatalog {
        &BUILTIN
    }

    /// Build a catalog from any sequence of labels.
    ///
    /// ```rust
    /// use citysuggest_core::CityCatalog;
    ///
    /// let catalog = CityCatalog::from_labels(["Lima, Perú", "Lima, Perú", " ", "Quito, Ecuador"]);
    /// assert_eq!(catalog.labels().collect::<Vec<_>>(), ["Lima, Perú", "Quito, Ecuador"]);
    /// ```
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let entries = labels
            .into_iter()
            .filter_map(|label| {
                let label = label.as_ref();
                if label.trim().is_empty() || !seen.insert(label.to_string()) {
                    return None;
                }
                Some(CatalogEntry::new(label))
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All labels in catalog order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(CatalogEntry::label)
    }

    /// Display names (label without region suffix) in catalog order.
    pub fn display_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(CatalogEntry::display_name)
    }

    /// Exact-match membership test.
    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|e| e.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_populated_and_unique() {
        let catalog = CityCatalog::builtin();
        assert_eq!(catalog.len(), POPULAR_CITIES.len());
        let unique: HashSet<_> = catalog.labels().collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(CityCatalog::builtin(), CityCatalog::builtin()));
    }

    #[test]
    fn entries_precompute_keys() {
        let catalog = CityCatalog::from_labels(["Bogotá, Colombia"]);
        let entry = &catalog.entries()[0];
        assert_eq!(entry.lower(), "bogotá, colombia");
        assert_eq!(entry.folded(), "bogota, colombia");
        assert_eq!(entry.display_name(), "Bogotá");
    }

    #[test]
    fn display_names_follow_catalog_order() {
        let catalog = CityCatalog::from_labels(["Singapur", "Lagos, Nigeria"]);
        assert_eq!(catalog.display_names().collect::<Vec<_>>(), ["Singapur", "Lagos"]);
        assert!(catalog.contains("Lagos, Nigeria"));
        assert!(!catalog.contains("Lagos"));
    }
}
