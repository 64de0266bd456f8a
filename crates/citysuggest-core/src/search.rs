// crates/citysuggest-core/src/search.rs
use crate::catalog::{CatalogEntry, CityCatalog};
use crate::config::DEFAULT_LIMIT;
use crate::text::{fold_key, normalize_query};
use tracing::debug;

/// Why a catalog entry matched a query.
///
/// Ordered so that prefix matches sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    /// The label starts with the query.
    Prefix,
    /// The query occurs somewhere after the start of the label.
    Contains,
}

/// A ranked match with the reason it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'c> {
    pub label: &'c str,
    pub kind: MatchKind,
}

/// Answers ranked substring queries against a [`CityCatalog`].
///
/// The index only borrows the catalog, so one catalog can serve any number
/// of sessions. Results are a pure function of the catalog, the query and
/// the limit.
///
/// Ordering: prefix matches first, then plain substring matches; inside
/// each group labels are collated by their folded form (diacritics
/// transliterated, lowercase), falling back to the raw label.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionIndex<'c> {
    catalog: &'c CityCatalog,
    fold_accents: bool,
}

impl<'c> SuggestionIndex<'c> {
    pub fn new(catalog: &'c CityCatalog) -> Self {
        Self {
            catalog,
            fold_accents: false,
        }
    }

    /// Index over the built-in catalog.
    pub fn builtin() -> SuggestionIndex<'static> {
        SuggestionIndex::new(CityCatalog::builtin())
    }

    /// Match ignoring diacritics as well as case.
    pub fn with_fold_accents(mut self, enabled: bool) -> Self {
        self.fold_accents = enabled;
        self
    }

    pub fn catalog(&self) -> &'c CityCatalog {
        self.catalog
    }

    /// Up to `limit` labels matching `query`, best first.
    ///
    /// Blank queries yield no suggestions.
    ///
    /// ```rust
    /// use citysuggest_core::SuggestionIndex;
    ///
    /// let index = SuggestionIndex::builtin();
    /// assert_eq!(index.search("mad", 8)[0], "Madrid, España");
    /// assert!(index.search("   ", 8).is_empty());
    /// ```
    pub fn search(&self, query: &str, limit: usize) -> Vec<String> {
        self.rank(query)
            .into_iter()
            .take(limit)
            .map(|r| r.label.to_string())
            .collect()
    }

    /// [`search`](Self::search) with [`DEFAULT_LIMIT`].
    pub fn search_default(&self, query: &str) -> Vec<String> {
        self.search(query, DEFAULT_LIMIT)
    }

    /// Every matching entry in rank order, tagged with its [`MatchKind`].
    pub fn rank(&self, query: &str) -> Vec<Ranked<'c>> {
        let Some(lower) = normalize_query(query) else {
            return Vec::new();
        };
        let needle = if self.fold_accents {
            fold_key(&lower)
        } else {
            lower
        };

        let mut hits: Vec<(&'c CatalogEntry, MatchKind)> = self
            .catalog
            .entries()
            .iter()
            .filter_map(|entry| {
                let hay = if self.fold_accents {
                    entry.folded()
                } else {
                    entry.lower()
                };
                if hay.starts_with(&needle) {
                    Some((entry, MatchKind::Prefix))
                } else if hay.contains(&needle) {
                    Some((entry, MatchKind::Contains))
                } else {
                    None
                }
            })
            .collect();

        hits.sort_by(|(a, ak), (b, bk)| {
            ak.cmp(bk)
                .then_with(|| a.folded().cmp(b.folded()))
                .then_with(|| a.label().cmp(b.label()))
        });

        debug!(query = %needle, matches = hits.len(), "ranked catalog");

        hits.into_iter()
            .map(|(entry, kind)| Ranked {
                label: entry.label(),
                kind,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SuggestionIndex<'static> {
        SuggestionIndex::builtin()
    }

    #[test]
    fn blank_query_has_no_suggestions() {
        for limit in [1, 8, 100] {
            assert!(index().search("", limit).is_empty());
            assert!(index().search("   ", limit).is_empty());
        }
    }

    #[test]
    fn matches_are_case_insensitive_substrings() {
        for query in ["ma", "SAN", "ia", "o", "Lu"] {
            let needle = query.to_lowercase();
            for label in index().search(query, 100) {
                assert!(
                    label.to_lowercase().contains(&needle),
                    "{label} does not contain {query}"
                );
            }
        }
    }

    #[test]
    fn respects_limit() {
        for limit in 0..10 {
            assert!(index().search("a", limit).len() <= limit);
        }
        assert_eq!(index().search("a", 3).len(), 3);
    }

    #[test]
    fn fewer_matches_than_limit_is_fine() {
        assert_eq!(index().search("lisboa", 8), vec!["Lisboa, Portugal"]);
        assert!(index().search("atlantis", 8).is_empty());
    }

    #[test]
    fn prefix_matches_rank_before_contains() {
        let ranked = index().rank("ma");
        let first_contains = ranked
            .iter()
            .position(|r| r.kind == MatchKind::Contains)
            .unwrap();
        assert!(ranked[..first_contains]
            .iter()
            .all(|r| r.kind == MatchKind::Prefix));
        assert!(ranked[first_contains..]
            .iter()
            .all(|r| r.kind == MatchKind::Contains));

        let top = index().search("ma", 8);
        assert_eq!(
            &top[..3],
            ["Madrid, España", "Managua, Nicaragua", "Manila, Filipinas"]
        );
        assert_eq!(top.len(), 8);
    }

    #[test]
    fn prefix_tie_break_is_accent_aware() {
        // Byte order would put "Sevilla" before "Seúl".
        let top = index().search("se", 8);
        assert_eq!(&top[..2], ["Seúl, Corea del Sur", "Sevilla, España"]);
    }

    #[test]
    fn accent_folding_is_opt_in() {
        assert!(index().search("malaga", 8).is_empty());
        let folded = index().with_fold_accents(true);
        assert_eq!(folded.search("malaga", 8), vec!["Málaga, España"]);
        assert_eq!(folded.search("MÁLAGA", 8), vec!["Málaga, España"]);
    }

    #[test]
    fn search_is_deterministic() {
        assert_eq!(index().search("an", 8), index().search("an", 8));
        assert_eq!(index().search_default("an").len(), DEFAULT_LIMIT);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        assert_eq!(index().search("  mad  ", 8), index().search("mad", 8));
    }

    #[test]
    fn works_over_custom_catalog() {
        let catalog = CityCatalog::from_labels(["Alamo, Texas", "Lamoni, Iowa", "Zalamea"]);
        let index = SuggestionIndex::new(&catalog);
        assert_eq!(
            index.search("lam", 8),
            ["Lamoni, Iowa", "Alamo, Texas", "Zalamea"]
        );
    }
}
