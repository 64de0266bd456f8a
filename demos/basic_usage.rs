//! Basic usage example for citysuggest-rs
//!
//! Ranks catalog cities for a few queries and shows why each one matched.

use citysuggest_core::prelude::*;

fn main() {
    println!("=== citysuggest: Basic Usage ===\n");

    let index = SuggestionIndex::builtin();
    println!("Catalog size: {}\n", index.catalog().len());

    for query in ["mad", "san", "ma", "   ", "atlantis"] {
        println!("--- search({query:?}) ---");
        let ranked = index.rank(query);
        if ranked.is_empty() {
            println!("  (no suggestions)");
        }
        for hit in ranked.iter().take(DEFAULT_LIMIT) {
            println!("  {:<32} {:?}", hit.label, hit.kind);
        }
        println!();
    }

    println!("--- accent-insensitive search(\"bogota\") ---");
    for label in index.with_fold_accents(true).search_default("bogota") {
        println!("  {label} -> {}", display_name(&label));
    }
}
