//! Recent selections example for citysuggest-rs
//!
//! Drives a search session the way a UI would and persists the recent
//! list to a directory given on the command line (default: a temp dir).

use citysuggest_core::prelude::*;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("=== citysuggest: Recent Selections ===\n");

    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("citysuggest-demo"));
    println!("Store directory: {}\n", dir.display());

    let mut session = SearchSession::builtin(FileStore::new(&dir));
    session.set_on_select(|city| println!("  -> weather lookup for {city}"));

    println!("Remembered from last run: {:?}\n", session.recent().as_slice());

    session.on_query_change("lis");
    println!("Typed \"lis\": {:?}", session.suggestions());
    session.on_navigate(Direction::Down);
    session.on_commit(CommitSource::Highlighted);

    session.on_query_change("Atlantis");
    println!("Typed \"Atlantis\": {:?}", session.panel());
    session.on_commit(CommitSource::Enter);

    session.on_commit(CommitSource::Explicit("Tokio, Japón".to_string()));

    session.on_focus();
    if let Panel::Recent(items) = session.panel() {
        println!("\nRecent selections:");
        for label in items {
            println!("  {label}");
        }
    }

    let reopened = SearchSession::builtin(FileStore::new(&dir));
    println!("\nAfter reopening: {:?}", reopened.recent().as_slice());
    Ok(())
}
