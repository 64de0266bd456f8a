// crates/citysuggest-core/src/lib.rs

//! # citysuggest-core
//!
//! City autocomplete for the weather journal: a ranked suggestion index
//! over a fixed catalog of city labels, and an interactive search session
//! that remembers the last few selections.
//!
//! ```rust
//! use citysuggest_core::prelude::*;
//!
//! let mut session = SearchSession::builtin(MemoryStore::new());
//! session.on_query_change("mad");
//! assert_eq!(session.suggestions()[0], "Madrid, España");
//!
//! session.on_navigate(Direction::Down);
//! let picked = session.on_commit(CommitSource::Highlighted).unwrap();
//! assert_eq!(picked.display_name, "Madrid");
//! assert_eq!(session.recent().as_slice(), ["Madrid, España"]);
//! ```

pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod prelude;
pub mod recent;
pub mod search;
pub mod sequence;
pub mod session;
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::catalog::{CatalogEntry, CityCatalog};
pub use crate::config::{
    SuggestConfig, DEFAULT_LIMIT, RECENT_CAPACITY, RECENT_STORAGE_KEY, SESSION_LIMIT,
};
pub use crate::error::{CityError, Result};
pub use crate::recent::RecentSelections;
pub use crate::search::{MatchKind, Ranked, SuggestionIndex};
pub use crate::sequence::{LatestWins, QueryTicket};
pub use crate::session::{CommitSource, Direction, Panel, SearchSession, Selection, SessionState};
pub use crate::store::{FileStore, MemoryStore};
pub use crate::traits::RecentStore;
