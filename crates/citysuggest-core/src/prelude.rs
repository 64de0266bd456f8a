//! citysuggest prelude: bring common types and traits into scope.

pub use crate::catalog::CityCatalog;
pub use crate::config::{SuggestConfig, DEFAULT_LIMIT, SESSION_LIMIT};
pub use crate::error::{CityError, Result};
pub use crate::recent::RecentSelections;
pub use crate::search::{MatchKind, SuggestionIndex};
pub use crate::session::{CommitSource, Direction, Panel, SearchSession, Selection, SessionState};
pub use crate::store::{FileStore, MemoryStore};
pub use crate::text::{display_name, fold_key, normalize_query};
pub use crate::traits::RecentStore;
