// crates/citysuggest-core/src/session.rs

//! # Search Session
//!
//! One user's interactive city search: the query being typed, the
//! suggestions derived from it, keyboard highlight, dropdown visibility and
//! the persisted list of recent selections.
//!
//! All mutation goes through the `on_*` event methods. None of them fail:
//! storage problems are logged and the session carries on with what it has.

use crate::catalog::CityCatalog;
use crate::config::SuggestConfig;
use crate::recent::RecentSelections;
use crate::search::SuggestionIndex;
use crate::sequence::{LatestWins, QueryTicket};
use crate::text::display_name;
use crate::traits::RecentStore;
use std::fmt;
use tracing::debug;

/// Coarse session state. `Committing` only exists inside
/// [`SearchSession::on_commit`] and is never observable from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Blank query, no suggestions.
    Idle,
    /// Non-blank query; suggestions (possibly none) derived from it.
    Typing,
}

/// Keyboard navigation step through the suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Where a committed label comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitSource {
    /// The highlighted suggestion, if any.
    Highlighted,
    /// The highlighted suggestion, or else the trimmed query text
    /// (what the Enter key does).
    Enter,
    /// A label picked directly, e.g. from the recent list.
    Explicit(String),
    /// The trimmed query text taken literally, even if not in the catalog.
    RawText,
}

/// The outcome of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Full label, as remembered in the recent list.
    pub label: String,
    /// Label without its region suffix, as handed to the listener.
    pub display_name: String,
}

/// What the dropdown should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel<'s> {
    Hidden,
    Suggestions(&'s [String]),
    /// Shown in place of suggestions while nothing has been typed.
    Recent(&'s [String]),
    /// Non-blank query without catalog matches; committing the raw text
    /// is still possible.
    NoMatches { query: &'s str },
}

type SelectListener<'c> = Box<dyn FnMut(&str) + 'c>;

/// Interactive search state for a single user.
pub struct SearchSession<'c, S: RecentStore> {
    index: SuggestionIndex<'c>,
    config: SuggestConfig,
    store: S,
    query: String,
    suggestions: Vec<String>,
    recent: RecentSelections,
    highlighted: Option<usize>,
    visible: bool,
    sequence: LatestWins,
    on_select: Option<SelectListener<'c>>,
}

impl<S: RecentStore> SearchSession<'static, S> {
    /// Session over the built-in catalog with default settings.
    pub fn builtin(store: S) -> Self {
        SearchSession::new(CityCatalog::builtin(), store, SuggestConfig::default())
    }
}

impl<'c, S: RecentStore> SearchSession<'c, S> {
    /// Start a session, loading recent selections from `store`.
    ///
    /// An unreadable or malformed stored list starts the session empty.
    pub fn new(catalog: &'c CityCatalog, store: S, config: SuggestConfig) -> Self {
        let index = SuggestionIndex::new(catalog).with_fold_accents(config.fold_accents);
        let recent = RecentSelections::load(&store, &config.storage_key, config.recent_capacity);
        Self {
            index,
            config,
            store,
            query: String::new(),
            suggestions: Vec::new(),
            recent,
            highlighted: None,
            visible: false,
            sequence: LatestWins::new(),
            on_select: None,
        }
    }

    /// Register the callback receiving the display name of every
    /// successful commit.
    pub fn set_on_select<F>(&mut self, listener: F)
    where
        F: FnMut(&str) + 'c,
    {
        self.on_select = Some(Box::new(listener));
    }

    /* ----------------------------------------------------------------------
       Accessors
    ---------------------------------------------------------------------- */

    pub fn state(&self) -> SessionState {
        if self.query.trim().is_empty() {
            SessionState::Idle
        } else {
            SessionState::Typing
        }
    }

    /// The query exactly as typed (untrimmed).
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn recent(&self) -> &RecentSelections {
        &self.recent
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_label(&self) -> Option<&str> {
        self.highlighted
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a raw-text commit would do anything (the search button's
    /// enabled state).
    pub fn can_submit(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    pub fn index(&self) -> SuggestionIndex<'c> {
        self.index
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Dropdown contents for the current state.
    pub fn panel(&self) -> Panel<'_> {
        if !self.visible {
            return Panel::Hidden;
        }
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return if self.recent.is_empty() {
                Panel::Hidden
            } else {
                Panel::Recent(self.recent.as_slice())
            };
        }
        if self.suggestions.is_empty() {
            Panel::NoMatches { query: trimmed }
        } else {
            Panel::Suggestions(&self.suggestions)
        }
    }

    /* ----------------------------------------------------------------------
       Events
    ---------------------------------------------------------------------- */

    /// The query text changed; recompute suggestions from scratch.
    pub fn on_query_change(&mut self, text: &str) {
        let ticket = self.start_query(text);
        if self.state() == SessionState::Typing {
            let found = self.index.search(&self.query, self.config.limit);
            self.apply(ticket, found);
        }
    }

    /// Like [`on_query_change`](Self::on_query_change), but leaves the
    /// search to the caller, who hands the result back through
    /// [`resolve_query`](Self::resolve_query).
    pub fn begin_query(&mut self, text: &str) -> QueryTicket {
        self.start_query(text)
    }

    /// Install suggestions computed for `ticket`.
    ///
    /// Returns `false` and changes nothing when the ticket belongs to a
    /// superseded query or an older result has already been overtaken.
    pub fn resolve_query(&mut self, ticket: QueryTicket, mut suggestions: Vec<String>) -> bool {
        if self.state() != SessionState::Typing || !self.sequence.is_latest(ticket) {
            debug!(ticket = ticket.get(), "dropping stale suggestions");
            return false;
        }
        suggestions.truncate(self.config.limit);
        self.apply(ticket, suggestions)
    }

    /// Move the keyboard highlight one step, clamped at both ends.
    ///
    /// `Up` from the first suggestion clears the highlight. Ignored while
    /// the dropdown is hidden.
    pub fn on_navigate(&mut self, direction: Direction) {
        if !self.visible {
            return;
        }
        let len = self.suggestions.len();
        self.highlighted = match (direction, self.highlighted) {
            (Direction::Down, None) if len > 0 => Some(0),
            (Direction::Down, None) => None,
            (Direction::Down, Some(i)) => Some((i + 1).min(len.saturating_sub(1))),
            (Direction::Up, None) | (Direction::Up, Some(0)) => None,
            (Direction::Up, Some(i)) => Some(i - 1),
        };
    }

    /// Finalise a city choice.
    ///
    /// On success the full label goes to the front of the recent list
    /// (which is persisted), the query state is reset, the listener gets
    /// the display name, and the selection is returned. Without a usable
    /// candidate nothing changes and `None` is returned.
    pub fn on_commit(&mut self, source: CommitSource) -> Option<Selection> {
        let label = self.resolve_candidate(source)?;
        let name = display_name(&label);
        if name.is_empty() {
            debug!(label = %label, "ignoring commit without a city name");
            return None;
        }
        let selection = Selection {
            display_name: name.to_string(),
            label,
        };

        self.recent.push(selection.label.clone());
        self.recent
            .persist(&mut self.store, &self.config.storage_key);

        self.query.clear();
        self.suggestions.clear();
        self.visible = false;
        self.highlighted = None;
        // Results still in flight belong to the old query.
        self.sequence.issue();

        debug!(label = %selection.label, "committed selection");
        if let Some(listener) = self.on_select.as_mut() {
            listener(&selection.display_name);
        }
        Some(selection)
    }

    /// Focus left the input or the user pressed Escape. The query stays.
    pub fn on_dismiss(&mut self) {
        self.visible = false;
        self.highlighted = None;
    }

    /// The input regained focus: re-open the dropdown without recomputing,
    /// or show the recent list when nothing has been typed.
    pub fn on_focus(&mut self) {
        if !self.suggestions.is_empty()
            || (self.state() == SessionState::Idle && !self.recent.is_empty())
        {
            self.visible = true;
        }
    }

    /// Forget all recent selections.
    pub fn clear_recent(&mut self) {
        self.recent.clear();
        self.recent
            .persist(&mut self.store, &self.config.storage_key);
    }

    /* ----------------------------------------------------------------------
       Internals
    ---------------------------------------------------------------------- */

    fn start_query(&mut self, text: &str) -> QueryTicket {
        self.query = text.to_string();
        self.highlighted = None;
        let ticket = self.sequence.issue();
        if self.state() == SessionState::Idle {
            self.suggestions.clear();
            self.visible = false;
        }
        ticket
    }

    fn apply(&mut self, ticket: QueryTicket, suggestions: Vec<String>) -> bool {
        if !self.sequence.accept(ticket) {
            return false;
        }
        self.suggestions = suggestions;
        self.visible = true;
        self.highlighted = None;
        true
    }

    fn resolve_candidate(&self, source: CommitSource) -> Option<String> {
        let query = self.query.trim();
        let candidate = match source {
            CommitSource::Highlighted => self.highlighted_label()?.to_string(),
            CommitSource::Enter => self.highlighted_label().unwrap_or(query).to_string(),
            CommitSource::Explicit(label) => label.trim().to_string(),
            CommitSource::RawText => query.to_string(),
        };
        (!candidate.is_empty()).then_some(candidate)
    }
}

impl<S: RecentStore + fmt::Debug> fmt::Debug for SearchSession<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSession")
            .field("query", &self.query)
            .field("suggestions", &self.suggestions)
            .field("recent", &self.recent)
            .field("highlighted", &self.highlighted)
            .field("visible", &self.visible)
            .field("config", &self.config)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
