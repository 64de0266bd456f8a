//! citysuggest-wasm: WebAssembly bindings for citysuggest-core
//!
//! This crate exposes the city autocomplete engine to JavaScript. The
//! built-in catalog is compiled in; recent selections are persisted in
//! `localStorage` under the same key the journal client has always used.
//!
//! What it provides
//! ----------------
//! - `suggest(query, limit)`: ranked labels for a query
//! - `catalog_size()`, `display_name(label)`
//! - `CitySearch`: a stateful search box (query, highlight, dropdown,
//!   recent picks) driven by input events
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CitySearch } from 'citysuggest-wasm';
//!
//! await init();
//! const search = new CitySearch();
//! search.set_on_select((city) => loadWeather(city));
//!
//! input.addEventListener('input', (e) => { search.input(e.target.value); render(search.panel()); });
//! input.addEventListener('blur', () => { search.dismiss(); render(search.panel()); });
//! ```
//!
//! Notes
//! -----
//! - `panel()` returns `{ kind, items, query }` where `kind` is one of
//!   `"hidden"`, `"suggestions"`, `"recent"`, `"no_matches"`.
//! - Hiding on blur is the caller's job; the session has no timers.
mod store;

pub use store::BrowserStore;

use citysuggest_core::{
    CityCatalog, CommitSource, Direction, Panel, SearchSession, SuggestConfig, SuggestionIndex,
};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(
        &format!(
            "citysuggest ready: {} cities",
            CityCatalog::builtin().len()
        )
        .into(),
    );
}

fn to_array<'a>(items: impl IntoIterator<Item = &'a str>) -> js_sys::Array {
    items.into_iter().map(JsValue::from_str).collect()
}

/* --------------------------------------------------------------------------
   Stateless helpers
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn suggest(query: &str, limit: usize) -> js_sys::Array {
    let found = SuggestionIndex::builtin().search(query, limit);
    to_array(found.iter().map(String::as_str))
}

#[wasm_bindgen]
pub fn catalog_size() -> usize {
    CityCatalog::builtin().len()
}

#[wasm_bindgen]
pub fn display_name(label: &str) -> String {
    citysuggest_core::text::display_name(label).to_string()
}

/* --------------------------------------------------------------------------
   Interactive session
-------------------------------------------------------------------------- */

#[derive(Serialize)]
struct PanelView<'a> {
    kind: &'static str,
    items: &'a [String],
    query: Option<&'a str>,
}

impl<'a> From<Panel<'a>> for PanelView<'a> {
    fn from(panel: Panel<'a>) -> Self {
        match panel {
            Panel::Hidden => PanelView {
                kind: "hidden",
                items: &[],
                query: None,
            },
            Panel::Suggestions(items) => PanelView {
                kind: "suggestions",
                items,
                query: None,
            },
            Panel::Recent(items) => PanelView {
                kind: "recent",
                items,
                query: None,
            },
            Panel::NoMatches { query } => PanelView {
                kind: "no_matches",
                items: &[],
                query: Some(query),
            },
        }
    }
}

/// A search box bound to the built-in catalog and `localStorage`.
#[wasm_bindgen]
pub struct CitySearch {
    session: SearchSession<'static, BrowserStore>,
}

impl Default for CitySearch {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CitySearch {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CitySearch {
        CitySearch {
            session: SearchSession::builtin(BrowserStore::new()),
        }
    }

    /// Session with a custom dropdown size and optional accent-insensitive
    /// matching. A zero limit falls back to the default.
    pub fn with_options(limit: usize, fold_accents: bool) -> CitySearch {
        let mut config = SuggestConfig::new().with_fold_accents(fold_accents);
        if limit > 0 {
            config = config.with_limit(limit);
        }
        CitySearch {
            session: SearchSession::new(CityCatalog::builtin(), BrowserStore::new(), config),
        }
    }

    /// Called with the display name of every picked city.
    pub fn set_on_select(&mut self, callback: js_sys::Function) {
        self.session.set_on_select(move |name| {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(name)) {
                web_sys::console::error_1(&e);
            }
        });
    }

    pub fn input(&mut self, text: &str) {
        self.session.on_query_change(text);
    }

    pub fn navigate_down(&mut self) {
        self.session.on_navigate(Direction::Down);
    }

    pub fn navigate_up(&mut self) {
        self.session.on_navigate(Direction::Up);
    }

    pub fn commit_highlighted(&mut self) -> Option<String> {
        self.commit(CommitSource::Highlighted)
    }

    pub fn commit_enter(&mut self) -> Option<String> {
        self.commit(CommitSource::Enter)
    }

    pub fn commit_label(&mut self, label: String) -> Option<String> {
        self.commit(CommitSource::Explicit(label))
    }

    pub fn commit_text(&mut self) -> Option<String> {
        self.commit(CommitSource::RawText)
    }

    pub fn dismiss(&mut self) {
        self.session.on_dismiss();
    }

    pub fn focus(&mut self) {
        self.session.on_focus();
    }

    pub fn clear_recent(&mut self) {
        self.session.clear_recent();
    }

    pub fn query(&self) -> String {
        self.session.query().to_string()
    }

    pub fn suggestions(&self) -> js_sys::Array {
        to_array(self.session.suggestions().iter().map(String::as_str))
    }

    pub fn recent(&self) -> js_sys::Array {
        to_array(self.session.recent().iter())
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.session.highlighted()
    }

    pub fn visible(&self) -> bool {
        self.session.is_visible()
    }

    pub fn can_submit(&self) -> bool {
        self.session.can_submit()
    }

    pub fn panel(&self) -> Result<JsValue, JsValue> {
        let view = PanelView::from(self.session.panel());
        to_value(&view).map_err(JsValue::from)
    }

    fn commit(&mut self, source: CommitSource) -> Option<String> {
        self.session
            .on_commit(source)
            .map(|selection| selection.display_name)
    }
}
