use citysuggest_core::{CityError, RecentStore, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// [`RecentStore`] over the browser's `window.localStorage`.
///
/// Outside a browser window (workers, Node, private modes that refuse
/// storage) there is nothing to persist to: reads see no value and writes
/// are dropped.
#[derive(Debug, Clone, Default)]
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    pub fn new() -> Self {
        Self {
            storage: local_storage(),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<Storage> {
    None
}

fn js_error(e: JsValue) -> CityError {
    CityError::Storage(format!("{e:?}"))
}

impl RecentStore for BrowserStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        match &self.storage {
            Some(storage) => storage.set_item(key, value).map_err(js_error),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_window_nothing_persists() {
        let mut store = BrowserStore::new();
        assert!(!store.is_persistent());
        store.save("k", "[\"x\"]").unwrap();
        assert_eq!(store.load("k").unwrap(), None);
    }
}
