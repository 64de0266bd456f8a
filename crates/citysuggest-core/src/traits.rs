// crates/citysuggest-core/src/traits.rs
use crate::error::Result;

/// Storage abstraction: a durable key-value store scoped to one client.
///
/// This is where the recent-selections list lives between sessions. The
/// session reads one key at start-up and overwrites it wholesale after
/// every change; values are JSON text.
///
/// Implementors decide what "durable" means: [`MemoryStore`](crate::store::MemoryStore)
/// keeps values for the life of the process, [`FileStore`](crate::store::FileStore)
/// writes one file per key, and the WASM bindings wrap `localStorage`.
///
/// # Examples
/// ```rust
/// use citysuggest_core::traits::RecentStore;
/// use citysuggest_core::store::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// assert_eq!(store.load("k").unwrap(), None);
/// store.save("k", "[]").unwrap();
/// assert_eq!(store.load("k").unwrap().as_deref(), Some("[]"));
/// ```
pub trait RecentStore {
    /// Returns the stored value, or `None` when the key is absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the stored value.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: RecentStore + ?Sized> RecentStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}
