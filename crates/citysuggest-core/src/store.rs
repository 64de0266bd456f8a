// crates/citysuggest-core/src/store.rs
use crate::error::{CityError, Result};
use crate::traits::RecentStore;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// In-process store. Values vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value, handy for restoring a snapshot.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values }
    }
}

impl RecentStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store writing each key to `<dir>/<key>.json`.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the platform data directory
    /// (e.g. `~/.local/share/citysuggest` on Linux).
    #[cfg(feature = "system-dirs")]
    pub fn system_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "citysuggest").ok_or_else(|| {
            CityError::Storage("could not determine a home directory".to_string())
        })?;
        Ok(Self::new(dirs.data_dir()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(CityError::Storage(format!("invalid store key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl RecentStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CityError::Io(e)),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemoryStore::with_value("k", "[\"a\"]");
        assert_eq!(store.load("k").unwrap().as_deref(), Some("[\"a\"]"));
        store.save("k", "[]").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.load("other").unwrap(), None);
    }

    #[test]
    fn file_store_round_trips_and_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path().join("nested").join("store"));
        assert_eq!(store.load("recent").unwrap(), None);

        store.save("recent", "[\"Lima, Perú\"]").unwrap();
        assert_eq!(
            store.load("recent").unwrap().as_deref(),
            Some("[\"Lima, Perú\"]")
        );
        assert!(store.dir().join("recent.json").exists());
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path());
        assert!(store.save("../escape", "x").is_err());
        assert!(store.load("a/b").is_err());
        assert!(store.load("").is_err());
    }
}
