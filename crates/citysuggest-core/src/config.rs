// crates/citysuggest-core/src/config.rs
use crate::error::{CityError, Result};
use serde::{Deserialize, Serialize};

/// Result count used by [`SuggestionIndex::search_default`](crate::SuggestionIndex::search_default).
pub const DEFAULT_LIMIT: usize = 8;
/// Dropdown size used by interactive sessions.
pub const SESSION_LIMIT: usize = 6;
/// Maximum length of the recent-selections list.
pub const RECENT_CAPACITY: usize = 5;
/// Key under which the recent-selections list is persisted.
pub const RECENT_STORAGE_KEY: &str = "recent-weather-searches";

/// Tunables for a [`SearchSession`](crate::SearchSession).
///
/// Every field has a default, so a config file only needs the keys it
/// wants to override:
///
/// ```rust
/// use citysuggest_core::SuggestConfig;
///
/// let config: SuggestConfig = serde_json::from_str(r#"{ "limit": 3 }"#).unwrap();
/// assert_eq!(config.limit, 3);
/// assert_eq!(config.recent_capacity, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Maximum number of suggestions shown while typing.
    pub limit: usize,
    /// Maximum number of remembered selections, at most [`RECENT_CAPACITY`].
    pub recent_capacity: usize,
    /// Store key for the persisted recent selections.
    pub storage_key: String,
    /// Match ignoring diacritics (`malaga` finds `Málaga`).
    pub fold_accents: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            limit: SESSION_LIMIT,
            recent_capacity: RECENT_CAPACITY,
            storage_key: RECENT_STORAGE_KEY.to_string(),
            fold_accents: false,
        }
    }
}

impl SuggestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_recent_capacity(mut self, capacity: usize) -> Self {
        self.recent_capacity = capacity;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_fold_accents(mut self, enabled: bool) -> Self {
        self.fold_accents = enabled;
        self
    }

    /// Reject settings the session cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(CityError::InvalidConfig("limit must be positive".into()));
        }
        if self.recent_capacity == 0 {
            return Err(CityError::InvalidConfig(
                "recent_capacity must be positive".into(),
            ));
        }
        if self.recent_capacity > RECENT_CAPACITY {
            return Err(CityError::InvalidConfig(format!(
                "recent_capacity must be at most {RECENT_CAPACITY}"
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(CityError::InvalidConfig("storage_key is empty".into()));
        }
        Ok(())
    }

    /// Read and validate a JSON config file.
    #[cfg(feature = "json")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let reader = crate::loader::open_stream(path.as_ref())?;
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_interactive_dropdown() {
        let config = SuggestConfig::default();
        assert_eq!(config.limit, SESSION_LIMIT);
        assert_eq!(config.recent_capacity, 5);
        assert_eq!(config.storage_key, "recent-weather-searches");
        assert!(!config.fold_accents);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_limit_and_blank_key() {
        assert!(SuggestConfig::new().with_limit(0).validate().is_err());
        assert!(SuggestConfig::new().with_recent_capacity(0).validate().is_err());
        assert!(SuggestConfig::new().with_storage_key("  ").validate().is_err());
    }

    #[test]
    fn validate_rejects_recent_capacity_above_cap() {
        assert!(SuggestConfig::new()
            .with_recent_capacity(RECENT_CAPACITY)
            .validate()
            .is_ok());
        assert!(matches!(
            SuggestConfig::new().with_recent_capacity(9).validate(),
            Err(CityError::InvalidConfig(_))
        ));
    }

    #[cfg(feature = "json")]
    #[test]
    fn from_path_validates() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        std::fs::write(&good, r#"{ "fold_accents": true, "storage_key": "cities" }"#).unwrap();
        let config = SuggestConfig::from_path(&good).unwrap();
        assert!(config.fold_accents);
        assert_eq!(config.storage_key, "cities");
        assert_eq!(config.limit, SESSION_LIMIT);

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{ "limit": 0 }"#).unwrap();
        assert!(matches!(
            SuggestConfig::from_path(&bad),
            Err(CityError::InvalidConfig(_))
        ));

        let oversized = dir.path().join("oversized.json");
        std::fs::write(&oversized, r#"{ "recent_capacity": 9 }"#).unwrap();
        assert!(matches!(
            SuggestConfig::from_path(&oversized),
            Err(CityError::InvalidConfig(_))
        ));
    }
}
