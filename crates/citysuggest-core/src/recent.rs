// crates/citysuggest-core/src/recent.rs
use crate::config::RECENT_CAPACITY;
use crate::error::Result;
use crate::traits::RecentStore;
use tracing::{debug, warn};

/// Most-recent-first list of committed labels.
///
/// Invariants, held after every operation:
/// - `len() <= capacity()`
/// - no label appears twice; re-selecting a label moves it to the front
/// - eviction drops from the tail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSelections {
    items: Vec<String>,
    capacity: usize,
}

impl Default for RecentSelections {
    fn default() -> Self {
        Self::new(RECENT_CAPACITY)
    }
}

impl RecentSelections {
    /// Empty list holding at most `capacity` labels, clamped to
    /// `1..=RECENT_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, RECENT_CAPACITY);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build from labels given most-recent-first, repairing duplicates and
    /// overflow the same way [`push`](Self::push) would. Labels are trimmed
    /// and blank ones dropped.
    pub fn from_labels<I, S>(labels: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut recent = Self::new(capacity);
        for label in labels {
            if recent.items.len() == recent.capacity {
                break;
            }
            let label: String = label.into();
            let label = label.trim();
            if !label.is_empty() && !recent.contains(label) {
                recent.items.push(label.to_string());
            }
        }
        recent
    }

    /// Front-insert `label`, removing any earlier copy and evicting from
    /// the tail past capacity.
    ///
    /// ```rust
    /// use citysuggest_core::RecentSelections;
    ///
    /// let mut recent = RecentSelections::new(2);
    /// recent.push("A");
    /// recent.push("B");
    /// recent.push("A");
    /// recent.push("C");
    /// assert_eq!(recent.as_slice(), ["C", "A"]);
    /// ```
    pub fn push(&mut self, label: impl Into<String>) {
        let label = label.into();
        self.items.retain(|existing| *existing != label);
        self.items.insert(0, label);
        self.items.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, label: &str) -> bool {
        self.items.iter().any(|l| l == label)
    }

    /// JSON array text, most recent first.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Parse a JSON array of labels.
    pub fn from_json(json: &str, capacity: usize) -> Result<Self> {
        let labels: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::from_labels(labels, capacity))
    }

    /// Best-effort load from `store`.
    ///
    /// A missing key, a failing store or unparseable content all give an
    /// empty list; failures are logged, never returned.
    pub fn load<S: RecentStore + ?Sized>(store: &S, key: &str, capacity: usize) -> Self {
        let raw = match store.load(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(capacity),
            Err(e) => {
                warn!(key, error = %e, "could not read recent selections");
                return Self::new(capacity);
            }
        };
        match Self::from_json(&raw, capacity) {
            Ok(recent) => {
                debug!(key, entries = recent.len(), "loaded recent selections");
                recent
            }
            Err(e) => {
                warn!(key, error = %e, "discarding malformed recent selections");
                Self::new(capacity)
            }
        }
    }

    /// Best-effort write to `store`; failures are logged.
    ///
    /// Returns whether the write succeeded.
    pub fn persist<S: RecentStore + ?Sized>(&self, store: &mut S, key: &str) -> bool {
        let written = self.to_json().and_then(|json| store.save(key, &json));
        match written {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "could not persist recent selections");
                false
            }
        }
    }
}
