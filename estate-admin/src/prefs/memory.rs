//! In-memory preference backend.

use async_trait::async_trait;
use dashmap::DashMap;

use super::{ListPrefs, PrefsBackend, PrefsEdit, PrefsError};

/// Preference storage backed by a concurrent hash map.
///
/// Data is lost when the process exits. Used for `--memory-prefs` and in
/// tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    routes: DashMap<String, ListPrefs>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of routes with stored preferences.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[async_trait]
impl PrefsBackend for MemoryBackend {
    async fn load(&self, route: &str) -> Result<Option<ListPrefs>, PrefsError> {
        Ok(self.routes.get(route).map(|entry| *entry.value()))
    }

    async fn save(&self, route: &str, prefs: ListPrefs) -> Result<(), PrefsError> {
        self.routes.insert(route.to_string(), prefs);
        Ok(())
    }

    async fn remove(&self, route: &str) -> Result<bool, PrefsError> {
        Ok(self.routes.remove(route).is_some())
    }

    async fn routes(&self) -> Result<Vec<String>, PrefsError> {
        let mut routes: Vec<String> = self.routes.iter().map(|e| e.key().clone()).collect();
        routes.sort();
        Ok(routes)
    }

    /// Edits in place under the map's shard lock.
    async fn update(
        &self,
        route: &str,
        default: ListPrefs,
        edit: PrefsEdit,
    ) -> Result<ListPrefs, PrefsError> {
        let mut entry = self.routes.entry(route.to_string()).or_insert(default);
        edit(entry.value_mut());
        Ok(*entry.value())
    }
}
