//! Storage seam for list preferences.

use async_trait::async_trait;

use super::{ListPrefs, PrefsError};

/// An edit applied by [`PrefsBackend::update`].
pub type PrefsEdit = Box<dyn FnOnce(&mut ListPrefs) + Send>;

/// Where per-route list preferences live.
///
/// Backends store whole [`ListPrefs`] records keyed by route. Routes are
/// plain screen routes such as `"leases"`.
#[async_trait]
pub trait PrefsBackend: Send + Sync {
    /// Preferences stored for `route`, if any.
    async fn load(&self, route: &str) -> Result<Option<ListPrefs>, PrefsError>;

    /// Store `prefs` for `route`, replacing any earlier record.
    async fn save(&self, route: &str, prefs: ListPrefs) -> Result<(), PrefsError>;

    /// Drop the record for `route`. Returns whether one existed.
    async fn remove(&self, route: &str) -> Result<bool, PrefsError>;

    /// Routes with a stored record, sorted.
    async fn routes(&self) -> Result<Vec<String>, PrefsError>;

    /// Apply `edit` to the record for `route` (or to `default` when there is
    /// none) and store the result.
    ///
    /// The default loads and then saves. Backends that can do both in one
    /// step override it.
    async fn update(
        &self,
        route: &str,
        default: ListPrefs,
        edit: PrefsEdit,
    ) -> Result<ListPrefs, PrefsError> {
        let mut prefs = self.load(route).await?.unwrap_or(default);
        edit(&mut prefs);
        self.save(route, prefs).await?;
        Ok(prefs)
    }
}
