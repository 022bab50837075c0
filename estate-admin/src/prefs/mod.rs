//! Per-route list preferences.
//!
//! Remembers how the user last viewed each list screen (page size, view
//! mode). The table engine never reads these; the screen applies them
//! around it.

mod backend;
mod memory;
mod sqlite;

pub use backend::{PrefsBackend, PrefsEdit};
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Preference error type.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("page size must be at least 1 (route '{0}')")]
    InvalidPageSize(String),
}

/// How a list screen lays out its rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl ViewMode {
    /// Stored name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Cards => "cards",
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "cards" | "card" | "grid" => Ok(ViewMode::Cards),
            other => Err(format!("unknown view mode '{}'", other)),
        }
    }
}

/// Stored preferences for one list route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPrefs {
    pub view_mode: ViewMode,
    pub page_size: usize,
}

impl ListPrefs {
    /// Preferences with the table view and the given page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            view_mode: ViewMode::Table,
            page_size,
        }
    }
}

/// Route-keyed preference store shared by every screen.
///
/// Cheap to clone; all clones share one backend.
#[derive(Clone)]
pub struct PrefsStore {
    backend: Arc<dyn PrefsBackend>,
}

impl std::fmt::Debug for PrefsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefsStore").finish_non_exhaustive()
    }
}

impl PrefsStore {
    /// Create a store over the given backend.
    pub fn new(backend: impl PrefsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create a store that keeps everything in memory.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Get the stored preferences for a route.
    pub async fn get(&self, route: &str) -> Result<Option<ListPrefs>, PrefsError> {
        self.backend.load(route).await
    }

    /// Get the stored preferences for a route, or `default` if none.
    pub async fn get_or(&self, route: &str, default: ListPrefs) -> Result<ListPrefs, PrefsError> {
        Ok(self.get(route).await?.unwrap_or(default))
    }

    /// Store preferences for a route.
    pub async fn set(&self, route: &str, prefs: &ListPrefs) -> Result<(), PrefsError> {
        if prefs.page_size == 0 {
            return Err(PrefsError::InvalidPageSize(route.to_string()));
        }
        self.backend.save(route, *prefs).await
    }

    /// Read-modify-write the preferences for a route.
    ///
    /// Starts from `default` when nothing is stored. Returns what was written.
    pub async fn update(
        &self,
        route: &str,
        default: ListPrefs,
        edit: impl FnOnce(&mut ListPrefs) + Send + 'static,
    ) -> Result<ListPrefs, PrefsError> {
        let guarded: PrefsEdit = Box::new(move |prefs: &mut ListPrefs| {
            edit(prefs);
            prefs.page_size = prefs.page_size.max(1);
        });
        self.backend.update(route, default, guarded).await
    }

    /// Forget the preferences for a route. Returns whether any were stored.
    pub async fn forget(&self, route: &str) -> Result<bool, PrefsError> {
        self.backend.remove(route).await
    }

    /// Routes that have stored preferences, sorted.
    pub async fn routes(&self) -> Result<Vec<String>, PrefsError> {
        self.backend.routes().await
    }
}
