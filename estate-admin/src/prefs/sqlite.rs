//! SQLite preference backend.
//!
//! One typed row per route:
//!
//! ```sql
//! list_prefs(route TEXT PRIMARY KEY, page_size INTEGER, view_mode TEXT)
//! ```

use std::path::Path;

use async_sqlite::Client;
use async_trait::async_trait;
use dashmap::DashMap;
use rusqlite::OptionalExtension;
use rusqlite::types::Type;

use super::{ListPrefs, PrefsBackend, PrefsEdit, PrefsError, ViewMode};

/// SQLite-backed preference storage.
///
/// Reads are served from a per-route cache after the first hit; writes go
/// to the database first and then refresh the cache.
pub struct SqliteBackend {
    client: Client,
    cache: DashMap<String, ListPrefs>,
}

impl SqliteBackend {
    /// Open (or create) the preference database at the given path.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let client = async_sqlite::ClientBuilder::new()
            .path(path)
            .open()
            .await?;

        client
            .conn(|conn| {
                conn.execute_batch(
                    "
                    CREATE TABLE IF NOT EXISTS list_prefs (
                        route TEXT PRIMARY KEY,
                        page_size INTEGER NOT NULL CHECK (page_size > 0),
                        view_mode TEXT NOT NULL
                    );
                    ",
                )
            })
            .await?;

        Ok(Self {
            client,
            cache: DashMap::new(),
        })
    }
}

fn read_prefs(row: &rusqlite::Row<'_>) -> rusqlite::Result<ListPrefs> {
    let page_size: i64 = row.get(0)?;
    let page_size = usize::try_from(page_size)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Integer, e.into()))?;
    let view_mode: String = row.get(1)?;
    let view_mode = view_mode
        .parse::<ViewMode>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, e.into()))?;
    Ok(ListPrefs {
        view_mode,
        page_size,
    })
}

fn write_prefs(conn: &rusqlite::Connection, route: &str, prefs: &ListPrefs) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO list_prefs (route, page_size, view_mode) VALUES (?1, ?2, ?3)
         ON CONFLICT(route) DO UPDATE SET
             page_size = excluded.page_size,
             view_mode = excluded.view_mode",
        rusqlite::params![route, prefs.page_size as i64, prefs.view_mode.as_str()],
    )?;
    Ok(())
}

const SELECT_PREFS: &str = "SELECT page_size, view_mode FROM list_prefs WHERE route = ?";

#[async_trait]
impl PrefsBackend for SqliteBackend {
    async fn load(&self, route: &str) -> Result<Option<ListPrefs>, PrefsError> {
        if let Some(prefs) = self.cache.get(route) {
            return Ok(Some(*prefs));
        }

        let route_owned = route.to_string();
        let prefs = self
            .client
            .conn(move |conn| conn.query_row(SELECT_PREFS, [&route_owned], read_prefs).optional())
            .await?;

        if let Some(prefs) = prefs {
            self.cache.insert(route.to_string(), prefs);
        }
        Ok(prefs)
    }

    async fn save(&self, route: &str, prefs: ListPrefs) -> Result<(), PrefsError> {
        let route_owned = route.to_string();
        self.client
            .conn(move |conn| write_prefs(conn, &route_owned, &prefs))
            .await?;
        self.cache.insert(route.to_string(), prefs);
        Ok(())
    }

    async fn remove(&self, route: &str) -> Result<bool, PrefsError> {
        let route_owned = route.to_string();
        let deleted = self
            .client
            .conn(move |conn| conn.execute("DELETE FROM list_prefs WHERE route = ?", [&route_owned]))
            .await?;
        self.cache.remove(route);
        Ok(deleted > 0)
    }

    async fn routes(&self) -> Result<Vec<String>, PrefsError> {
        let routes = self
            .client
            .conn(|conn| {
                let mut stmt = conn.prepare("SELECT route FROM list_prefs ORDER BY route")?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                rows.collect::<Result<Vec<String>, _>>()
            })
            .await?;
        Ok(routes)
    }

    /// Reads and writes the row in one transaction.
    async fn update(
        &self,
        route: &str,
        default: ListPrefs,
        edit: PrefsEdit,
    ) -> Result<ListPrefs, PrefsError> {
        let route_owned = route.to_string();
        let prefs = self
            .client
            .conn_mut(move |conn| {
                let tx = conn.transaction()?;
                let mut prefs = tx
                    .query_row(SELECT_PREFS, [&route_owned], read_prefs)
                    .optional()?
                    .unwrap_or(default);
                edit(&mut prefs);
                write_prefs(&tx, &route_owned, &prefs)?;
                tx.commit()?;
                Ok(prefs)
            })
            .await?;
        self.cache.insert(route.to_string(), prefs);
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn backend() -> SqliteBackend {
        SqliteBackend::open(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_rows_are_typed_columns() {
        let backend = backend().await;
        let prefs = ListPrefs {
            view_mode: ViewMode::Cards,
            page_size: 25,
        };
        backend.save("leases", prefs).await.unwrap();

        let (page_size, view_mode) = backend
            .client
            .conn(|conn| {
                conn.query_row(
                    "SELECT page_size, view_mode FROM list_prefs WHERE route = 'leases'",
                    [],
                    |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
                )
            })
            .await
            .unwrap();
        assert_eq!(page_size, 25);
        assert_eq!(view_mode, "cards");
    }

    #[tokio::test]
    async fn test_unknown_view_mode_is_an_error() {
        let backend = backend().await;
        backend
            .client
            .conn(|conn| {
                conn.execute(
                    "INSERT INTO list_prefs (route, page_size, view_mode) VALUES ('tasks', 10, 'kanban')",
                    [],
                )
            })
            .await
            .unwrap();

        assert!(matches!(
            backend.load("tasks").await,
            Err(PrefsError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_zero_page_size_is_refused() {
        let backend = backend().await;
        let result = backend.save("tasks", ListPrefs::with_page_size(0)).await;
        assert!(result.is_err());
        assert_eq!(backend.load("tasks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_inserts_from_default() {
        let backend = backend().await;
        let default = ListPrefs::with_page_size(10);
        let prefs = backend
            .update("banks", default, Box::new(|p: &mut ListPrefs| p.view_mode = ViewMode::Cards))
            .await
            .unwrap();
        assert_eq!(prefs.page_size, 10);
        assert_eq!(prefs.view_mode, ViewMode::Cards);

        // Bypass the cache.
        let fresh = backend
            .client
            .conn(|conn| conn.query_row(SELECT_PREFS, ["banks"], read_prefs))
            .await
            .unwrap();
        assert_eq!(fresh, prefs);
        assert!(backend.remove("banks").await.unwrap());
        assert!(!backend.remove("banks").await.unwrap());
    }
}
