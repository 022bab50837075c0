//! List preference storage over both backends.

use estate_admin::prefs::{
    ListPrefs, MemoryBackend, PrefsError, PrefsStore, SqliteBackend, ViewMode,
};

async fn check_round_trip(store: PrefsStore) {
    assert_eq!(store.get("leases").await.unwrap(), None);

    let prefs = ListPrefs {
        view_mode: ViewMode::Cards,
        page_size: 50,
    };
    store.set("leases", &prefs).await.unwrap();
    assert_eq!(store.get("leases").await.unwrap(), Some(prefs));

    let updated = store
        .update("leases", ListPrefs::with_page_size(10), |p| p.page_size = 25)
        .await
        .unwrap();
    assert_eq!(updated.page_size, 25);
    assert_eq!(updated.view_mode, ViewMode::Cards);

    store
        .update("contacts", ListPrefs::with_page_size(10), |p| {
            p.view_mode = ViewMode::Cards
        })
        .await
        .unwrap();
    assert_eq!(store.routes().await.unwrap(), vec!["contacts", "leases"]);

    assert!(store.forget("leases").await.unwrap());
    assert!(!store.forget("leases").await.unwrap());
    assert_eq!(store.get("leases").await.unwrap(), None);
    assert_eq!(store.routes().await.unwrap(), vec!["contacts"]);
}

#[tokio::test]
async fn test_memory_round_trip() {
    check_round_trip(PrefsStore::new(MemoryBackend::new())).await;
}

#[tokio::test]
async fn test_sqlite_round_trip() {
    let backend = SqliteBackend::open(":memory:").await.unwrap();
    check_round_trip(PrefsStore::new(backend)).await;
}

#[tokio::test]
async fn test_get_or_falls_back_to_default() {
    let store = PrefsStore::in_memory();
    let default = ListPrefs::with_page_size(10);
    assert_eq!(store.get_or("files", default).await.unwrap(), default);
}

#[tokio::test]
async fn test_sqlite_survives_reopen() {
    let path = std::env::temp_dir().join(format!("estate-prefs-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    {
        let store = PrefsStore::new(SqliteBackend::open(&path).await.unwrap());
        store
            .set("keys", &ListPrefs::with_page_size(100))
            .await
            .unwrap();
    }

    let store = PrefsStore::new(SqliteBackend::open(&path).await.unwrap());
    assert_eq!(
        store.get("keys").await.unwrap(),
        Some(ListPrefs::with_page_size(100))
    );

    drop(store);
    let _ = std::fs::remove_file(&path);
}

async fn check_page_size_is_never_zero(store: PrefsStore) {
    let result = store.set("tasks", &ListPrefs::with_page_size(0)).await;
    assert!(matches!(result, Err(PrefsError::InvalidPageSize(route)) if route == "tasks"));
    assert_eq!(store.get("tasks").await.unwrap(), None);

    let written = store
        .update("tasks", ListPrefs::with_page_size(10), |p| p.page_size = 0)
        .await
        .unwrap();
    assert_eq!(written.page_size, 1);
    assert_eq!(store.get("tasks").await.unwrap(), Some(written));
}

#[tokio::test]
async fn test_memory_page_size_is_never_zero() {
    check_page_size_is_never_zero(PrefsStore::in_memory()).await;
}

#[tokio::test]
async fn test_sqlite_page_size_is_never_zero() {
    let backend = SqliteBackend::open(":memory:").await.unwrap();
    check_page_size_is_never_zero(PrefsStore::new(backend)).await;
}

#[tokio::test]
async fn test_sqlite_update_sees_rows_written_by_another_handle() {
    let path = std::env::temp_dir().join(format!("estate-prefs-update-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let first = PrefsStore::new(SqliteBackend::open(&path).await.unwrap());
    let second = PrefsStore::new(SqliteBackend::open(&path).await.unwrap());
    first
        .set("leases", &ListPrefs::with_page_size(50))
        .await
        .unwrap();

    let written = second
        .update("leases", ListPrefs::with_page_size(10), |p| {
            p.view_mode = ViewMode::Cards
        })
        .await
        .unwrap();
    assert_eq!(written.page_size, 50);
    assert_eq!(written.view_mode, ViewMode::Cards);

    drop((first, second));
    let _ = std::fs::remove_file(&path);
}
