//! List screen behaviour around the table: stored prefs, sorting,
//! filtering and dataset refreshes.

use std::sync::Arc;

use estate_admin::AdminConfig;
use estate_admin::demo;
use estate_admin::prefs::{ListPrefs, PrefsStore, ViewMode};
use estate_admin::records::Property;
use estate_admin::screen::{Action, ListScreen, ScreenKind};
use tabula::{SortDirection, TableRow};

fn screen(prefs: &PrefsStore) -> ListScreen<Property> {
    ListScreen::new(
        ScreenKind::Properties,
        demo::properties(42),
        prefs.clone(),
        &AdminConfig::default(),
    )
}

fn rent(row: &Arc<Property>) -> f64 {
    row.monthly_rent
}

#[tokio::test]
async fn test_open_applies_stored_prefs() {
    let prefs = PrefsStore::in_memory();
    prefs
        .set(
            "properties",
            &ListPrefs {
                view_mode: ViewMode::Cards,
                page_size: 25,
            },
        )
        .await
        .unwrap();

    let mut screen = screen(&prefs);
    screen.open().await.unwrap();

    assert_eq!(screen.table().page_size(), 25);
    assert_eq!(screen.table().total_pages(), 2);
    assert_eq!(screen.view_mode(), ViewMode::Cards);
    assert!(screen.table().pending_events().is_empty());
}

#[tokio::test]
async fn test_open_without_prefs_uses_defaults() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();

    assert_eq!(screen.table().page_size(), 10);
    assert_eq!(screen.table().total_pages(), 5);
    assert_eq!(screen.view_mode(), ViewMode::Table);
    assert_eq!(prefs.get("properties").await.unwrap(), None);
}

#[tokio::test]
async fn test_page_size_change_is_persisted() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();
    screen.execute(&Action::Last);

    assert!(screen.execute(&Action::PageSize(50)).changed);
    screen.pump().await.unwrap();

    assert_eq!(screen.table().current_page(), 1);
    let stored = prefs.get("properties").await.unwrap().unwrap();
    assert_eq!(stored.page_size, 50);
    assert_eq!(stored.view_mode, ViewMode::Table);
}

#[tokio::test]
async fn test_view_mode_is_persisted() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();

    assert!(screen.set_view_mode(ViewMode::Cards).await.unwrap());
    assert!(!screen.set_view_mode(ViewMode::Cards).await.unwrap());
    assert_eq!(
        prefs.get("properties").await.unwrap(),
        Some(ListPrefs {
            view_mode: ViewMode::Cards,
            page_size: 10,
        })
    );
}

#[tokio::test]
async fn test_sort_reorders_and_keeps_selection() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();

    screen.execute(&Action::Toggle(1));
    screen.execute(&Action::Toggle(2));
    let selected = screen.table().selected_ids();
    assert_eq!(selected.len(), 2);

    assert!(screen.execute(&Action::Sort("monthly_rent".to_string())).changed);
    screen.pump().await.unwrap();

    let rows = screen.table().rows();
    assert!(rows.windows(2).all(|w| rent(&w[0]) <= rent(&w[1])));
    assert_eq!(screen.table().selected_ids(), selected);

    screen.execute(&Action::Sort("monthly_rent".to_string()));
    screen.pump().await.unwrap();
    let sort = screen.table().sort().unwrap();
    assert_eq!(sort.direction, SortDirection::Descending);
    let rows = screen.table().rows();
    assert!(rows.windows(2).all(|w| rent(&w[0]) >= rent(&w[1])));
}

#[tokio::test]
async fn test_clear_sort_restores_source_order() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();
    let original: Vec<_> = screen.table().rows().iter().map(|r| r.id).collect();

    screen.execute(&Action::Sort("name".to_string()));
    screen.pump().await.unwrap();
    screen.execute(&Action::ClearSort);
    screen.pump().await.unwrap();

    let restored: Vec<_> = screen.table().rows().iter().map(|r| r.id).collect();
    assert_eq!(restored, original);
}

#[tokio::test]
async fn test_unsortable_column_is_rejected() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();

    let outcome = screen.execute(&Action::Sort("street".to_string()));
    assert!(!outcome.changed);
    assert!(outcome.message.is_some());
    assert!(screen.table().sort().is_none());
}

#[tokio::test]
async fn test_filter_starts_from_first_page() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();
    screen.execute(&Action::Last);
    screen.pump().await.unwrap();
    assert_eq!(screen.table().current_page(), 5);

    assert!(screen.set_filter(Some("Zonnehof".to_string())));
    assert_eq!(screen.table().current_page(), 1);
    assert!(screen.table().len() < 42);
    assert!(screen.table().rows().iter().all(|r| r.name.contains("Zonnehof")));

    assert!(!screen.set_filter(Some("  Zonnehof ".to_string())));
    assert!(screen.set_filter(None));
    assert_eq!(screen.table().len(), 42);
}

#[tokio::test]
async fn test_shorter_refresh_clamps_page_and_keeps_selection() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();
    screen.execute(&Action::Toggle(3));
    let selected = screen.table().selected_ids();
    screen.execute(&Action::Last);
    screen.pump().await.unwrap();

    let refreshed: Vec<_> = demo::properties(12).into_iter().map(Arc::new).collect();
    screen.replace_source(refreshed);
    screen.pump().await.unwrap();

    assert_eq!(screen.table().total_pages(), 2);
    assert_eq!(screen.table().current_page(), 2);
    assert_eq!(screen.table().visible_rows().len(), 2);
    assert_eq!(screen.table().selected_ids(), selected);
}

#[tokio::test]
async fn test_open_row_records_click() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();
    screen.execute(&Action::Next);

    let outcome = screen.execute(&Action::Open(3));
    screen.pump().await.unwrap();

    let opened = screen.opened().unwrap();
    assert_eq!(opened.key(), Some(13i64.into()));
    assert!(outcome.message.unwrap().contains(&opened.name));
    assert!(!screen.execute(&Action::Open(11)).changed);
}

#[tokio::test]
async fn test_toggle_outside_page_is_reported() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();

    let outcome = screen.execute(&Action::Toggle(11));
    assert!(!outcome.changed);
    assert_eq!(outcome.message.as_deref(), Some("no row 11 on this page"));
    assert_eq!(screen.table().selected_count(), 0);
}

#[tokio::test]
async fn test_reopen_keeps_current_page() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();
    assert!(screen.execute(&Action::GoTo(3)).changed);
    screen.pump().await.unwrap();

    screen.open().await.unwrap();
    assert_eq!(screen.table().current_page(), 3);
    assert!(screen.table().pending_events().is_empty());
}

#[tokio::test]
async fn test_reopen_with_new_stored_size_starts_over() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();
    screen.execute(&Action::GoTo(3));
    screen.pump().await.unwrap();

    prefs
        .set("properties", &ListPrefs::with_page_size(25))
        .await
        .unwrap();
    screen.open().await.unwrap();
    assert_eq!(screen.table().page_size(), 25);
    assert_eq!(screen.table().current_page(), 1);
}

#[tokio::test]
async fn test_zero_page_and_size_are_rejected() {
    let prefs = PrefsStore::in_memory();
    let mut screen = screen(&prefs);
    screen.open().await.unwrap();

    let outcome = screen.execute(&Action::GoTo(0));
    assert!(!outcome.changed);
    assert_eq!(outcome.message.as_deref(), Some("page 0 is outside 1–5"));

    let outcome = screen.execute(&Action::PageSize(0));
    assert!(!outcome.changed);
    assert_eq!(screen.table().page_size(), 10);
}
