//! Fuzzy search over list rows.

use std::sync::Arc;

use estate_admin::demo;
use estate_admin::filter::{filter_rows, fuzzy_filter, search_text};
use estate_admin::records::Contact;
use estate_admin::screen::ScreenKind;

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_blank_query_matches_everything() {
    let items = labels(&["Elm Court", "Riverside"]);
    assert_eq!(fuzzy_filter("", &items).len(), 2);
    assert_eq!(fuzzy_filter("   ", &items).len(), 2);
}

#[test]
fn test_matches_keep_input_order() {
    let items = labels(&["Riverside 1", "Elm Court 1", "Riverside 2"]);
    let indices: Vec<_> = fuzzy_filter("river", &items)
        .into_iter()
        .map(|m| m.index)
        .collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn test_case_insensitive() {
    let items = labels(&["HARBOUR VIEW"]);
    assert_eq!(fuzzy_filter("harbour", &items).len(), 1);
}

#[test]
fn test_no_match() {
    let items = labels(&["Elm Court"]);
    assert!(fuzzy_filter("xyz", &items).is_empty());
}

#[test]
fn test_search_text_skips_empty_cells() {
    let contact = Contact {
        id: "c-1".to_string(),
        first_name: "Anna".to_string(),
        last_name: "Peeters".to_string(),
        company: None,
        email: "anna@example.org".to_string(),
        phone: None,
    };
    let text = search_text(&contact, &ScreenKind::Contacts.columns());
    assert_eq!(text, "Peeters, Anna anna@example.org");
}

#[test]
fn test_filter_rows_shares_row_objects() {
    let rows: Vec<Arc<Contact>> = demo::contacts(40).into_iter().map(Arc::new).collect();
    let columns = ScreenKind::Contacts.columns();
    let matched = filter_rows(&rows, &columns, "anna");
    assert!(!matched.is_empty());
    assert!(matched.len() < rows.len());
    for row in &matched {
        assert!(rows.iter().any(|r| Arc::ptr_eq(r, row)));
    }
}
