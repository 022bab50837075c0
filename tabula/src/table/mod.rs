//! Data table - pagination, selection and sort state over an in-memory
//! dataset.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tabula::{Column, DataTable, TableEvent};
//!
//! let rows = (1..=42).map(|i| json!({ "id": i, "unit": format!("Unit {}", i) }));
//! let mut table = DataTable::with_rows(
//!     vec![Column::new("unit", "Unit").sortable()],
//!     rows.collect(),
//! )
//! .with_page_size(10);
//!
//! table.toggle_row_at(0);
//! table.go_to_next();
//! table.go_to_previous();
//! assert!(table.is_selected_at(0));
//!
//! let view = table.view();
//! assert_eq!(view.total_pages, 5);
//!
//! // The host drains events after every action.
//! for event in table.drain_events() {
//!     match event {
//!         TableEvent::SelectionChange(ids) => assert_eq!(ids.len(), 1),
//!         TableEvent::PageChange(page) => assert_eq!(page, 1),
//!         other => panic!("unexpected {}", other.name()),
//!     }
//! }
//! assert!(table.pending_events().is_empty());
//! ```

mod state;
mod view;

pub use state::DataTable;
pub use view::{TableView, ViewRow};
