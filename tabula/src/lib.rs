//! Paginated, selectable, sortable tabular data.
//!
//! The pieces, leaves first:
//! - [`compute_window`]: page numbers and ellipses for a pagination control
//! - [`Paginator`]: page navigation with boundary and disabled handling
//! - [`resolve_id`]: stable row identity for selection
//! - [`Selection`]: identity set with per-page "select all"
//! - [`DataTable`]: composes the above over an in-memory dataset
//!
//! Everything here is synchronous and free of I/O.

pub mod column;
pub mod error;
pub mod events;
pub mod identity;
pub mod pagination;
pub mod selection;
pub mod sort;
pub mod table;
pub mod window;

pub use column::{Alignment, CellValue, Column};
pub use error::PaginationError;
pub use events::{EventQueue, MAX_PENDING_EVENTS, TableEvent};
pub use identity::{ID_FIELDS, RefIdentity, RowIdentity, RowKey, TableRow, resolve_id};
pub use pagination::{
    DEFAULT_PAGE_SIZE_OPTIONS, PaginationState, Paginator, ValueAccessor, total_pages,
};
pub use selection::{Selection, SelectionMode};
pub use sort::{SortDirection, SortState, sort_rows};
pub use table::{DataTable, TableView, ViewRow};
pub use window::{MAX_FULL_WINDOW, PageToken, compute_window};

pub mod prelude {
    pub use crate::column::{Alignment, CellValue, Column};
    pub use crate::events::TableEvent;
    pub use crate::identity::{RowIdentity, RowKey, TableRow};
    pub use crate::pagination::{Paginator, ValueAccessor};
    pub use crate::selection::SelectionMode;
    pub use crate::sort::{SortDirection, SortState};
    pub use crate::table::{DataTable, TableView};
    pub use crate::window::PageToken;
}
