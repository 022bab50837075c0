//! Render snapshot of a table page.

use std::sync::Arc;

use crate::identity::RowIdentity;
use crate::sort::SortState;
use crate::window::PageToken;

/// A row on the current page with its derived state.
#[derive(Debug, Clone)]
pub struct ViewRow<T> {
    pub row: Arc<T>,
    pub id: RowIdentity,
    pub selected: bool,
}

/// Everything a renderer needs to draw one page of a table.
///
/// Produced by [`DataTable::view`](super::DataTable::view). Holds shared
/// references to the rows, never copies of them.
#[derive(Debug, Clone)]
pub struct TableView<T> {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// Page numbers and ellipses for the pagination control.
    pub window: Vec<PageToken>,
    /// 1-based first and last item numbers on this page.
    pub item_range: Option<(usize, usize)>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub disabled: bool,
    /// Every row on this page is selected (false for an empty page).
    pub all_selected: bool,
    /// Some, but not all, rows on this page are selected.
    pub some_selected: bool,
    /// Selected rows across all pages.
    pub selected_count: usize,
    pub sort: Option<SortState>,
    pub rows: Vec<ViewRow<T>>,
}

impl<T> TableView<T> {
    /// Check if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
