//! Data table state.

use std::sync::Arc;

use crate::column::Column;
use crate::events::{EventQueue, TableEvent};
use crate::identity::{RowIdentity, TableRow, resolve_id};
use crate::pagination::{PaginationState, Paginator};
use crate::selection::{Selection, SelectionMode};
use crate::sort::SortState;
use crate::window::PageToken;

use super::view::{TableView, ViewRow};

/// A paginated, selectable, sortable table over an in-memory dataset.
///
/// `DataTable<T>` composes:
/// - a [`Paginator`] over the dataset length
/// - a [`Selection`] keyed by row identity, kept across pages and sorts
/// - single-column sort state (app-controlled)
///
/// Visible rows and selection aggregates are derived on every read. State
/// changes are reported as [`TableEvent`]s which the host drains with
/// [`drain_events`](Self::drain_events) after each action. Undrained state
/// events coalesce to the latest value per kind (see [`EventQueue`]).
///
/// Sorting is app-controlled: [`toggle_sort`](Self::toggle_sort) only
/// records the new state and emits `SortChange`. The app reorders its data
/// (see [`sort_rows`](crate::sort_rows)) and calls
/// [`set_rows`](Self::set_rows).
#[derive(Debug)]
pub struct DataTable<T: TableRow> {
    /// Column definitions.
    columns: Vec<Column>,
    /// The dataset, in display order.
    rows: Vec<Arc<T>>,
    /// Page navigation.
    pager: Paginator,
    /// Selection by row identity.
    selection: Selection,
    /// Current sort state.
    sort: Option<SortState>,
    /// Pending outbound events.
    events: EventQueue<T>,
}

impl<T: TableRow> DataTable<T> {
    /// Create an empty table with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            pager: Paginator::default(),
            selection: Selection::new(),
            sort: None,
            events: EventQueue::new(),
        }
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<T>) -> Self {
        let mut table = Self::new(columns);
        table.set_rows(rows);
        table
    }

    /// Set the initial page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        let total_items = self.rows.len();
        let options = self.pager.page_size_options().to_vec();
        self.pager = Paginator::new(page_size)
            .with_page_size_options(options)
            .with_total_items(total_items);
        self
    }

    /// Set the page sizes offered to the user.
    pub fn with_page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.pager = self.pager.with_page_size_options(options);
        self
    }

    /// Set the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection = Selection::with_mode(mode);
        self
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Find a column by key.
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Replace the column definitions.
    ///
    /// Clears the sort state if its column is gone or no longer sortable.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        let sort_still_valid = self
            .sort
            .as_ref()
            .is_none_or(|s| self.column(&s.column).is_some_and(|c| c.sortable));
        if !sort_still_valid {
            self.clear_sort();
        }
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get all rows in display order.
    pub fn rows(&self) -> &[Arc<T>] {
        &self.rows
    }

    /// Get the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace the dataset.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.set_shared_rows(rows.into_iter().map(Arc::new).collect());
    }

    /// Replace the dataset with rows the caller already shares.
    ///
    /// Rows without a key keep their identity only if the same `Arc` is
    /// passed again. The selection and the current page are left as they
    /// are; a page past the new end shows no rows until the caller invokes
    /// [`clamp_page`](Self::clamp_page).
    pub fn set_shared_rows(&mut self, rows: Vec<Arc<T>>) {
        self.rows = rows;
        self.pager.set_total_items(self.rows.len());
    }

    /// Rows on the current page.
    ///
    /// Empty when the current page lies past the end of the dataset.
    pub fn visible_rows(&self) -> &[Arc<T>] {
        let range = self.pager.state().slice_range();
        &self.rows[range]
    }

    /// Identities of the rows on the current page.
    pub fn visible_ids(&self) -> Vec<RowIdentity> {
        self.visible_rows().iter().map(resolve_id).collect()
    }

    /// Get a row on the current page by its index within the page.
    pub fn visible_row(&self, index: usize) -> Option<&Arc<T>> {
        self.visible_rows().get(index)
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the pagination controller.
    pub fn paginator(&self) -> &Paginator {
        &self.pager
    }

    /// Snapshot of the pagination state.
    pub fn pagination(&self) -> PaginationState {
        self.pager.state()
    }

    /// Get the current page (1-based).
    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// Get the page size.
    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    /// Get the number of pages (at least 1).
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages()
    }

    /// The page window for the current page.
    pub fn window(&self) -> Vec<PageToken> {
        self.pager.window()
    }

    /// Enable or disable page navigation.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.pager.set_disabled(disabled);
    }

    /// Go to a page. Returns the new page, or `None` if nothing changed.
    pub fn go_to_page(&mut self, page: usize) -> Option<usize> {
        let moved = self.pager.go_to_page(page);
        self.emit_page(moved)
    }

    /// Go to the first page.
    pub fn go_to_first(&mut self) -> Option<usize> {
        let moved = self.pager.go_to_first();
        self.emit_page(moved)
    }

    /// Go to the previous page.
    pub fn go_to_previous(&mut self) -> Option<usize> {
        let moved = self.pager.go_to_previous();
        self.emit_page(moved)
    }

    /// Go to the next page.
    pub fn go_to_next(&mut self) -> Option<usize> {
        let moved = self.pager.go_to_next();
        self.emit_page(moved)
    }

    /// Go to the last page.
    pub fn go_to_last(&mut self) -> Option<usize> {
        let moved = self.pager.go_to_last();
        self.emit_page(moved)
    }

    /// Change the page size and return to page 1.
    ///
    /// Emits `PageSizeChange` if the size changed and `PageChange` if the
    /// page moved. Returns false when navigation is disabled.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        let before = self.pager.state();
        if !self.pager.set_page_size(page_size) {
            return false;
        }
        let after = self.pager.state();
        if after.page_size != before.page_size {
            self.events.push(TableEvent::PageSizeChange(after.page_size));
        }
        if after.current_page != before.current_page {
            self.events.push(TableEvent::PageChange(after.current_page));
        }
        true
    }

    /// Pull the current page back into range after the dataset shrank.
    pub fn clamp_page(&mut self) -> Option<usize> {
        let moved = self.pager.clamp_current_page();
        self.emit_page(moved)
    }

    /// Seed the current page from an external value, once.
    ///
    /// See [`Paginator::sync_from_input`]. Emits nothing.
    pub fn sync_page_from_input(&mut self, page: usize) -> bool {
        self.pager.sync_from_input(page)
    }

    /// Allow the next [`sync_page_from_input`](Self::sync_page_from_input)
    /// to apply.
    pub fn reset_page_sync(&mut self) {
        self.pager.reset_sync();
    }

    fn emit_page(&mut self, moved: Option<usize>) -> Option<usize> {
        if let Some(page) = moved {
            self.events.push(TableEvent::PageChange(page));
        }
        moved
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Change the selection mode.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        if self.selection.set_mode(mode) {
            self.emit_selection();
        }
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, row: &Arc<T>) -> bool {
        self.selection.is_selected(&resolve_id(row))
    }

    /// Check if the row at `index` on the current page is selected.
    pub fn is_selected_at(&self, index: usize) -> bool {
        self.visible_row(index)
            .is_some_and(|row| self.is_selected(row))
    }

    /// Toggle selection of a row. Returns true if the selection changed.
    pub fn toggle_row(&mut self, row: &Arc<T>) -> bool {
        let changed = self.selection.toggle(resolve_id(row));
        if changed {
            self.emit_selection();
        }
        changed
    }

    /// Toggle selection of the row at `index` on the current page.
    pub fn toggle_row_at(&mut self, index: usize) -> bool {
        match self.visible_row(index).cloned() {
            Some(row) => self.toggle_row(&row),
            None => {
                log::debug!("DataTable: no visible row at index {}", index);
                false
            }
        }
    }

    /// Select or deselect every row on the current page.
    ///
    /// Selections on other pages are never touched.
    pub fn toggle_select_all_visible(&mut self) -> bool {
        let visible = self.visible_ids();
        let changed = self.selection.toggle_all_visible(&visible);
        if changed {
            self.emit_selection();
        }
        changed
    }

    /// Check if every row on the current page is selected.
    pub fn all_visible_selected(&self) -> bool {
        self.selection.all_selected(&self.visible_ids())
    }

    /// Check if some, but not all, rows on the current page are selected.
    pub fn some_visible_selected(&self) -> bool {
        self.selection.some_selected(&self.visible_ids())
    }

    /// Number of selected rows across all pages.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Identities of all selected rows.
    pub fn selected_ids(&self) -> Vec<RowIdentity> {
        self.selection.ids()
    }

    /// Rows of the current dataset that are selected, in display order.
    ///
    /// Identities whose rows are no longer in the dataset are skipped.
    pub fn selected_rows(&self) -> Vec<Arc<T>> {
        self.rows
            .iter()
            .filter(|row| self.is_selected(row))
            .cloned()
            .collect()
    }

    /// Clear the selection. Returns the identities that were deselected.
    pub fn clear_selection(&mut self) -> Vec<RowIdentity> {
        let removed = self.selection.clear();
        if !removed.is_empty() {
            self.emit_selection();
        }
        removed
    }

    fn emit_selection(&mut self) {
        let ids = self.selection.as_set().clone();
        self.events.push(TableEvent::SelectionChange(ids));
    }

    // -------------------------------------------------------------------------
    // Activation
    // -------------------------------------------------------------------------

    /// Activate the row at `index` on the current page.
    pub fn click_row(&mut self, index: usize) -> Option<Arc<T>> {
        let row = self.visible_row(index).cloned()?;
        self.events.push(TableEvent::RowClick(Arc::clone(&row)));
        Some(row)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Toggle sort for a column.
    ///
    /// If the column is already sorted, flips the direction; otherwise sorts
    /// ascending. Unknown or unsortable columns are ignored. Returns the new
    /// sort state.
    pub fn toggle_sort(&mut self, column: &str) -> Option<SortState> {
        if !self.column(column).is_some_and(|c| c.sortable) {
            log::debug!("DataTable: column '{}' is not sortable", column);
            return None;
        }
        let next = SortState::toggled(self.sort.as_ref(), column);
        self.sort = Some(next.clone());
        self.events.push(TableEvent::SortChange(Some(next.clone())));
        Some(next)
    }

    /// Set the sort state directly. Returns false for unsortable columns.
    pub fn set_sort(&mut self, sort: SortState) -> bool {
        if !self.column(&sort.column).is_some_and(|c| c.sortable) {
            return false;
        }
        if self.sort.as_ref() != Some(&sort) {
            self.sort = Some(sort.clone());
            self.events.push(TableEvent::SortChange(Some(sort)));
        }
        true
    }

    /// Clear the sort state.
    pub fn clear_sort(&mut self) {
        if self.sort.take().is_some() {
            self.events.push(TableEvent::SortChange(None));
        }
    }

    // -------------------------------------------------------------------------
    // Events and views
    // -------------------------------------------------------------------------

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<TableEvent<T>> {
        self.events.drain()
    }

    /// Look at pending events without taking them.
    pub fn pending_events(&self) -> &[TableEvent<T>] {
        self.events.pending()
    }

    /// Derive a render snapshot of the current page.
    pub fn view(&self) -> TableView<T> {
        let rows: Vec<ViewRow<T>> = self
            .visible_rows()
            .iter()
            .map(|row| {
                let id = resolve_id(row);
                let selected = self.selection.is_selected(&id);
                ViewRow {
                    row: Arc::clone(row),
                    id,
                    selected,
                }
            })
            .collect();
        let selected_on_page = rows.iter().filter(|r| r.selected).count();
        let state = self.pager.state();

        TableView {
            current_page: state.current_page,
            page_size: state.page_size,
            total_items: state.total_items,
            total_pages: state.total_pages(),
            window: self.pager.window(),
            item_range: state.item_range(),
            can_go_previous: self.pager.can_go_previous(),
            can_go_next: self.pager.can_go_next(),
            disabled: self.pager.is_disabled(),
            all_selected: !rows.is_empty() && selected_on_page == rows.len(),
            some_selected: selected_on_page > 0 && selected_on_page < rows.len(),
            selected_count: self.selection.len(),
            sort: self.sort.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn table(count: i64) -> DataTable<Value> {
        let rows = (1..=count).map(|i| json!({"id": i, "name": format!("Row {}", i)}));
        DataTable::with_rows(
            vec![Column::new("name", "Name").sortable(), Column::new("id", "Id")],
            rows.collect(),
        )
        .with_page_size(10)
    }

    #[test]
    fn test_visible_rows_slice() {
        let mut t = table(25);
        assert_eq!(t.visible_rows().len(), 10);
        t.go_to_last();
        assert_eq!(t.visible_rows().len(), 5);
        assert_eq!(t.visible_rows()[0]["id"], 21);
    }

    #[test]
    fn test_shrinking_dataset_empties_page_until_clamped() {
        let mut t = table(25);
        t.go_to_page(3);
        t.drain_events();
        t.set_rows((1..=12).map(|i| json!({"id": i})).collect());
        assert!(t.visible_rows().is_empty());
        assert_eq!(t.clamp_page(), Some(2));
        assert_eq!(t.visible_rows().len(), 2);
        assert!(matches!(t.drain_events()[..], [TableEvent::PageChange(2)]));
    }

    #[test]
    fn test_set_page_size_events() {
        let mut t = table(25);
        t.go_to_page(2);
        t.drain_events();
        t.set_page_size(5);
        let events = t.drain_events();
        assert!(matches!(
            events[..],
            [TableEvent::PageSizeChange(5), TableEvent::PageChange(1)]
        ));
    }

    #[test]
    fn test_toggle_sort_requires_sortable_column() {
        let mut t = table(3);
        assert_eq!(t.toggle_sort("id"), None);
        assert_eq!(t.toggle_sort("name"), Some(SortState::ascending("name")));
        assert_eq!(t.toggle_sort("name"), Some(SortState::descending("name")));
    }

    #[test]
    fn test_set_columns_drops_stale_sort() {
        let mut t = table(3);
        t.toggle_sort("name");
        t.drain_events();
        t.set_columns(vec![Column::new("id", "Id")]);
        assert!(t.sort().is_none());
        assert!(matches!(t.drain_events()[..], [TableEvent::SortChange(None)]));
    }

    #[test]
    fn test_undrained_navigation_keeps_latest_page() {
        let mut t = table(100);
        for _ in 0..50 {
            t.go_to_next();
            t.go_to_previous();
        }
        t.go_to_last();
        assert!(matches!(t.pending_events(), [TableEvent::PageChange(10)]));
    }

    #[test]
    fn test_click_row_emits_row() {
        let mut t = table(3);
        let row = t.click_row(1).unwrap();
        assert_eq!(row["id"], 2);
        assert!(t.click_row(5).is_none());
        assert_eq!(t.drain_events().len(), 1);
    }
}
