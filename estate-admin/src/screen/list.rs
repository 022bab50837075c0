//! A list screen: one dataset, one table, stored preferences.

use std::sync::Arc;

use tabula::{DataTable, TableEvent, TableRow, sort_rows};

use crate::config::AdminConfig;
use crate::filter::filter_rows;
use crate::prefs::{ListPrefs, PrefsError, PrefsStore, ViewMode};
use crate::render;

use super::action::{Action, Outcome};
use super::kind::ScreenKind;

/// A routed list screen over records of type `T`.
///
/// The screen owns the fetched dataset and does everything the table
/// leaves to its host:
/// - applies stored page size and view mode on [`open`](Self::open)
/// - reorders the dataset when the table's sort state changes
/// - narrows the dataset with the search filter
/// - persists page-size changes
///
/// Table events are handled in [`pump`](Self::pump), which the caller runs
/// after every action.
#[derive(Debug)]
pub struct ListScreen<T: TableRow> {
    kind: ScreenKind,
    /// Rows in the order the data source delivered them.
    source: Vec<Arc<T>>,
    /// `source` in the current sort order.
    sorted: Vec<Arc<T>>,
    table: DataTable<T>,
    filter: Option<String>,
    view_mode: ViewMode,
    prefs: PrefsStore,
    defaults: ListPrefs,
    /// The last record the user opened.
    opened: Option<Arc<T>>,
}

impl<T: TableRow> ListScreen<T> {
    /// Create a screen over already-fetched rows.
    pub fn new(kind: ScreenKind, rows: Vec<T>, prefs: PrefsStore, config: &AdminConfig) -> Self {
        let source: Vec<Arc<T>> = rows.into_iter().map(Arc::new).collect();
        let mut table = DataTable::new(kind.columns())
            .with_page_size(config.default_page_size)
            .with_page_size_options(config.page_size_options.clone());
        table.set_shared_rows(source.clone());

        Self {
            kind,
            sorted: source.clone(),
            source,
            table,
            filter: None,
            view_mode: ViewMode::Table,
            prefs,
            defaults: ListPrefs::with_page_size(config.default_page_size),
            opened: None,
        }
    }

    /// Apply the stored preferences for this route.
    ///
    /// Runs on every switch to the screen. The current page is kept unless
    /// the stored page size differs from the one in use.
    pub async fn open(&mut self) -> Result<(), PrefsError> {
        let prefs = self.prefs.get_or(self.kind.route(), self.defaults).await?;
        let page_size = prefs.page_size.max(1);
        if page_size != self.table.page_size() {
            self.table.set_page_size(page_size);
        }
        self.view_mode = prefs.view_mode;
        // Restored from storage; nothing to write back.
        self.table.drain_events();
        log::info!(
            "Opened {} ({} rows, {} per page, {:?})",
            self.kind,
            self.source.len(),
            self.table.page_size(),
            self.view_mode
        );
        Ok(())
    }

    pub fn kind(&self) -> ScreenKind {
        self.kind
    }

    pub fn table(&self) -> &DataTable<T> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DataTable<T> {
        &mut self.table
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// The last record opened with [`Action::Open`].
    pub fn opened(&self) -> Option<&Arc<T>> {
        self.opened.as_ref()
    }

    /// Total rows delivered by the data source, ignoring the filter.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Replace the dataset after a refetch.
    ///
    /// Sort, filter and selection carry over; the page is clamped if the
    /// new dataset is shorter.
    pub fn replace_source(&mut self, rows: Vec<Arc<T>>) {
        self.source = rows;
        self.resort();
    }

    /// Set or clear the search filter. Returns true if it changed.
    ///
    /// A new filter starts from the first page.
    pub fn set_filter(&mut self, query: Option<String>) -> bool {
        let query = query
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        if query == self.filter {
            return false;
        }
        self.filter = query;
        self.apply_filter();
        self.table.go_to_first();
        true
    }

    fn resort(&mut self) {
        self.sorted = self.source.clone();
        if let Some(sort) = self.table.sort() {
            sort_rows(&mut self.sorted, sort);
        }
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let rows = match &self.filter {
            Some(query) => filter_rows(&self.sorted, self.table.columns(), query),
            None => self.sorted.clone(),
        };
        self.table.set_shared_rows(rows);
        self.table.clamp_page();
    }

    /// Apply a user action to the table.
    pub fn execute(&mut self, action: &Action) -> Outcome {
        let table = &mut self.table;
        match action {
            Action::First => Outcome::changed(table.go_to_first().is_some()),
            Action::Previous => Outcome::changed(table.go_to_previous().is_some()),
            Action::Next => Outcome::changed(table.go_to_next().is_some()),
            Action::Last => Outcome::changed(table.go_to_last().is_some()),
            Action::GoTo(page) => {
                if !table.pagination().contains_page(*page) {
                    Outcome::message(
                        false,
                        format!("page {} is outside 1–{}", page, table.total_pages()),
                    )
                } else {
                    Outcome::changed(table.go_to_page(*page).is_some())
                }
            }
            Action::PageSize(0) => Outcome::message(false, "page size must be at least 1"),
            Action::PageSize(size) => Outcome::changed(table.set_page_size(*size)),
            Action::Toggle(n) => {
                let Some(index) = n.checked_sub(1).filter(|&i| i < table.visible_rows().len())
                else {
                    return Outcome::message(false, format!("no row {} on this page", n));
                };
                Outcome::changed(table.toggle_row_at(index))
            }
            Action::ToggleAll => Outcome::changed(table.toggle_select_all_visible()),
            Action::ClearSelection => Outcome::changed(!table.clear_selection().is_empty()),
            Action::Sort(column) => match table.toggle_sort(column) {
                Some(_) => Outcome::changed(true),
                None => Outcome::message(false, format!("column '{}' is not sortable", column)),
            },
            Action::ClearSort => {
                let had_sort = table.sort().is_some();
                table.clear_sort();
                Outcome::changed(had_sort)
            }
            Action::Open(n) => {
                let row = n.checked_sub(1).and_then(|index| table.click_row(index));
                match row {
                    Some(row) => {
                        let detail = render::render_detail(row.as_ref(), table.columns());
                        Outcome::message(false, detail)
                    }
                    None => Outcome::message(false, format!("no row {} on this page", n)),
                }
            }
            Action::Filter(query) => Outcome::changed(self.set_filter(query.clone())),
        }
    }

    /// Handle pending table events. Returns how many were handled.
    pub async fn pump(&mut self) -> Result<usize, PrefsError> {
        let mut handled = 0;
        loop {
            let events = self.table.drain_events();
            if events.is_empty() {
                return Ok(handled);
            }
            for event in events {
                handled += 1;
                self.handle_event(event).await?;
            }
        }
    }

    async fn handle_event(&mut self, event: TableEvent<T>) -> Result<(), PrefsError> {
        match event {
            TableEvent::PageChange(page) => {
                log::debug!("{}: page {}", self.kind, page);
            }
            TableEvent::PageSizeChange(size) => {
                let route = self.kind.route();
                self.prefs
                    .update(route, self.defaults, move |prefs| prefs.page_size = size)
                    .await?;
                log::info!("{}: saved page size {}", self.kind, size);
            }
            TableEvent::SelectionChange(ids) => {
                log::debug!("{}: {} selected", self.kind, ids.len());
            }
            TableEvent::RowClick(row) => {
                log::debug!("{}: opened {:?}", self.kind, row.key());
                self.opened = Some(row);
            }
            TableEvent::SortChange(sort) => {
                log::debug!("{}: sort {:?}", self.kind, sort);
                self.resort();
            }
        }
        Ok(())
    }

    /// Switch between table and card layout, persisting the choice.
    pub async fn set_view_mode(&mut self, mode: ViewMode) -> Result<bool, PrefsError> {
        if mode == self.view_mode {
            return Ok(false);
        }
        self.view_mode = mode;
        self.prefs
            .update(self.kind.route(), self.defaults, move |prefs| prefs.view_mode = mode)
            .await?;
        Ok(true)
    }

    /// Render the screen title, the current page and the pager.
    pub fn render(&self) -> String {
        let mut title = format!("{} ({})", self.kind.title(), self.source_len());
        if let Some(query) = &self.filter {
            title.push_str(&format!(" · filter \"{}\": {} match", query, self.table.len()));
        }
        format!(
            "{}\n\n{}",
            title,
            render::render_page(&self.table.view(), self.table.columns(), self.view_mode)
        )
    }
}
