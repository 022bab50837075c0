//! Type-erased list screen.

use async_trait::async_trait;
use tabula::{Column, TableRow};

use crate::prefs::{PrefsError, ViewMode};

use super::action::{Action, Outcome};
use super::kind::ScreenKind;
use super::list::ListScreen;

/// Object-safe interface over [`ListScreen`], so screens with different
/// record types can live in one registry.
#[async_trait]
pub trait AnyScreen: Send {
    fn kind(&self) -> ScreenKind;

    fn columns(&self) -> &[Column];

    /// Rows after filtering.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn current_page(&self) -> usize;

    fn selected_count(&self) -> usize;

    fn view_mode(&self) -> ViewMode;

    fn filter(&self) -> Option<&str>;

    fn render(&self) -> String;

    fn execute(&mut self, action: &Action) -> Outcome;

    async fn open(&mut self) -> Result<(), PrefsError>;

    async fn pump(&mut self) -> Result<usize, PrefsError>;

    async fn set_view_mode(&mut self, mode: ViewMode) -> Result<bool, PrefsError>;
}

#[async_trait]
impl<T: TableRow> AnyScreen for ListScreen<T> {
    fn kind(&self) -> ScreenKind {
        ListScreen::kind(self)
    }

    fn columns(&self) -> &[Column] {
        self.table().columns()
    }

    fn len(&self) -> usize {
        self.table().len()
    }

    fn current_page(&self) -> usize {
        self.table().current_page()
    }

    fn selected_count(&self) -> usize {
        self.table().selected_count()
    }

    fn view_mode(&self) -> ViewMode {
        ListScreen::view_mode(self)
    }

    fn filter(&self) -> Option<&str> {
        ListScreen::filter(self)
    }

    fn render(&self) -> String {
        ListScreen::render(self)
    }

    fn execute(&mut self, action: &Action) -> Outcome {
        ListScreen::execute(self, action)
    }

    async fn open(&mut self) -> Result<(), PrefsError> {
        ListScreen::open(self).await
    }

    async fn pump(&mut self) -> Result<usize, PrefsError> {
        ListScreen::pump(self).await
    }

    async fn set_view_mode(&mut self, mode: ViewMode) -> Result<bool, PrefsError> {
        ListScreen::set_view_mode(self, mode).await
    }
}
