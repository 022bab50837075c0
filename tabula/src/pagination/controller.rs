//! Pagination controller.

use crate::error::PaginationError;
use crate::window::{PageToken, compute_window};

use super::accessor::ValueAccessor;
use super::state::PaginationState;

/// Page sizes offered by a page-size picker unless configured otherwise.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

type ChangeCallback = Box<dyn FnMut(usize) + Send>;

/// Navigation state machine over [`PaginationState`].
///
/// Every navigation method is a silent no-op when the controller is
/// disabled, when the target page is outside `1..=total_pages`, or when the
/// target is already the current page. Successful navigation returns the new
/// page and notifies the callback registered through [`ValueAccessor`].
///
/// The current page may be seeded once from an external value with
/// [`sync_from_input`](Self::sync_from_input); after that the controller is
/// authoritative until [`reset_sync`](Self::reset_sync) is called.
pub struct Paginator {
    state: PaginationState,
    disabled: bool,
    /// Whether the current page has been seeded from external input.
    initialized: bool,
    page_size_options: Vec<usize>,
    on_change: Option<ChangeCallback>,
}

impl std::fmt::Debug for Paginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("state", &self.state)
            .field("disabled", &self.disabled)
            .field("initialized", &self.initialized)
            .field("page_size_options", &self.page_size_options)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PaginationState::default().page_size)
    }
}

impl Paginator {
    /// Create a controller on page 1 with no items.
    pub fn new(page_size: usize) -> Self {
        Self {
            state: PaginationState::new(page_size),
            disabled: false,
            initialized: false,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            on_change: None,
        }
    }

    /// Set the page sizes offered to the user.
    pub fn with_page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        let mut options: Vec<usize> = options.into().into_iter().filter(|&s| s > 0).collect();
        options.sort_unstable();
        options.dedup();
        self.page_size_options = options;
        self
    }

    /// Set the total item count.
    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.state.total_items = total_items;
        self
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// Snapshot of the pagination state.
    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Get the current page (1-based).
    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    /// Get the page size.
    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    /// Get the total item count.
    pub fn total_items(&self) -> usize {
        self.state.total_items
    }

    /// Get the number of pages (at least 1).
    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    /// Get the page sizes offered to the user.
    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Check if navigation is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable navigation.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether a "previous" control should be enabled.
    pub fn can_go_previous(&self) -> bool {
        !self.disabled && self.state.current_page > 1
    }

    /// Whether a "next" control should be enabled.
    pub fn can_go_next(&self) -> bool {
        !self.disabled && self.state.current_page < self.total_pages()
    }

    /// The page window for the current state.
    pub fn window(&self) -> Vec<PageToken> {
        compute_window(self.state.current_page, self.total_pages())
    }

    /// 1-based numbers of the first and last item on the current page.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        self.state.item_range()
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Go to page `page`, reporting why the request was rejected.
    pub fn try_go_to_page(&mut self, page: usize) -> Result<usize, PaginationError> {
        if self.disabled {
            return Err(PaginationError::Disabled);
        }
        let total_pages = self.total_pages();
        if page == 0 || page > total_pages {
            return Err(PaginationError::PageOutOfRange { page, total_pages });
        }
        if page == self.state.current_page {
            return Err(PaginationError::AlreadyOnPage(page));
        }
        self.state.current_page = page;
        self.notify(page);
        Ok(page)
    }

    /// Go to page `page`. Returns the new page, or `None` if nothing changed.
    ///
    /// Pages are 1-based; passing 0 is a caller bug and asserts in debug
    /// builds. Release builds ignore it like any other out-of-range page.
    pub fn go_to_page(&mut self, page: usize) -> Option<usize> {
        debug_assert!(page != 0, "Paginator::go_to_page: pages start at 1");
        self.navigate(page)
    }

    fn navigate(&mut self, page: usize) -> Option<usize> {
        match self.try_go_to_page(page) {
            Ok(page) => {
                log::debug!("Paginator: moved to page {}", page);
                Some(page)
            }
            Err(e) => {
                log::debug!("Paginator: ignored request for page {}: {}", page, e);
                None
            }
        }
    }

    /// Go to the first page.
    pub fn go_to_first(&mut self) -> Option<usize> {
        self.navigate(1)
    }

    /// Go to the previous page.
    pub fn go_to_previous(&mut self) -> Option<usize> {
        let target = self.state.current_page.checked_sub(1)?;
        self.navigate(target)
    }

    /// Go to the next page.
    pub fn go_to_next(&mut self) -> Option<usize> {
        self.navigate(self.state.current_page.saturating_add(1))
    }

    /// Go to the last page.
    pub fn go_to_last(&mut self) -> Option<usize> {
        self.navigate(self.total_pages())
    }

    /// Change the page size and return to page 1.
    ///
    /// The page is reset even when the size is unchanged. A zero size is a
    /// caller bug: it asserts in debug builds and is clamped to 1 in release
    /// builds. Returns `false` when disabled.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        debug_assert!(page_size > 0, "Paginator::set_page_size: page size must be at least 1");
        if self.disabled {
            log::debug!("Paginator: ignored page size change while disabled");
            return false;
        }
        if page_size == 0 {
            log::warn!("Paginator: page size 0 requested, using 1");
        }
        self.state.page_size = page_size.max(1);
        if self.state.current_page != 1 {
            self.state.current_page = 1;
            self.notify(1);
        }
        true
    }

    /// Update the total item count.
    ///
    /// The current page is left alone even if it is now past the end; call
    /// [`clamp_current_page`](Self::clamp_current_page) to pull it back.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.state.total_items = total_items;
    }

    /// Move the current page back into `1..=total_pages` if it drifted out.
    ///
    /// Works while disabled, since it repairs state rather than navigating.
    pub fn clamp_current_page(&mut self) -> Option<usize> {
        let clamped = self.state.current_page.clamp(1, self.total_pages());
        if clamped == self.state.current_page {
            return None;
        }
        log::debug!(
            "Paginator: clamped page {} to {}",
            self.state.current_page,
            clamped
        );
        self.state.current_page = clamped;
        self.notify(clamped);
        Some(clamped)
    }

    // -------------------------------------------------------------------------
    // External synchronization
    // -------------------------------------------------------------------------

    /// Seed the current page from an externally supplied value.
    ///
    /// Only the first call after construction (or after
    /// [`reset_sync`](Self::reset_sync)) takes effect; later calls return
    /// `false` and leave user navigation untouched. The value is clamped
    /// into range and does not notify the change callback.
    pub fn sync_from_input(&mut self, page: usize) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.state.current_page = page.clamp(1, self.total_pages());
        true
    }

    /// Allow the next [`sync_from_input`](Self::sync_from_input) to apply.
    pub fn reset_sync(&mut self) {
        self.initialized = false;
    }

    /// Check if the current page has been seeded from external input.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn notify(&mut self, page: usize) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(page);
        }
    }
}

impl ValueAccessor for Paginator {
    type Value = usize;

    fn value(&self) -> usize {
        self.state.current_page
    }

    fn write_value(&mut self, page: usize) {
        self.state.current_page = page.clamp(1, self.total_pages());
    }

    fn register_on_change(&mut self, callback: Box<dyn FnMut(usize) + Send>) {
        self.on_change = Some(callback);
    }

    fn set_disabled_state(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator(total_items: usize) -> Paginator {
        Paginator::new(10).with_total_items(total_items)
    }

    #[test]
    fn test_repeat_go_to_is_noop() {
        let mut p = paginator(100);
        assert_eq!(p.go_to_page(3), Some(3));
        assert_eq!(p.go_to_page(3), None);
        assert_eq!(p.try_go_to_page(3), Err(PaginationError::AlreadyOnPage(3)));
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut p = paginator(100);
        assert_eq!(
            p.try_go_to_page(0),
            Err(PaginationError::PageOutOfRange {
                page: 0,
                total_pages: 10
            })
        );
        assert_eq!(p.go_to_page(11), None);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.go_to_previous(), None);
    }

    #[test]
    fn test_disabled_blocks_everything() {
        let mut p = paginator(100);
        p.set_disabled(true);
        assert_eq!(p.go_to_next(), None);
        assert_eq!(p.go_to_last(), None);
        assert!(!p.set_page_size(25));
        assert!(!p.can_go_next());
        assert_eq!(p.try_go_to_page(2), Err(PaginationError::Disabled));
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut p = paginator(100);
        p.go_to_last();
        assert!(p.set_page_size(25));
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 4);
    }

    #[test]
    fn test_previous_from_first_page_is_noop() {
        let mut p = paginator(100);
        assert_eq!(p.go_to_previous(), None);
        assert_eq!(p.go_to_first(), None);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pages start at 1")]
    fn test_page_zero_asserts_in_debug() {
        paginator(100).go_to_page(0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "page size must be at least 1")]
    fn test_zero_page_size_asserts_in_debug() {
        paginator(3).set_page_size(0);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_zero_page_size_is_clamped() {
        let mut p = paginator(3);
        p.set_page_size(0);
        assert_eq!(p.page_size(), 1);
        assert_eq!(p.total_pages(), 3);
    }

    #[test]
    fn test_sync_only_applies_once() {
        let mut p = paginator(100);
        assert!(p.sync_from_input(4));
        assert_eq!(p.current_page(), 4);
        p.go_to_next();
        assert!(!p.sync_from_input(2));
        assert_eq!(p.current_page(), 5);
        p.reset_sync();
        assert!(p.sync_from_input(2));
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn test_page_size_options_are_normalized() {
        let p = Paginator::new(10).with_page_size_options(vec![50, 0, 10, 50, 20]);
        assert_eq!(p.page_size_options(), &[10, 20, 50]);
    }
}
