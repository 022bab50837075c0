//! Plain pagination state and its derived values.

use serde::{Deserialize, Serialize};

use crate::error::PaginationError;

/// Number of pages needed for `total_items` at `page_size` items per page.
///
/// Always at least 1, so an empty dataset still has a (blank) first page.
/// A zero page size is treated as 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Current page, page size and item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationState {
    /// Current page (1-based).
    pub current_page: usize,
    /// Items per page (at least 1).
    pub page_size: usize,
    /// Total number of items across all pages.
    pub total_items: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: 10,
            total_items: 0,
        }
    }
}

impl PaginationState {
    /// Create state on page 1 with the given page size and no items.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    /// Create state, rejecting a zero page size or an out-of-range page.
    pub fn try_new(
        current_page: usize,
        page_size: usize,
        total_items: usize,
    ) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        let total_pages = total_pages(total_items, page_size);
        if current_page == 0 || current_page > total_pages {
            return Err(PaginationError::PageOutOfRange {
                page: current_page,
                total_pages,
            });
        }
        Ok(Self {
            current_page,
            page_size,
            total_items,
        })
    }

    /// Number of pages (at least 1).
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Index of the first item on the current page.
    pub fn offset(&self) -> usize {
        self.current_page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Index range of the current page within the dataset.
    ///
    /// Empty (but never inverted) when the current page lies past the end.
    pub fn slice_range(&self) -> std::ops::Range<usize> {
        let start = self.offset().min(self.total_items);
        let end = self.offset().saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    /// Number of items on the current page.
    pub fn visible_len(&self) -> usize {
        self.slice_range().len()
    }

    /// 1-based numbers of the first and last item on the current page.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let range = self.slice_range();
        if range.is_empty() {
            None
        } else {
            Some((range.start + 1, range.end))
        }
    }

    /// Check if `page` is a valid page number.
    pub fn contains_page(&self, page: usize) -> bool {
        (1..=self.total_pages()).contains(&page)
    }

    /// Check if the current page is past the last page.
    pub fn is_out_of_range(&self) -> bool {
        !self.contains_page(self.current_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_never_zero() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_slice_range_last_partial_page() {
        let state = PaginationState::try_new(3, 10, 25).unwrap();
        assert_eq!(state.slice_range(), 20..25);
        assert_eq!(state.item_range(), Some((21, 25)));
    }

    #[test]
    fn test_slice_range_past_end_is_empty() {
        let state = PaginationState {
            current_page: 4,
            page_size: 10,
            total_items: 25,
        };
        assert!(state.slice_range().is_empty());
        assert_eq!(state.item_range(), None);
        assert!(state.is_out_of_range());
    }

    #[test]
    fn test_try_new_rejects_bad_input() {
        assert_eq!(
            PaginationState::try_new(1, 0, 5),
            Err(PaginationError::ZeroPageSize)
        );
        assert_eq!(
            PaginationState::try_new(3, 10, 15),
            Err(PaginationError::PageOutOfRange {
                page: 3,
                total_pages: 2
            })
        );
        assert!(PaginationState::try_new(1, 10, 0).is_ok());
    }
}
