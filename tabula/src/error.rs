//! Error types for the strict pagination APIs.
//!
//! The regular navigation methods never fail: out-of-range requests are
//! ignored. These errors are only returned by the `try_*` variants, for
//! callers that build pagination state from untrusted input.

use thiserror::Error;

/// Pagination error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("page {page} is outside 1..={total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },
    #[error("pagination is disabled")]
    Disabled,
    #[error("already on page {0}")]
    AlreadyOnPage(usize),
}
