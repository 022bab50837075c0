//! Pagination state and navigation.

mod accessor;
mod controller;
mod state;

pub use accessor::ValueAccessor;
pub use controller::{DEFAULT_PAGE_SIZE_OPTIONS, Paginator};
pub use state::{PaginationState, total_pages};
