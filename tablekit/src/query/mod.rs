//! Query pipeline: global filter, column filters, multi-sort, pagination.
//!
//! Everything here is pure. [`derive`] takes the dataset, the column
//! registry and the current query state and returns row indices; it never
//! mutates its inputs.

mod filter;
mod page;
mod pipeline;
mod sort;

pub use filter::{Filters, GlobalFilterMode};
pub use page::{DEFAULT_PAGE_SIZE, Pagination, PaginationPatch};
pub use pipeline::{DerivedView, Query, derive};
pub use sort::{SortEntry, Sorting, compare_values, toggle_sort};
