//! Pagination state.

use std::ops::Range;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination state for the filtered and sorted rows.
///
/// `page_count` and `total_rows` are derived: the store rewrites them after
/// every re-derivation, together with the clamped `page_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Creates pagination on the first page. A zero size falls back to the default.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            page_count: 0,
            total_rows: 0,
        }
    }

    /// Number of pages needed for `total_rows` rows.
    pub fn page_count_for(total_rows: usize, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        total_rows.div_ceil(page_size)
    }

    /// Recompute the derived fields for a new row count and clamp the page index.
    pub fn reconcile(mut self, total_rows: usize) -> Self {
        self.total_rows = total_rows;
        self.page_count = Self::page_count_for(total_rows, self.page_size);
        self.page_index = self.page_index.min(self.page_count.saturating_sub(1));
        self
    }

    /// Apply a partial update.
    ///
    /// A zero page size is ignored. Changing the page size keeps the index;
    /// the next reconcile clamps it.
    pub fn merge(mut self, patch: PaginationPatch) -> Self {
        if let Some(size) = patch.page_size {
            if size > 0 {
                self.page_size = size;
            } else {
                log::debug!("pagination: ignoring zero page size");
            }
        }
        if let Some(index) = patch.page_index {
            self.page_index = index;
        }
        self
    }

    /// Row index range covered by the current page.
    pub fn window(&self) -> Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(self.total_rows);
        let end = start.saturating_add(self.page_size).min(self.total_rows);
        start..end
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

/// Partial pagination update; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationPatch {
    pub page_index: Option<usize>,
    pub page_size: Option<usize>,
}

impl PaginationPatch {
    /// Patch that moves to a page.
    pub fn page(index: usize) -> Self {
        Self {
            page_index: Some(index),
            page_size: None,
        }
    }

    /// Patch that changes the page size.
    pub fn size(size: usize) -> Self {
        Self {
            page_index: None,
            page_size: Some(size),
        }
    }
}
