//! Actions accepted by the table store.

use std::collections::HashMap;

use super::state::Density;
use crate::Value;
use crate::query::{Filters, PaginationPatch, Sorting};

/// Every state change a table supports.
///
/// Actions are applied by [`reduce`](super::reduce); the store re-derives
/// its view after each one.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the sort list.
    SetSorting(Sorting),
    /// Advance one column through unsorted → ascending → descending.
    ToggleSort(String),
    /// Replace the global search text. Resets to the first page.
    SetGlobalFilter(String),
    /// Replace all column filters. Resets to the first page.
    SetFilters(Filters),
    /// Set or clear (empty value) one column filter. Resets to the first page.
    SetFilter { column_id: String, value: Value },
    /// Merge a partial pagination update.
    SetPagination(PaginationPatch),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Replace the column visibility map.
    SetColumnVisibility(HashMap<String, bool>),
    /// Replace the column width overrides.
    SetColumnSizing(HashMap<String, f64>),
    SetDensity(Density),
    SetLoading(bool),
    SetError(Option<String>),
    /// Toggle selection of a row by id.
    ToggleRow(String),
    /// Toggle selection of the rows on the current page.
    ToggleAllOnPage,
    ClearSelection,
    /// Open or close a row's detail panel.
    ToggleExpanded(String),
    /// A step of a column resize drag.
    Resize(ResizeStep),
}

/// A step of a column resize drag.
///
/// Steps can only be created inside the crate. A drag is started with
/// [`TableStore::begin_resize`](super::TableStore::begin_resize), whose
/// session releases the host's pointer listeners exactly once.
///
/// ```compile_fail
/// use tablekit::store::{ResizeKind, ResizeStep};
///
/// let step = ResizeStep(ResizeKind::End);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeStep(pub(crate) ResizeKind);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResizeKind {
    /// Capture the start of a drag.
    Begin { column_id: String, pointer_x: f64 },
    /// Commit the width for the current pointer position.
    Move { pointer_x: f64 },
    /// Keep the current width and stop resizing.
    End,
    /// Restore the starting width and stop resizing.
    Abort,
}

impl ResizeKind {
    pub(crate) fn action(self) -> Action {
        Action::Resize(ResizeStep(self))
    }
}
