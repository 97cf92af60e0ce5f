//! The pure state transition function.

use std::collections::HashMap;

use super::action::{Action, ResizeKind, ResizeStep};
use super::state::{ResizeCapture, TableState};
use crate::column::ColumnRegistry;
use crate::options::Features;
use crate::query::{PaginationPatch, toggle_sort};

/// Read-only inputs a transition may consult.
pub struct ReduceContext<'a, R> {
    pub columns: &'a ColumnRegistry<R>,
    pub features: &'a Features,
    /// Ids of the rows on the visible page, in display order.
    pub page_ids: &'a [String],
    /// Row id → dataset index for every row in the dataset.
    pub row_index: &'a HashMap<String, usize>,
}

/// Compute the state that follows `action`.
///
/// Actions for disabled features, unknown columns, non-sortable /
/// non-resizable columns or row ids missing from the dataset leave the state
/// unchanged. Derived pagination fields
/// are not recomputed here; the store reconciles them after re-deriving.
pub fn reduce<R>(state: &TableState, action: Action, cx: &ReduceContext<'_, R>) -> TableState {
    let mut next = state.clone();
    let features = cx.features;

    match action {
        Action::SetSorting(sorting) => {
            if !features.sorting {
                return ignored("sorting", state);
            }
            next.sorting = sorting;
        }
        Action::ToggleSort(column_id) => {
            if !features.sorting {
                return ignored("sorting", state);
            }
            if !cx.columns.get(&column_id).is_some_and(|c| c.sortable) {
                log::debug!("table: column '{}' is not sortable", column_id);
                return state.clone();
            }
            next.sorting = toggle_sort(&state.sorting, &column_id, features.multi_sort);
        }
        Action::SetGlobalFilter(query) => {
            if !features.search {
                return ignored("search", state);
            }
            next.global_filter = query;
            next.pagination.page_index = 0;
        }
        Action::SetFilters(filters) => {
            if !features.filtering {
                return ignored("filtering", state);
            }
            next.filters = filters.into_iter().filter(|(_, v)| !v.is_empty()).collect();
            next.pagination.page_index = 0;
        }
        Action::SetFilter { column_id, value } => {
            if !features.filtering {
                return ignored("filtering", state);
            }
            if value.is_empty() {
                next.filters.remove(&column_id);
            } else {
                next.filters.insert(column_id, value);
            }
            next.pagination.page_index = 0;
        }
        Action::SetPagination(patch) => {
            if !features.pagination {
                return ignored("pagination", state);
            }
            next.pagination = state.pagination.merge(patch);
        }
        Action::NextPage => {
            if !features.pagination {
                return ignored("pagination", state);
            }
            if state.pagination.can_next_page() {
                next.pagination = state
                    .pagination
                    .merge(PaginationPatch::page(state.pagination.page_index + 1));
            }
        }
        Action::PreviousPage => {
            if !features.pagination {
                return ignored("pagination", state);
            }
            if state.pagination.can_previous_page() {
                next.pagination = state
                    .pagination
                    .merge(PaginationPatch::page(state.pagination.page_index - 1));
            }
        }
        Action::FirstPage => {
            if !features.pagination {
                return ignored("pagination", state);
            }
            next.pagination.page_index = 0;
        }
        Action::LastPage => {
            if !features.pagination {
                return ignored("pagination", state);
            }
            next.pagination.page_index = state.pagination.page_count.saturating_sub(1);
        }
        Action::SetColumnVisibility(visibility) => {
            if !features.column_visibility {
                return ignored("column visibility", state);
            }
            next.column_visibility = visibility;
        }
        Action::SetColumnSizing(sizing) => {
            if !features.column_resizing {
                return ignored("column resizing", state);
            }
            next.column_sizing = sizing;
        }
        Action::SetDensity(density) => {
            if !features.density {
                return ignored("density", state);
            }
            next.density = density;
        }
        Action::SetLoading(loading) => next.loading = loading,
        Action::SetError(error) => next.error = error,
        Action::ToggleRow(id) => {
            if !cx.row_index.contains_key(&id) {
                return unknown_row(&id, state);
            }
            next.selection.toggle(&id);
        }
        Action::ToggleAllOnPage => {
            next.selection.toggle_page(cx.page_ids);
        }
        Action::ClearSelection => {
            next.selection.clear();
        }
        Action::ToggleExpanded(id) => {
            if !features.row_expansion {
                return ignored("row expansion", state);
            }
            if !cx.row_index.contains_key(&id) {
                return unknown_row(&id, state);
            }
            if !next.expanded.remove(&id) {
                next.expanded.insert(id);
            }
        }
        Action::Resize(ResizeStep(step)) => {
            if !features.column_resizing {
                return ignored("column resizing", state);
            }
            match step {
                ResizeKind::Begin {
                    column_id,
                    pointer_x,
                } => {
                    let Some(column) = cx.columns.get(&column_id).filter(|c| c.resizable) else {
                        log::debug!("table: column '{}' is not resizable", column_id);
                        return state.clone();
                    };
                    let start_width = state
                        .column_sizing
                        .get(&column_id)
                        .copied()
                        .unwrap_or(column.width);
                    next.resize = Some(ResizeCapture {
                        column_id,
                        start_x: pointer_x,
                        start_width,
                    });
                }
                ResizeKind::Move { pointer_x } => {
                    let Some(capture) = &state.resize else {
                        return state.clone();
                    };
                    let min_width = cx
                        .columns
                        .get(&capture.column_id)
                        .map(|c| c.min_width)
                        .unwrap_or(crate::column::MIN_COLUMN_WIDTH);
                    let width = (capture.start_width + (pointer_x - capture.start_x)).max(min_width);
                    next.column_sizing.insert(capture.column_id.clone(), width);
                }
                ResizeKind::End => {
                    next.resize = None;
                }
                ResizeKind::Abort => {
                    if let Some(capture) = next.resize.take() {
                        next.column_sizing
                            .insert(capture.column_id, capture.start_width);
                    }
                }
            }
        }
    }

    next
}

fn ignored(feature: &str, state: &TableState) -> TableState {
    log::debug!("table: {} is disabled, ignoring action", feature);
    state.clone()
}

fn unknown_row(id: &str, state: &TableState) -> TableState {
    log::debug!("table: no row with id '{}', ignoring action", id);
    state.clone()
}
