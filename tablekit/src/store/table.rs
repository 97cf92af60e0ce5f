//! The table store: dataset arena, interaction state and derived view.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;

use super::action::Action;
use super::reducer::{ReduceContext, reduce};
use super::state::{Density, TableState};
use crate::Value;
use crate::column::{Column, ColumnRegistry};
use crate::error::TableError;
use crate::options::TableOptions;
use crate::query::{DerivedView, Filters, Pagination, PaginationPatch, Query, SortEntry, derive};

/// Extracts a stable id from a row.
pub type RowIdFn<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Callback invoked after every selection change.
pub type SelectionCallback<R> = Box<dyn FnMut(&SelectionSnapshot<'_, R>) + Send>;

/// The selection at a point in time.
#[derive(Debug)]
pub struct SelectionSnapshot<'a, R> {
    /// Selected ids, sorted.
    pub ids: Vec<String>,
    /// Selected rows in dataset order.
    pub rows: Vec<&'a R>,
}

/// Build a table store.
///
/// `row_id` must return a stable, unique id for each row; selection and row
/// expansion are keyed by it.
///
/// # Example
///
/// ```
/// use tablekit::{Column, Record, TableOptions, create_table};
///
/// let rows = vec![
///     Record::new().set("id", 1i64).set("name", "Alice"),
///     Record::new().set("id", 2i64).set("name", "Bob"),
/// ];
/// let columns = vec![Column::field("id"), Column::field("name")];
///
/// let mut table = create_table(rows, columns, |r: &Record| r.text("id"), TableOptions::default())?;
/// table.set_global_filter("ali");
/// assert_eq!(table.total_rows(), 1);
/// # Ok::<(), tablekit::TableError>(())
/// ```
pub fn create_table<R, F>(
    rows: Vec<R>,
    columns: Vec<Column<R>>,
    row_id: F,
    options: TableOptions,
) -> Result<TableStore<R>, TableError>
where
    F: Fn(&R) -> String + Send + Sync + 'static,
{
    TableStore::new(rows, columns, row_id, options)
}

/// Headless table state store.
///
/// Owns the dataset and all interaction state. Every mutation goes through
/// [`dispatch`](TableStore::dispatch), which runs the pure reducer and then
/// re-derives the filtered, sorted and paginated view before returning.
pub struct TableStore<R> {
    columns: ColumnRegistry<R>,
    options: TableOptions,
    rows: Vec<R>,
    row_id: RowIdFn<R>,
    /// ids[i] is the id of rows[i].
    ids: Vec<String>,
    /// id → first row with that id.
    index: HashMap<String, usize>,
    state: TableState,
    view: DerivedView,
    on_selection_change: Option<SelectionCallback<R>>,
}

impl<R> TableStore<R> {
    /// Create a store. Fails on duplicate column ids.
    pub fn new<F>(
        rows: Vec<R>,
        columns: Vec<Column<R>>,
        row_id: F,
        options: TableOptions,
    ) -> Result<Self, TableError>
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        let columns = ColumnRegistry::new(columns)?;
        let state = TableState::new(&options);
        let mut store = Self {
            columns,
            options,
            rows,
            row_id: Arc::new(row_id),
            ids: Vec::new(),
            index: HashMap::new(),
            state,
            view: DerivedView::default(),
            on_selection_change: None,
        };
        store.reindex();
        store.rederive();
        Ok(store)
    }

    /// Register the selection-changed callback, replacing any previous one.
    pub fn on_selection_change<F>(&mut self, callback: F)
    where
        F: FnMut(&SelectionSnapshot<'_, R>) + Send + 'static,
    {
        self.on_selection_change = Some(Box::new(callback));
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Apply an action and re-derive the view.
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("table: dispatch {:?}", action);
        let page_ids = self.page_ids();
        let cx = ReduceContext {
            columns: &self.columns,
            features: &self.options.features,
            page_ids: &page_ids,
            row_index: &self.index,
        };
        let next = reduce(&self.state, action, &cx);
        let selection_changed = next.selection != self.state.selection;
        self.state = next;
        self.rederive();
        if selection_changed {
            self.notify_selection();
        }
    }

    /// Replace the dataset.
    ///
    /// Selected and expanded ids that no longer exist are dropped.
    pub fn set_data(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.reindex();
        let removed = self
            .state
            .selection
            .retain(|id| self.index.contains_key(id));
        self.state.expanded.retain(|id| self.index.contains_key(id));
        self.rederive();
        if !removed.is_empty() {
            self.notify_selection();
        }
    }

    /// Replace the column registry. Fails on duplicate column ids and leaves
    /// the current columns in place.
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) -> Result<(), TableError> {
        self.columns = ColumnRegistry::new(columns)?;
        if let Some(capture) = &self.state.resize
            && self.columns.get(&capture.column_id).is_none()
        {
            self.state.resize = None;
        }
        self.rederive();
        Ok(())
    }

    fn reindex(&mut self) {
        let row_id = Arc::clone(&self.row_id);
        self.ids = self.rows.iter().map(|row| row_id(row)).collect();
        self.index = HashMap::with_capacity(self.ids.len());
        for (i, id) in self.ids.iter().enumerate() {
            match self.index.entry(id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(_) => {
                    log::warn!("table: duplicate row id '{}' at index {}", id, i);
                }
            }
        }
    }

    fn rederive(&mut self) {
        let features = &self.options.features;
        let no_filters = Filters::new();
        let query = Query {
            global_filter: if features.search {
                &self.state.global_filter
            } else {
                ""
            },
            global_filter_mode: self.options.global_filter_mode,
            filters: if features.filtering {
                &self.state.filters
            } else {
                &no_filters
            },
            sorting: if features.sorting {
                &self.state.sorting
            } else {
                &[]
            },
        };
        let pagination = features.pagination.then_some(self.state.pagination);
        self.view = derive(&self.rows, &self.columns, query, pagination);

        let pagination = &mut self.state.pagination;
        pagination.total_rows = self.view.total_rows;
        pagination.page_count = self.view.page_count;
        pagination.page_index = self.view.page_index;
    }

    fn notify_selection(&mut self) {
        if let Some(mut callback) = self.on_selection_change.take() {
            callback(&self.selection_snapshot());
            self.on_selection_change = Some(callback);
        }
    }

    fn page_ids(&self) -> Vec<String> {
        self.view
            .paged_rows
            .iter()
            .map(|&i| self.ids[i].clone())
            .collect()
    }

    fn rows_at(&self, indices: &[usize]) -> Vec<&R> {
        indices.iter().map(|&i| &self.rows[i]).collect()
    }

    // -------------------------------------------------------------------------
    // Setters
    // -------------------------------------------------------------------------

    pub fn set_sorting(&mut self, sorting: Vec<SortEntry>) {
        self.dispatch(Action::SetSorting(sorting));
    }

    /// Advance a column through unsorted → ascending → descending → unsorted.
    pub fn toggle_sort(&mut self, column_id: &str) {
        self.dispatch(Action::ToggleSort(column_id.to_string()));
    }

    /// Set the global search text and go back to the first page.
    pub fn set_global_filter(&mut self, query: impl Into<String>) {
        self.dispatch(Action::SetGlobalFilter(query.into()));
    }

    /// Replace all column filters and go back to the first page.
    pub fn set_filters(&mut self, filters: Filters) {
        self.dispatch(Action::SetFilters(filters));
    }

    /// Set one column filter (empty clears it) and go back to the first page.
    pub fn set_filter(&mut self, column_id: &str, value: impl Into<Value>) {
        self.dispatch(Action::SetFilter {
            column_id: column_id.to_string(),
            value: value.into(),
        });
    }

    pub fn set_pagination(&mut self, patch: PaginationPatch) {
        self.dispatch(Action::SetPagination(patch));
    }

    pub fn next_page(&mut self) {
        self.dispatch(Action::NextPage);
    }

    pub fn previous_page(&mut self) {
        self.dispatch(Action::PreviousPage);
    }

    pub fn first_page(&mut self) {
        self.dispatch(Action::FirstPage);
    }

    pub fn last_page(&mut self) {
        self.dispatch(Action::LastPage);
    }

    pub fn set_column_visibility(&mut self, visibility: HashMap<String, bool>) {
        self.dispatch(Action::SetColumnVisibility(visibility));
    }

    pub fn set_column_sizing(&mut self, sizing: HashMap<String, f64>) {
        self.dispatch(Action::SetColumnSizing(sizing));
    }

    pub fn set_density(&mut self, density: Density) {
        self.dispatch(Action::SetDensity(density));
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.dispatch(Action::SetLoading(loading));
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.dispatch(Action::SetError(error));
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle selection of a row.
    pub fn toggle_row(&mut self, row: &R) {
        let id = (self.row_id)(row);
        self.dispatch(Action::ToggleRow(id));
    }

    /// Toggle selection of a row by id.
    pub fn toggle_row_id(&mut self, id: &str) {
        self.dispatch(Action::ToggleRow(id.to_string()));
    }

    /// Select every row on the current page, or deselect them if all are
    /// already selected. Rows on other pages keep their selection.
    pub fn toggle_all_on_page(&mut self) {
        self.dispatch(Action::ToggleAllOnPage);
    }

    pub fn clear_selection(&mut self) {
        self.dispatch(Action::ClearSelection);
    }

    pub fn is_selected(&self, row: &R) -> bool {
        self.state.selection.is_selected(&(self.row_id)(row))
    }

    pub fn is_selected_id(&self, id: &str) -> bool {
        self.state.selection.is_selected(id)
    }

    /// True when the page is non-empty and every row on it is selected.
    pub fn is_page_selected(&self) -> bool {
        !self.view.paged_rows.is_empty()
            && self
                .view
                .paged_rows
                .iter()
                .all(|&i| self.state.selection.is_selected(&self.ids[i]))
    }

    pub fn selected_count(&self) -> usize {
        self.state.selection.len()
    }

    /// Selected ids, sorted.
    pub fn selected_ids(&self) -> Vec<String> {
        self.state.selection.selected()
    }

    /// Selected rows in dataset order.
    pub fn selected_rows(&self) -> Vec<&R> {
        self.ids
            .iter()
            .zip(&self.rows)
            .filter(|(id, _)| self.state.selection.is_selected(id))
            .map(|(_, row)| row)
            .collect()
    }

    pub fn selection_snapshot(&self) -> SelectionSnapshot<'_, R> {
        SelectionSnapshot {
            ids: self.selected_ids(),
            rows: self.selected_rows(),
        }
    }

    // -------------------------------------------------------------------------
    // Row expansion
    // -------------------------------------------------------------------------

    pub fn toggle_expanded(&mut self, row: &R) {
        let id = (self.row_id)(row);
        self.dispatch(Action::ToggleExpanded(id));
    }

    pub fn is_expanded(&self, row: &R) -> bool {
        self.state.expanded.contains(&(self.row_id)(row))
    }

    // -------------------------------------------------------------------------
    // Derived getters
    // -------------------------------------------------------------------------

    /// Rows on the current page, in display order.
    pub fn paged_rows(&self) -> Vec<&R> {
        self.rows_at(&self.view.paged_rows)
    }

    /// All rows passing the filters, sorted, across every page.
    pub fn all_filtered_sorted_rows(&self) -> Vec<&R> {
        self.rows_at(&self.view.all_filtered_sorted_rows)
    }

    /// Columns to render, in registry order.
    pub fn visible_columns(&self) -> Vec<&Column<R>> {
        if self.options.features.column_visibility {
            self.columns.visible(&self.state.column_visibility)
        } else {
            self.columns.iter().collect()
        }
    }

    /// Current width of a column: the sizing override, else the initial width.
    pub fn column_width(&self, column_id: &str) -> Option<f64> {
        let column = self.columns.get(column_id)?;
        Some(
            self.state
                .column_sizing
                .get(column_id)
                .copied()
                .unwrap_or(column.width),
        )
    }

    pub fn total_rows(&self) -> usize {
        self.view.total_rows
    }

    pub fn page_count(&self) -> usize {
        self.view.page_count
    }

    pub fn pagination(&self) -> Pagination {
        self.state.pagination
    }

    pub fn can_previous_page(&self) -> bool {
        self.options.features.pagination && self.state.pagination.can_previous_page()
    }

    pub fn can_next_page(&self) -> bool {
        self.options.features.pagination && self.state.pagination.can_next_page()
    }

    pub fn sorting(&self) -> &[SortEntry] {
        &self.state.sorting
    }

    pub fn filters(&self) -> &Filters {
        &self.state.filters
    }

    pub fn global_filter(&self) -> &str {
        &self.state.global_filter
    }

    pub fn density(&self) -> Density {
        self.state.density
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Id of the column being resized, if a drag is in progress.
    pub fn resizing_column(&self) -> Option<&str> {
        self.state.resize.as_ref().map(|c| c.column_id.as_str())
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    pub fn columns(&self) -> &ColumnRegistry<R> {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// The full dataset, unfiltered.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Look up a row by id.
    pub fn row(&self, id: &str) -> Option<&R> {
        self.index.get(id).map(|&i| &self.rows[i])
    }

    pub fn row_id(&self, row: &R) -> String {
        (self.row_id)(row)
    }
}

impl<R> fmt::Debug for TableStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableStore")
            .field(
                "columns",
                &self.columns.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            )
            .field("rows", &self.rows.len())
            .field("state", &self.state)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}
