//! The filter → sort → paginate pipeline.

use std::cmp::Ordering;

use super::filter::{ColumnFilter, Filters, GlobalFilterMode, GlobalMatcher};
use super::page::Pagination;
use super::sort::{SortEntry, SortKey};
use crate::column::{ColumnRegistry, SortCompare};

/// Query inputs for one derivation.
///
/// Empty collections and an empty global filter are no-ops.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub global_filter: &'a str,
    pub global_filter_mode: GlobalFilterMode,
    pub filters: &'a Filters,
    pub sorting: &'a [SortEntry],
}

/// Result of running the pipeline.
///
/// Rows are indices into the dataset that was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedView {
    /// Rows on the current page.
    pub paged_rows: Vec<usize>,
    /// All rows that passed the filters, in sorted order.
    pub all_filtered_sorted_rows: Vec<usize>,
    pub total_rows: usize,
    pub page_count: usize,
    /// Page index after clamping.
    pub page_index: usize,
}

/// Run the pipeline.
///
/// With `pagination` set to `None` the whole result forms a single page.
pub fn derive<R>(
    dataset: &[R],
    columns: &ColumnRegistry<R>,
    query: Query<'_>,
    pagination: Option<Pagination>,
) -> DerivedView {
    let filtered = filter_rows(dataset, columns, &query);
    let sorted = sort_rows(dataset, columns, query.sorting, filtered);
    let total_rows = sorted.len();

    let (paged_rows, page_count, page_index) = match pagination {
        Some(pagination) => {
            let pagination = pagination.reconcile(total_rows);
            (
                sorted[pagination.window()].to_vec(),
                pagination.page_count,
                pagination.page_index,
            )
        }
        None => (sorted.clone(), usize::from(total_rows > 0), 0),
    };

    log::trace!(
        "pipeline: {} rows -> {} filtered, page {}/{} ({} rows)",
        dataset.len(),
        total_rows,
        page_index,
        page_count,
        paged_rows.len()
    );

    DerivedView {
        paged_rows,
        all_filtered_sorted_rows: sorted,
        total_rows,
        page_count,
        page_index,
    }
}

fn filter_rows<R>(dataset: &[R], columns: &ColumnRegistry<R>, query: &Query<'_>) -> Vec<usize> {
    let mut global = GlobalMatcher::new(query.global_filter, query.global_filter_mode);
    let column_filters: Vec<ColumnFilter<'_, R>> = query
        .filters
        .iter()
        .filter_map(|(id, value)| ColumnFilter::resolve(columns.get(id), value))
        .collect();

    dataset
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            global
                .as_mut()
                .is_none_or(|m| m.matches_row(columns.as_slice(), *row))
        })
        .filter(|(_, row)| column_filters.iter().all(|f| f.matches(*row)))
        .map(|(i, _)| i)
        .collect()
}

fn sort_rows<R>(
    dataset: &[R],
    columns: &ColumnRegistry<R>,
    sorting: &[SortEntry],
    rows: Vec<usize>,
) -> Vec<usize> {
    let keys: Vec<(usize, bool, SortCompare)> = sorting
        .iter()
        .filter_map(|entry| {
            let pos = columns.position(&entry.column_id)?;
            let column = &columns.as_slice()[pos];
            column
                .sortable
                .then_some((pos, entry.descending, column.compare))
        })
        .collect();
    if keys.is_empty() {
        return rows;
    }

    // Accessors and text coercion run once per row and key.
    let mut decorated: Vec<(usize, Vec<SortKey>)> = rows
        .into_iter()
        .map(|i| {
            let row_keys = keys
                .iter()
                .map(|&(pos, _, compare)| {
                    SortKey::new(&columns.as_slice()[pos].value(&dataset[i]), compare)
                })
                .collect();
            (i, row_keys)
        })
        .collect();

    // Vec::sort_by is stable, so full ties keep dataset order.
    decorated.sort_by(|(_, a), (_, b)| {
        keys.iter()
            .enumerate()
            .map(|(k, &(_, descending, _))| {
                let ord = a[k].cmp_with(&b[k]);
                if descending { ord.reverse() } else { ord }
            })
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });

    decorated.into_iter().map(|(i, _)| i).collect()
}
