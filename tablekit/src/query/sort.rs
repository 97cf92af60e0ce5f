//! Sort entries, the toggle state machine, and row comparison.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::Value;
use crate::column::SortCompare;

/// One column of a multi-column sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortEntry {
    pub column_id: String,
    #[serde(default)]
    pub descending: bool,
}

impl SortEntry {
    /// Creates an ascending entry.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            descending: false,
        }
    }

    /// Creates a descending entry.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            descending: true,
        }
    }
}

/// Ordered sort entries; the first entry has the highest priority.
pub type Sorting = Vec<SortEntry>;

/// Advance the sort state of one column.
///
/// Unsorted → ascending → descending → unsorted. A newly sorted column is
/// appended when `multi` is set and replaces the whole list otherwise.
pub fn toggle_sort(sorting: &[SortEntry], column_id: &str, multi: bool) -> Sorting {
    match sorting.iter().position(|e| e.column_id == column_id) {
        None => {
            let entry = SortEntry::asc(column_id);
            if multi {
                let mut next = sorting.to_vec();
                next.push(entry);
                next
            } else {
                vec![entry]
            }
        }
        Some(pos) if !sorting[pos].descending => {
            let mut next = sorting.to_vec();
            next[pos].descending = true;
            next
        }
        Some(pos) => {
            let mut next = sorting.to_vec();
            next.remove(pos);
            next
        }
    }
}

/// Compare two cell values in ascending order.
pub fn compare_values(a: &Value, b: &Value, compare: SortCompare) -> Ordering {
    SortKey::new(a, compare).cmp_with(&SortKey::new(b, compare))
}

/// The comparable form of a cell value, computed once per row and sort entry.
pub(crate) struct SortKey {
    number: Option<f64>,
    text: String,
}

impl SortKey {
    pub fn new(value: &Value, compare: SortCompare) -> Self {
        let number = match compare {
            SortCompare::Text => None,
            SortCompare::Numeric => value.as_number(),
        };
        Self {
            number,
            text: value.to_text(),
        }
    }

    /// Ascending order. Numbers only exist for numeric columns; they sort
    /// before keys without one.
    pub fn cmp_with(&self, other: &Self) -> Ordering {
        match (self.number, other.number) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.text.cmp(&other.text),
        }
    }
}
