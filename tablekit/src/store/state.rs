//! Interaction state owned by the table store.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use serde::Serialize;

use crate::options::TableOptions;
use crate::query::{Filters, Pagination, Sorting};
use crate::selection::Selection;

/// Row spacing mode. Purely presentational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Normal,
    Comfortable,
}

impl Density {
    /// Vertical cell padding in pixels.
    pub fn spacing(self) -> u16 {
        match self {
            Density::Compact => 4,
            Density::Normal => 8,
            Density::Comfortable => 12,
        }
    }
}

/// Column resize in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeCapture {
    pub column_id: String,
    /// Pointer x when the drag started.
    pub start_x: f64,
    /// Column width when the drag started.
    pub start_width: f64,
}

/// Full interaction state of a table.
///
/// `pagination.page_count`, `pagination.total_rows` and the clamped
/// `pagination.page_index` are written back by the store after every
/// re-derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub sorting: Sorting,
    pub filters: Filters,
    pub global_filter: String,
    pub pagination: Pagination,
    /// Column id → visible. Missing entries are visible.
    pub column_visibility: HashMap<String, bool>,
    /// Column id → width override in pixels.
    pub column_sizing: HashMap<String, f64>,
    pub density: Density,
    pub loading: bool,
    pub error: Option<String>,
    pub selection: Selection,
    /// Ids of rows with their detail panel open.
    pub expanded: HashSet<String>,
    pub resize: Option<ResizeCapture>,
}

impl TableState {
    /// Initial state for the given options.
    pub fn new(options: &TableOptions) -> Self {
        Self {
            sorting: options.initial_sorting.clone(),
            filters: options
                .initial_filters
                .iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            global_filter: String::new(),
            pagination: Pagination::new(options.initial_page_size),
            column_visibility: HashMap::new(),
            column_sizing: HashMap::new(),
            density: options.initial_density,
            loading: false,
            error: None,
            selection: Selection::new(options.features.selection),
            expanded: HashSet::new(),
            resize: None,
        }
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(&TableOptions::default())
    }
}
