//! Table configuration types.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::query::{DEFAULT_PAGE_SIZE, Filters, GlobalFilterMode, Sorting};
use crate::selection::SelectionMode;
use crate::store::Density;

/// Feature switches for a table.
///
/// A disabled feature's actions are ignored by the store, and the pipeline
/// ignores any stored state belonging to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Features {
    /// Global search box.
    pub search: bool,
    pub sorting: bool,
    /// Per-column filters.
    pub filtering: bool,
    /// When off, every row is on a single page.
    pub pagination: bool,
    pub selection: SelectionMode,
    pub column_visibility: bool,
    pub column_resizing: bool,
    pub export: bool,
    /// Row density switcher.
    pub density: bool,
    /// Host shows a toolbar acting on selected rows.
    pub bulk_actions: bool,
    /// Host shows a per-row action menu.
    pub row_actions: bool,
    pub row_expansion: bool,
    /// Activating sort on a new column appends instead of replacing.
    pub multi_sort: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            search: true,
            sorting: true,
            filtering: true,
            pagination: true,
            selection: SelectionMode::None,
            column_visibility: true,
            column_resizing: false,
            export: false,
            density: false,
            bulk_actions: false,
            row_actions: false,
            row_expansion: false,
            multi_sort: true,
        }
    }
}

impl Features {
    /// Every feature on, with multiple selection.
    pub fn all() -> Self {
        Self {
            search: true,
            sorting: true,
            filtering: true,
            pagination: true,
            selection: SelectionMode::Multiple,
            column_visibility: true,
            column_resizing: true,
            export: true,
            density: true,
            bulk_actions: true,
            row_actions: true,
            row_expansion: true,
            multi_sort: true,
        }
    }
}

/// Construction options for a table.
///
/// # Example
///
/// ```
/// use tablekit::{SelectionMode, SortEntry, TableOptions};
///
/// let options = TableOptions::default()
///     .with_page_size(25)
///     .with_selection(SelectionMode::Multiple)
///     .with_sorting(vec![SortEntry::asc("name")]);
///
/// let parsed = TableOptions::from_json(r#"{"initialPageSize": 25}"#).unwrap();
/// assert_eq!(parsed.initial_page_size, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    pub features: Features,
    pub initial_page_size: usize,
    pub initial_sorting: Sorting,
    pub initial_filters: Filters,
    pub initial_density: Density,
    pub global_filter_mode: GlobalFilterMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            features: Features::default(),
            initial_page_size: DEFAULT_PAGE_SIZE,
            initial_sorting: Vec::new(),
            initial_filters: Filters::new(),
            initial_density: Density::default(),
            global_filter_mode: GlobalFilterMode::default(),
        }
    }
}

impl TableOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        if options.initial_page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(options)
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.initial_page_size = page_size;
        self
    }

    pub fn with_selection(mut self, mode: SelectionMode) -> Self {
        self.features.selection = mode;
        self
    }

    pub fn with_sorting(mut self, sorting: Sorting) -> Self {
        self.initial_sorting = sorting;
        self
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.initial_filters = filters;
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.initial_density = density;
        self
    }

    /// Switch the global search to fuzzy matching.
    pub fn fuzzy_search(mut self) -> Self {
        self.global_filter_mode = GlobalFilterMode::Fuzzy;
        self
    }
}
