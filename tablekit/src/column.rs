//! Column definitions and the column registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::error::TableError;
use crate::{Record, Value};

/// Default column width in pixels.
pub const DEFAULT_WIDTH: f64 = 150.0;

/// Smallest width a resize drag can shrink a column to.
pub const MIN_COLUMN_WIDTH: f64 = 50.0;

/// Function deriving a cell value from a row.
pub type Accessor<R> = Arc<dyn Fn(&R) -> Value + Send + Sync>;

/// How a column's filter value is matched against cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Case-insensitive substring match.
    #[default]
    Text,
    /// Exact match against one of the column's options.
    Select,
}

/// An option offered by a select-kind column filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: Value,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Comparator used when sorting by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCompare {
    /// Compare the text form of values ("10" sorts before "2").
    #[default]
    Text,
    /// Compare numerically; non-numeric values sort after numbers, by text.
    Numeric,
}

/// Column configuration.
///
/// A column pairs an identity with an accessor that derives the cell value
/// from a row, plus the capabilities the engine may use on it. Sorting,
/// filtering and resizing are enabled by default.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("id", |u: &User| u.id.into()).width(80.0),
///     Column::new("name", |u: &User| u.name.clone().into()).header("Name"),
///     Column::new("status", |u: &User| u.status.clone().into())
///         .select_filter(vec![FilterOption::new("Active", "active")]),
///     Column::new("age", |u: &User| u.age.into()).numeric(),
/// ];
/// ```
pub struct Column<R> {
    /// Unique column identifier.
    pub id: String,
    /// Header text (defaults to the id).
    pub header: String,
    /// Derives the cell value from a row.
    pub accessor: Accessor<R>,
    pub sortable: bool,
    pub filterable: bool,
    pub resizable: bool,
    /// Initial width in pixels.
    pub width: f64,
    /// Lower bound applied while resizing.
    pub min_width: f64,
    pub filter_kind: FilterKind,
    pub filter_options: Vec<FilterOption>,
    pub compare: SortCompare,
}

impl<R> Column<R> {
    /// Create a column from an id and an accessor.
    pub fn new<F>(id: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> Value + Send + Sync + 'static,
    {
        let id = id.into();
        Self {
            header: id.clone(),
            id,
            accessor: Arc::new(accessor),
            sortable: true,
            filterable: true,
            resizable: true,
            width: DEFAULT_WIDTH,
            min_width: MIN_COLUMN_WIDTH,
            filter_kind: FilterKind::Text,
            filter_options: Vec::new(),
            compare: SortCompare::Text,
        }
    }

    /// Set the header text.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set the initial width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the minimum width enforced while resizing.
    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    /// Filter this column by exact match against the given options.
    pub fn select_filter(mut self, options: Vec<FilterOption>) -> Self {
        self.filter_kind = FilterKind::Select;
        self.filter_options = options;
        self
    }

    /// Sort this column numerically instead of by text.
    pub fn numeric(mut self) -> Self {
        self.compare = SortCompare::Numeric;
        self
    }

    /// Derive the cell value for a row.
    pub fn value(&self, row: &R) -> Value {
        (self.accessor)(row)
    }

    /// Derive the cell text for a row.
    pub fn text(&self, row: &R) -> String {
        self.value(row).to_text()
    }
}

impl Column<Record> {
    /// Create a column reading `key` from a [`Record`].
    pub fn field(key: impl Into<String>) -> Self {
        let key = key.into();
        let lookup = key.clone();
        Column::new(key, move |record: &Record| {
            record.get(&lookup).cloned().unwrap_or_default()
        })
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: Arc::clone(&self.accessor),
            sortable: self.sortable,
            filterable: self.filterable,
            resizable: self.resizable,
            width: self.width,
            min_width: self.min_width,
            filter_kind: self.filter_kind,
            filter_options: self.filter_options.clone(),
            compare: self.compare,
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("resizable", &self.resizable)
            .field("width", &self.width)
            .field("filter_kind", &self.filter_kind)
            .field("compare", &self.compare)
            .finish_non_exhaustive()
    }
}

/// Ordered set of columns with unique ids.
#[derive(Debug)]
pub struct ColumnRegistry<R> {
    columns: Vec<Column<R>>,
    index: HashMap<String, usize>,
}

impl<R> ColumnRegistry<R> {
    /// Build a registry, rejecting duplicate column ids.
    pub fn new(columns: Vec<Column<R>>) -> Result<Self, TableError> {
        let mut index = HashMap::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            if index.insert(column.id.clone(), i).is_some() {
                return Err(TableError::DuplicateColumn(column.id.clone()));
            }
        }
        Ok(Self { columns, index })
    }

    /// Look up a column by id.
    pub fn get(&self, id: &str) -> Option<&Column<R>> {
        self.index.get(id).map(|&i| &self.columns[i])
    }

    /// Position of a column in registry order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column<R>> {
        self.columns.iter()
    }

    pub fn as_slice(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns not hidden by `visibility`, in registry order.
    ///
    /// Columns without an entry are visible.
    pub fn visible<'a>(&'a self, visibility: &HashMap<String, bool>) -> Vec<&'a Column<R>> {
        self.columns
            .iter()
            .filter(|c| visibility.get(&c.id).copied().unwrap_or(true))
            .collect()
    }
}

impl<R> Clone for ColumnRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            index: self.index.clone(),
        }
    }
}
