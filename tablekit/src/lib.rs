//! Headless data-table engine.
//!
//! `tablekit` holds the state behind a dashboard data table and derives what
//! a renderer should show: which rows pass the global search and column
//! filters, in which order, on which page, which rows are selected, and how
//! wide each column is. It renders nothing itself.
//!
//! - [`Column`] / [`ColumnRegistry`]: column identity, accessor, capabilities
//! - [`query`]: the pure filter → sort → paginate pipeline
//! - [`Selection`]: id-based row selection with page-scoped bulk toggling
//! - [`TableStore`]: interaction state, [`Action`] dispatch, derived getters
//! - [`export`]: CSV/JSON export of the filtered, sorted rows
//!
//! # Example
//!
//! ```
//! use tablekit::prelude::*;
//!
//! let rows = vec![
//!     Record::new().set("id", 1i64).set("name", "Alice").set("status", "active"),
//!     Record::new().set("id", 2i64).set("name", "Bob").set("status", "inactive"),
//! ];
//! let columns = vec![
//!     Column::field("id").header("ID"),
//!     Column::field("name").header("Name"),
//!     Column::field("status").select_filter(vec![
//!         FilterOption::new("Active", "active"),
//!         FilterOption::new("Inactive", "inactive"),
//!     ]),
//! ];
//!
//! let mut table = create_table(rows, columns, |r: &Record| r.text("id"), TableOptions::default())?;
//! table.set_filter("status", "active");
//! assert_eq!(table.paged_rows().len(), 1);
//! # Ok::<(), TableError>(())
//! ```

pub mod column;
pub mod error;
pub mod export;
pub mod options;
pub mod query;
pub mod record;
pub mod selection;
pub mod store;
pub mod value;

pub use column::{Column, ColumnRegistry, FilterKind, FilterOption, SortCompare};
pub use error::{ConfigError, ExportError, TableError};
pub use export::ExportFormat;
pub use options::{Features, TableOptions};
pub use query::{Filters, GlobalFilterMode, Pagination, PaginationPatch, SortEntry, Sorting};
pub use record::Record;
pub use selection::{Selection, SelectionDelta, SelectionMode};
pub use store::{
    Action, Density, ListenerGuard, ResizeSession, SelectionSnapshot, TableState, TableStore,
    create_table,
};
pub use value::Value;

pub mod prelude {
    pub use crate::column::{Column, FilterKind, FilterOption, SortCompare};
    pub use crate::error::{ConfigError, ExportError, TableError};
    pub use crate::export::ExportFormat;
    pub use crate::options::{Features, TableOptions};
    pub use crate::query::{Filters, PaginationPatch, SortEntry};
    pub use crate::record::Record;
    pub use crate::selection::SelectionMode;
    pub use crate::store::{Action, Density, ListenerGuard, TableStore, create_table};
    pub use crate::value::Value;
}
