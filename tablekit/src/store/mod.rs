//! Table state store.
//!
//! State changes are modelled as a closed set of [`Action`]s applied by the
//! pure [`reduce`] function. [`TableStore`] owns the dataset and the state,
//! dispatches actions, and re-derives the query pipeline after each one.

mod action;
mod reducer;
mod resize;
mod state;
mod table;

pub use action::{Action, ResizeStep};
pub(crate) use action::ResizeKind;
pub use reducer::{ReduceContext, reduce};
pub use resize::{ListenerGuard, ResizeSession};
pub use state::{Density, ResizeCapture, TableState};
pub use table::{RowIdFn, SelectionCallback, SelectionSnapshot, TableStore, create_table};
