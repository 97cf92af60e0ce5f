//! Column resize drags as a scoped resource.
//!
//! While a drag is in progress the host listens for pointer movement at the
//! document level. [`TableStore::begin_resize`] asks the host to subscribe
//! and hands back a [`ResizeSession`] owning the subscription; the
//! subscription is released exactly once, whether the session is ended,
//! aborted, or dropped.

use std::fmt;

use super::action::ResizeKind;
use super::table::TableStore;

/// Releases a host listener subscription when dropped.
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl ListenerGuard {
    /// Guard that runs `release` once.
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Release now instead of on drop.
    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// An in-progress column resize.
///
/// Holds the store mutably for the length of the drag. Dropping the session
/// without calling [`end`](Self::end) or [`abort`](Self::abort) ends the
/// drag and keeps the current width.
pub struct ResizeSession<'a, R> {
    store: &'a mut TableStore<R>,
    listeners: Option<ListenerGuard>,
}

impl<R> ResizeSession<'_, R> {
    /// Commit the width for a new pointer position.
    pub fn pointer_move(&mut self, pointer_x: f64) {
        self.store.dispatch(ResizeKind::Move { pointer_x }.action());
    }

    /// Id of the column being resized.
    pub fn column_id(&self) -> Option<&str> {
        self.store.resizing_column()
    }

    /// Current width of the column being resized.
    pub fn width(&self) -> Option<f64> {
        self.column_id()
            .and_then(|id| self.store.column_width(id))
    }

    /// Read access to the store while dragging.
    pub fn store(&self) -> &TableStore<R> {
        self.store
    }

    /// Keep the current width and release the listeners.
    pub fn end(mut self) {
        self.finish(ResizeKind::End);
    }

    /// Restore the starting width and release the listeners.
    pub fn abort(mut self) {
        self.finish(ResizeKind::Abort);
    }

    fn finish(&mut self, kind: ResizeKind) {
        if let Some(listeners) = self.listeners.take() {
            self.store.dispatch(kind.action());
            listeners.release();
        }
    }
}

impl<R> Drop for ResizeSession<'_, R> {
    fn drop(&mut self) {
        self.finish(ResizeKind::End);
    }
}

impl<R> fmt::Debug for ResizeSession<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSession")
            .field("column_id", &self.column_id())
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl<R> TableStore<R> {
    /// Start resizing a column at pointer position `pointer_x`.
    ///
    /// `subscribe` attaches the host's pointer listeners and returns a guard
    /// that detaches them. It is only called when the drag actually starts;
    /// `None` is returned (and nothing subscribed) when resizing is disabled
    /// or the column is unknown or not resizable.
    pub fn begin_resize<F>(
        &mut self,
        column_id: &str,
        pointer_x: f64,
        subscribe: F,
    ) -> Option<ResizeSession<'_, R>>
    where
        F: FnOnce() -> ListenerGuard,
    {
        self.dispatch(
            ResizeKind::Begin {
                column_id: column_id.to_string(),
                pointer_x,
            }
            .action(),
        );
        if self.resizing_column() != Some(column_id) {
            return None;
        }
        let listeners = subscribe();
        Some(ResizeSession {
            store: self,
            listeners: Some(listeners),
        })
    }
}
