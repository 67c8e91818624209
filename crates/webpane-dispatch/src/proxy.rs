use std::sync::{Arc, Weak};

use tracing::trace;

use crate::{BrowserHost, UiHandle};

/// Thread-safe gateway to a browser host.
///
/// Callable from any thread; each submission is queued onto the UI run
/// loop and executed there in FIFO order. The proxy never stores a strong
/// reference: the weak handle is upgraded on the UI thread at execution
/// time, so a task racing view destruction degrades to a logged no-op
/// instead of touching a dead object.
pub struct ViewProxy<H> {
    /// Submit handle for the UI run loop.
    ui: UiHandle,
    /// Weak reference to the host; revalidated per task.
    view: Weak<H>,
}

impl<H> Clone for ViewProxy<H> {
    fn clone(&self) -> Self {
        Self {
            ui: self.ui.clone(),
            view: self.view.clone(),
        }
    }
}

impl<H: BrowserHost> ViewProxy<H> {
    /// Create a proxy for `view`, dispatching through `ui`.
    pub fn new(ui: UiHandle, view: &Arc<H>) -> Self {
        Self {
            ui,
            view: Arc::downgrade(view),
        }
    }

    /// Queue `f` to run against the host on the UI thread.
    ///
    /// Returns immediately. If the view has been destroyed by the time the
    /// task executes, the task is dropped.
    pub fn submit<F>(&self, f: F)
    where
        F: FnOnce(&H) + Send + 'static,
    {
        let view = self.view.clone();
        self.ui.submit(move || match view.upgrade() {
            Some(host) => f(&host),
            None => trace!("view_destroyed_dropping_task"),
        });
    }
}
