use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, trace, warn};

use crate::UiHandle;

/// Live-view accounting for the UI run loop's lifetime.
///
/// Views are counted up as they finish creating and down as they close;
/// the exact transition from one live view to zero requests run-loop
/// termination, once. Both callbacks originate on the UI thread per the
/// collaborator's contract, so the counter's atomicity is the only
/// synchronization required.
pub struct LifeTracker {
    /// Number of live views. Never decremented below zero.
    live: AtomicUsize,
    /// Handle used to stop the UI loop when the count reaches zero.
    ui: UiHandle,
}

impl LifeTracker {
    /// Create a tracker that stops `ui` when the last view closes.
    pub fn new(ui: UiHandle) -> Self {
        Self {
            live: AtomicUsize::new(0),
            ui,
        }
    }

    /// Current number of live views.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// A view finished creating.
    pub fn on_view_created(&self) {
        let live = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(live, "view_created");
    }

    /// A view is closing.
    ///
    /// The caller that performs the 1 → 0 transition stops the UI loop;
    /// an unpaired close (count already zero) is logged and ignored.
    pub fn on_view_closing(&self) {
        let mut observed = self.live.load(Ordering::SeqCst);
        loop {
            if observed == 0 {
                warn!("view_close_without_create");
                return;
            }
            match self.live.compare_exchange(
                observed,
                observed - 1,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => break,
                Err(now) => observed = now,
            }
        }
        trace!(live = observed - 1, "view_closing");
        if observed == 1 {
            debug!("last_view_closed");
            self.ui.stop();
        }
    }
}
