//! webpane-dispatch: the UI execution context and its gateway.
//!
//! The browser-host object is single-writer: only the UI thread may touch
//! it. This crate makes that rule structural rather than conventional:
//!
//! - [`UiRunLoop`] / [`UiHandle`]: a strict-FIFO task pump owned by the UI
//!   thread, fed from any thread, stopped by a queued directive.
//! - [`BrowserHost`]: the interface boundary to the embedded view. The
//!   trait is only ever invoked from tasks executing inside the run loop.
//! - [`ViewProxy`]: the sole path to a host. It captures a weak handle and
//!   revalidates it on the UI thread at execution time, so submissions
//!   against a destroyed view are safe no-ops.
//! - [`LifeTracker`] / [`ViewClient`]: live-view accounting and the
//!   collaborator callback object; the last view closing stops the loop.

mod client;
pub use client::{CertDecision, RequestDecision, ViewClient};

mod host;
pub use host::{BrowserHost, MouseButton};

mod lifecycle;
pub use lifecycle::LifeTracker;

mod proxy;
pub use proxy::ViewProxy;

mod runloop;
pub use runloop::{UiHandle, UiRunLoop};
