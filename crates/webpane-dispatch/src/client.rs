use std::sync::Arc;

use tracing::{trace, warn};

use crate::LifeTracker;

/// Outcome of the request-filtering capability.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RequestDecision {
    /// Let the resource load proceed.
    Allow,
    /// Cancel the load.
    Cancel,
}

/// Outcome of the certificate-decision capability.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CertDecision {
    /// Continue loading despite the certificate error.
    Proceed,
    /// Abort the request.
    Abort,
}

/// Callback object handed to the browser collaborator.
///
/// One concrete type carries the whole capability set — lifecycle,
/// request filtering, certificate decisions — and the collaborator selects
/// the capability per call. Every callback is invoked on the UI thread.
#[derive(Clone)]
pub struct ViewClient {
    /// Shared live-view accounting.
    life: Arc<LifeTracker>,
}

impl ViewClient {
    /// Create a client backed by `life`.
    pub fn new(life: Arc<LifeTracker>) -> Self {
        Self { life }
    }

    /// Lifecycle capability: a view finished creating.
    pub fn on_view_created(&self) {
        self.life.on_view_created();
    }

    /// Lifecycle capability: a view is about to close.
    pub fn on_view_closing(&self) {
        self.life.on_view_closing();
    }

    /// Request-filtering capability. Loads are never blocked here; the
    /// hook exists so the collaborator has a single decision point.
    pub fn filter_request(&self, url: &str) -> RequestDecision {
        trace!(url, "resource_request");
        RequestDecision::Allow
    }

    /// Certificate-decision capability. Certificate errors are overridden
    /// so page loads continue against misconfigured trust stores; each
    /// override is logged loudly.
    pub fn decide_certificate(&self, url: &str, error: &str) -> CertDecision {
        warn!(url, error, "certificate_error_overridden");
        CertDecision::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UiRunLoop;

    #[test]
    fn decisions_are_permissive() {
        let (_rl, handle) = UiRunLoop::new();
        let client = ViewClient::new(Arc::new(LifeTracker::new(handle)));

        assert_eq!(
            client.filter_request("https://example.com/app.js"),
            RequestDecision::Allow
        );
        assert_eq!(
            client.decide_certificate("https://example.com", "expired"),
            CertDecision::Proceed
        );
    }

    #[test]
    fn lifecycle_forwards_to_tracker() {
        let (_rl, handle) = UiRunLoop::new();
        let life = Arc::new(LifeTracker::new(handle));
        let client = ViewClient::new(life.clone());

        client.on_view_created();
        assert_eq!(life.live(), 1);
        client.on_view_closing();
        assert_eq!(life.live(), 0);
    }
}
