use std::thread;

use tracing::debug;
use webpane_dispatch::{BrowserHost, ViewProxy};

use crate::{
    Result,
    event::{EventSource, RawInputEvent},
    translate::{PointerState, translate},
};

/// Consumption state of the event loop.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Waiting for and translating events.
    Running,
    /// Quit observed; its close request is being submitted.
    Draining,
    /// The loop has exited; the blocking wait is never issued again.
    Stopped,
}

/// The event context: blocks on the session's event stream, translates
/// each event, and submits the resulting actions to the UI thread.
///
/// Actions derived from events observed in sequence are submitted in that
/// same order; the UI loop executes them FIFO, so ordering holds end to
/// end from the single producing thread.
pub struct EventLoop<S, H> {
    /// The blocking event source.
    source: S,
    /// Gateway to the UI thread.
    proxy: ViewProxy<H>,
    /// Persisted pointer state fed to the translator.
    pointer: PointerState,
    /// Current consumption state.
    phase: Phase,
}

impl<S, H> EventLoop<S, H>
where
    S: EventSource,
    H: BrowserHost,
{
    /// Create a loop over `source`, dispatching through `proxy`.
    pub fn new(source: S, proxy: ViewProxy<H>) -> Self {
        Self {
            source,
            proxy,
            pointer: PointerState::new(),
            phase: Phase::Running,
        }
    }

    /// Current consumption state.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Consume events until the quit sentinel.
    ///
    /// Each iteration blocks in the source's wait, translates the event,
    /// and fires the actions at the gateway. A quit event moves the loop
    /// to [`Phase::Draining`] before its close request is submitted and to
    /// [`Phase::Stopped`] right after; no further events are consumed.
    pub fn run(&mut self) {
        debug!("event_loop_started");
        while self.phase == Phase::Running {
            let event = self.source.wait_next();
            if matches!(event, RawInputEvent::Quit) {
                self.phase = Phase::Draining;
            }
            for action in translate(event, &mut self.pointer) {
                self.proxy.submit(move |host| action.apply(host));
            }
            if self.phase == Phase::Draining {
                self.phase = Phase::Stopped;
            }
        }
        debug!("event_loop_stopped");
    }

    /// Run the loop on a dedicated, named thread.
    pub fn spawn(mut self) -> Result<thread::JoinHandle<()>>
    where
        S: Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("webpane-events".into())
            .spawn(move || self.run())?;
        Ok(handle)
    }
}
