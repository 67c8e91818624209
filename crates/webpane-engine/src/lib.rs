//! webpane-engine: input-event translation for the off-screen web view.
//!
//! The engine consumes the remote display session's raw input events on a
//! dedicated thread and turns each into zero or more canonical actions for
//! the UI thread:
//!
//! - [`RawInputEvent`] / [`EventSource`]: the session-side event model and
//!   its single blocking wait point.
//! - [`translate`] + [`PointerState`]: the pure mapping from one raw event
//!   to its canonical actions.
//! - [`CanonicalAction`]: host-agnostic instructions, applied on the UI
//!   thread through the dispatch gateway.
//! - [`EventLoop`]: the blocking consume/translate/submit cycle, ended by
//!   the quit sentinel.
//!
//! Translation is best-effort by design: unrecognized scancodes and event
//! variants are dropped with a log line, never surfaced as errors.

mod action;
pub use action::CanonicalAction;

mod error;
pub use error::{Error, Result};

mod event;
pub use event::{ButtonState, ChannelSource, EventSource, KeyState, RawInputEvent};

mod pump;
pub use pump::{EventLoop, Phase};

mod translate;
pub use translate::{PointerState, translate};
