use crossbeam_channel::Receiver;
use webpane_dispatch::MouseButton;
use webpane_keycode::Scancode;

/// Press/release state of a mouse button.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ButtonState {
    /// Button went down.
    Pressed,
    /// Button came up.
    Released,
}

/// Press/release state of a physical key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyState {
    /// Key went down.
    Pressed,
    /// Key came up.
    Released,
}

/// One raw input event as delivered by the remote display session.
///
/// Ownership of the `Text` payload transfers on receipt; the translator
/// consumes events by value, so the buffer is released exactly once when
/// the event is dropped, whether or not it produced any actions.
#[derive(Debug)]
pub enum RawInputEvent {
    /// A mouse button transition at a position.
    MouseButton {
        /// Pointer x in view coordinates.
        x: i32,
        /// Pointer y in view coordinates.
        y: i32,
        /// Which button changed.
        button: MouseButton,
        /// Press or release.
        state: ButtonState,
        /// Click multiplicity as reported by the session.
        clicks: i32,
    },
    /// A pointer move.
    MouseMove {
        /// Pointer x in view coordinates.
        x: i32,
        /// Pointer y in view coordinates.
        y: i32,
    },
    /// A scroll gesture.
    MouseScroll {
        /// Pointer x in view coordinates.
        x: i32,
        /// Pointer y in view coordinates.
        y: i32,
        /// Horizontal scroll amount in lines.
        scroll_x: i32,
        /// Vertical scroll amount in lines.
        scroll_y: i32,
    },
    /// Committed text input. `None` stands for the protocol's null buffer.
    Text {
        /// Owned text payload; released when the event is dropped.
        bytes: Option<Vec<u8>>,
    },
    /// A physical key transition.
    Key {
        /// Session scancode for the key.
        scancode: Scancode,
        /// Press or release.
        state: KeyState,
        /// Raw modifier bitmask at the time of the event.
        modifiers: i32,
    },
    /// Session shutdown sentinel; the event stream ends after this.
    Quit,
}

/// Blocking source of raw input events.
///
/// `wait_next` is the only blocking point in the system; it suspends the
/// event thread until the session delivers the next event.
pub trait EventSource {
    /// Block until the next event arrives and return it.
    fn wait_next(&mut self) -> RawInputEvent;
}

/// Event source backed by a crossbeam channel.
pub struct ChannelSource {
    /// Receive side of the session event stream.
    rx: Receiver<RawInputEvent>,
}

impl ChannelSource {
    /// Wrap a receiver as an event source.
    pub fn new(rx: Receiver<RawInputEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for ChannelSource {
    fn wait_next(&mut self) -> RawInputEvent {
        // A vanished producer ends the session.
        self.rx.recv().unwrap_or(RawInputEvent::Quit)
    }
}
