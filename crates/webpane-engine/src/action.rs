use webpane_dispatch::{BrowserHost, MouseButton};
use webpane_keycode::{Key, Modifiers};

/// A translated, host-agnostic instruction ready for dispatch.
///
/// Immutable once constructed; each action is consumed exactly once when
/// it executes on the UI thread.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CanonicalAction {
    /// A button press or release at a position.
    MouseClick {
        /// Pointer x in view coordinates.
        x: i32,
        /// Pointer y in view coordinates.
        y: i32,
        /// Which button changed.
        button: MouseButton,
        /// True for the release half of a click.
        is_release: bool,
        /// Click multiplicity, at most 3.
        click_count: i32,
    },
    /// A pointer move carrying the synthesized drag flag.
    MouseMove {
        /// Pointer x in view coordinates.
        x: i32,
        /// Pointer y in view coordinates.
        y: i32,
        /// True while a left-button drag is in progress.
        left_button_held: bool,
    },
    /// A scroll with pre-scaled pixel deltas.
    MouseWheel {
        /// Pointer x in view coordinates.
        x: i32,
        /// Pointer y in view coordinates.
        y: i32,
        /// Horizontal delta in pixels.
        delta_x: i32,
        /// Vertical delta in pixels.
        delta_y: i32,
    },
    /// A normalized key press.
    KeyDown {
        /// Normalized key code.
        key: Key,
        /// Resolved modifier set.
        modifiers: Modifiers,
    },
    /// A normalized key release.
    KeyUp {
        /// Normalized key code.
        key: Key,
        /// Resolved modifier set.
        modifiers: Modifiers,
    },
    /// One character of committed text.
    CharInput {
        /// The character to type.
        character: char,
    },
    /// Close the view and end the session.
    CloseRequest,
}

impl CanonicalAction {
    /// Execute this action against a browser host.
    ///
    /// Only ever called from a task running on the UI thread.
    pub fn apply<H: BrowserHost>(self, host: &H) {
        match self {
            Self::MouseClick {
                x,
                y,
                button,
                is_release,
                click_count,
            } => host.send_mouse_click(x, y, button, is_release, click_count),
            Self::MouseMove {
                x,
                y,
                left_button_held,
            } => host.send_mouse_move(x, y, left_button_held),
            Self::MouseWheel {
                x,
                y,
                delta_x,
                delta_y,
            } => host.send_mouse_wheel(x, y, delta_x, delta_y),
            Self::KeyDown { key, modifiers } => host.send_key(key, modifiers, true),
            Self::KeyUp { key, modifiers } => host.send_key(key, modifiers, false),
            Self::CharInput { character } => host.send_char(character),
            Self::CloseRequest => host.close(false),
        }
    }
}
