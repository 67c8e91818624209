use webpane_keycode::{Key, Modifiers};

/// Mouse button identifier carried by click events.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
}

/// Interface boundary to the embedded browser view.
///
/// Every method mutates view state and is valid only on the UI thread.
/// Code outside this crate never holds a host directly; all calls arrive
/// as tasks queued through a [`crate::ViewProxy`].
pub trait BrowserHost: Send + Sync + 'static {
    /// Deliver a mouse button press or release.
    fn send_mouse_click(&self, x: i32, y: i32, button: MouseButton, is_release: bool, clicks: i32);

    /// Deliver a pointer move. `left_button_held` reports an in-progress
    /// left-button drag; no other modifier state accompanies moves.
    fn send_mouse_move(&self, x: i32, y: i32, left_button_held: bool);

    /// Deliver a scroll with pre-scaled pixel deltas.
    fn send_mouse_wheel(&self, x: i32, y: i32, delta_x: i32, delta_y: i32);

    /// Deliver a normalized key transition.
    fn send_key(&self, key: Key, modifiers: Modifiers, is_down: bool);

    /// Deliver one character of text input.
    fn send_char(&self, character: char);

    /// Begin closing the view. `force` bypasses unload handlers.
    fn close(&self, force: bool);
}
