//! Headless stand-in for the embedded browser view.

use std::sync::Arc;

use tracing::info;
use webpane_dispatch::{BrowserHost, MouseButton, ViewClient};
use webpane_keycode::{Key, Modifiers};

use crate::cli::Frame;

/// Browser host that logs every call it receives.
///
/// Takes the place of the embedded engine so the pipeline can run end to
/// end without one: each host method emits a single log line, in the order
/// the UI thread executes the queued tasks.
pub struct HeadlessHost {
    /// Callback object for lifecycle notifications.
    client: ViewClient,
}

impl HeadlessHost {
    /// Create the view: logs the navigation target and initial rectangle
    /// and reports the view as created to `client`.
    pub fn create(url: &str, frame: Frame, client: ViewClient) -> Arc<Self> {
        info!(
            url,
            x = frame.x,
            y = frame.y,
            width = frame.width,
            height = frame.height,
            "view_created"
        );
        client.on_view_created();
        Arc::new(Self { client })
    }
}

impl BrowserHost for HeadlessHost {
    fn send_mouse_click(&self, x: i32, y: i32, button: MouseButton, is_release: bool, clicks: i32) {
        info!(x, y, ?button, is_release, clicks, "mouse_click");
    }

    fn send_mouse_move(&self, x: i32, y: i32, left_button_held: bool) {
        info!(x, y, left_button_held, "mouse_move");
    }

    fn send_mouse_wheel(&self, x: i32, y: i32, delta_x: i32, delta_y: i32) {
        info!(x, y, delta_x, delta_y, "mouse_wheel");
    }

    fn send_key(&self, key: Key, modifiers: Modifiers, is_down: bool) {
        info!(?key, code = key.code(), ?modifiers, is_down, "key");
    }

    fn send_char(&self, character: char) {
        info!(?character, "char");
    }

    fn close(&self, force: bool) {
        info!(force, "view_closing");
        self.client.on_view_closing();
    }
}
