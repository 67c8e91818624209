use tracing::trace;
use webpane_dispatch::MouseButton;
use webpane_keycode::{Key, Modifiers, scancode};

use crate::{
    action::CanonicalAction,
    event::{ButtonState, KeyState, RawInputEvent},
};

/// Scroll amounts arrive in lines; the host wants pixels.
const SCROLL_VELOCITY: i32 = 20;

/// Highest click multiplicity the host accepts.
const MAX_CLICKS: i32 = 3;

/// Pointer state persisted across events.
///
/// Only the left-button-held flag is carried between events — it is set by
/// a left press, cleared by the matching release, and stamped onto every
/// intervening move. All other modifier state is derived per event from
/// the raw bitmask.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PointerState {
    /// True between a left-button press and its release.
    left_button_held: bool,
}

impl PointerState {
    /// Fresh state with no buttons held.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a left-button drag is in progress.
    pub fn left_button_held(&self) -> bool {
        self.left_button_held
    }
}

/// Translate one raw event into its canonical actions.
///
/// Pure apart from the pointer-state update; yields zero, one, or two
/// actions per event. Consumes the event, releasing any embedded buffer
/// exactly once regardless of the outcome.
pub fn translate(event: RawInputEvent, pointer: &mut PointerState) -> Vec<CanonicalAction> {
    let mut out = Vec::new();
    match event {
        RawInputEvent::MouseButton {
            x,
            y,
            button,
            state,
            clicks,
        } => {
            let is_release = state == ButtonState::Released;
            if button == MouseButton::Left {
                pointer.left_button_held = !is_release;
            }
            // Only the upper bound is clamped; non-positive counts pass
            // through unchanged.
            let click_count = if clicks <= MAX_CLICKS { clicks } else { MAX_CLICKS };
            out.push(CanonicalAction::MouseClick {
                x,
                y,
                button,
                is_release,
                click_count,
            });
        }
        RawInputEvent::MouseMove { x, y } => {
            out.push(CanonicalAction::MouseMove {
                x,
                y,
                left_button_held: pointer.left_button_held,
            });
        }
        RawInputEvent::MouseScroll {
            x,
            y,
            scroll_x,
            scroll_y,
        } => {
            out.push(CanonicalAction::MouseWheel {
                x,
                y,
                delta_x: scroll_x * SCROLL_VELOCITY,
                delta_y: scroll_y * SCROLL_VELOCITY,
            });
        }
        RawInputEvent::Text { bytes } => {
            if let Some(bytes) = bytes {
                for byte in bytes {
                    out.push(CanonicalAction::CharInput {
                        character: char::from(byte),
                    });
                }
            }
        }
        RawInputEvent::Key {
            scancode: sc,
            state,
            modifiers,
        } => {
            let pressed = state == KeyState::Pressed;
            let modifiers = Modifiers::from_raw(modifiers);
            match Key::from_scancode(sc) {
                Some(key) => {
                    out.push(if pressed {
                        CanonicalAction::KeyDown { key, modifiers }
                    } else {
                        CanonicalAction::KeyUp { key, modifiers }
                    });
                }
                None => trace!(scancode = sc, "unknown_scancode_dropped"),
            }
            // Pressing Return also types a carriage return, even when the
            // key event itself was dropped.
            if pressed && sc == scancode::RETURN {
                out.push(CanonicalAction::CharInput { character: '\r' });
            }
        }
        RawInputEvent::Quit => out.push(CanonicalAction::CloseRequest),
    }
    out
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use webpane_keycode::kmod;

    use super::*;

    fn press(button: MouseButton) -> RawInputEvent {
        RawInputEvent::MouseButton {
            x: 10,
            y: 20,
            button,
            state: ButtonState::Pressed,
            clicks: 1,
        }
    }

    fn release(button: MouseButton) -> RawInputEvent {
        RawInputEvent::MouseButton {
            x: 10,
            y: 20,
            button,
            state: ButtonState::Released,
            clicks: 1,
        }
    }

    #[test]
    fn click_count_clamps_only_the_upper_bound() {
        let mut pointer = PointerState::new();
        let actions = translate(
            RawInputEvent::MouseButton {
                x: 10,
                y: 20,
                button: MouseButton::Left,
                state: ButtonState::Pressed,
                clicks: 5,
            },
            &mut pointer,
        );
        assert_eq!(
            actions,
            vec![CanonicalAction::MouseClick {
                x: 10,
                y: 20,
                button: MouseButton::Left,
                is_release: false,
                click_count: 3,
            }]
        );
        assert!(pointer.left_button_held());

        // Non-positive counts are passed through untouched.
        let actions = translate(
            RawInputEvent::MouseButton {
                x: 0,
                y: 0,
                button: MouseButton::Right,
                state: ButtonState::Pressed,
                clicks: 0,
            },
            &mut pointer,
        );
        assert!(matches!(
            actions[0],
            CanonicalAction::MouseClick { click_count: 0, .. }
        ));
    }

    #[test]
    fn left_button_held_carries_across_moves() {
        let mut pointer = PointerState::new();

        let moved = translate(RawInputEvent::MouseMove { x: 1, y: 1 }, &mut pointer);
        assert!(matches!(
            moved[0],
            CanonicalAction::MouseMove {
                left_button_held: false,
                ..
            }
        ));

        translate(press(MouseButton::Left), &mut pointer);
        for i in 0..4 {
            let moved = translate(RawInputEvent::MouseMove { x: i, y: i }, &mut pointer);
            assert!(matches!(
                moved[0],
                CanonicalAction::MouseMove {
                    left_button_held: true,
                    ..
                }
            ));
        }

        translate(release(MouseButton::Left), &mut pointer);
        assert!(!pointer.left_button_held());
    }

    #[test]
    fn other_buttons_do_not_touch_held_state() {
        let mut pointer = PointerState::new();
        translate(press(MouseButton::Left), &mut pointer);

        translate(press(MouseButton::Right), &mut pointer);
        translate(release(MouseButton::Right), &mut pointer);
        translate(press(MouseButton::Middle), &mut pointer);
        translate(release(MouseButton::Middle), &mut pointer);
        assert!(pointer.left_button_held());
    }

    #[test]
    fn scroll_deltas_are_scaled() {
        let mut pointer = PointerState::new();
        let actions = translate(
            RawInputEvent::MouseScroll {
                x: 5,
                y: 6,
                scroll_x: 1,
                scroll_y: -2,
            },
            &mut pointer,
        );
        assert_eq!(
            actions,
            vec![CanonicalAction::MouseWheel {
                x: 5,
                y: 6,
                delta_x: 20,
                delta_y: -40,
            }]
        );
    }

    #[test]
    fn text_decodes_byte_per_character_in_order() {
        let mut pointer = PointerState::new();
        let actions = translate(
            RawInputEvent::Text {
                bytes: Some(b"Hi".to_vec()),
            },
            &mut pointer,
        );
        assert_eq!(
            actions,
            vec![
                CanonicalAction::CharInput { character: 'H' },
                CanonicalAction::CharInput { character: 'i' },
            ]
        );
    }

    #[test]
    fn empty_and_absent_text_emit_nothing() {
        let mut pointer = PointerState::new();
        assert!(translate(RawInputEvent::Text { bytes: None }, &mut pointer).is_empty());
        assert!(
            translate(
                RawInputEvent::Text {
                    bytes: Some(Vec::new())
                },
                &mut pointer
            )
            .is_empty()
        );
    }

    #[test]
    fn key_press_resolves_code_and_modifiers() {
        let mut pointer = PointerState::new();
        let actions = translate(
            RawInputEvent::Key {
                scancode: scancode::A,
                state: KeyState::Pressed,
                modifiers: kmod::LSHIFT | kmod::RCTRL,
            },
            &mut pointer,
        );
        assert_eq!(
            actions,
            vec![CanonicalAction::KeyDown {
                key: Key::A,
                modifiers: Modifiers::SHIFT | Modifiers::CONTROL,
            }]
        );

        let actions = translate(
            RawInputEvent::Key {
                scancode: scancode::A,
                state: KeyState::Released,
                modifiers: 0,
            },
            &mut pointer,
        );
        assert_eq!(
            actions,
            vec![CanonicalAction::KeyUp {
                key: Key::A,
                modifiers: Modifiers::empty(),
            }]
        );
    }

    #[test]
    fn unknown_scancode_is_dropped_silently() {
        let mut pointer = PointerState::new();
        let actions = translate(
            RawInputEvent::Key {
                scancode: 1,
                state: KeyState::Pressed,
                modifiers: 0,
            },
            &mut pointer,
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn return_press_types_a_carriage_return() {
        let mut pointer = PointerState::new();
        let actions = translate(
            RawInputEvent::Key {
                scancode: scancode::RETURN,
                state: KeyState::Pressed,
                modifiers: 0,
            },
            &mut pointer,
        );
        assert_eq!(
            actions,
            vec![
                CanonicalAction::KeyDown {
                    key: Key::Return,
                    modifiers: Modifiers::empty(),
                },
                CanonicalAction::CharInput { character: '\r' },
            ]
        );

        // Releases do not synthesize the character.
        let actions = translate(
            RawInputEvent::Key {
                scancode: scancode::RETURN,
                state: KeyState::Released,
                modifiers: 0,
            },
            &mut pointer,
        );
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn quit_yields_exactly_one_close_request() {
        let mut pointer = PointerState::new();
        let actions = translate(RawInputEvent::Quit, &mut pointer);
        assert_eq!(actions, vec![CanonicalAction::CloseRequest]);
    }

    proptest! {
        #[test]
        fn click_count_never_exceeds_three(clicks in any::<i32>()) {
            let mut pointer = PointerState::new();
            let actions = translate(
                RawInputEvent::MouseButton {
                    x: 0,
                    y: 0,
                    button: MouseButton::Left,
                    state: ButtonState::Pressed,
                    clicks,
                },
                &mut pointer,
            );
            match &actions[0] {
                CanonicalAction::MouseClick { click_count, .. } => {
                    prop_assert!(*click_count <= 3);
                    if clicks <= 3 {
                        prop_assert_eq!(*click_count, clicks);
                    }
                }
                other => prop_assert!(false, "unexpected action: {:?}", other),
            }
        }
    }
}
