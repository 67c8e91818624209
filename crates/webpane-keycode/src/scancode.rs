//! Scancodes as delivered by the remote display session.
//!
//! A "scancode" in this crate is the session protocol's positional key
//! identifier:
//! - The integer carried in the `Key` variant of a raw input event.
//! - A layout-independent identifier for a physical key — it does not
//!   represent a character, and it is specific to the session protocol
//!   (i.e., not a platform virtual-key code and not Unicode).
//!
//! Left and right variants of the modifier keys have distinct scancodes;
//! they collapse to a single [`crate::Key`] during normalization.

// The constant table below is a protocol listing; per-item docs would just
// restate the names, so suppress the missing-docs lints for this module.
#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Positional key identifier from the remote display session.
pub type Scancode = i32;

pub const A: Scancode = 4;
pub const B: Scancode = 5;
pub const C: Scancode = 6;
pub const D: Scancode = 7;
pub const E: Scancode = 8;
pub const F: Scancode = 9;
pub const G: Scancode = 10;
pub const H: Scancode = 11;
pub const I: Scancode = 12;
pub const J: Scancode = 13;
pub const K: Scancode = 14;
pub const L: Scancode = 15;
pub const M: Scancode = 16;
pub const N: Scancode = 17;
pub const O: Scancode = 18;
pub const P: Scancode = 19;
pub const Q: Scancode = 20;
pub const R: Scancode = 21;
pub const S: Scancode = 22;
pub const T: Scancode = 23;
pub const U: Scancode = 24;
pub const V: Scancode = 25;
pub const W: Scancode = 26;
pub const X: Scancode = 27;
pub const Y: Scancode = 28;
pub const Z: Scancode = 29;

pub const DIGIT_1: Scancode = 30;
pub const DIGIT_2: Scancode = 31;
pub const DIGIT_3: Scancode = 32;
pub const DIGIT_4: Scancode = 33;
pub const DIGIT_5: Scancode = 34;
pub const DIGIT_6: Scancode = 35;
pub const DIGIT_7: Scancode = 36;
pub const DIGIT_8: Scancode = 37;
pub const DIGIT_9: Scancode = 38;
pub const DIGIT_0: Scancode = 39;

pub const RETURN: Scancode = 40;
pub const ESCAPE: Scancode = 41;
pub const BACKSPACE: Scancode = 42;
pub const TAB: Scancode = 43;
pub const SPACE: Scancode = 44;

pub const MINUS: Scancode = 45;
pub const EQUALS: Scancode = 46;
pub const LEFT_BRACKET: Scancode = 47;
pub const RIGHT_BRACKET: Scancode = 48;
pub const BACKSLASH: Scancode = 49;
pub const SEMICOLON: Scancode = 51;
pub const APOSTROPHE: Scancode = 52;
pub const GRAVE: Scancode = 53;
pub const COMMA: Scancode = 54;
pub const PERIOD: Scancode = 55;
pub const SLASH: Scancode = 56;

pub const CAPS_LOCK: Scancode = 57;

pub const F1: Scancode = 58;
pub const F2: Scancode = 59;
pub const F3: Scancode = 60;
pub const F4: Scancode = 61;
pub const F5: Scancode = 62;
pub const F6: Scancode = 63;
pub const F7: Scancode = 64;
pub const F8: Scancode = 65;
pub const F9: Scancode = 66;
pub const F10: Scancode = 67;
pub const F11: Scancode = 68;
pub const F12: Scancode = 69;

pub const PRINT_SCREEN: Scancode = 70;
pub const PAUSE: Scancode = 72;
pub const INSERT: Scancode = 73;
pub const HOME: Scancode = 74;
pub const PAGE_UP: Scancode = 75;
pub const DELETE: Scancode = 76;
pub const END: Scancode = 77;
pub const PAGE_DOWN: Scancode = 78;
pub const RIGHT: Scancode = 79;
pub const LEFT: Scancode = 80;
pub const DOWN: Scancode = 81;
pub const UP: Scancode = 82;

pub const NUM_LOCK_CLEAR: Scancode = 83;
pub const KP_DIVIDE: Scancode = 84;
pub const KP_MULTIPLY: Scancode = 85;
pub const KP_MINUS: Scancode = 86;
pub const KP_PLUS: Scancode = 87;
pub const KP_ENTER: Scancode = 88;
pub const KP_1: Scancode = 89;
pub const KP_2: Scancode = 90;
pub const KP_3: Scancode = 91;
pub const KP_4: Scancode = 92;
pub const KP_5: Scancode = 93;
pub const KP_6: Scancode = 94;
pub const KP_7: Scancode = 95;
pub const KP_8: Scancode = 96;
pub const KP_9: Scancode = 97;
pub const KP_0: Scancode = 98;
pub const KP_PERIOD: Scancode = 99;

pub const POWER: Scancode = 102;
pub const CLEAR: Scancode = 156;
pub const KP_DECIMAL: Scancode = 220;

pub const LCTRL: Scancode = 224;
pub const LSHIFT: Scancode = 225;
pub const LALT: Scancode = 226;
pub const LGUI: Scancode = 227;
pub const RCTRL: Scancode = 228;
pub const RSHIFT: Scancode = 229;
pub const RALT: Scancode = 230;
pub const RGUI: Scancode = 231;
