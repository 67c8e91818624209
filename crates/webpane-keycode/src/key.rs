use serde::{Deserialize, Serialize};

use crate::{Scancode, scancode};

/// Normalized, platform-neutral key code.
///
/// Discriminants are the browser virtual-key values sent over the host
/// interface; [`Key::code`] exposes them. The mapping from scancodes is
/// many-to-one: keypad enter normalizes to [`Key::Return`], keypad period
/// to [`Key::Period`], and the left/right variants of shift, control, alt
/// and super each collapse to a single combined code.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Key {
    Backspace = 0x08,
    Tab = 0x09,
    Clear = 0x0C,
    Return = 0x0D,
    Shift = 0x10,
    Control = 0x11,
    Alt = 0x12,
    Pause = 0x13,
    CapsLock = 0x14,
    Escape = 0x1B,
    Space = 0x20,
    PageUp = 0x21,
    PageDown = 0x22,
    End = 0x23,
    Home = 0x24,
    LeftArrow = 0x25,
    UpArrow = 0x26,
    RightArrow = 0x27,
    DownArrow = 0x28,
    PrintScreen = 0x2A,
    Insert = 0x2D,
    Delete = 0x2E,
    Digit0 = 0x30,
    Digit1 = 0x31,
    Digit2 = 0x32,
    Digit3 = 0x33,
    Digit4 = 0x34,
    Digit5 = 0x35,
    Digit6 = 0x36,
    Digit7 = 0x37,
    Digit8 = 0x38,
    Digit9 = 0x39,
    A = 0x41,
    B = 0x42,
    C = 0x43,
    D = 0x44,
    E = 0x45,
    F = 0x46,
    G = 0x47,
    H = 0x48,
    I = 0x49,
    J = 0x4A,
    K = 0x4B,
    L = 0x4C,
    M = 0x4D,
    N = 0x4E,
    O = 0x4F,
    P = 0x50,
    Q = 0x51,
    R = 0x52,
    S = 0x53,
    T = 0x54,
    U = 0x55,
    V = 0x56,
    W = 0x57,
    X = 0x58,
    Y = 0x59,
    Z = 0x5A,
    Super = 0x5B,
    Keypad0 = 0x60,
    Keypad1 = 0x61,
    Keypad2 = 0x62,
    Keypad3 = 0x63,
    Keypad4 = 0x64,
    Keypad5 = 0x65,
    Keypad6 = 0x66,
    Keypad7 = 0x67,
    Keypad8 = 0x68,
    Keypad9 = 0x69,
    KeypadMultiply = 0x6A,
    KeypadAdd = 0x6B,
    KeypadSubtract = 0x6D,
    KeypadDecimal = 0x6E,
    KeypadDivide = 0x6F,
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,
    NumLock = 0x90,
    Power = 0x98,
    Semicolon = 0xBA,
    Equal = 0xBB,
    Comma = 0xBC,
    Minus = 0xBD,
    Period = 0xBE,
    Slash = 0xBF,
    Grave = 0xC0,
    LeftBracket = 0xDB,
    Backslash = 0xDC,
    RightBracket = 0xDD,
    Apostrophe = 0xDE,
}

impl Key {
    /// Returns the browser virtual-key code for this key.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Looks up a `Key` from a session scancode.
    ///
    /// Total over all inputs: scancodes outside the table return `None`, and
    /// callers are expected to drop those events rather than error.
    pub fn from_scancode(sc: Scancode) -> Option<Self> {
        let key = match sc {
            scancode::A => Self::A,
            scancode::B => Self::B,
            scancode::C => Self::C,
            scancode::D => Self::D,
            scancode::E => Self::E,
            scancode::F => Self::F,
            scancode::G => Self::G,
            scancode::H => Self::H,
            scancode::I => Self::I,
            scancode::J => Self::J,
            scancode::K => Self::K,
            scancode::L => Self::L,
            scancode::M => Self::M,
            scancode::N => Self::N,
            scancode::O => Self::O,
            scancode::P => Self::P,
            scancode::Q => Self::Q,
            scancode::R => Self::R,
            scancode::S => Self::S,
            scancode::T => Self::T,
            scancode::U => Self::U,
            scancode::V => Self::V,
            scancode::W => Self::W,
            scancode::X => Self::X,
            scancode::Y => Self::Y,
            scancode::Z => Self::Z,

            scancode::DIGIT_0 => Self::Digit0,
            scancode::DIGIT_1 => Self::Digit1,
            scancode::DIGIT_2 => Self::Digit2,
            scancode::DIGIT_3 => Self::Digit3,
            scancode::DIGIT_4 => Self::Digit4,
            scancode::DIGIT_5 => Self::Digit5,
            scancode::DIGIT_6 => Self::Digit6,
            scancode::DIGIT_7 => Self::Digit7,
            scancode::DIGIT_8 => Self::Digit8,
            scancode::DIGIT_9 => Self::Digit9,

            scancode::COMMA => Self::Comma,
            scancode::PERIOD => Self::Period,
            scancode::GRAVE => Self::Grave,
            scancode::MINUS => Self::Minus,
            scancode::EQUALS => Self::Equal,
            scancode::LEFT_BRACKET => Self::LeftBracket,
            scancode::RIGHT_BRACKET => Self::RightBracket,
            scancode::SEMICOLON => Self::Semicolon,
            scancode::APOSTROPHE => Self::Apostrophe,
            scancode::SLASH => Self::Slash,
            scancode::BACKSLASH => Self::Backslash,

            scancode::F1 => Self::F1,
            scancode::F2 => Self::F2,
            scancode::F3 => Self::F3,
            scancode::F4 => Self::F4,
            scancode::F5 => Self::F5,
            scancode::F6 => Self::F6,
            scancode::F7 => Self::F7,
            scancode::F8 => Self::F8,
            scancode::F9 => Self::F9,
            scancode::F10 => Self::F10,
            scancode::F11 => Self::F11,
            scancode::F12 => Self::F12,

            scancode::KP_0 => Self::Keypad0,
            scancode::KP_1 => Self::Keypad1,
            scancode::KP_2 => Self::Keypad2,
            scancode::KP_3 => Self::Keypad3,
            scancode::KP_4 => Self::Keypad4,
            scancode::KP_5 => Self::Keypad5,
            scancode::KP_6 => Self::Keypad6,
            scancode::KP_7 => Self::Keypad7,
            scancode::KP_8 => Self::Keypad8,
            scancode::KP_9 => Self::Keypad9,
            scancode::NUM_LOCK_CLEAR => Self::NumLock,
            scancode::KP_DIVIDE => Self::KeypadDivide,
            scancode::KP_MULTIPLY => Self::KeypadMultiply,
            scancode::KP_MINUS => Self::KeypadSubtract,
            scancode::KP_PLUS => Self::KeypadAdd,
            scancode::KP_ENTER => Self::Return,
            scancode::KP_DECIMAL => Self::KeypadDecimal,
            scancode::KP_PERIOD => Self::Period,

            scancode::CLEAR => Self::Clear,
            scancode::POWER => Self::Power,
            scancode::PAGE_UP => Self::PageUp,
            scancode::PAGE_DOWN => Self::PageDown,
            scancode::PAUSE => Self::Pause,
            scancode::PRINT_SCREEN => Self::PrintScreen,
            scancode::SPACE => Self::Space,
            scancode::CAPS_LOCK => Self::CapsLock,
            scancode::LGUI | scancode::RGUI => Self::Super,
            scancode::LSHIFT | scancode::RSHIFT => Self::Shift,
            scancode::LCTRL | scancode::RCTRL => Self::Control,
            scancode::LALT | scancode::RALT => Self::Alt,
            scancode::ESCAPE => Self::Escape,
            scancode::BACKSPACE => Self::Backspace,
            scancode::RETURN => Self::Return,
            scancode::TAB => Self::Tab,
            scancode::DELETE => Self::Delete,
            scancode::INSERT => Self::Insert,
            scancode::END => Self::End,
            scancode::HOME => Self::Home,
            scancode::UP => Self::UpArrow,
            scancode::DOWN => Self::DownArrow,
            scancode::LEFT => Self::LeftArrow,
            scancode::RIGHT => Self::RightArrow,

            _ => return None,
        };
        Some(key)
    }
}

impl TryFrom<Scancode> for Key {
    type Error = ();
    fn try_from(value: Scancode) -> Result<Self, Self::Error> {
        Self::from_scancode(value).ok_or(())
    }
}
