use bitflags::bitflags;

/// Raw modifier bits as carried in the session protocol's key events.
///
/// Left and right variants have distinct bits; `ALT` is also published as
/// the combined mask because the protocol treats the alt family as one
/// unit in older clients.
pub mod kmod {
    #![allow(missing_docs)]
    #![allow(clippy::missing_docs_in_private_items)]

    pub const LSHIFT: i32 = 0x0001;
    pub const RSHIFT: i32 = 0x0002;
    pub const LCTRL: i32 = 0x0040;
    pub const RCTRL: i32 = 0x0080;
    pub const LALT: i32 = 0x0100;
    pub const RALT: i32 = 0x0200;
    pub const LGUI: i32 = 0x0400;
    pub const RGUI: i32 = 0x0800;
    pub const NUM: i32 = 0x1000;
    pub const CAPS: i32 = 0x2000;

    pub const ALT: i32 = LALT | RALT;
}

bitflags! {
    /// Canonical modifier set attached to normalized key events.
    ///
    /// Bit positions follow the browser host's event-flag layout.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
    pub struct Modifiers: u32 {
        /// Either shift key is held.
        const SHIFT = 1 << 1;
        /// Either control key is held.
        const CONTROL = 1 << 2;
        /// Either alt key is held.
        const ALT = 1 << 3;
    }
}

impl Modifiers {
    /// Resolve a raw session bitmask into the canonical set.
    ///
    /// Left and right bits are ORed per modifier family. The super keys
    /// produce no flag here even though their presses normalize to
    /// [`crate::Key::Super`]: the host's key events carry no super bit.
    pub fn from_raw(raw: i32) -> Self {
        let mut out = Self::empty();
        if raw & (kmod::LSHIFT | kmod::RSHIFT) != 0 {
            out |= Self::SHIFT;
        }
        if raw & (kmod::LCTRL | kmod::RCTRL) != 0 {
            out |= Self::CONTROL;
        }
        if raw & kmod::ALT != 0 {
            out |= Self::ALT;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_collapse_per_family() {
        assert_eq!(Modifiers::from_raw(kmod::LSHIFT), Modifiers::SHIFT);
        assert_eq!(Modifiers::from_raw(kmod::RSHIFT), Modifiers::SHIFT);
        assert_eq!(Modifiers::from_raw(kmod::LCTRL), Modifiers::CONTROL);
        assert_eq!(Modifiers::from_raw(kmod::RCTRL), Modifiers::CONTROL);
        assert_eq!(Modifiers::from_raw(kmod::LALT), Modifiers::ALT);
        assert_eq!(Modifiers::from_raw(kmod::RALT), Modifiers::ALT);
    }

    #[test]
    fn combined_families() {
        let raw = kmod::LSHIFT | kmod::RCTRL | kmod::LALT;
        let mods = Modifiers::from_raw(raw);
        assert_eq!(
            mods,
            Modifiers::SHIFT | Modifiers::CONTROL | Modifiers::ALT
        );
    }

    #[test]
    fn super_and_lock_bits_produce_nothing() {
        assert_eq!(Modifiers::from_raw(kmod::LGUI), Modifiers::empty());
        assert_eq!(Modifiers::from_raw(kmod::RGUI), Modifiers::empty());
        assert_eq!(Modifiers::from_raw(kmod::NUM), Modifiers::empty());
        assert_eq!(Modifiers::from_raw(kmod::CAPS), Modifiers::empty());
        assert_eq!(Modifiers::from_raw(0), Modifiers::empty());
    }
}
