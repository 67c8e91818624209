//! webpane-keycode: input tables for the off-screen web view.
//!
//! - [`Scancode`]: the hardware-level key identifier delivered by the remote
//!   display session, plus the protocol's named assignments in [`scancode`].
//! - [`Key`]: the normalized, platform-neutral key code understood by the
//!   browser host, with [`Key::from_scancode`] as the lookup table.
//! - [`Modifiers`]: the canonical shift/control/alt set, resolved from the
//!   session's raw bitmask with [`Modifiers::from_raw`].
//!
//! Everything in this crate is static data: the tables are total (unknown
//! inputs resolve to `None` or an empty set), deterministic, and never
//! mutated after process start.

mod key;
pub use key::Key;

pub mod scancode;
pub use scancode::Scancode;

mod modifiers;
pub use modifiers::{Modifiers, kmod};
