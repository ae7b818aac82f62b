//! Hotkey identity types: modifier masks, combo keys and input events.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A bitmask of held modifiers, laid out like the X11 core protocol state.
///
/// Masks taken from events keep every bit the system reported, including
/// lock and pointer-button bits. The only validity bound is [`Self::ANY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierMask(u32);

impl ModifierMask {
    /// No modifiers held.
    pub const NONE: Self = Self(0);
    /// Shift.
    pub const SHIFT: Self = Self(1 << 0);
    /// Caps Lock.
    pub const LOCK: Self = Self(1 << 1);
    /// Control.
    pub const CONTROL: Self = Self(1 << 2);
    /// Mod1, conventionally Alt/Meta.
    pub const ALT: Self = Self(1 << 3);
    /// Mod2, conventionally Num Lock.
    pub const MOD2: Self = Self(1 << 4);
    /// Mod3, usually unassigned.
    pub const MOD3: Self = Self(1 << 5);
    /// Mod4, conventionally Super/Win.
    pub const SUPER: Self = Self(1 << 6);
    /// Mod5, conventionally AltGr (ISO Level 3 Shift).
    pub const MOD5: Self = Self(1 << 7);
    /// The AnyModifier sentinel, the largest representable modifier value.
    pub const ANY: Self = Self(1 << 15);

    /// Wrap raw state bits exactly as delivered by the system.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether the mask is within the AnyModifier bound.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 <= Self::ANY.0
    }
}

impl BitOr for ModifierMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModifierMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u32> for ModifierMask {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl fmt::Display for ModifierMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The canonical identity of a hotkey.
///
/// Two combos are equal iff keycode and modifiers are both equal. The
/// `Display` form, `keycode+modifiers`, is for logs only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComboKey {
    pub keycode: u32,
    pub modifiers: ModifierMask,
}

impl ComboKey {
    pub const fn new(keycode: u32, modifiers: ModifierMask) -> Self {
        Self { keycode, modifiers }
    }
}

impl fmt::Display for ComboKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.keycode, self.modifiers)
    }
}

/// The kind of a low-level input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEventKind {
    KeyPress,
    KeyRelease,
    /// Anything that is not a key event.
    Other,
}

/// A windowing-system-neutral input event handed to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: InputEventKind,
    pub keycode: u32,
    /// Raw modifier/button state as reported with the event.
    pub state: u32,
}

impl InputEvent {
    /// A key-press event.
    pub const fn key_press(keycode: u32, state: u32) -> Self {
        Self {
            kind: InputEventKind::KeyPress,
            keycode,
            state,
        }
    }

    /// A key-release event.
    pub const fn key_release(keycode: u32, state: u32) -> Self {
        Self {
            kind: InputEventKind::KeyRelease,
            keycode,
            state,
        }
    }

    /// A non-key event.
    pub const fn other() -> Self {
        Self {
            kind: InputEventKind::Other,
            keycode: 0,
            state: 0,
        }
    }

    /// Whether this is a key press.
    #[inline]
    pub fn is_key_press(&self) -> bool {
        self.kind == InputEventKind::KeyPress
    }

    /// The combo this event carries, with the state taken verbatim.
    #[inline]
    pub fn combo(&self) -> ComboKey {
        ComboKey::new(self.keycode, ModifierMask::from_bits(self.state))
    }
}
