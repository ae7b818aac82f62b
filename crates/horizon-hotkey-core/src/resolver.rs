//! Key-combo resolution.
//!
//! Turns a human-readable combo such as `Control-Alt-F1` into a [`ComboKey`].
//! All dash-separated tokens but the last are modifier names; the last is a
//! keysym name, translated to a keycode on the current keyboard mapping.
//!
//! Full modifier words match case-insensitively; the single-letter
//! abbreviations are case-sensitive, which is what lets `S` (Shift) and `s`
//! (Super) coexist:
//!
//! | Modifier | Words                   | Letters    |
//! |----------|-------------------------|------------|
//! | Shift    | `shift`                 | `S`        |
//! | Control  | `control`, `ctrl`       | `C`        |
//! | Alt      | `alt`, `meta`, `mod1`   | `A`, `M`   |
//! | Super    | `win`, `super`, `mod4`  | `W`, `s`   |
//!
//! # Example
//!
//! ```
//! use horizon_hotkey_core::{resolve, Keysym, KeysymTranslator, ModifierMask, Result};
//!
//! struct FixedLayout;
//!
//! impl KeysymTranslator for FixedLayout {
//!     fn keycode_for_keysym(&self, keysym: Keysym) -> Result<Option<u32>> {
//!         Ok((keysym == Keysym::from_name("F1").unwrap()).then_some(67))
//!     }
//! }
//!
//! let combo = resolve("Control-Alt-F1", &FixedLayout).unwrap();
//! assert_eq!(combo.keycode, 67);
//! assert_eq!(combo.modifiers, ModifierMask::CONTROL | ModifierMask::ALT);
//! ```

use crate::combo::{ComboKey, ModifierMask};
use crate::error::{HotkeyError, ResolutionFailure, Result};
use crate::keysym::Keysym;
use crate::logging::targets;

/// Translates keysyms to keycodes using the system's keyboard mapping.
pub trait KeysymTranslator {
    /// The first keycode producing `keysym`, or `None` if no key does.
    ///
    /// Errors are reserved for failures to reach the windowing system.
    fn keycode_for_keysym(&self, keysym: Keysym) -> Result<Option<u32>>;
}

/// Resolve a combo string to a [`ComboKey`].
///
/// Unrecognized modifier tokens contribute no bits; each one is logged at
/// `warn` level.
pub fn resolve(combo: &str, translator: &dyn KeysymTranslator) -> Result<ComboKey> {
    let mut tokens: Vec<&str> = combo.split('-').collect();
    // `split` always yields at least one item.
    let key_name = tokens.pop().unwrap_or_default();

    let mut modifiers = ModifierMask::NONE;
    for token in tokens {
        match modifier_for_token(token) {
            Some(mask) => modifiers |= mask,
            None => {
                tracing::warn!(
                    target: targets::RESOLVER,
                    combo,
                    token,
                    "ignoring unrecognized modifier"
                );
            }
        }
    }

    if key_name.is_empty() {
        return Err(HotkeyError::resolution(combo, ResolutionFailure::MissingKeyName));
    }

    let not_found =
        || HotkeyError::resolution(combo, ResolutionFailure::KeysymNotFound(key_name.to_string()));

    let keysym = Keysym::from_name(key_name).ok_or_else(not_found)?;
    let keycode = translator
        .keycode_for_keysym(keysym)?
        .ok_or_else(not_found)?;

    let resolved = ComboKey::new(keycode, modifiers);
    tracing::trace!(target: targets::RESOLVER, combo, %keysym, %resolved, "resolved combo");
    Ok(resolved)
}

/// Map a single modifier token to its mask.
pub fn modifier_for_token(token: &str) -> Option<ModifierMask> {
    match token {
        "S" => return Some(ModifierMask::SHIFT),
        "C" => return Some(ModifierMask::CONTROL),
        "A" | "M" => return Some(ModifierMask::ALT),
        "W" | "s" => return Some(ModifierMask::SUPER),
        _ => {}
    }

    match token.to_ascii_lowercase().as_str() {
        "shift" => Some(ModifierMask::SHIFT),
        "control" | "ctrl" => Some(ModifierMask::CONTROL),
        "alt" | "meta" | "mod1" => Some(ModifierMask::ALT),
        "win" | "super" | "mod4" => Some(ModifierMask::SUPER),
        _ => None,
    }
}
