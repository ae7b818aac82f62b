//! Keyboard mapping and keysym translation.

use std::rc::Rc;

use horizon_hotkey_core::{HotkeyError, Keysym, KeysymTranslator};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::ConnectionExt as _;

use crate::display::X11Display;
use crate::error::Result;

/// A snapshot of the server's keycode → keysyms table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardMapping {
    min_keycode: u32,
    keysyms_per_keycode: usize,
    keysyms: Vec<u32>,
}

impl KeyboardMapping {
    /// Build a mapping from the raw table starting at `min_keycode`.
    pub fn new(min_keycode: u32, keysyms_per_keycode: usize, keysyms: Vec<u32>) -> Self {
        Self {
            min_keycode,
            keysyms_per_keycode,
            keysyms,
        }
    }

    /// Fetch the current mapping from the server.
    pub(crate) fn fetch(conn: &impl Connection) -> Result<Self> {
        let setup = conn.setup();
        let (min, max) = (setup.min_keycode, setup.max_keycode);
        if max < min {
            return Ok(Self::new(u32::from(min), 0, Vec::new()));
        }

        let count = max - min + 1;
        let reply = conn.get_keyboard_mapping(min, count)?.reply()?;
        Ok(Self::new(
            u32::from(min),
            usize::from(reply.keysyms_per_keycode),
            reply.keysyms,
        ))
    }

    /// The lowest keycode producing `keysym` in any column.
    pub fn keycode_for(&self, keysym: Keysym) -> Option<u32> {
        if self.keysyms_per_keycode == 0 {
            return None;
        }
        self.keysyms
            .chunks(self.keysyms_per_keycode)
            .position(|syms| syms.contains(&keysym.raw()))
            .map(|index| self.min_keycode + index as u32)
    }
}

/// [`KeysymTranslator`] over the server's keyboard mapping.
///
/// The mapping is fetched on first use and cached until the server sends
/// `MappingNotify`.
#[derive(Debug, Clone)]
pub struct X11KeysymTranslator {
    display: Rc<X11Display>,
}

impl X11KeysymTranslator {
    pub fn new(display: Rc<X11Display>) -> Self {
        Self { display }
    }
}

impl KeysymTranslator for X11KeysymTranslator {
    fn keycode_for_keysym(&self, keysym: Keysym) -> horizon_hotkey_core::Result<Option<u32>> {
        if self.display.is_broken() {
            return Err(HotkeyError::display_unavailable("X connection is closed"));
        }
        let keycode = self.display.with_keyboard_mapping(|mapping| mapping.keycode_for(keysym))?;
        Ok(keycode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> KeyboardMapping {
        // Keycodes 8..=11, two keysyms each.
        KeyboardMapping::new(
            8,
            2,
            vec![
                0xff1b, 0, // 8: Escape
                0x61, 0x41, // 9: a A
                0xffbe, 0x1008_fe01, // 10: F1 XF86Switch_VT_1
                0x61, 0, // 11: second a
            ],
        )
    }

    #[test]
    fn test_keycode_for_any_column() {
        let mapping = mapping();
        assert_eq!(mapping.keycode_for(Keysym(0xff1b)), Some(8));
        assert_eq!(mapping.keycode_for(Keysym(0x41)), Some(9));
        assert_eq!(mapping.keycode_for(Keysym(0xffbe)), Some(10));
    }

    #[test]
    fn test_lowest_keycode_wins() {
        assert_eq!(mapping().keycode_for(Keysym(0x61)), Some(9));
    }

    #[test]
    fn test_missing_keysym() {
        assert_eq!(mapping().keycode_for(Keysym(0xffbf)), None);
        assert_eq!(KeyboardMapping::new(8, 0, Vec::new()).keycode_for(Keysym(0x61)), None);
    }
}
