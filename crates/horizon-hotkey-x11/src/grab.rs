//! Key grabs on the X server.

use std::rc::Rc;

use horizon_hotkey_core::{ComboKey, DisplayHandle, GrabBackend, HotkeyError, RangeField, WindowId};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt as _, GrabMode, ModMask};

use crate::display::X11Display;
use crate::logging::targets;

/// [`GrabBackend`] issuing `GrabKey`/`UngrabKey` on an [`X11Display`].
///
/// Grabs are asynchronous for both pointer and keyboard, and report events
/// normally when one of our own windows has focus.
#[derive(Debug, Clone)]
pub struct X11GrabBackend {
    display: Rc<X11Display>,
}

impl X11GrabBackend {
    pub fn new(display: Rc<X11Display>) -> Self {
        Self { display }
    }

    fn wire_combo(combo: ComboKey) -> horizon_hotkey_core::Result<(u8, ModMask)> {
        let keycode = u8::try_from(combo.keycode).map_err(|_| {
            HotkeyError::above_maximum(
                RangeField::Keycode,
                i64::from(combo.keycode),
                i64::from(u8::MAX),
            )
        })?;
        let modifiers = u16::try_from(combo.modifiers.bits()).map_err(|_| {
            HotkeyError::above_maximum(
                RangeField::Modifiers,
                i64::from(combo.modifiers.bits()),
                i64::from(u16::MAX),
            )
        })?;
        Ok((keycode, ModMask::from(modifiers)))
    }
}

impl GrabBackend for X11GrabBackend {
    fn display(&self) -> Option<DisplayHandle> {
        self.display.handle()
    }

    fn grab_key(&mut self, root: WindowId, combo: ComboKey) -> horizon_hotkey_core::Result<()> {
        let (keycode, modifiers) = Self::wire_combo(combo)?;
        let conn = self.display.connection();
        self.display.track(conn.grab_key(
            true,
            root,
            modifiers,
            keycode,
            GrabMode::ASYNC,
            GrabMode::ASYNC,
        ))?;
        self.display.track(conn.flush())?;
        tracing::trace!(target: targets::GRAB, %combo, root, "GrabKey sent");
        Ok(())
    }

    fn ungrab_key(&mut self, root: WindowId, combo: ComboKey) -> horizon_hotkey_core::Result<()> {
        let (keycode, modifiers) = Self::wire_combo(combo)?;
        let conn = self.display.connection();
        self.display.track(conn.ungrab_key(keycode, root, modifiers))?;
        self.display.track(conn.flush())?;
        tracing::trace!(target: targets::GRAB, %combo, root, "UngrabKey sent");
        Ok(())
    }
}
