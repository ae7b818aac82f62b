//! Fakes for driving a registry without an X server.

use std::cell::RefCell;
use std::rc::Rc;

use horizon_hotkey_core::{
    ComboKey, DisplayHandle, GrabBackend, HotkeyRegistry, Keysym, KeysymTranslator, Result,
    WindowId,
};
use x11rb::protocol::xproto::{KeyButMask, KeyPressEvent};

use crate::events::X11EventBus;
use crate::state::DisplayState;

pub(crate) type Fired = Rc<RefCell<Vec<&'static str>>>;

struct AcceptAll;

impl GrabBackend for AcceptAll {
    fn display(&self) -> Option<DisplayHandle> {
        Some(DisplayHandle {
            root: 0x1e3,
            main_window: Some(0x0440_0001),
            min_keycode: 8,
            max_keycode: 255,
        })
    }

    fn grab_key(&mut self, _root: WindowId, _combo: ComboKey) -> Result<()> {
        Ok(())
    }

    fn ungrab_key(&mut self, _root: WindowId, _combo: ComboKey) -> Result<()> {
        Ok(())
    }
}

struct NoKeysyms;

impl KeysymTranslator for NoKeysyms {
    fn keycode_for_keysym(&self, _keysym: Keysym) -> Result<Option<u32>> {
        Ok(None)
    }
}

/// A registry whose observer flag lives in `state`, as on a real display.
pub(crate) fn registry(state: &Rc<DisplayState>) -> (HotkeyRegistry<&'static str>, Fired) {
    let fired = Fired::default();
    let log = fired.clone();
    let registry = HotkeyRegistry::new(
        AcceptAll,
        NoKeysyms,
        X11EventBus::from_state(Rc::clone(state)),
        move |_combo: ComboKey, action: &&'static str| log.borrow_mut().push(*action),
    );
    (registry, fired)
}

pub(crate) fn key_event(response_type: u8, detail: u8, state: u16) -> KeyPressEvent {
    KeyPressEvent {
        response_type,
        detail,
        sequence: 1,
        time: 0,
        root: 0x1e3,
        event: 0x1e3,
        child: 0,
        root_x: 0,
        root_y: 0,
        event_x: 0,
        event_y: 0,
        state: KeyButMask::from(state),
        same_screen: true,
    }
}
