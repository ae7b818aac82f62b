//! Connection-independent state shared by the X11 collaborators.

use std::cell::{Cell, RefCell};

use horizon_hotkey_core::HotkeyRegistry;
use x11rb::protocol::Event;
use x11rb::protocol::xproto::Mapping;

use crate::error::Result;
use crate::events::input_event;
use crate::keymap::KeyboardMapping;
use crate::logging::targets;

/// Observer flag and keyboard mapping cache of one display.
#[derive(Debug, Default)]
pub(crate) struct DisplayState {
    observing: Cell<bool>,
    keymap: RefCell<Option<KeyboardMapping>>,
}

impl DisplayState {
    pub(crate) fn is_observing(&self) -> bool {
        self.observing.get()
    }

    pub(crate) fn set_observing(&self, observing: bool) {
        self.observing.set(observing);
    }

    /// Run `f` against the cached mapping, filling the cache with `fetch`
    /// first if it is empty.
    pub(crate) fn with_keyboard_mapping<T>(
        &self,
        fetch: impl FnOnce() -> Result<KeyboardMapping>,
        f: impl FnOnce(&KeyboardMapping) -> T,
    ) -> Result<T> {
        let mut cache = self.keymap.borrow_mut();
        if let Some(mapping) = cache.as_ref() {
            return Ok(f(mapping));
        }
        let mapping = fetch()?;
        tracing::trace!(target: targets::DISPLAY, "fetched keyboard mapping");
        Ok(f(cache.insert(mapping)))
    }

    pub(crate) fn invalidate_keyboard_mapping(&self) {
        if self.keymap.borrow_mut().take().is_some() {
            tracing::debug!(target: targets::DISPLAY, "keyboard mapping changed");
        }
    }

    /// Apply `event` to the cache and, while observing, offer it to
    /// `registry`. Returns whether it was consumed as a hotkey.
    pub(crate) fn route<A>(&self, registry: &mut HotkeyRegistry<A>, event: &Event) -> bool {
        if let Event::MappingNotify(notify) = event {
            if notify.request == Mapping::KEYBOARD {
                self.invalidate_keyboard_mapping();
            }
        }
        if !self.is_observing() {
            return false;
        }
        registry.dispatch(&input_event(event))
    }
}
