//! Event delivery from the X server to the hotkey dispatcher.
//!
//! Hosts with their own event loop read events with
//! [`X11Display::next_event`] or [`X11Display::poll_event`] and pass each one
//! to [`X11Display::dispatch_event`], handling it themselves when it returns
//! `false`. [`X11Display::pump`] and [`X11Display::dispatch_pending`] do the
//! same loop and hand every event the registry did not consume to a
//! callback.

use std::rc::Rc;

use horizon_hotkey_core::{EventBus, HotkeyRegistry, InputEvent};
use x11rb::connection::Connection;
use x11rb::protocol::Event;

use crate::display::X11Display;
use crate::error::Result;
use crate::logging::targets;
use crate::state::DisplayState;

/// Convert a protocol event into the dispatcher's input event.
pub fn input_event(event: &Event) -> InputEvent {
    match event {
        Event::KeyPress(e) => {
            InputEvent::key_press(u32::from(e.detail), u32::from(u16::from(e.state)))
        }
        Event::KeyRelease(e) => {
            InputEvent::key_release(u32::from(e.detail), u32::from(u16::from(e.state)))
        }
        _ => InputEvent::other(),
    }
}

/// [`EventBus`] that gates dispatch on an [`X11Display`].
///
/// Grabbed keys are delivered through the ordinary event queue, so
/// subscribing only flips whether events are offered to the registry.
#[derive(Debug, Clone)]
pub struct X11EventBus {
    state: Rc<DisplayState>,
}

impl X11EventBus {
    pub fn new(display: &X11Display) -> Self {
        Self::from_state(Rc::clone(display.state()))
    }

    pub(crate) fn from_state(state: Rc<DisplayState>) -> Self {
        Self { state }
    }
}

impl EventBus for X11EventBus {
    fn subscribe(&mut self) {
        self.state.set_observing(true);
        tracing::debug!(target: targets::EVENTS, "hotkey observer installed");
    }

    fn unsubscribe(&mut self) {
        self.state.set_observing(false);
        tracing::debug!(target: targets::EVENTS, "hotkey observer removed");
    }
}

impl X11Display {
    /// Block until the next event arrives.
    pub fn next_event(&self) -> Result<Event> {
        self.track(self.connection().wait_for_event())
    }

    /// The next queued event, without blocking.
    pub fn poll_event(&self) -> Result<Option<Event>> {
        self.track(self.connection().poll_for_event())
    }

    /// Offer `event` to `registry`.
    ///
    /// Returns `true` if it was a hotkey press and its action has run; the
    /// host must then drop it. Otherwise the host handles it as usual.
    pub fn dispatch_event<A>(&self, registry: &mut HotkeyRegistry<A>, event: &Event) -> bool {
        self.state().route(registry, event)
    }

    /// Dispatch every event already queued without blocking, passing the
    /// ones that are not hotkeys to `unhandled`.
    ///
    /// Returns the number of events consumed as hotkeys.
    pub fn dispatch_pending<A>(
        &self,
        registry: &mut HotkeyRegistry<A>,
        mut unhandled: impl FnMut(Event),
    ) -> Result<usize> {
        let mut fired = 0;
        while let Some(event) = self.poll_event()? {
            if deliver(self.state(), registry, event, &mut unhandled) {
                fired += 1;
            }
        }
        Ok(fired)
    }

    /// Run the event loop, passing events that are not hotkeys to
    /// `unhandled`.
    ///
    /// Returns only when the connection fails.
    pub fn pump<A>(
        &self,
        registry: &mut HotkeyRegistry<A>,
        mut unhandled: impl FnMut(Event),
    ) -> Result<()> {
        tracing::debug!(target: targets::EVENTS, "entering event loop");
        loop {
            let event = self.next_event()?;
            deliver(self.state(), registry, event, &mut unhandled);
        }
    }
}

fn deliver<A>(
    state: &DisplayState,
    registry: &mut HotkeyRegistry<A>,
    event: Event,
    unhandled: &mut impl FnMut(Event),
) -> bool {
    if state.route(registry, &event) {
        return true;
    }
    unhandled(event);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_hotkey_core::{ComboKey, InputEventKind, ModifierMask};
    use x11rb::protocol::xproto::{
        Mapping, MappingNotifyEvent, KEY_PRESS_EVENT, KEY_RELEASE_EVENT, MAPPING_NOTIFY_EVENT,
    };

    use crate::test_support::{self, key_event};

    fn route_all(
        state: &DisplayState,
        registry: &mut HotkeyRegistry<&'static str>,
        events: Vec<Event>,
    ) -> Vec<Event> {
        let mut passed = Vec::new();
        for event in events {
            deliver(state, registry, event, &mut |event| passed.push(event));
        }
        passed
    }

    fn key_press(detail: u8, state: u16) -> Event {
        Event::KeyPress(key_event(KEY_PRESS_EVENT, detail, state))
    }

    #[test]
    fn test_key_press_carries_raw_state() {
        let event = input_event(&key_press(67, 0x0c));
        assert_eq!(event.kind, InputEventKind::KeyPress);
        assert_eq!(
            event.combo(),
            ComboKey::new(67, ModifierMask::CONTROL | ModifierMask::ALT)
        );
    }

    #[test]
    fn test_lock_bits_are_not_stripped() {
        let event = input_event(&key_press(38, 0x12));
        assert_eq!(event.combo().modifiers.bits(), 0x12);
    }

    #[test]
    fn test_key_release() {
        let event = input_event(&Event::KeyRelease(key_event(KEY_RELEASE_EVENT, 67, 0x0c)));
        assert_eq!(event.kind, InputEventKind::KeyRelease);
        assert!(!event.is_key_press());
    }

    #[test]
    fn test_unconsumed_events_reach_the_host_unchanged() {
        let state = Rc::new(DisplayState::default());
        let (mut registry, fired) = test_support::registry(&state);
        registry
            .register(ComboKey::new(67, ModifierMask::from_bits(12)), "launch")
            .unwrap();

        let mapping = Event::MappingNotify(MappingNotifyEvent {
            response_type: MAPPING_NOTIFY_EVENT,
            sequence: 7,
            request: Mapping::MODIFIER,
            first_keycode: 0,
            count: 0,
        });
        let passed = route_all(
            &state,
            &mut registry,
            vec![key_press(67, 12), key_press(38, 4), mapping],
        );

        assert_eq!(*fired.borrow(), vec!["launch"]);
        assert_eq!(passed.len(), 2);
        match &passed[0] {
            Event::KeyPress(e) => assert_eq!((e.detail, u16::from(e.state)), (38, 4)),
            _ => panic!("expected the unmatched key press first"),
        }
        match &passed[1] {
            Event::MappingNotify(e) => {
                assert_eq!(e.sequence, 7);
                assert!(e.request == Mapping::MODIFIER);
            }
            _ => panic!("expected the mapping notification second"),
        }
    }

    #[test]
    fn test_nothing_dispatches_while_unobserved() {
        let state = Rc::new(DisplayState::default());
        let (mut registry, fired) = test_support::registry(&state);
        let combo = ComboKey::new(67, ModifierMask::from_bits(12));

        registry.register(combo, "launch").unwrap();
        assert!(state.is_observing());
        registry.unregister(combo).unwrap();
        assert!(!state.is_observing());

        // A grab released late can still deliver one press.
        let passed = route_all(&state, &mut registry, vec![key_press(67, 12)]);
        assert_eq!(passed.len(), 1);
        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_observer_flag_gates_dispatch() {
        let state = Rc::new(DisplayState::default());
        let (mut registry, fired) = test_support::registry(&state);
        registry
            .register(ComboKey::new(67, ModifierMask::from_bits(12)), "launch")
            .unwrap();

        state.set_observing(false);
        assert!(!state.route(&mut registry, &key_press(67, 12)));
        assert!(fired.borrow().is_empty());

        state.set_observing(true);
        assert!(state.route(&mut registry, &key_press(67, 12)));
        assert_eq!(*fired.borrow(), vec!["launch"]);
    }
}
