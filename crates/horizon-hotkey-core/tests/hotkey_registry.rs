//! Integration tests for the hotkey registry and host commands.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use horizon_hotkey_core::command;
use horizon_hotkey_core::{
    ComboKey, DisplayHandle, EventBus, GrabBackend, HotkeyError, HotkeyRegistry, InputEvent,
    Keysym, KeysymTranslator, ModifierMask, RangeBound, RangeField, Result, WindowId,
};

const MAX_KEYCODE: u32 = 255;

#[derive(Default)]
struct Server {
    grabs: HashSet<ComboKey>,
    observing: bool,
    fired: Vec<String>,
}

type SharedServer = Rc<RefCell<Server>>;

struct ServerGrabs(SharedServer);

impl GrabBackend for ServerGrabs {
    fn display(&self) -> Option<DisplayHandle> {
        Some(DisplayHandle {
            root: 0x1e3,
            main_window: Some(0x0440_0001),
            min_keycode: 8,
            max_keycode: MAX_KEYCODE,
        })
    }

    fn grab_key(&mut self, _root: WindowId, combo: ComboKey) -> Result<()> {
        self.0.borrow_mut().grabs.insert(combo);
        Ok(())
    }

    fn ungrab_key(&mut self, _root: WindowId, combo: ComboKey) -> Result<()> {
        self.0.borrow_mut().grabs.remove(&combo);
        Ok(())
    }
}

struct UsLayout(HashMap<u32, u32>);

impl UsLayout {
    fn new() -> Self {
        let mut keys = HashMap::new();
        keys.insert(0x61, 38); // a
        keys.insert(0xffbe, 67); // F1
        keys.insert(0xff0d, 36); // Return
        Self(keys)
    }
}

impl KeysymTranslator for UsLayout {
    fn keycode_for_keysym(&self, keysym: Keysym) -> Result<Option<u32>> {
        Ok(self.0.get(&keysym.raw()).copied())
    }
}

struct ServerBus(SharedServer);

impl EventBus for ServerBus {
    fn subscribe(&mut self) {
        self.0.borrow_mut().observing = true;
    }

    fn unsubscribe(&mut self) {
        self.0.borrow_mut().observing = false;
    }
}

fn registry() -> (HotkeyRegistry<String>, SharedServer) {
    let server = SharedServer::default();
    let fired = server.clone();
    let registry = HotkeyRegistry::new(
        ServerGrabs(server.clone()),
        UsLayout::new(),
        ServerBus(server.clone()),
        move |_combo: ComboKey, action: &String| fired.borrow_mut().fired.push(action.clone()),
    );
    (registry, server)
}

#[test]
fn registered_combos_fire_once_and_others_pass_through() {
    let (mut registry, server) = registry();
    let bound = [(67, 12), (38, 64), (36, 0)];
    for (keycode, state) in bound {
        registry
            .register(
                ComboKey::new(keycode, ModifierMask::from_bits(state)),
                format!("{keycode}/{state}"),
            )
            .unwrap();
    }

    for (keycode, state) in bound {
        assert!(registry.dispatch(&InputEvent::key_press(keycode, state)));
    }
    assert_eq!(server.borrow().fired, vec!["67/12", "38/64", "36/0"]);

    for (keycode, state) in [(67, 0), (38, 65), (100, 12)] {
        assert!(!registry.dispatch(&InputEvent::key_press(keycode, state)));
    }
    assert_eq!(server.borrow().fired.len(), 3);
}

#[test]
fn round_trip_leaves_nothing_behind() {
    let (mut registry, server) = registry();
    let key = ComboKey::new(38, ModifierMask::CONTROL | ModifierMask::SHIFT);

    registry.register(key, "copy".into()).unwrap();
    assert!(server.borrow().observing);
    registry.unregister(key).unwrap();

    assert!(registry.is_empty());
    assert!(!registry.is_observer_installed());
    assert!(!server.borrow().observing);
    assert!(server.borrow().grabs.is_empty());
}

#[test]
fn keycode_above_server_maximum_is_a_range_error() {
    let (mut registry, _server) = registry();
    let key = ComboKey::new(MAX_KEYCODE + 1, ModifierMask::NONE);
    let expected = HotkeyError::Range {
        field: RangeField::Keycode,
        value: i64::from(MAX_KEYCODE + 1),
        bound: RangeBound::Maximum(i64::from(MAX_KEYCODE)),
    };

    assert_eq!(registry.register(key, "x".into()), Err(expected.clone()));
    assert_eq!(registry.unregister(key), Err(expected));
}

#[test]
fn combo_strings_resolve_to_the_same_hotkey() {
    let (mut registry, server) = registry();
    registry.register_combo("Control-Alt-F1", "launch".into()).unwrap();
    registry.register_combo("s-a", "super-a".into()).unwrap();
    registry.register_combo("S-a", "shift-a".into()).unwrap();

    assert!(registry.contains(ComboKey::new(67, ModifierMask::from_bits(12))));
    assert!(registry.contains(ComboKey::new(38, ModifierMask::SUPER)));
    assert!(registry.contains(ComboKey::new(38, ModifierMask::SHIFT)));

    assert!(registry.dispatch(&InputEvent::key_press(38, 64)));
    assert_eq!(server.borrow().fired, vec!["super-a"]);
}

#[test]
fn host_commands_drive_the_registry() {
    let (mut registry, server) = registry();

    command::execute(&mut registry, command::REGISTER, &["67", "12", "launch"]).unwrap();
    command::execute(&mut registry, command::REGISTER, &["Control-Return", "open"]).unwrap();
    assert_eq!(registry.len(), 2);

    assert!(registry.dispatch(&InputEvent::key_press(36, 4)));
    assert_eq!(server.borrow().fired, vec!["open"]);

    command::execute(&mut registry, command::UNREGISTER, &["67", "12"]).unwrap();
    command::execute(&mut registry, command::UNREGISTER, &["Control-Return"]).unwrap();
    assert!(registry.is_empty());
    assert!(!server.borrow().observing);

    // Absent combos unregister cleanly.
    command::execute(&mut registry, command::UNREGISTER, &["67", "12"]).unwrap();
}

#[test]
fn host_commands_report_usage_errors() {
    let (mut registry, _server) = registry();

    for args in [&[][..], &["67"][..], &["67", "12", "x", "extra"][..]] {
        let err = command::execute(&mut registry, command::REGISTER, args).unwrap_err();
        assert!(
            err.to_string().contains("hotkey::register keycode modifiers action"),
            "unexpected message: {err}"
        );
    }

    let err = command::execute(&mut registry, command::UNREGISTER, &[]).unwrap_err();
    assert!(matches!(err, HotkeyError::Usage(_)));

    let err = command::execute(&mut registry, command::REGISTER, &["F1", "12", "x"]).unwrap_err();
    assert_eq!(err, HotkeyError::expected_integer("F1"));

    let err = command::execute(&mut registry, "hotkey::list", &[]).unwrap_err();
    assert!(matches!(err, HotkeyError::Usage(_)));

    assert!(registry.is_empty());
}
