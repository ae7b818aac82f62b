//! Core systems for Horizon Hotkey.
//!
//! This crate provides the windowing-system-independent parts of global
//! hotkey handling:
//!
//! - **Combo Keys**: Canonical (keycode, modifier mask) hotkey identity
//! - **Resolver**: Parses combo strings like `Control-Alt-F1`
//! - **Grab Manager**: Validates combos and issues system-level key grabs
//! - **Registry & Dispatcher**: Maps combos to actions and decides, for every
//!   input event, whether it is a hotkey
//! - **Host Commands**: `hotkey::register` / `hotkey::unregister` over string
//!   arguments
//!
//! Every interaction with the windowing system goes through a trait
//! ([`GrabBackend`], [`KeysymTranslator`], [`EventBus`], [`ActionInvoker`]),
//! implemented for X11 by `horizon-hotkey-x11`.
//!
//! # Example
//!
//! ```ignore
//! use horizon_hotkey_core::{HotkeyRegistry, InputEvent};
//!
//! let mut registry = HotkeyRegistry::new(backend, translator, bus, |combo, action: &String| {
//!     println!("{combo} fired {action}");
//! });
//!
//! registry.register_combo("Control-Alt-F1", "launch".to_string())?;
//!
//! // In the event pump:
//! if !registry.dispatch(&event) {
//!     // Not a hotkey: deliver normally.
//! }
//! ```

mod combo;
pub mod command;
mod error;
mod grab;
mod keysym;
pub mod logging;
mod registry;
mod resolver;

pub use combo::{ComboKey, InputEvent, InputEventKind, ModifierMask};
pub use error::{HotkeyError, RangeBound, RangeField, ResolutionFailure, Result};
pub use grab::{DisplayHandle, GrabBackend, GrabManager, WindowId};
pub use keysym::Keysym;
pub use registry::{ActionInvoker, EventBus, HotkeyRegistry, ObserverState};
pub use resolver::{modifier_for_token, resolve, KeysymTranslator};
