//! Hotkey registry and event dispatcher.
//!
//! The [`HotkeyRegistry`] owns the mapping from [`ComboKey`] to the host's
//! action token, keeps one grab alive per entry, and decides for every input
//! event whether it is one of our hotkeys.
//!
//! # Invariants
//!
//! - The dispatch observer is subscribed on the [`EventBus`] iff the registry
//!   is non-empty. Subscription happens only on the empty → non-empty
//!   transition and unsubscription only on the reverse, so the bus never sees
//!   a double subscribe or a stray unsubscribe.
//! - Every key in the registry has a live grab. `register` grabs before it
//!   inserts, so a failed grab leaves the registry untouched.
//!
//! # Threading
//!
//! The registry lives on the host's event thread. Its collaborators are
//! boxed without `Send`, so the registry itself is `!Send`.
//!
//! # Example
//!
//! ```ignore
//! use horizon_hotkey_core::{ComboKey, HotkeyRegistry, InputEvent, ModifierMask};
//!
//! let mut registry = HotkeyRegistry::new(backend, translator, bus, |_combo, action: &String| {
//!     println!("run {action}");
//! });
//!
//! registry.register(ComboKey::new(67, ModifierMask::from_bits(12)), "launch".to_string())?;
//! registry.register_combo("Super-Return", "terminal".to_string())?;
//!
//! // From the event pump:
//! let consumed = registry.dispatch(&InputEvent::key_press(67, 12));
//! assert!(consumed);
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::combo::{ComboKey, InputEvent};
use crate::error::Result;
use crate::grab::{GrabBackend, GrabManager};
use crate::logging::targets;
use crate::resolver::{resolve, KeysymTranslator};

/// The global event chain the dispatch observer is installed in.
///
/// `subscribe` starts delivering input events to
/// [`HotkeyRegistry::dispatch`]; `unsubscribe` stops it. The registry calls
/// each exactly once per empty/non-empty transition.
pub trait EventBus {
    fn subscribe(&mut self);
    fn unsubscribe(&mut self);
}

/// Runs the action bound to a hotkey.
///
/// The registry never interprets action tokens; it only hands them here.
/// Implementations run on the event-delivery path and must not block.
pub trait ActionInvoker<A> {
    fn invoke(&mut self, combo: ComboKey, action: &A);
}

impl<A, F> ActionInvoker<A> for F
where
    F: FnMut(ComboKey, &A),
{
    fn invoke(&mut self, combo: ComboKey, action: &A) {
        self(combo, action)
    }
}

/// Whether the dispatch observer is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObserverState {
    #[default]
    Uninstalled,
    Installed,
}

/// Maps hotkeys to actions and dispatches input events to them.
pub struct HotkeyRegistry<A> {
    entries: HashMap<ComboKey, A>,
    grabs: GrabManager,
    translator: Box<dyn KeysymTranslator>,
    bus: Box<dyn EventBus>,
    invoker: Box<dyn ActionInvoker<A>>,
    observer: ObserverState,
}

impl<A> HotkeyRegistry<A> {
    /// Create an empty registry with its collaborators.
    pub fn new(
        backend: impl GrabBackend + 'static,
        translator: impl KeysymTranslator + 'static,
        bus: impl EventBus + 'static,
        invoker: impl ActionInvoker<A> + 'static,
    ) -> Self {
        Self {
            entries: HashMap::new(),
            grabs: GrabManager::new(Box::new(backend)),
            translator: Box::new(translator),
            bus: Box::new(bus),
            invoker: Box::new(invoker),
            observer: ObserverState::Uninstalled,
        }
    }

    /// Bind `combo` to `action`, grabbing the key system-wide.
    ///
    /// Registering a combo that is already bound replaces its action.
    ///
    /// # Errors
    ///
    /// Validation and grab errors from the [`GrabManager`]; on error nothing
    /// changes.
    pub fn register(&mut self, combo: ComboKey, action: A) -> Result<()> {
        self.grabs.grab(combo)?;

        let was_empty = self.entries.is_empty();
        if self.entries.insert(combo, action).is_some() {
            tracing::debug!(target: targets::REGISTRY, %combo, "replaced hotkey action");
        } else {
            tracing::debug!(
                target: targets::REGISTRY,
                %combo,
                count = self.entries.len(),
                "registered hotkey"
            );
        }

        if was_empty {
            self.install_observer();
        }
        Ok(())
    }

    /// Remove the binding for `combo` and release its grab.
    ///
    /// Unregistering a combo that is not bound succeeds and changes nothing.
    pub fn unregister(&mut self, combo: ComboKey) -> Result<()> {
        self.grabs.ungrab(combo)?;

        if self.entries.remove(&combo).is_some() {
            tracing::debug!(
                target: targets::REGISTRY,
                %combo,
                count = self.entries.len(),
                "unregistered hotkey"
            );
            if self.entries.is_empty() {
                self.uninstall_observer();
            }
        }
        Ok(())
    }

    /// Resolve a combo string such as `Control-Alt-F1` and register it.
    pub fn register_combo(&mut self, combo: &str, action: A) -> Result<()> {
        let key = resolve(combo, self.translator.as_ref())?;
        self.register(key, action)
    }

    /// Resolve a combo string and unregister it.
    pub fn unregister_combo(&mut self, combo: &str) -> Result<()> {
        let key = resolve(combo, self.translator.as_ref())?;
        self.unregister(key)
    }

    /// Decide whether `event` is one of our hotkeys.
    ///
    /// Returns `true` if the event was a key press matching a registered
    /// combo; its action has then been invoked once and the event must not
    /// be delivered further. Returns `false` for everything else, which the
    /// caller passes on unchanged.
    pub fn dispatch(&mut self, event: &InputEvent) -> bool {
        if !event.is_key_press() {
            return false;
        }

        let combo = event.combo();
        match self.entries.get(&combo) {
            Some(action) => {
                tracing::trace!(target: targets::REGISTRY, %combo, "hotkey pressed");
                self.invoker.invoke(combo, action);
                true
            }
            None => false,
        }
    }

    /// Unregister every hotkey, releasing all grabs.
    ///
    /// Entries whose grab cannot be released stay registered; the first
    /// such error is returned after the rest have been attempted.
    pub fn clear(&mut self) -> Result<()> {
        let mut first_error = None;
        for combo in self.combos() {
            if let Err(err) = self.unregister(combo) {
                tracing::warn!(target: targets::REGISTRY, %combo, error = %err, "failed to release hotkey");
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Number of registered hotkeys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no hotkeys are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `combo` is registered.
    pub fn contains(&self, combo: ComboKey) -> bool {
        self.entries.contains_key(&combo)
    }

    /// The action bound to `combo`.
    pub fn action(&self, combo: ComboKey) -> Option<&A> {
        self.entries.get(&combo)
    }

    /// All registered combos, in no particular order.
    pub fn combos(&self) -> Vec<ComboKey> {
        self.entries.keys().copied().collect()
    }

    /// Whether the dispatch observer is installed.
    pub fn is_observer_installed(&self) -> bool {
        self.observer == ObserverState::Installed
    }

    /// The observer state.
    pub fn observer_state(&self) -> ObserverState {
        self.observer
    }

    /// The grab manager, for validation without registering.
    pub fn grab_manager(&self) -> &GrabManager {
        &self.grabs
    }

    fn install_observer(&mut self) {
        debug_assert_eq!(self.observer, ObserverState::Uninstalled);
        self.bus.subscribe();
        self.observer = ObserverState::Installed;
        tracing::debug!(target: targets::REGISTRY, "installed dispatch observer");
    }

    fn uninstall_observer(&mut self) {
        debug_assert_eq!(self.observer, ObserverState::Installed);
        self.bus.unsubscribe();
        self.observer = ObserverState::Uninstalled;
        tracing::debug!(target: targets::REGISTRY, "removed dispatch observer");
    }
}

impl<A> Drop for HotkeyRegistry<A> {
    fn drop(&mut self) {
        if !self.entries.is_empty() {
            // Errors are already logged per entry.
            let _ = self.clear();
        }
    }
}

impl<A> fmt::Debug for HotkeyRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotkeyRegistry")
            .field("combos", &self.combos())
            .field("observer", &self.observer)
            .field("grabs", &self.grabs)
            .finish()
    }
}
