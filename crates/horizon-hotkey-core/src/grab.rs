//! Grab manager: validation and system-level key grabs.
//!
//! The [`GrabManager`] validates a combo against the limits the windowing
//! system reports and then asks its [`GrabBackend`] to grab or release the
//! key on the root window. Grabs are asynchronous: a conflict with a grab
//! held by another client is reported to the windowing system, never to us.

use crate::combo::{ComboKey, ModifierMask};
use crate::error::{HotkeyError, RangeField, Result};
use crate::logging::targets;

/// Identifier of a window on the display.
pub type WindowId = u32;

/// A snapshot of the live display as seen by the grab backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayHandle {
    /// The root window grabs are placed on.
    pub root: WindowId,
    /// The process's main window, if it exists.
    pub main_window: Option<WindowId>,
    /// Smallest keycode the server reports.
    pub min_keycode: u32,
    /// Largest keycode the server reports.
    pub max_keycode: u32,
}

/// Display provider and key-grab primitive of a windowing system.
///
/// Implemented by the X11 backend; tests inject fakes.
pub trait GrabBackend {
    /// The current display, or `None` if there is no live connection.
    fn display(&self) -> Option<DisplayHandle>;

    /// Issue an exclusive, asynchronous grab of `combo` on `root`.
    fn grab_key(&mut self, root: WindowId, combo: ComboKey) -> Result<()>;

    /// Release a grab of `combo` on `root`. Releasing a combo that was never
    /// grabbed must succeed.
    fn ungrab_key(&mut self, root: WindowId, combo: ComboKey) -> Result<()>;
}

/// Validates combos and issues or revokes grabs through a [`GrabBackend`].
pub struct GrabManager {
    backend: Box<dyn GrabBackend>,
}

impl GrabManager {
    /// Create a grab manager over the given backend.
    pub fn new(backend: Box<dyn GrabBackend>) -> Self {
        Self { backend }
    }

    /// Check that the display is live and `combo` lies within its limits.
    ///
    /// # Errors
    ///
    /// - [`HotkeyError::DisplayUnavailable`] without a connection or main window.
    /// - [`HotkeyError::Range`] naming the violated bound.
    pub fn validate(&self, combo: ComboKey) -> Result<DisplayHandle> {
        let handle = self
            .backend
            .display()
            .ok_or_else(|| HotkeyError::display_unavailable("no windowing connection"))?;
        if handle.main_window.is_none() {
            return Err(HotkeyError::display_unavailable("main window does not exist"));
        }

        let keycode = i64::from(combo.keycode);
        if combo.keycode < handle.min_keycode {
            return Err(HotkeyError::below_minimum(
                RangeField::Keycode,
                keycode,
                i64::from(handle.min_keycode),
            ));
        }
        if combo.keycode > handle.max_keycode {
            return Err(HotkeyError::above_maximum(
                RangeField::Keycode,
                keycode,
                i64::from(handle.max_keycode),
            ));
        }
        if !combo.modifiers.is_valid() {
            return Err(HotkeyError::above_maximum(
                RangeField::Modifiers,
                i64::from(combo.modifiers.bits()),
                i64::from(ModifierMask::ANY.bits()),
            ));
        }

        Ok(handle)
    }

    /// Validate `combo` and grab it on the root window.
    pub fn grab(&mut self, combo: ComboKey) -> Result<()> {
        let handle = self.validate(combo)?;
        self.backend.grab_key(handle.root, combo)?;
        tracing::debug!(target: targets::GRAB, %combo, root = handle.root, "grabbed key");
        Ok(())
    }

    /// Validate `combo` and release its grab on the root window.
    pub fn ungrab(&mut self, combo: ComboKey) -> Result<()> {
        let handle = self.validate(combo)?;
        self.backend.ungrab_key(handle.root, combo)?;
        tracing::debug!(target: targets::GRAB, %combo, root = handle.root, "released key grab");
        Ok(())
    }

    /// The current display snapshot, if any.
    pub fn display(&self) -> Option<DisplayHandle> {
        self.backend.display()
    }
}

impl std::fmt::Debug for GrabManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrabManager")
            .field("display", &self.backend.display())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeBound;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        grabs: Vec<(WindowId, ComboKey)>,
        ungrabs: Vec<(WindowId, ComboKey)>,
    }

    struct TestBackend {
        display: Option<DisplayHandle>,
        calls: Rc<RefCell<Calls>>,
    }

    impl GrabBackend for TestBackend {
        fn display(&self) -> Option<DisplayHandle> {
            self.display
        }

        fn grab_key(&mut self, root: WindowId, combo: ComboKey) -> Result<()> {
            self.calls.borrow_mut().grabs.push((root, combo));
            Ok(())
        }

        fn ungrab_key(&mut self, root: WindowId, combo: ComboKey) -> Result<()> {
            self.calls.borrow_mut().ungrabs.push((root, combo));
            Ok(())
        }
    }

    const DISPLAY: DisplayHandle = DisplayHandle {
        root: 0x1e3,
        main_window: Some(0x0400_0001),
        min_keycode: 8,
        max_keycode: 255,
    };

    fn manager(display: Option<DisplayHandle>) -> (GrabManager, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let backend = TestBackend {
            display,
            calls: calls.clone(),
        };
        (GrabManager::new(Box::new(backend)), calls)
    }

    #[test]
    fn test_grab_uses_root_window() {
        let (mut grabs, calls) = manager(Some(DISPLAY));
        let combo = ComboKey::new(67, ModifierMask::from_bits(12));
        grabs.grab(combo).unwrap();
        grabs.ungrab(combo).unwrap();
        assert_eq!(calls.borrow().grabs, vec![(0x1e3, combo)]);
        assert_eq!(calls.borrow().ungrabs, vec![(0x1e3, combo)]);
    }

    #[test]
    fn test_grab_with_debug_logging_enabled() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let (mut grabs, calls) = manager(Some(DISPLAY));
            let combo = ComboKey::new(38, ModifierMask::SUPER);
            grabs.grab(combo).unwrap();
            grabs.ungrab(combo).unwrap();
            assert_eq!(calls.borrow().grabs, vec![(DISPLAY.root, combo)]);
            assert_eq!(calls.borrow().ungrabs, vec![(DISPLAY.root, combo)]);
        });
    }

    #[test]
    fn test_keycode_bounds() {
        let (grabs, _) = manager(Some(DISPLAY));
        assert!(grabs.validate(ComboKey::new(8, ModifierMask::NONE)).is_ok());
        assert!(grabs.validate(ComboKey::new(255, ModifierMask::NONE)).is_ok());

        let err = grabs.validate(ComboKey::new(256, ModifierMask::NONE)).unwrap_err();
        assert_eq!(
            err,
            HotkeyError::Range {
                field: RangeField::Keycode,
                value: 256,
                bound: RangeBound::Maximum(255),
            }
        );

        let err = grabs.validate(ComboKey::new(7, ModifierMask::NONE)).unwrap_err();
        assert_eq!(
            err,
            HotkeyError::Range {
                field: RangeField::Keycode,
                value: 7,
                bound: RangeBound::Minimum(8),
            }
        );
    }

    #[test]
    fn test_modifier_bound() {
        let (grabs, _) = manager(Some(DISPLAY));
        assert!(grabs.validate(ComboKey::new(67, ModifierMask::ANY)).is_ok());
        let err = grabs
            .validate(ComboKey::new(67, ModifierMask::from_bits(0x8001)))
            .unwrap_err();
        assert!(matches!(
            err,
            HotkeyError::Range {
                field: RangeField::Modifiers,
                bound: RangeBound::Maximum(0x8000),
                ..
            }
        ));
    }

    #[test]
    fn test_display_unavailable() {
        let (mut grabs, calls) = manager(None);
        let combo = ComboKey::new(67, ModifierMask::NONE);
        assert!(matches!(grabs.grab(combo), Err(HotkeyError::DisplayUnavailable(_))));
        assert!(calls.borrow().grabs.is_empty());

        let headless = DisplayHandle {
            main_window: None,
            ..DISPLAY
        };
        let (grabs, _) = manager(Some(headless));
        assert_eq!(
            grabs.validate(combo),
            Err(HotkeyError::display_unavailable("main window does not exist"))
        );
    }

    #[test]
    fn test_invalid_grab_never_reaches_backend() {
        let (mut grabs, calls) = manager(Some(DISPLAY));
        assert!(grabs.grab(ComboKey::new(300, ModifierMask::NONE)).is_err());
        assert!(grabs.ungrab(ComboKey::new(300, ModifierMask::NONE)).is_err());
        assert!(calls.borrow().grabs.is_empty());
        assert!(calls.borrow().ungrabs.is_empty());
    }
}
