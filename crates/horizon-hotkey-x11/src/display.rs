//! Shared X11 connection.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use horizon_hotkey_core::{ActionInvoker, DisplayHandle, HotkeyRegistry, WindowId};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt as _, CreateWindowAux, WindowClass};
use x11rb::rust_connection::RustConnection;
use x11rb::{COPY_DEPTH_FROM_PARENT, COPY_FROM_PARENT};

use crate::error::{Result, X11Error};
use crate::events::X11EventBus;
use crate::grab::X11GrabBackend;
use crate::keymap::{KeyboardMapping, X11KeysymTranslator};
use crate::logging::targets;
use crate::state::DisplayState;

/// An open X display plus the state the hotkey collaborators share.
///
/// The grab backend and keysym translator each hold an `Rc<X11Display>`,
/// so the connection lives until the last of them is dropped. The event bus
/// only shares the observer flag.
pub struct X11Display {
    conn: RustConnection,
    root: WindowId,
    main_window: Option<WindowId>,
    owns_main_window: bool,
    min_keycode: u32,
    max_keycode: u32,
    broken: Cell<bool>,
    state: Rc<DisplayState>,
}

impl X11Display {
    /// Connect to `display_name` (or `$DISPLAY`) and create an unmapped
    /// input-only window to act as the main window.
    pub fn connect(display_name: Option<&str>) -> Result<Rc<Self>> {
        let (conn, screen_num) = x11rb::connect(display_name)?;
        let root = Self::root_of(&conn, screen_num)?;

        let window = conn.generate_id()?;
        conn.create_window(
            COPY_DEPTH_FROM_PARENT,
            window,
            root,
            0,
            0,
            1,
            1,
            0,
            WindowClass::INPUT_ONLY,
            COPY_FROM_PARENT,
            &CreateWindowAux::new(),
        )?;
        conn.flush()?;

        tracing::debug!(
            target: targets::DISPLAY,
            screen = screen_num,
            root,
            window,
            "connected to X display"
        );
        Ok(Rc::new(Self::from_parts(conn, root, Some(window), true)))
    }

    /// Connect to `display_name` (or `$DISPLAY`) and use the host's existing
    /// `window` as the main window. The window is not destroyed on drop.
    pub fn with_main_window(display_name: Option<&str>, window: WindowId) -> Result<Rc<Self>> {
        let (conn, screen_num) = x11rb::connect(display_name)?;
        let root = Self::root_of(&conn, screen_num)?;
        tracing::debug!(
            target: targets::DISPLAY,
            screen = screen_num,
            root,
            window,
            "connected to X display with host window"
        );
        Ok(Rc::new(Self::from_parts(conn, root, Some(window), false)))
    }

    fn root_of(conn: &RustConnection, screen_num: usize) -> Result<WindowId> {
        conn.setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.root)
            .ok_or(X11Error::NoSuchScreen(screen_num))
    }

    fn from_parts(
        conn: RustConnection,
        root: WindowId,
        main_window: Option<WindowId>,
        owns_main_window: bool,
    ) -> Self {
        let setup = conn.setup();
        let (min_keycode, max_keycode) = (u32::from(setup.min_keycode), u32::from(setup.max_keycode));
        Self {
            conn,
            root,
            main_window,
            owns_main_window,
            min_keycode,
            max_keycode,
            broken: Cell::new(false),
            state: Rc::default(),
        }
    }

    /// Build a registry wired to this display.
    pub fn registry<A>(
        self: &Rc<Self>,
        invoker: impl ActionInvoker<A> + 'static,
    ) -> HotkeyRegistry<A> {
        HotkeyRegistry::new(
            X11GrabBackend::new(Rc::clone(self)),
            X11KeysymTranslator::new(Rc::clone(self)),
            X11EventBus::new(self),
            invoker,
        )
    }

    /// The display as the grab manager sees it, or `None` once the
    /// connection has failed.
    pub fn handle(&self) -> Option<DisplayHandle> {
        if self.broken.get() {
            return None;
        }
        Some(DisplayHandle {
            root: self.root,
            main_window: self.main_window,
            min_keycode: self.min_keycode,
            max_keycode: self.max_keycode,
        })
    }

    pub fn root(&self) -> WindowId {
        self.root
    }

    pub fn main_window(&self) -> Option<WindowId> {
        self.main_window
    }

    /// Whether a request on this connection has failed at the transport level.
    pub fn is_broken(&self) -> bool {
        self.broken.get()
    }

    /// Whether the hotkey observer is installed.
    pub fn is_observing(&self) -> bool {
        self.state.is_observing()
    }

    pub(crate) fn connection(&self) -> &RustConnection {
        &self.conn
    }

    pub(crate) fn state(&self) -> &Rc<DisplayState> {
        &self.state
    }

    /// Record the outcome of a request, marking the connection broken if
    /// the transport failed.
    pub(crate) fn track<T, E>(&self, result: std::result::Result<T, E>) -> Result<T>
    where
        E: Into<X11Error>,
    {
        result.map_err(|err| {
            let err = err.into();
            if err.is_connection_failure() && !self.broken.replace(true) {
                tracing::error!(target: targets::DISPLAY, error = %err, "X connection lost");
            }
            err
        })
    }

    /// Run `f` against the cached keyboard mapping, fetching it first if
    /// needed.
    pub(crate) fn with_keyboard_mapping<T>(
        &self,
        f: impl FnOnce(&KeyboardMapping) -> T,
    ) -> Result<T> {
        self.state
            .with_keyboard_mapping(|| self.track(KeyboardMapping::fetch(&self.conn)), f)
    }
}

impl Drop for X11Display {
    fn drop(&mut self) {
        if !self.owns_main_window || self.broken.get() {
            return;
        }
        if let Some(window) = self.main_window {
            let result = self
                .conn
                .destroy_window(window)
                .map(|_| ())
                .and_then(|()| self.conn.flush());
            if let Err(err) = result {
                tracing::warn!(target: targets::DISPLAY, error = %err, window, "failed to destroy main window");
            }
        }
    }
}

impl fmt::Debug for X11Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("X11Display")
            .field("root", &self.root)
            .field("main_window", &self.main_window)
            .field("min_keycode", &self.min_keycode)
            .field("max_keycode", &self.max_keycode)
            .field("broken", &self.broken.get())
            .field("observing", &self.state.is_observing())
            .finish_non_exhaustive()
    }
}
