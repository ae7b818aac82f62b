//! Logging targets for the facade crate.
//!
//! See `horizon_hotkey_core::logging` for the core and
//! [`x11::logging`](crate::x11::logging) for the X11 backend.

pub mod targets {
    /// Bindings file loading.
    pub const CONFIG: &str = "horizon_hotkey::config";
    /// Shell-command actions.
    pub const LAUNCHER: &str = "horizon_hotkey::launcher";
}
