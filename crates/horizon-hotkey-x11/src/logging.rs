//! Logging targets for the X11 backend.
//!
//! Use these with `tracing` directives, e.g.
//! `RUST_LOG=horizon_hotkey_x11::grab=trace`.

pub mod targets {
    /// Connection and keyboard mapping.
    pub const DISPLAY: &str = "horizon_hotkey_x11::display";
    /// `GrabKey`/`UngrabKey` requests.
    pub const GRAB: &str = "horizon_hotkey_x11::grab";
    /// Event loop and observer.
    pub const EVENTS: &str = "horizon_hotkey_x11::events";
}
