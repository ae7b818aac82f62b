//! Logging facilities for Horizon Hotkey.
//!
//! Horizon Hotkey uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Dispatch runs on the windowing system's event path, so it only ever logs
//! at `trace` level. Registration and observer transitions log at `debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=horizon_hotkey_core::registry=debug`.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_hotkey_core";
    /// Registry and dispatcher target.
    pub const REGISTRY: &str = "horizon_hotkey_core::registry";
    /// Grab manager target.
    pub const GRAB: &str = "horizon_hotkey_core::grab";
    /// Combo resolver target.
    pub const RESOLVER: &str = "horizon_hotkey_core::resolver";
    /// Host command layer target.
    pub const COMMAND: &str = "horizon_hotkey_core::command";
}
