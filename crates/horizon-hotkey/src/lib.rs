//! Horizon Hotkey - system-wide hotkeys for X11.
//!
//! This is the umbrella crate that re-exports the core registry and the X11
//! backend, and adds a TOML bindings file and shell-command actions.
//!
//! # Example
//!
//! ```no_run
//! use horizon_hotkey::x11::X11Display;
//! use horizon_hotkey::{HotkeyConfig, HotkeyRegistry, ShellCommand, ShellLauncher};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HotkeyConfig::load_default()?;
//!     let display = X11Display::connect(config.display.as_deref())?;
//!     let mut registry: HotkeyRegistry<ShellCommand> = display.registry(ShellLauncher::new());
//!     config.apply(&mut registry)?;
//!     display.pump(&mut registry, |_other_event| {})?;
//!     Ok(())
//! }
//! ```

pub use horizon_hotkey_core::*;

pub mod config;
mod launcher;
pub mod logging;

pub use config::{Binding, BindingKey, ConfigError, HotkeyConfig};
pub use launcher::{ShellCommand, ShellLauncher};

/// X11 backend.
pub mod x11 {
    pub use horizon_hotkey_x11::*;
}
