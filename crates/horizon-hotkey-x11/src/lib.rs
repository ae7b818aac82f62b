//! X11 backend for Horizon Hotkey.
//!
//! Implements the collaborator traits of `horizon-hotkey-core` on top of an
//! `x11rb` connection:
//!
//! - [`X11GrabBackend`]: `GrabKey`/`UngrabKey` on the root window
//! - [`X11KeysymTranslator`]: keysym → keycode through the server's keyboard
//!   mapping
//! - [`X11EventBus`]: gates whether events are offered to the registry
//!
//! All three share one [`X11Display`].
//!
//! # Example
//!
//! ```no_run
//! use horizon_hotkey_x11::X11Display;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let display = X11Display::connect(None)?;
//! let mut registry = display.registry(|combo, action: &String| {
//!     println!("{combo}: {action}");
//! });
//! registry.register_combo("Control-Alt-t", "terminal".to_string())?;
//! display.pump(&mut registry, |_other_event| {})?;
//! # Ok(())
//! # }
//! ```

mod display;
mod error;
mod events;
mod grab;
mod keymap;
pub mod logging;
mod state;
#[cfg(test)]
mod test_support;

pub use display::X11Display;
pub use error::{Result, X11Error};
pub use events::{input_event, X11EventBus};
pub use grab::X11GrabBackend;
pub use keymap::{KeyboardMapping, X11KeysymTranslator};
