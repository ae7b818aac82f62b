//! Minimal hotkey daemon.
//!
//! Grabs every binding in a bindings file and runs its command when the
//! hotkey is pressed.
//!
//! Run with: cargo run -p horizon-hotkey --example hotkeyd [-- path/to/hotkeys.toml]
//!
//! Without an argument the default bindings file is used. Set `RUST_LOG`
//! (e.g. `RUST_LOG=horizon_hotkey_core=debug`) for more output.

use std::process::ExitCode;

use horizon_hotkey::x11::X11Display;
use horizon_hotkey::{HotkeyConfig, HotkeyRegistry, ShellCommand, ShellLauncher};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => HotkeyConfig::load(path)?,
        None => HotkeyConfig::load_default()?,
    };
    if config.bindings.is_empty() {
        tracing::warn!("no bindings configured");
    }

    let display = X11Display::connect(config.display.as_deref())?;
    let mut registry: HotkeyRegistry<ShellCommand> = display.registry(ShellLauncher::new());
    let count = config.apply(&mut registry)?;

    for combo in registry.combos() {
        if let Some(command) = registry.action(combo) {
            tracing::info!(%combo, %command, "bound");
        }
    }
    tracing::info!(count, "listening for hotkeys");

    // The daemon has no windows of its own, so nothing else needs handling.
    display.pump(&mut registry, |_other_event| {})?;
    Ok(())
}
