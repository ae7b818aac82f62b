//! Host command layer.
//!
//! Exposes the registry to hosts whose commands take string arguments, such
//! as an embedded scripting console:
//!
//! | Command | Arguments |
//! |---|---|
//! | `hotkey::register` | `keycode modifiers action` or `combo action` |
//! | `hotkey::unregister` | `keycode modifiers` or `combo` |
//!
//! The action token is built from the final argument with `From<&str>`.
//! Integers may be decimal or `0x`-prefixed hexadecimal.

use crate::combo::{ComboKey, ModifierMask};
use crate::error::{HotkeyError, RangeField, Result};
use crate::logging::targets;
use crate::registry::HotkeyRegistry;

/// Name of the register command.
pub const REGISTER: &str = "hotkey::register";
/// Name of the unregister command.
pub const UNREGISTER: &str = "hotkey::unregister";

const REGISTER_USAGE: &str =
    "hotkey::register keycode modifiers action | hotkey::register combo action";
const UNREGISTER_USAGE: &str = "hotkey::unregister keycode modifiers | hotkey::unregister combo";

/// Run the host command `name` with `args`.
///
/// # Errors
///
/// [`HotkeyError::Usage`] for an unknown command, otherwise whatever the
/// command itself reports.
pub fn execute<A>(registry: &mut HotkeyRegistry<A>, name: &str, args: &[&str]) -> Result<()>
where
    A: for<'a> From<&'a str>,
{
    tracing::trace!(target: targets::COMMAND, command = name, ?args, "executing host command");
    match name {
        REGISTER => register(registry, args),
        UNREGISTER => unregister(registry, args),
        _ => Err(HotkeyError::Usage(format!(
            "unknown command \"{name}\": must be {REGISTER} or {UNREGISTER}"
        ))),
    }
}

/// `hotkey::register keycode modifiers action` or `hotkey::register combo action`.
pub fn register<A>(registry: &mut HotkeyRegistry<A>, args: &[&str]) -> Result<()>
where
    A: for<'a> From<&'a str>,
{
    match args {
        [keycode, modifiers, action] => {
            let combo = parse_combo(keycode, modifiers)?;
            registry.register(combo, A::from(*action))
        }
        [combo, action] => registry.register_combo(combo, A::from(*action)),
        _ => Err(HotkeyError::wrong_args(REGISTER_USAGE)),
    }
}

/// `hotkey::unregister keycode modifiers` or `hotkey::unregister combo`.
pub fn unregister<A>(registry: &mut HotkeyRegistry<A>, args: &[&str]) -> Result<()> {
    match args {
        [keycode, modifiers] => {
            let combo = parse_combo(keycode, modifiers)?;
            registry.unregister(combo)
        }
        [combo] => registry.unregister_combo(combo),
        _ => Err(HotkeyError::wrong_args(UNREGISTER_USAGE)),
    }
}

fn parse_combo(keycode: &str, modifiers: &str) -> Result<ComboKey> {
    let keycode = parse_u32(RangeField::Keycode, keycode)?;
    let modifiers = parse_u32(RangeField::Modifiers, modifiers)?;
    Ok(ComboKey::new(keycode, ModifierMask::from_bits(modifiers)))
}

/// Parse a native integer argument.
fn parse_u32(field: RangeField, arg: &str) -> Result<u32> {
    let trimmed = arg.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => digits.parse::<i64>(),
    }
    .map_err(|_| HotkeyError::expected_integer(arg))?;
    let value = if negative { -magnitude } else { magnitude };

    u32::try_from(value).map_err(|_| {
        if value < 0 {
            HotkeyError::below_minimum(field, value, 0)
        } else {
            HotkeyError::above_maximum(field, value, i64::from(u32::MAX))
        }
    })
}
