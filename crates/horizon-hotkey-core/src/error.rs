//! Error types for Horizon Hotkey.

use std::fmt;

/// Result type alias for hotkey operations.
pub type Result<T> = std::result::Result<T, HotkeyError>;

/// The main error type for Horizon Hotkey operations.
///
/// Every error is reported synchronously by the call that failed and leaves
/// the registry and the set of live grabs exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotkeyError {
    /// No live windowing connection or main window; the call cannot proceed.
    #[error("Display unavailable: {0}")]
    DisplayUnavailable(String),

    /// A keycode or modifier value lies outside the system-reported range.
    #[error("{field} {value} is {bound}")]
    Range {
        field: RangeField,
        value: i64,
        bound: RangeBound,
    },

    /// A symbolic combo string could not be translated to a keycode.
    #[error("Cannot resolve key combo '{combo}': {reason}")]
    Resolution {
        combo: String,
        reason: ResolutionFailure,
    },

    /// Wrong argument count or type for a host command.
    #[error("{0}")]
    Usage(String),
}

impl HotkeyError {
    /// Create a display-unavailable error.
    pub fn display_unavailable(reason: impl Into<String>) -> Self {
        Self::DisplayUnavailable(reason.into())
    }

    /// Create a range error for a value below its minimum.
    pub fn below_minimum(field: RangeField, value: i64, min: i64) -> Self {
        Self::Range {
            field,
            value,
            bound: RangeBound::Minimum(min),
        }
    }

    /// Create a range error for a value above its maximum.
    pub fn above_maximum(field: RangeField, value: i64, max: i64) -> Self {
        Self::Range {
            field,
            value,
            bound: RangeBound::Maximum(max),
        }
    }

    /// Create a resolution error.
    pub fn resolution(combo: impl Into<String>, reason: ResolutionFailure) -> Self {
        Self::Resolution {
            combo: combo.into(),
            reason,
        }
    }

    /// Create a usage error naming the expected signature.
    pub fn wrong_args(expected: &str) -> Self {
        Self::Usage(format!("wrong number of arguments: expected `{expected}`"))
    }

    /// Create a usage error for an argument that is not an integer.
    pub fn expected_integer(got: &str) -> Self {
        Self::Usage(format!("expected integer but got \"{got}\""))
    }
}

/// The value a [`HotkeyError::Range`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeField {
    Keycode,
    Modifiers,
}

impl fmt::Display for RangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keycode => write!(f, "keycode"),
            Self::Modifiers => write!(f, "modifiers"),
        }
    }
}

/// The bound a [`HotkeyError::Range`] violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    /// The value was smaller than this minimum.
    Minimum(i64),
    /// The value was larger than this maximum.
    Maximum(i64),
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimum(min) => write!(f, "below minimum {min}"),
            Self::Maximum(max) => write!(f, "above maximum {max}"),
        }
    }
}

/// Why a combo string failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// The trailing key token was empty.
    MissingKeyName,
    /// The key name is unknown or not producible on the current keyboard.
    KeysymNotFound(String),
}

impl fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKeyName => write!(f, "missing key name"),
            Self::KeysymNotFound(name) => write!(f, "key symbol not found: {name}"),
        }
    }
}
