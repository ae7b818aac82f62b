//! Bindings file.
//!
//! Hotkeys can be declared in a TOML file instead of code:
//!
//! ```toml
//! display = ":0"            # optional, X display name
//!
//! [[binding]]
//! combo = "Control-Alt-F1"
//! command = "xterm"
//!
//! [[binding]]
//! keycode = 67
//! modifiers = 12
//! command = "notify-send hi"
//! ```
//!
//! The default location is `hotkeys.toml` in the platform config directory
//! (see [`HotkeyConfig::default_path`]).

use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use horizon_hotkey_core::{ComboKey, HotkeyError, HotkeyRegistry, ModifierMask};
use serde::Deserialize;

use crate::logging::targets;

/// File name of the bindings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "hotkeys.toml";

/// Errors loading or applying a bindings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML or does not match the expected layout.
    #[error("Invalid bindings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A binding names neither a combo nor a keycode/modifiers pair.
    #[error("Binding #{index}: {reason}")]
    InvalidBinding { index: usize, reason: String },

    /// Registering a binding failed.
    #[error(transparent)]
    Hotkey(#[from] HotkeyError),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// The contents of a bindings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HotkeyConfig {
    /// X display to connect to; `$DISPLAY` when absent.
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default, rename = "binding")]
    pub bindings: Vec<Binding>,
}

/// One `[[binding]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Binding {
    #[serde(default)]
    pub combo: Option<String>,
    #[serde(default)]
    pub keycode: Option<u32>,
    #[serde(default)]
    pub modifiers: Option<u32>,
    /// Shell command run when the hotkey fires.
    pub command: String,
}

/// What a [`Binding`] binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKey<'a> {
    /// A combo string resolved against the keyboard mapping.
    Combo(&'a str),
    /// A raw keycode and modifier mask.
    Code(ComboKey),
}

impl Binding {
    /// The key this binding names.
    ///
    /// Exactly one of `combo` or the `keycode`/`modifiers` pair must be set.
    pub fn key(&self) -> Result<BindingKey<'_>, String> {
        match (&self.combo, self.keycode, self.modifiers) {
            (Some(combo), None, None) => Ok(BindingKey::Combo(combo)),
            (None, Some(keycode), Some(modifiers)) => Ok(BindingKey::Code(ComboKey::new(
                keycode,
                ModifierMask::from_bits(modifiers),
            ))),
            (Some(_), _, _) => Err("`combo` cannot be combined with `keycode`/`modifiers`".into()),
            (None, Some(_), None) => Err("`keycode` requires `modifiers`".into()),
            (None, None, Some(_)) => Err("`modifiers` requires `keycode`".into()),
            (None, None, None) => Err("expected `combo` or `keycode` and `modifiers`".into()),
        }
    }
}

impl HotkeyConfig {
    /// The default bindings file, or `None` if the platform has no config
    /// directory for this user.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Horizon Analytic Studios", "horizon-hotkey")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load and validate the bindings file at `path`.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            bindings = config.bindings.len(),
            "loaded bindings file"
        );
        Ok(config)
    }

    /// Load the default bindings file, or an empty configuration if there
    /// is none.
    pub fn load_default() -> ConfigResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                tracing::debug!(target: targets::CONFIG, path = %path.display(), "no bindings file");
                Ok(Self::default())
            }
            None => {
                tracing::warn!(target: targets::CONFIG, "no config directory for this user");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate a bindings file from a string.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        for (index, binding) in config.bindings.iter().enumerate() {
            binding
                .key()
                .map_err(|reason| ConfigError::InvalidBinding { index, reason })?;
        }
        Ok(config)
    }

    /// Register every binding, stopping at the first error.
    ///
    /// Returns the number of bindings registered.
    pub fn apply<A>(&self, registry: &mut HotkeyRegistry<A>) -> ConfigResult<usize>
    where
        A: for<'a> From<&'a str>,
    {
        for (index, binding) in self.bindings.iter().enumerate() {
            let action = A::from(binding.command.as_str());
            match binding
                .key()
                .map_err(|reason| ConfigError::InvalidBinding { index, reason })?
            {
                BindingKey::Combo(combo) => registry.register_combo(combo, action)?,
                BindingKey::Code(combo) => registry.register(combo, action)?,
            }
        }
        Ok(self.bindings.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_both_binding_forms() {
        let config = HotkeyConfig::from_toml(
            r#"
            display = ":1"

            [[binding]]
            combo = "Control-Alt-F1"
            command = "xterm"

            [[binding]]
            keycode = 67
            modifiers = 12
            command = "notify-send hi"
            "#,
        )
        .unwrap();

        assert_eq!(config.display.as_deref(), Some(":1"));
        assert_eq!(config.bindings.len(), 2);
        assert_eq!(config.bindings[0].key(), Ok(BindingKey::Combo("Control-Alt-F1")));
        assert_eq!(
            config.bindings[1].key(),
            Ok(BindingKey::Code(ComboKey::new(
                67,
                ModifierMask::CONTROL | ModifierMask::ALT
            )))
        );
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(HotkeyConfig::from_toml("").unwrap(), HotkeyConfig::default());
    }

    #[test]
    fn test_incomplete_binding_is_rejected() {
        let err = HotkeyConfig::from_toml(
            r#"
            [[binding]]
            combo = "s-a"
            command = "a"

            [[binding]]
            keycode = 67
            command = "b"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBinding { index: 1, .. }));
    }

    #[test]
    fn test_combo_and_keycode_are_exclusive() {
        let err = HotkeyConfig::from_toml(
            r#"
            [[binding]]
            combo = "s-a"
            keycode = 38
            modifiers = 64
            command = "a"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBinding { index: 0, .. }));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = HotkeyConfig::from_toml("[[binding]]\ncombo = \"s-a\"\ncmd = \"a\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[binding]]\ncombo = \"W-Return\"\ncommand = \"xterm\"").unwrap();

        let config = HotkeyConfig::load(file.path()).unwrap();
        assert_eq!(config.bindings[0].command, "xterm");
        assert_eq!(config.display, None);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let err = HotkeyConfig::load(&path).unwrap_err();
        match err {
            ConfigError::Io { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = HotkeyConfig::default_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
