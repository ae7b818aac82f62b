//! Shell-command actions.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use horizon_hotkey_core::{ActionInvoker, ComboKey};

use crate::logging::targets;

/// A command line run through the shell when its hotkey fires.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShellCommand(String);

impl ShellCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShellCommand {
    fn from(command: &str) -> Self {
        Self::new(command)
    }
}

impl From<String> for ShellCommand {
    fn from(command: String) -> Self {
        Self(command)
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Runs [`ShellCommand`]s with `sh -c` without waiting for them.
///
/// Children that have exited are reaped on the next invocation.
#[derive(Debug)]
pub struct ShellLauncher {
    shell: PathBuf,
    children: Vec<Child>,
}

impl Default for ShellLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellLauncher {
    /// A launcher using `/bin/sh`.
    pub fn new() -> Self {
        Self::with_shell("/bin/sh")
    }

    /// A launcher using `shell`, which must accept `-c <command>`.
    pub fn with_shell(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
            children: Vec::new(),
        }
    }

    /// Start `command` in the background.
    pub fn spawn(&mut self, command: &ShellCommand) -> io::Result<u32> {
        let child = Command::new(&self.shell)
            .arg("-c")
            .arg(command.as_str())
            .stdin(Stdio::null())
            .spawn()?;
        let pid = child.id();
        self.children.push(child);
        Ok(pid)
    }

    /// Reap finished children and return how many are still running.
    pub fn running(&mut self) -> usize {
        self.reap();
        self.children.len()
    }

    fn reap(&mut self) {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                tracing::trace!(target: targets::LAUNCHER, pid = child.id(), %status, "command exited");
                false
            }
            Ok(None) => true,
            Err(err) => {
                tracing::warn!(target: targets::LAUNCHER, pid = child.id(), error = %err, "failed to poll command");
                false
            }
        });
    }
}

impl ActionInvoker<ShellCommand> for ShellLauncher {
    fn invoke(&mut self, combo: ComboKey, action: &ShellCommand) {
        self.reap();
        match self.spawn(action) {
            Ok(pid) => {
                tracing::debug!(target: targets::LAUNCHER, %combo, command = %action, pid, "command started");
            }
            Err(err) => {
                tracing::error!(target: targets::LAUNCHER, %combo, command = %action, error = %err, "failed to start command");
            }
        }
    }
}
