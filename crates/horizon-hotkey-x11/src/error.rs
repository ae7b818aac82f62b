//! Error types for the X11 backend.

use horizon_hotkey_core::HotkeyError;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError, ReplyOrIdError};

/// Result type alias for X11 backend operations.
pub type Result<T> = std::result::Result<T, X11Error>;

/// Errors talking to the X server.
#[derive(Debug, thiserror::Error)]
pub enum X11Error {
    /// Could not open the display.
    #[error("Failed to connect to X display: {0}")]
    Connect(#[from] ConnectError),

    /// The connection broke while sending or receiving.
    #[error("X connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// The server answered a request with an error.
    #[error("X request failed: {0}")]
    Reply(#[from] ReplyError),

    /// A request or resource-id allocation failed.
    #[error("X request failed: {0}")]
    ReplyOrId(#[from] ReplyOrIdError),

    /// The requested screen does not exist on the display.
    #[error("Screen {0} does not exist on this display")]
    NoSuchScreen(usize),
}

impl X11Error {
    /// Whether the error means the connection itself is unusable.
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            Self::Connect(_)
                | Self::Connection(_)
                | Self::Reply(ReplyError::ConnectionError(_))
                | Self::ReplyOrId(ReplyOrIdError::ConnectionError(_))
        )
    }
}

impl From<X11Error> for HotkeyError {
    fn from(err: X11Error) -> Self {
        HotkeyError::display_unavailable(err.to_string())
    }
}
