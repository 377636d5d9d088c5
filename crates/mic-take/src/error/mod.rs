use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the mic-take binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
///
/// Capture failures never surface here: the session controller reports
/// them through the notifier and recovers to idle on its own.
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to register a global hotkey.
    #[error("Hotkey registration failed: {reason} {location}")]
    HotkeyRegistrationFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to send message through async channel.
    #[error("Channel send failed: {message} {location}")]
    ChannelSendFailed {
        /// Human-readable error message.
        message: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to write a finished take to disk.
    #[error("Artifact error: {reason} {location}")]
    ArtifactError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
