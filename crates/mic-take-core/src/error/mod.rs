use error_location::ErrorLocation;
use thiserror::Error;

/// Capture and encoding errors with source location tracking.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// No audio input device found.
    #[error("No microphone found {location}")]
    NoMicrophoneFound {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio device operation failed.
    #[error("Audio device error: {reason} {location}")]
    DeviceError {
        /// Description of the device error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No audio data captured or provided.
    #[error("No audio captured {location}")]
    NoAudioCaptured {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// WAV encoding of the captured take failed.
    #[error("Encoding error: {reason} {location}")]
    EncodeFailed {
        /// Description of the encoding error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CaptureError`].
pub type Result<T> = std::result::Result<T, CaptureError>;
