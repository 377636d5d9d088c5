//! Mic-take Core Library
//!
//! Microphone capture and WAV take encoding using CPAL and Hound.
//!
//! # Example
//!
//! ```no_run
//! use mic_take_core::{CaptureDevice, CoreResult, MicCapture};
//!
//! use std::{thread::sleep, time::Duration};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> CoreResult<()> {
//!     let mut mic = MicCapture::new();
//!
//!     mic.acquire().await?;
//!     mic.start()?;
//!     sleep(Duration::from_secs(3));
//!     let take = mic.stop().await?;
//!     mic.release();
//!
//!     println!("Captured {} samples", take.sample_count);
//!     Ok(())
//! }
//! ```

mod audio;
mod error;

pub use {
    audio::CaptureDevice, audio::MicCapture, audio::RecordedTake, error::CaptureError,
    error::Result as CoreResult,
};

#[cfg(test)]
mod tests;
