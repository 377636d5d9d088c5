use crate::{CaptureDevice, CaptureError, MicCapture};

/// WHAT: Starting capture without an acquired device fails cleanly
/// WHY: The lifecycle contract requires acquire before start
#[test]
fn given_unacquired_device_when_starting_then_device_error() {
    // Given: A fresh, unacquired capture device
    let mut mic = MicCapture::new();

    // When: Starting capture
    let result = mic.start();

    // Then: Returns DeviceError
    assert!(matches!(result, Err(CaptureError::DeviceError { .. })));
}

/// WHAT: Stopping without an acquired device fails cleanly
/// WHY: A stray stop must not panic or fabricate an artifact
#[tokio::test]
async fn given_unacquired_device_when_stopping_then_device_error() {
    // Given: A fresh, unacquired capture device
    let mut mic = MicCapture::new();

    // When: Stopping capture
    let result = mic.stop().await;

    // Then: Returns DeviceError
    assert!(matches!(result, Err(CaptureError::DeviceError { .. })));
}

/// WHAT: Release is idempotent on an unacquired device
/// WHY: The controller releases on every path back to idle
#[test]
fn given_unacquired_device_when_released_twice_then_no_effect() {
    // Given: A fresh capture device
    let mut mic = MicCapture::new();

    // When: Releasing repeatedly
    mic.release();
    mic.release();

    // Then: Device reports no configuration
    assert_eq!(mic.sample_rate(), 0);
}

/// WHAT: A short live capture produces a non-empty mono WAV take
/// WHY: End-to-end device path needs real hardware to validate
#[tokio::test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
#[allow(clippy::unwrap_used)]
async fn given_live_microphone_when_recording_briefly_then_take_produced() {
    // Given: The default input device
    let mut mic = MicCapture::new();
    mic.acquire().await.unwrap();

    // When: Capturing for half a second
    mic.start().unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
    let take = mic.stop().await.unwrap();
    mic.release();

    // Then: A non-empty take at the device rate
    assert!(take.sample_count > 0);
    assert!(take.sample_rate > 0);
    assert!(!take.wav_bytes.is_empty());
}
