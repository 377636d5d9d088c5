use crate::{
    CaptureError, CoreResult,
    audio::{CaptureDevice, RecordedTake, encoder},
};

use std::{
    collections::VecDeque,
    panic::Location,
    sync::{
        atomic::{AtomicBool, Ordering},
        {Arc, Mutex},
    },
};

use cpal::{
    Device, Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument};

/// Maximum samples to buffer (30 minutes at 48kHz mono).
/// Prevents unbounded memory growth if a session is left recording.
pub(crate) const MAX_BUFFER_SAMPLES: usize = 48_000 * 60 * 30;

/// Microphone capture device backed by cpal.
///
/// Lifecycle matches [`CaptureDevice`]: the device handle exists only
/// between `acquire` and `release`. Pause keeps the stream alive but gates
/// the callback so paused time contributes no samples.
pub struct MicCapture {
    device: Option<Device>,
    config: Option<StreamConfig>,
    stream: Option<Stream>,
    samples: Arc<Mutex<VecDeque<f32>>>,
    /// Signals the audio callback to stop writing. Set to `true` before
    /// dropping the stream so no in-flight callback writes after the
    /// lock is acquired in `stop()`.
    shutdown: Arc<AtomicBool>,
    /// Gates the audio callback while the session is paused.
    paused: Arc<AtomicBool>,
}

impl MicCapture {
    /// Create an unacquired capture device.
    pub fn new() -> Self {
        Self {
            device: None,
            config: None,
            stream: None,
            samples: Arc::new(Mutex::new(VecDeque::new())),
            shutdown: Arc::new(AtomicBool::new(false)),
            paused: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sample rate of the acquired device, or 0 if not acquired.
    pub fn sample_rate(&self) -> u32 {
        self.config.as_ref().map(|c| c.sample_rate).unwrap_or(0)
    }
}

impl Default for MicCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CaptureDevice for MicCapture {
    #[instrument(skip(self))]
    async fn acquire(&mut self) -> CoreResult<()> {
        let host = cpal::default_host();

        let device = host
            .default_input_device()
            .ok_or(CaptureError::NoMicrophoneFound {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let config = device
            .default_input_config()
            .map_err(|e| CaptureError::DeviceError {
                reason: format!("Failed to get config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            device_id = ?device.id(),
            sample_rate = config.sample_rate(),
            channels = config.channels(),
            "Microphone acquired"
        );

        self.device = Some(device);
        self.config = Some(config.into());

        Ok(())
    }

    #[instrument(skip(self))]
    fn start(&mut self) -> CoreResult<()> {
        let (device, config) = match (self.device.as_ref(), self.config.as_ref()) {
            (Some(d), Some(c)) => (d, c),
            _ => {
                return Err(CaptureError::DeviceError {
                    reason: "start called before acquire".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let samples = Arc::clone(&self.samples);
        let shutdown = Arc::clone(&self.shutdown);
        let paused = Arc::clone(&self.paused);

        // Reset flags and buffer for the new session
        self.shutdown.store(false, Ordering::Release);
        self.paused.store(false, Ordering::Release);

        samples
            .lock()
            .map_err(|e| CaptureError::DeviceError {
                reason: format!("Failed to lock samples: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .clear();

        let stream = device
            .build_input_stream(
                config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    // Check flags before acquiring the lock. Once stop() sets
                    // shutdown, no new samples are written even if cpal fires
                    // one more callback before the stream is dropped. While
                    // paused, frames are discarded so paused wall-clock time
                    // contributes nothing to the take.
                    if shutdown.load(Ordering::Acquire) || paused.load(Ordering::Acquire) {
                        return;
                    }
                    // Recover from lock poison rather than silently dropping audio.
                    // A poisoned mutex means a previous holder panicked, but the
                    // VecDeque data is still valid and usable.
                    let mut buf = samples.lock().unwrap_or_else(|e| {
                        error!("Sample buffer lock poisoned, recovering: {}", e);
                        e.into_inner()
                    });
                    buf.extend(data.iter().copied());
                    // Ring buffer: O(1) amortized drop of oldest samples via VecDeque
                    while buf.len() > MAX_BUFFER_SAMPLES {
                        buf.pop_front();
                    }
                },
                |err| {
                    error!("Audio stream error: {}", err);
                },
                None,
            )
            .map_err(|e| CaptureError::DeviceError {
                reason: format!("Failed to build stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        stream.play().map_err(|e| CaptureError::DeviceError {
            reason: format!("Failed to start stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.stream = Some(stream);
        info!("Audio capture started");

        Ok(())
    }

    fn pause(&mut self) {
        self.paused.store(true, Ordering::Release);
        debug!("Audio capture paused");
    }

    fn resume(&mut self) {
        self.paused.store(false, Ordering::Release);
        debug!("Audio capture resumed");
    }

    #[instrument(skip(self))]
    async fn stop(&mut self) -> CoreResult<RecordedTake> {
        // Signal the callback to stop writing BEFORE dropping the stream,
        // so the final callback cannot race the collection below even if a
        // backend's drop() returns before the last callback completes.
        self.shutdown.store(true, Ordering::Release);

        if let Some(stream) = self.stream.take() {
            drop(stream);
            // Brief yield so any in-flight callback observes the shutdown
            // flag. Most cpal backends join the audio thread in drop(),
            // making this redundant, but it costs <5ms.
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            info!("Audio capture stopped");
        }

        let (channels, sample_rate) = match self.config.as_ref() {
            Some(c) => (c.channels, c.sample_rate),
            None => {
                return Err(CaptureError::DeviceError {
                    reason: "stop called before acquire".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let samples: Vec<f32> = self
            .samples
            .lock()
            .map_err(|e| CaptureError::DeviceError {
                reason: format!("Failed to lock samples: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .iter()
            .copied()
            .collect();

        if samples.is_empty() {
            return Err(CaptureError::NoAudioCaptured {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!(sample_count = samples.len(), "Captured audio samples");

        let wav_bytes = encoder::encode_wav_mono16(&samples, channels, sample_rate)?;

        Ok(RecordedTake {
            wav_bytes,
            sample_rate,
            sample_count: encoder::mono_sample_count(&samples, channels),
        })
    }

    #[instrument(skip(self))]
    fn release(&mut self) {
        self.stream = None;
        self.device = None;
        self.config = None;
        self.shutdown.store(false, Ordering::Release);
        self.paused.store(false, Ordering::Release);

        if let Ok(mut buf) = self.samples.lock() {
            buf.clear();
        }

        debug!("Microphone released");
    }
}
