use crate::CoreResult;

/// Final artifact of a recording session: a single-channel encoded WAV buffer.
#[derive(Debug, Clone)]
pub struct RecordedTake {
    /// Complete WAV file contents (16-bit mono PCM).
    pub wav_bytes: Vec<u8>,
    /// Sample rate of the encoded audio in Hz.
    pub sample_rate: u32,
    /// Number of mono samples in the encoded audio.
    pub sample_count: usize,
}

impl RecordedTake {
    /// Duration of the take in whole seconds, rounded down.
    pub fn duration_secs(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.sample_count as u64 / self.sample_rate as u64
    }
}

/// Abstraction over the platform's microphone-access and recording capability.
///
/// The session controller drives this through a fixed lifecycle: `acquire`
/// from idle, `start` once acquired, any number of `pause`/`resume` pairs,
/// then `stop` to produce the final [`RecordedTake`], and `release` back to
/// idle. `release` is idempotent and must also be safe to call after a
/// failed `acquire` or `stop`.
#[async_trait::async_trait]
pub trait CaptureDevice: Send {
    /// Open the input device. Models the platform permission/availability
    /// check; failure here is an acquisition denial.
    async fn acquire(&mut self) -> CoreResult<()>;

    /// Begin capturing on the acquired device.
    fn start(&mut self) -> CoreResult<()>;

    /// Suspend sample intake. The device stays acquired.
    fn pause(&mut self);

    /// Continue sample intake after [`pause`](CaptureDevice::pause).
    fn resume(&mut self);

    /// End capture and encode everything captured so far into the final
    /// artifact.
    async fn stop(&mut self) -> CoreResult<RecordedTake>;

    /// Tear down the device handle. Idempotent.
    fn release(&mut self);
}
