use crate::{CaptureError, CoreResult};

use std::{io::Cursor, panic::Location};

use error_location::ErrorLocation;
use tracing::debug;

/// Encode captured f32 samples as a 16-bit mono PCM WAV file in memory.
///
/// Interleaved multi-channel input is downmixed to a single channel by
/// averaging, matching the one-channel artifact the recorder produces.
///
/// # Errors
///
/// Returns `NoAudioCaptured` for empty input and `EncodeFailed` if the
/// WAV writer reports an error.
#[track_caller]
pub(crate) fn encode_wav_mono16(
    samples: &[f32],
    channels: u16,
    sample_rate: u32,
) -> CoreResult<Vec<u8>> {
    if samples.is_empty() {
        return Err(CaptureError::NoAudioCaptured {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let mono = downmix_to_mono(samples, channels);

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());

    let mut writer =
        hound::WavWriter::new(&mut cursor, spec).map_err(|e| CaptureError::EncodeFailed {
            reason: format!("Failed to create WAV writer: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    for &sample in &mono {
        writer
            .write_sample(f32_to_i16(sample))
            .map_err(|e| CaptureError::EncodeFailed {
                reason: format!("Failed to write sample: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    writer.finalize().map_err(|e| CaptureError::EncodeFailed {
        reason: format!("Failed to finalize WAV: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let bytes = cursor.into_inner();

    debug!(
        mono_samples = mono.len(),
        wav_bytes = bytes.len(),
        sample_rate,
        "Take encoded"
    );

    Ok(bytes)
}

/// Number of mono samples an interleaved buffer encodes to.
pub(crate) fn mono_sample_count(samples: &[f32], channels: u16) -> usize {
    if channels <= 1 {
        samples.len()
    } else {
        samples.len() / channels as usize
    }
}

/// Average interleaved channels down to one. Trailing samples that do not
/// form a complete frame are dropped.
fn downmix_to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }

    let channels = channels as usize;
    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Convert a normalized f32 sample to i16, clamping out-of-range input.
fn f32_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}
