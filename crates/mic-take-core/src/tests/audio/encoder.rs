use crate::{
    CaptureError,
    audio::encoder::{encode_wav_mono16, mono_sample_count},
};

use std::io::Cursor;

/// WHAT: Empty input is rejected before any encoding happens
/// WHY: A stop with no captured audio must surface NoAudioCaptured
#[test]
fn given_empty_samples_when_encoding_then_no_audio_captured_error() {
    // Given: No captured samples
    let samples: Vec<f32> = vec![];

    // When: Attempting to encode
    let result = encode_wav_mono16(&samples, 1, 48_000);

    // Then: Returns NoAudioCaptured error
    assert!(matches!(result, Err(CaptureError::NoAudioCaptured { .. })));
}

/// WHAT: Mono input encodes to a readable 16-bit mono WAV with the input rate
/// WHY: The artifact must be a valid single-channel WAV file
#[test]
#[allow(clippy::unwrap_used)]
fn given_mono_samples_when_encoding_then_wav_spec_matches() {
    // Given: One second of silence at 8kHz
    let samples = vec![0.0f32; 8_000];

    // When: Encoding to WAV
    let bytes = encode_wav_mono16(&samples, 1, 8_000).unwrap();

    // Then: The output parses as 16-bit mono PCM at 8kHz with all samples
    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 8_000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.len(), 8_000);
}

/// WHAT: Interleaved stereo input is averaged down to one channel
/// WHY: The recorder always produces single-channel artifacts
#[test]
#[allow(clippy::unwrap_used)]
fn given_stereo_samples_when_encoding_then_channels_are_averaged() {
    // Given: Two stereo frames: (1.0, 0.0) and (-0.5, -0.5)
    let samples = vec![1.0f32, 0.0, -0.5, -0.5];

    // When: Encoding to WAV
    let bytes = encode_wav_mono16(&samples, 2, 44_100).unwrap();

    // Then: Two mono samples, averaged per frame
    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let decoded: Vec<i16> = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0], (0.5 * i16::MAX as f32) as i16);
    assert_eq!(decoded[1], (-0.5 * i16::MAX as f32) as i16);
}

/// WHAT: Out-of-range float samples are clamped instead of wrapping
/// WHY: Clipped input must not corrupt the encoded waveform
#[test]
#[allow(clippy::unwrap_used)]
fn given_out_of_range_samples_when_encoding_then_values_are_clamped() {
    // Given: Samples beyond the normalized [-1.0, 1.0] range
    let samples = vec![2.0f32, -3.0];

    // When: Encoding to WAV
    let bytes = encode_wav_mono16(&samples, 1, 16_000).unwrap();

    // Then: Values clamp to full scale
    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let decoded: Vec<i16> = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(decoded, vec![i16::MAX, -i16::MAX]);
}

/// WHAT: Mono sample count accounts for channel interleaving
/// WHY: Reported take length must reflect the encoded mono stream
#[test]
fn given_interleaved_buffers_when_counting_then_frames_are_reported() {
    assert_eq!(mono_sample_count(&[0.0; 6], 1), 6);
    assert_eq!(mono_sample_count(&[0.0; 6], 2), 3);
    assert_eq!(mono_sample_count(&[], 2), 0);
}
