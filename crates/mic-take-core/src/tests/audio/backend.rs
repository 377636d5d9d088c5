use crate::RecordedTake;

/// WHAT: Take duration is whole seconds of mono samples at the take's rate
/// WHY: The reported length feeds logs and must round down, never panic
#[test]
fn given_sample_counts_when_computing_duration_then_whole_seconds() {
    // Given: 2.5 seconds of samples at 16kHz
    let take = RecordedTake {
        wav_bytes: vec![],
        sample_rate: 16_000,
        sample_count: 40_000,
    };

    // Then: Rounds down to whole seconds
    assert_eq!(take.duration_secs(), 2);
}

/// WHAT: A zero sample rate reports zero duration
/// WHY: A malformed take must not divide by zero
#[test]
fn given_zero_sample_rate_when_computing_duration_then_zero() {
    let take = RecordedTake {
        wav_bytes: vec![],
        sample_rate: 0,
        sample_count: 40_000,
    };
    assert_eq!(take.duration_secs(), 0);
}
