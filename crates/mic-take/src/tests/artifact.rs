use crate::{
    ArtifactStore,
    artifact::artifact_file_name,
};

use chrono::{DateTime, Utc};
use mic_take_core::RecordedTake;

fn sample_take() -> RecordedTake {
    RecordedTake {
        wav_bytes: vec![0x52, 0x49, 0x46, 0x46],
        sample_rate: 16_000,
        sample_count: 16_000,
    }
}

/// WHAT: Filenames are the completion timestamp with : and . dashed
/// WHY: Artifact names must be filesystem-safe on every platform
#[test]
#[allow(clippy::unwrap_used)]
fn given_completion_time_when_naming_then_colons_and_dots_become_dashes() {
    // Given: A fixed completion instant
    let completed_at: DateTime<Utc> = "2026-08-25T12:34:56.789Z".parse().unwrap();

    // When: Deriving the artifact name
    let name = artifact_file_name(completed_at);

    // Then: RFC 3339 with separators dashed, plus the wav extension
    assert_eq!(name, "2026-08-25T12-34-56-789Z.wav");
}

/// WHAT: Saving writes the WAV bytes into the store directory
/// WHY: The finished take must land on disk exactly as encoded
#[test]
#[allow(clippy::unwrap_used)]
fn given_a_take_when_saving_then_bytes_land_in_store_directory() {
    // Given: A store rooted in a fresh temp directory
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path().to_path_buf());

    // When: Saving a take
    let path = store.save(&sample_take()).unwrap();

    // Then: The file exists under the store with the encoded bytes
    assert!(path.starts_with(dir.path()));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("wav"));
    assert_eq!(std::fs::read(&path).unwrap(), sample_take().wav_bytes);
}

/// WHAT: Saving creates missing output directories
/// WHY: First run should not require manual directory setup
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_directory_when_saving_then_it_is_created() {
    // Given: A store pointing at a nested, nonexistent path
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("takes").join("2026");
    let store = ArtifactStore::new(nested.clone());

    // When: Saving a take
    let path = store.save(&sample_take()).unwrap();

    // Then: The directory chain exists and holds the file
    assert!(nested.is_dir());
    assert!(path.exists());
}
