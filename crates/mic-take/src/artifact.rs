//! Persistence of finished takes.

use crate::{AppError, AppResult};

use std::{fs, panic::Location, path::PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use error_location::ErrorLocation;
use mic_take_core::RecordedTake;
use tracing::{debug, info, instrument};

/// Writes finished takes into the configured output directory.
pub(crate) struct ArtifactStore {
    pub(crate) directory: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `directory`. The directory is created on
    /// first save, not here, so a bad path surfaces as a finalization
    /// failure rather than a startup failure.
    pub(crate) fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// Write the take to disk under a completion-time-derived filename.
    #[track_caller]
    #[instrument(skip(self, take))]
    pub(crate) fn save(&self, take: &RecordedTake) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.directory).map_err(|e| AppError::ArtifactError {
            reason: format!("Failed to create output directory: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let path = self.directory.join(artifact_file_name(Utc::now()));

        fs::write(&path, &take.wav_bytes).map_err(|e| AppError::ArtifactError {
            reason: format!("Failed to write take: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(
            path = ?path,
            bytes = take.wav_bytes.len(),
            duration_secs = take.duration_secs(),
            "Take written"
        );

        Ok(path)
    }
}

/// Filename for a take finished at `completed_at`: the UTC RFC 3339
/// timestamp with colons and dots replaced by dashes, plus `.wav`.
/// Derived from completion time, not recording start time.
pub(crate) fn artifact_file_name(completed_at: DateTime<Utc>) -> String {
    let stamp = completed_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    let name = format!("{}.wav", stamp.replace([':', '.'], "-"));
    debug!(name, "Artifact name derived");
    name
}
