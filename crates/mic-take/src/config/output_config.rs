use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output location configuration for finished takes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory takes are written to (None = platform data dir).
    #[serde(default)]
    pub directory: Option<PathBuf>,
}
