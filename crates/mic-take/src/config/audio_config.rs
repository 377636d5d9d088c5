use serde::{Deserialize, Serialize};

/// Audio device configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Selected audio input device name (None = default device).
    #[serde(default)]
    pub selected_device: Option<String>,
}
