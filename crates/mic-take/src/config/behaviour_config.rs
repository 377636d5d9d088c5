use crate::config::{DEFAULT_DESKTOP_NOTIFICATIONS, default_desktop_notifications};

use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Whether to show desktop notifications for session outcomes.
    #[serde(default = "default_desktop_notifications")]
    pub desktop_notifications: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            desktop_notifications: DEFAULT_DESKTOP_NOTIFICATIONS,
        }
    }
}
