use crate::SessionState;

/// Enabled/label snapshot for the three session controls.
///
/// Derived, never stored: always recomputed from [`SessionState`] and pushed
/// to the frontend. The frontend applies it and never reads it back as a
/// source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ControlPanel {
    /// Whether the record control accepts a press.
    pub(crate) record_enabled: bool,
    /// Whether the stop control accepts a press.
    pub(crate) stop_enabled: bool,
    /// Whether the pause control accepts a press.
    pub(crate) pause_enabled: bool,
    /// Label for the record control.
    pub(crate) record_label: &'static str,
    /// Label for the pause control ("Pause" or "Resume").
    pub(crate) pause_label: &'static str,
}

impl ControlPanel {
    /// Project the control affordances for a session state.
    pub(crate) fn for_state(state: SessionState) -> Self {
        match state {
            SessionState::Idle => Self {
                record_enabled: true,
                stop_enabled: false,
                pause_enabled: false,
                record_label: "Record",
                pause_label: "Pause",
            },
            SessionState::Acquiring => Self {
                record_enabled: false,
                stop_enabled: false,
                pause_enabled: false,
                record_label: "Record",
                pause_label: "Pause",
            },
            SessionState::Recording => Self {
                record_enabled: false,
                stop_enabled: true,
                pause_enabled: true,
                record_label: "Recording",
                pause_label: "Pause",
            },
            SessionState::Paused => Self {
                record_enabled: false,
                stop_enabled: true,
                pause_enabled: true,
                record_label: "Paused",
                pause_label: "Resume",
            },
            SessionState::Finalizing => Self {
                record_enabled: false,
                stop_enabled: false,
                pause_enabled: false,
                record_label: "Saving",
                pause_label: "Pause",
            },
        }
    }
}
