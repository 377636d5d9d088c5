//! User-facing outcome reporting.
//!
//! The notifier is fire-and-forget: delivery failures are logged, never
//! propagated, so a broken notification daemon cannot corrupt the session.

use tracing::{info, warn};

/// Outcome category for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoteKind {
    /// A take was produced and saved.
    Success,
    /// A recoverable failure the user should know about.
    Error,
}

/// Reports session outcomes to the user. Must not fail.
pub(crate) trait Notifier {
    /// Deliver a human-readable message of the given kind.
    fn notify(&self, message: &str, kind: NoteKind);
}

/// Desktop notification delivery via the platform notification service.
pub(crate) struct DesktopNotifier {
    enabled: bool,
}

impl DesktopNotifier {
    /// Create a notifier; when `enabled` is false, outcomes are only logged.
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str, kind: NoteKind) {
        match kind {
            NoteKind::Success => info!(message, "Session outcome"),
            NoteKind::Error => warn!(message, "Session outcome"),
        }

        if !self.enabled {
            return;
        }

        let summary = match kind {
            NoteKind::Success => "Mic-Take",
            NoteKind::Error => "Mic-Take error",
        };

        if let Err(e) = notify_rust::Notification::new()
            .summary(summary)
            .body(message)
            .show()
        {
            warn!(error = %e, "Failed to deliver desktop notification");
        }
    }
}
