/// Commands sent from the hotkey frontend to the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionCommand {
    /// The record control was pressed.
    RecordPressed,
    /// The stop control was pressed.
    StopPressed,
    /// The pause/resume control was pressed.
    PausePressed,
    /// Request application shutdown.
    Shutdown,
}
