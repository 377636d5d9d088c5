/// Lifecycle state of the single recording session.
///
/// States are mutually exclusive; transitions not driven by the controller
/// are rejected as no-ops rather than queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    /// No device acquired, no clock running. Initial and re-entrant terminal
    /// state.
    Idle,
    /// Device-acquisition request in flight.
    Acquiring,
    /// Device active and capturing; clock running.
    Recording,
    /// Device active but capture suspended; clock frozen.
    Paused,
    /// Stop requested; awaiting the final artifact from the capture device.
    Finalizing,
}
