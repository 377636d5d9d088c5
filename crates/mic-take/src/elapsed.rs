//! Elapsed-time accounting for a recording session.
//!
//! Time is recomputed from absolute instants rather than accumulated per
//! tick, so the displayed clock does not drift under scheduling delay.
//! Resume always sets a fresh start epoch; the time already spent recording
//! is preserved in `accumulated`.

use std::time::{Duration, Instant};

/// Accumulates wall-clock time spent recording across pause/resume cycles.
///
/// All operations take an explicit `now` so the arithmetic is exact and
/// testable. Accumulated time is monotonically non-decreasing and reflects
/// only spans between a `start`/`resume` and the following `pause`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ElapsedTimer {
    start_epoch: Option<Instant>,
    accumulated: Duration,
}

impl ElapsedTimer {
    /// A zeroed, stopped timer.
    pub(crate) fn new() -> Self {
        Self {
            start_epoch: None,
            accumulated: Duration::ZERO,
        }
    }

    /// Reset to zero and stop the clock.
    pub(crate) fn reset(&mut self) {
        self.start_epoch = None;
        self.accumulated = Duration::ZERO;
    }

    /// Start the clock at `now`. No-op if already running.
    pub(crate) fn start(&mut self, now: Instant) {
        if self.start_epoch.is_none() {
            self.start_epoch = Some(now);
        }
    }

    /// Freeze the clock at `now`, folding the running span into the
    /// accumulated total. No-op if not running.
    pub(crate) fn pause(&mut self, now: Instant) {
        if let Some(epoch) = self.start_epoch.take() {
            self.accumulated += now.saturating_duration_since(epoch);
        }
    }

    /// Continue the clock from a fresh epoch, preserving accumulated time.
    pub(crate) fn resume(&mut self, now: Instant) {
        self.start(now);
    }

    /// Total recorded time as of `now`: the accumulated total plus the
    /// current running span, if any.
    pub(crate) fn elapsed(&self, now: Instant) -> Duration {
        match self.start_epoch {
            Some(epoch) => self.accumulated + now.saturating_duration_since(epoch),
            None => self.accumulated,
        }
    }
}

/// Format a duration as a zero-padded `MM:SS` clock string.
///
/// Minutes accumulate unbounded; there is no hour rollover ("61:07").
pub(crate) fn format_clock(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
