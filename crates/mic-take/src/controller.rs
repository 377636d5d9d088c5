//! The recording lifecycle state machine.
//!
//! Owns the session state, the elapsed clock, and the borrowed capture
//! device, and projects control affordances to the frontend on every
//! transition. Button presses routed here while the matching control is
//! disabled are dropped, never queued; mutual exclusion during the async
//! acquire/finalize operations comes entirely from that discipline.

use crate::{
    ArtifactStore, ControlPanel, NoteKind, Notifier, SessionState,
    elapsed::{ElapsedTimer, format_clock},
};

use std::time::{Duration, Instant};

use mic_take_core::CaptureDevice;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

/// Drives a single recording session through
/// `Idle -> Acquiring -> Recording <-> Paused -> Finalizing -> Idle`.
///
/// The device handle is held only between `Acquiring` and the return to
/// `Idle`; every failure path releases it, so no error leaks the microphone.
pub(crate) struct RecordingSessionController<D, N> {
    pub(crate) state: SessionState,
    pub(crate) timer: ElapsedTimer,
    pub(crate) device: D,
    pub(crate) notifier: N,
    pub(crate) store: ArtifactStore,
    pub(crate) session_id: Option<uuid::Uuid>,
    controls_tx: watch::Sender<ControlPanel>,
    clock_tx: watch::Sender<String>,
}

impl<D: CaptureDevice, N: Notifier> RecordingSessionController<D, N> {
    /// Create a controller in `Idle` and hand back the affordance and
    /// clock channels the frontend watches.
    pub(crate) fn new(
        device: D,
        notifier: N,
        store: ArtifactStore,
    ) -> (
        Self,
        watch::Receiver<ControlPanel>,
        watch::Receiver<String>,
    ) {
        let (controls_tx, controls_rx) = watch::channel(ControlPanel::for_state(SessionState::Idle));
        let (clock_tx, clock_rx) = watch::channel(format_clock(Duration::ZERO));

        let controller = Self {
            state: SessionState::Idle,
            timer: ElapsedTimer::new(),
            device,
            notifier,
            store,
            session_id: None,
            controls_tx,
            clock_tx,
        };

        (controller, controls_rx, clock_rx)
    }

    /// Record pressed: valid only from `Idle`, otherwise a dropped no-op.
    ///
    /// Enters `Acquiring` with a zeroed clock, then waits for the device.
    /// A grant starts capture and the clock; a denial (or a failure to
    /// start the granted device) reports the error and returns to `Idle`.
    #[instrument(skip(self))]
    pub(crate) async fn on_record_pressed(&mut self) {
        if self.state != SessionState::Idle {
            debug!(state = ?self.state, "Record press ignored");
            return;
        }

        let session_id = uuid::Uuid::new_v4();
        self.session_id = Some(session_id);
        self.timer.reset();
        self.publish_clock(Instant::now());
        self.set_state(SessionState::Acquiring);

        match self.device.acquire().await {
            Ok(()) => {
                if let Err(e) = self.device.start() {
                    error!(session_id = %session_id, error = ?e, "Failed to start capture");
                    self.device.release();
                    self.session_id = None;
                    self.notifier.notify(
                        "Unable to start the microphone. Please try again.",
                        NoteKind::Error,
                    );
                    self.set_state(SessionState::Idle);
                    return;
                }

                self.timer.start(Instant::now());
                self.set_state(SessionState::Recording);
                info!(session_id = %session_id, "Recording started");
            }
            Err(e) => {
                warn!(session_id = %session_id, error = ?e, "Microphone acquisition denied");
                self.device.release();
                self.session_id = None;
                self.notifier.notify(
                    "Unable to access the microphone. Check your permissions and try again.",
                    NoteKind::Error,
                );
                self.set_state(SessionState::Idle);
            }
        }
    }

    /// Pause pressed: toggles `Recording` and `Paused`, preserving the
    /// accumulated clock exactly across any number of cycles. Dropped in
    /// every other state.
    #[instrument(skip(self))]
    pub(crate) fn on_pause_pressed(&mut self) {
        match self.state {
            SessionState::Recording => {
                self.timer.pause(Instant::now());
                self.device.pause();
                self.set_state(SessionState::Paused);
                info!("Recording paused");
            }
            SessionState::Paused => {
                self.device.resume();
                // Fresh start epoch; elapsed-so-far is preserved in the
                // accumulated total.
                self.timer.resume(Instant::now());
                self.set_state(SessionState::Recording);
                info!("Recording resumed");
            }
            _ => {
                debug!(state = ?self.state, "Pause press ignored");
            }
        }
    }

    /// Stop pressed: valid from `Recording` or `Paused`; an idempotent
    /// no-op everywhere else. Whether finalization succeeds or fails, the
    /// device is released, the clock is zeroed, and state returns to `Idle`.
    #[instrument(skip(self))]
    pub(crate) async fn on_stop_pressed(&mut self) {
        if !matches!(self.state, SessionState::Recording | SessionState::Paused) {
            debug!(state = ?self.state, "Stop press ignored");
            return;
        }

        let session_id = self.session_id.take();
        let now = Instant::now();
        self.timer.pause(now);
        let final_clock = format_clock(self.timer.elapsed(now));
        self.set_state(SessionState::Finalizing);

        match self.device.stop().await {
            Ok(take) => match self.store.save(&take) {
                Ok(path) => {
                    info!(
                        session_id = ?session_id,
                        recorded = %final_clock,
                        path = ?path,
                        "Take saved"
                    );
                    self.notifier.notify(
                        &format!("Recording saved to {}", path.display()),
                        NoteKind::Success,
                    );
                }
                Err(e) => {
                    error!(session_id = ?session_id, error = ?e, "Failed to save take");
                    self.notifier
                        .notify(&format!("Failed to save recording: {}", e), NoteKind::Error);
                }
            },
            Err(e) => {
                error!(session_id = ?session_id, error = ?e, "Finalization failed");
                self.notifier.notify(
                    &format!("Recording could not be finalized: {}", e),
                    NoteKind::Error,
                );
            }
        }

        self.device.release();
        self.timer.reset();
        self.publish_clock(Instant::now());
        self.set_state(SessionState::Idle);
    }

    /// Timer tick: republishes the running clock while `Recording`; has no
    /// effect in any other state.
    pub(crate) fn tick(&mut self) {
        if self.state != SessionState::Recording {
            return;
        }
        self.publish_clock(Instant::now());
    }

    fn set_state(&mut self, next: SessionState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "Session transition");
        }
        self.state = next;
        self.controls_tx.send_replace(ControlPanel::for_state(next));
    }

    fn publish_clock(&self, now: Instant) {
        self.clock_tx
            .send_replace(format_clock(self.timer.elapsed(now)));
    }
}
