//! Global hotkey frontend for the three session controls.
//!
//! Registers CTRL+SHIFT+R (record), CTRL+SHIFT+S (stop) and CTRL+SHIFT+P
//! (pause/resume) and forwards presses to the session loop over an async
//! channel. The handler does not own session state; a press that arrives
//! while the matching control is disabled is dropped by the controller.

use crate::{AppError, AppResult, SessionCommand};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey, Modifiers},
};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// Registered hotkey ids for the three controls.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HotkeyBindings {
    record: u32,
    stop: u32,
    pause: u32,
}

/// Forwards global hotkey presses as [`SessionCommand`]s.
pub(crate) struct HotkeyHandler {
    bindings: HotkeyBindings,
    command_tx: mpsc::Sender<SessionCommand>,
}

impl HotkeyHandler {
    /// Register the three control hotkeys.
    ///
    /// Must be called on a thread with a message pump (e.g. the main thread
    /// running a `tao` event loop) so that `WM_HOTKEY` messages are
    /// dispatched on Windows. The returned [`GlobalHotKeyManager`] must be
    /// kept alive on that thread for the hotkeys to remain registered.
    #[track_caller]
    #[instrument]
    pub(crate) fn register_hotkeys() -> AppResult<(GlobalHotKeyManager, HotkeyBindings)> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let modifiers = Modifiers::CONTROL | Modifiers::SHIFT;
        let record = HotKey::new(Some(modifiers), Code::KeyR);
        let stop = HotKey::new(Some(modifiers), Code::KeyS);
        let pause = HotKey::new(Some(modifiers), Code::KeyP);

        for (hotkey, name) in [(record, "record"), (stop, "stop"), (pause, "pause")] {
            manager
                .register(hotkey)
                .map_err(|e| AppError::HotkeyRegistrationFailed {
                    reason: format!("Failed to register {} hotkey: {}", name, e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        info!(
            record = "CTRL+SHIFT+R",
            stop = "CTRL+SHIFT+S",
            pause = "CTRL+SHIFT+P",
            "Global hotkeys registered"
        );

        Ok((
            manager,
            HotkeyBindings {
                record: record.id(),
                stop: stop.id(),
                pause: pause.id(),
            },
        ))
    }

    /// Create a handler for previously registered hotkeys.
    ///
    /// The bindings should come from [`register_hotkeys`](Self::register_hotkeys).
    /// This struct is `Send` and can live on any thread; it only listens on
    /// the global [`GlobalHotKeyEvent`] channel.
    pub(crate) fn new(bindings: HotkeyBindings, command_tx: mpsc::Sender<SessionCommand>) -> Self {
        Self {
            bindings,
            command_tx,
        }
    }

    /// Run the hotkey forwarding loop until a shutdown signal is received.
    #[instrument(skip(self))]
    pub(crate) async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let receiver = GlobalHotKeyEvent::receiver().clone();
        let (event_tx, mut event_rx) = mpsc::channel(32);

        // Single persistent blocking task that forwards hotkey events.
        // GlobalHotKeyEvent::receiver() returns a crossbeam_channel::Receiver
        // which has blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when event_rx is dropped (loop breaks), the next
        // event_tx.blocking_send() fails, breaking the blocking loop.
        // The JoinHandle is awaited with a timeout after the main loop exits.
        let handle = tokio::task::spawn_blocking(move || {
            while let Ok(event) = receiver.recv() {
                if event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Hotkey handler shutting down");
                    break;
                }
                Some(event) = event_rx.recv() => {
                    // Key releases also arrive on this channel; only presses
                    // drive the session.
                    if event.state != HotKeyState::Pressed {
                        continue;
                    }
                    if let Some(cmd) = self.map_event(event.id) {
                        self.command_tx.send(cmd).await.map_err(|e| {
                            AppError::ChannelSendFailed {
                                message: format!("Failed to send {:?}: {}", cmd, e),
                                location: ErrorLocation::from(Location::caller()),
                            }
                        })?;
                    }
                }
            }
        }

        // Drop event_rx to unblock the blocking task's next blocking_send().
        drop(event_rx);

        // Best-effort join: the blocking task may be stuck in recv() if no
        // hotkey event arrives after shutdown. Use a timeout to avoid hanging.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Hotkey event forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Hotkey event forwarder task panicked"),
            Err(_) => debug!(
                "Hotkey event forwarder did not stop within timeout, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }

    fn map_event(&self, id: u32) -> Option<SessionCommand> {
        if id == self.bindings.record {
            Some(SessionCommand::RecordPressed)
        } else if id == self.bindings.stop {
            Some(SessionCommand::StopPressed)
        } else if id == self.bindings.pause {
            Some(SessionCommand::PausePressed)
        } else {
            None
        }
    }
}
