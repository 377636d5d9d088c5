use crate::{DesktopNotifier, RecordingSessionController, SessionCommand};

use std::time::Duration;

use mic_take_core::MicCapture;
use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{error, info, instrument};

/// Main application state.
///
/// Runs on the async runtime thread. Dispatches hotkey commands and the
/// once-per-second clock tick into the session controller; the controller
/// itself is single-threaded and never shared.
pub(crate) struct App {
    pub(crate) controller: RecordingSessionController<MicCapture, DesktopNotifier>,
    pub(crate) command_rx: mpsc::Receiver<SessionCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) {
        info!("Mic-Take starting");

        let mut tick = tokio::time::interval(Duration::from_secs(1));
        // A delayed tick should not burst-fire: the clock is recomputed
        // from absolute instants, so skipped ticks lose nothing.
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        SessionCommand::RecordPressed => {
                            self.controller.on_record_pressed().await;
                        }
                        SessionCommand::StopPressed => {
                            self.controller.on_stop_pressed().await;
                        }
                        SessionCommand::PausePressed => {
                            self.controller.on_pause_pressed();
                        }
                        SessionCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                _ = tick.tick() => {
                    self.controller.tick();
                }

                result = tokio::signal::ctrl_c() => {
                    if let Err(e) = result {
                        error!(error = ?e, "Failed to listen for ctrl-c");
                    }
                    info!("Interrupt received, shutting down");
                    break;
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        // End any in-flight session so the microphone is released before exit.
        self.controller.on_stop_pressed().await;

        let _ = self.shutdown_tx.send(true);
        info!("Mic-Take shut down successfully");
    }
}
