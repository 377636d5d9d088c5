//! Mic-Take: Push-button microphone take recorder with global hotkey control.

mod app;
mod artifact;
mod config;
mod controller;
mod controls;
mod elapsed;
mod error;
mod hotkey_handler;
mod notifier;
mod session_command;
mod session_state;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    artifact::ArtifactStore,
    controller::RecordingSessionController,
    controls::ControlPanel,
    error::{AppError, Result as AppResult},
    hotkey_handler::HotkeyHandler,
    notifier::{DesktopNotifier, NoteKind, Notifier},
    session_command::SessionCommand,
    session_state::SessionState,
};

use crate::config::Config;

use global_hotkey::GlobalHotKeyManager;
use mic_take_core::MicCapture;
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoop},
};
use tokio::sync::{mpsc, watch};
use tracing::{error, info};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("mic_take=debug")
        .init();

    let event_loop = EventLoop::new();

    // Persists across event loop iterations; dropping it unregisters the hotkeys.
    let mut hotkey_manager: Option<GlobalHotKeyManager> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        if let Event::NewEvents(tao::event::StartCause::Init) = event {
            let config = match Config::load() {
                Ok(c) => c,
                Err(e) => {
                    error!("Failed to load config: {:?}", e);
                    std::process::exit(1);
                }
            };

            let take_directory = match config.take_directory() {
                Ok(dir) => dir,
                Err(e) => {
                    error!("Failed to resolve take directory: {:?}", e);
                    std::process::exit(1);
                }
            };

            // Register hotkeys on the main thread; tao's event loop pumps
            // the Windows messages needed for WM_HOTKEY delivery.
            // hotkey_manager is stored in the closure's captured state so it
            // lives for the entire app lifetime.
            let (manager, bindings) = match HotkeyHandler::register_hotkeys() {
                Ok(pair) => pair,
                Err(e) => {
                    error!("Failed to register hotkeys: {:?}", e);
                    std::process::exit(1);
                }
            };
            hotkey_manager = Some(manager);

            let (command_tx, command_rx) = mpsc::channel(32);
            let (shutdown_tx, shutdown_rx) = watch::channel(false);

            // Spawn tokio runtime on separate thread.
            // The hotkey manager stays on the main thread with the event loop.
            std::thread::spawn(move || {
                let rt = match tokio::runtime::Runtime::new() {
                    Ok(rt) => rt,
                    Err(e) => {
                        error!("Failed to create tokio runtime: {:?}", e);
                        std::process::exit(1);
                    }
                };

                rt.block_on(async {
                    let hotkey_handler = HotkeyHandler::new(bindings, command_tx);

                    let notifier = DesktopNotifier::new(config.behavior.desktop_notifications);
                    let store = ArtifactStore::new(take_directory);
                    let (controller, controls_rx, clock_rx) =
                        RecordingSessionController::new(MicCapture::new(), notifier, store);

                    tokio::spawn(run_status_sink(controls_rx, clock_rx));

                    let app = App {
                        controller,
                        command_rx,
                        shutdown_tx,
                    };

                    tokio::join!(
                        async {
                            if let Err(e) = hotkey_handler.run(shutdown_rx).await {
                                error!(error = ?e, "Hotkey handler error");
                            }
                        },
                        app.run(),
                    );
                });

                // The tao loop on the main thread has no exit event of its
                // own; end the process once the session loop has drained.
                std::process::exit(0);
            });
        }

        // Keep hotkey_manager alive in the closure for the app's lifetime.
        let _ = &hotkey_manager;
    });
}

/// In-process affordance sink: applies controller snapshots to the only
/// "UI" this binary has, the log stream.
async fn run_status_sink(
    mut controls_rx: watch::Receiver<ControlPanel>,
    mut clock_rx: watch::Receiver<String>,
) {
    loop {
        tokio::select! {
            changed = controls_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let controls = controls_rx.borrow_and_update().clone();
                info!(
                    record_enabled = controls.record_enabled,
                    stop_enabled = controls.stop_enabled,
                    pause_enabled = controls.pause_enabled,
                    record_label = controls.record_label,
                    pause_label = controls.pause_label,
                    "Controls updated"
                );
            }
            changed = clock_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let clock = clock_rx.borrow_and_update().clone();
                info!(clock = %clock, "Recording");
            }
        }
    }
}
