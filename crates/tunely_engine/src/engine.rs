use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tunely_logging::{tunely_error, tunely_info, tunely_warn};

use crate::client::{ClientSettings, PlaylistClient, ReqwestPlaylistClient};
use crate::{EngineEvent, FailureKind, GenerateError, RequestId};

/// Display delay between a request settling and the UI returning to idle.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub client: ClientSettings,
    pub settle_delay: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            client: ClientSettings::default(),
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

enum EngineCommand {
    Generate { request_id: RequestId, query: String },
    ScheduleIdle { request_id: RequestId },
}

/// Runs requests and delays on a background tokio runtime.
///
/// Each command becomes its own task, so overlapping requests complete in
/// whatever order the network returns them. Nothing can be cancelled.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Self {
        let client = Arc::new(ReqwestPlaylistClient::new(settings.client.clone()));
        Self::with_client(client, settings.settle_delay)
    }

    pub fn with_client(client: Arc<dyn PlaylistClient>, settle_delay: Duration) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    tunely_error!("Failed to start engine runtime: {}", err);
                    run_without_runtime(cmd_rx, event_tx, settle_delay, err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, settle_delay, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn generate(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Generate {
            request_id,
            query: query.into(),
        });
    }

    pub fn schedule_idle(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::ScheduleIdle { request_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn PlaylistClient,
    command: EngineCommand,
    settle_delay: Duration,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    // Send errors mean the front end is gone; the result has nowhere to go.
    match command {
        EngineCommand::Generate { request_id, query } => {
            let result = client.generate(request_id, &query).await;
            match &result {
                Ok(playlist) => {
                    tunely_info!("request_id={} playlist ready {}", request_id, playlist.url);
                }
                Err(err) => {
                    tunely_warn!(
                        "request_id={} playlist generation failed: {}",
                        request_id,
                        err
                    );
                }
            }
            let _ = event_tx.send(EngineEvent::GenerationCompleted { request_id, result });
        }
        EngineCommand::ScheduleIdle { request_id } => {
            tokio::time::sleep(settle_delay).await;
            let _ = event_tx.send(EngineEvent::IdleDelayElapsed { request_id });
        }
    }
}

/// Keeps the command contract alive when no runtime could be built: every
/// request fails, and idle delays still elapse.
fn run_without_runtime(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    settle_delay: Duration,
    reason: String,
) {
    while let Ok(command) = cmd_rx.recv() {
        let event = match command {
            EngineCommand::Generate { request_id, .. } => EngineEvent::GenerationCompleted {
                request_id,
                result: Err(GenerateError::new(FailureKind::Network, reason.clone())),
            },
            EngineCommand::ScheduleIdle { request_id } => {
                thread::sleep(settle_delay);
                EngineEvent::IdleDelayElapsed { request_id }
            }
        };
        if event_tx.send(event).is_err() {
            return;
        }
    }
}
