use tunely_core::{Effect, Msg, PlaylistLink};
use tunely_engine::{EngineEvent, EngineHandle, EngineSettings, GeneratedPlaylist};
use tunely_logging::{tunely_debug, tunely_info};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: EngineSettings) -> Self {
        tunely_info!(
            "Engine started service_url={} settle_delay={:?}",
            settings.client.service_url,
            settings.settle_delay
        );
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::GeneratePlaylist { request_id, query } => {
                    tunely_info!(
                        "GeneratePlaylist request_id={} query_len={}",
                        request_id,
                        query.len()
                    );
                    self.engine.generate(request_id, query);
                }
                Effect::ScheduleIdle { request_id } => {
                    tunely_debug!("ScheduleIdle request_id={}", request_id);
                    self.engine.schedule_idle(request_id);
                }
            }
        }
    }

    /// Drains every engine event that is ready without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(event_to_msg)
            .collect()
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::GenerationCompleted { request_id, result } => match result {
            Ok(playlist) => Msg::GenerationSucceeded {
                request_id,
                link: map_playlist(playlist),
            },
            // Already logged by the engine with its failure kind.
            Err(_) => Msg::GenerationFailed { request_id },
        },
        EngineEvent::IdleDelayElapsed { request_id } => Msg::IdleDelayElapsed { request_id },
    }
}

fn map_playlist(playlist: GeneratedPlaylist) -> PlaylistLink {
    PlaylistLink {
        url: playlist.url,
        name: playlist.name,
    }
}
