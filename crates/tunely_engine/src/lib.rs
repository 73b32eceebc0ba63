//! Tunely engine: talks to the playlist service and runs the settle delay.
mod client;
mod engine;
mod types;

pub use client::{ClientSettings, PlaylistClient, ReqwestPlaylistClient};
pub use engine::{EngineHandle, EngineSettings, DEFAULT_SETTLE_DELAY};
pub use types::{EngineEvent, FailureKind, GenerateError, GeneratedPlaylist, RequestId};
