use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RequestId = u64;

/// JSON body sent to the playlist service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub info: &'a str,
}

/// JSON body returned by the playlist service on success.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct GenerateResponse {
    pub playlist_url: String,
    #[serde(default)]
    pub playlist_name: Option<String>,
}

/// Error body the service sends alongside 4xx/5xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlaylist {
    pub url: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    GenerationCompleted {
        request_id: RequestId,
        result: Result<GeneratedPlaylist, GenerateError>,
    },
    IdleDelayElapsed {
        request_id: RequestId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct GenerateError {
    pub kind: FailureKind,
    pub message: String,
}

impl GenerateError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Why a request failed. Only used for diagnostics; callers treat all kinds alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid service url")]
    InvalidEndpoint,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error")]
    Network,
    #[error("malformed response")]
    MalformedResponse,
}
