use std::time::Duration;

use reqwest::StatusCode;
use tunely_logging::{tunely_debug, tunely_warn};
use url::Url;

use crate::types::{GenerateRequest, GenerateResponse, ServiceErrorBody};
use crate::{FailureKind, GenerateError, GeneratedPlaylist, RequestId};

/// Path of the generation endpoint, relative to the service url.
const GENERATE_PATH: &str = "generate_playlist";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub service_url: String,
    /// Total request timeout. `None` leaves the call unbounded.
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:5001".to_string(),
            request_timeout: None,
            connect_timeout: None,
        }
    }
}

impl ClientSettings {
    /// Resolves `<service_url>/generate_playlist`, keeping any base path.
    pub fn endpoint(&self) -> Result<Url, GenerateError> {
        let mut base = Url::parse(&self.service_url)
            .map_err(|err| GenerateError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(GenerateError::new(
                FailureKind::InvalidEndpoint,
                format!("{} cannot be a base url", self.service_url),
            ));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(GENERATE_PATH)
            .map_err(|err| GenerateError::new(FailureKind::InvalidEndpoint, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait PlaylistClient: Send + Sync {
    async fn generate(
        &self,
        request_id: RequestId,
        query: &str,
    ) -> Result<GeneratedPlaylist, GenerateError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPlaylistClient {
    settings: ClientSettings,
}

impl ReqwestPlaylistClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, GenerateError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| GenerateError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl PlaylistClient for ReqwestPlaylistClient {
    async fn generate(
        &self,
        request_id: RequestId,
        query: &str,
    ) -> Result<GeneratedPlaylist, GenerateError> {
        let endpoint = self.settings.endpoint()?;
        let client = self.build_client()?;

        tunely_debug!(
            "request_id={} POST {} query_len={}",
            request_id,
            endpoint,
            query.len()
        );

        let response = client
            .post(endpoint)
            .json(&GenerateRequest { info: query })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        parse_playlist(&body)
    }
}

fn parse_playlist(body: &[u8]) -> Result<GeneratedPlaylist, GenerateError> {
    let parsed: GenerateResponse = serde_json::from_slice(body)
        .map_err(|err| GenerateError::new(FailureKind::MalformedResponse, err.to_string()))?;

    if parsed.playlist_url.is_empty() {
        return Err(GenerateError::new(
            FailureKind::MalformedResponse,
            "empty playlist_url",
        ));
    }

    Ok(GeneratedPlaylist {
        url: parsed.playlist_url,
        name: parsed.playlist_name.filter(|name| !name.trim().is_empty()),
    })
}

fn status_error(status: StatusCode, body: &[u8]) -> GenerateError {
    let message = match serde_json::from_slice::<ServiceErrorBody>(body) {
        Ok(service) => service.error,
        Err(_) => {
            if !body.is_empty() {
                tunely_warn!("status {} with non-json body ({} bytes)", status, body.len());
            }
            status.to_string()
        }
    };
    GenerateError::new(FailureKind::HttpStatus(status.as_u16()), message)
}

fn map_reqwest_error(err: reqwest::Error) -> GenerateError {
    if err.is_timeout() {
        return GenerateError::new(FailureKind::Timeout, err.to_string());
    }
    GenerateError::new(FailureKind::Network, err.to_string())
}
