use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tunely_engine::{ClientSettings, EngineSettings, DEFAULT_SETTLE_DELAY};

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "tunely.ron";

/// User-editable settings, read from `tunely.ron`. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service_url: String,
    pub settle_delay_ms: u64,
    pub request_timeout_ms: Option<u64>,
    pub connect_timeout_ms: Option<u64>,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            service_url: client.service_url,
            settle_delay_ms: DEFAULT_SETTLE_DELAY.as_millis() as u64,
            request_timeout_ms: None,
            connect_timeout_ms: None,
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            client: ClientSettings {
                service_url: self.service_url.clone(),
                request_timeout: self.request_timeout_ms.map(Duration::from_millis),
                connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            },
            settle_delay: Duration::from_millis(self.settle_delay_ms),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Loads the config file. A missing file is not an error and yields defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join(CONFIG_FILENAME)).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.service_url, "http://localhost:5001");
        assert_eq!(config.settle_delay_ms, 1200);
        assert_eq!(config.log_destination, LogDestination::File);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"(
                service_url: "https://tunely.example.com",
                settle_delay_ms: 300,
            )"#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.service_url, "https://tunely.example.com");
        assert_eq!(config.settle_delay_ms, 300);
        assert_eq!(config.request_timeout_ms, None);
        assert_eq!(config.log_destination, LogDestination::File);
    }

    #[test]
    fn full_file_maps_to_engine_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"(
                service_url: "http://127.0.0.1:9000",
                settle_delay_ms: 0,
                request_timeout_ms: Some(5000),
                connect_timeout_ms: Some(750),
                log_destination: Both,
            )"#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.log_destination, LogDestination::Both);

        let settings = config.engine_settings();
        assert_eq!(settings.client.service_url, "http://127.0.0.1:9000");
        assert_eq!(settings.client.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(settings.client.connect_timeout, Some(Duration::from_millis(750)));
        assert_eq!(settings.settle_delay, Duration::ZERO);
    }

    #[test]
    fn default_engine_settings_have_no_timeout() {
        let settings = AppConfig::default().engine_settings();
        assert_eq!(settings.client.request_timeout, None);
        assert_eq!(settings.settle_delay, DEFAULT_SETTLE_DELAY);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "(service_url: 42)");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
    }
}
