use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::filter;

use signup_ui::theme::Mode;

pub const DEFAULT_FILE_NAME: &str = "gui.toml";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_TOAST_TIMEOUT: Duration = Duration::from_secs(5);
/// Env variable overriding the configured api url.
pub const API_URL_ENV: &str = "SIGNUP_API_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    #[default]
    Light,
    Dark,
}

impl From<ThemeSetting> for Mode {
    fn from(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Light => Mode::Light,
            ThemeSetting::Dark => Mode::Dark,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Base url of the backend serving the registration endpoint.
    pub api_url: Option<String>,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use debug log level if true.
    pub debug: Option<bool>,
    /// How long a notification stays on screen.
    pub toast_timeout_secs: Option<u64>,
    #[serde(default)]
    pub theme: ThemeSetting,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
        })?;
        let config = toml::from_str::<Config>(&content)
            .map_err(|e| ConfigError::ReadingFile(format!("Parsing configuration file: {}", e)))?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing gui configuration file");
        Ok(())
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    /// Api url from the environment, then from the file, then the default one.
    pub fn api_url(&self) -> String {
        self.resolve_api_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_url(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|url| !url.is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn toast_timeout(&self) -> Duration {
        self.toast_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOAST_TIMEOUT)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Config field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
    #[error("Config file not found")]
    NotFound,
    #[error("Error while reading file: {0}")]
    ReadingFile(String),
    #[error("Error while writing file: {0}")]
    WritingFile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        assert_eq!(Config::from_file(&path), Err(ConfigError::NotFound));

        let config = Config::default();
        assert_eq!(config.toast_timeout(), DEFAULT_TOAST_TIMEOUT);
        assert_eq!(config.theme, ThemeSetting::Light);
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::INFO);
    }

    #[test]
    fn parse_full_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        std::fs::write(
            &path,
            r#"
api_url = "https://api.acme.com"
log_level = "trace"
toast_timeout_secs = 8
theme = "dark"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://api.acme.com"));
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::TRACE);
        assert_eq!(config.toast_timeout(), Duration::from_secs(8));
        assert_eq!(Mode::from(config.theme), Mode::Dark);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "log_level = \"loud\"\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "theme = [").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::ReadingFile(_))
        ));
    }

    #[test]
    fn debug_flag_implies_debug_level() {
        let config = Config {
            debug: Some(true),
            ..Default::default()
        };
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
    }

    #[test]
    fn api_url_resolution_order() {
        let mut config = Config::default();
        assert_eq!(config.resolve_api_url(None), DEFAULT_API_URL);

        config.api_url = Some("https://api.acme.com".to_string());
        assert_eq!(config.resolve_api_url(None), "https://api.acme.com");
        assert_eq!(
            config.resolve_api_url(Some("http://127.0.0.1:8080".to_string())),
            "http://127.0.0.1:8080"
        );
        assert_eq!(
            config.resolve_api_url(Some(String::new())),
            "https://api.acme.com"
        );
    }

    #[test]
    fn write_then_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        let config = Config {
            api_url: Some("https://api.acme.com".to_string()),
            theme: ThemeSetting::Dark,
            ..Default::default()
        };
        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }
}
