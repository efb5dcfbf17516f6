//! Application configuration: a RON file plus API credentials from the environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jobboard_core::{Country, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_WINDOW};
use jobboard_engine::{Credentials, ProviderSettings, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use url::Url;

pub const CONFIG_FILENAME: &str = "jobboard.ron";
pub const CONFIG_PATH_ENV: &str = "JOBBOARD_CONFIG";
pub const APP_ID_ENV: &str = "ADZUNA_APP_ID";
pub const APP_KEY_ENV: &str = "ADZUNA_APP_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid api_base_url {0:?}")]
    BaseUrl(String),
    #[error(transparent)]
    Country(#[from] jobboard_core::UnknownCountry),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub default_country: String,
    pub page_size: u32,
    pub page_window: u32,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
    pub log_level: String,
    pub log_to_terminal: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            default_country: Country::default().code().to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_window: DEFAULT_PAGE_WINDOW,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            max_response_bytes: 4 * 1024 * 1024,
            log_level: "info".to_string(),
            log_to_terminal: false,
        }
    }
}

impl AppConfig {
    /// Config path from `JOBBOARD_CONFIG`, else `./jobboard.ron`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
    }

    /// A missing file yields the defaults; anything else unreadable is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        ron::from_str(content).map_err(|err| err.to_string())
    }

    pub fn country(&self) -> Result<Country, ConfigError> {
        Ok(self.default_country.parse()?)
    }

    pub fn provider_settings(
        &self,
        credentials: Option<Credentials>,
    ) -> Result<ProviderSettings, ConfigError> {
        let base_url = Url::parse(&self.api_base_url)
            .map_err(|_| ConfigError::BaseUrl(self.api_base_url.clone()))?;
        let settings = ProviderSettings {
            credentials,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_response_bytes,
            ..ProviderSettings::default()
        };
        Ok(settings.with_base_url(base_url))
    }
}

/// Both `ADZUNA_APP_ID` and `ADZUNA_APP_KEY` must be set and non-empty.
pub fn credentials_from_env() -> Option<Credentials> {
    let read = |name: &str| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };
    Some(Credentials::new(read(APP_ID_ENV)?, read(APP_KEY_ENV)?))
}
