//! Shared configuration for the facilities dashboard tools.
//!
//! A TOML file plus `FACILITIES_*` environment overrides, and resolution of
//! the configured buildings document source into a `facilities_api`
//! data source. The CLI layers its global flags on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use facilities_api::{
    BuildingsPayload, DEFAULT_SOURCE_URL, DataSource, FileSource, HttpSource, TransportConfig,
};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("failed to build HTTP client: {0}")]
    Transport(#[from] facilities_api::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Where the buildings document comes from.
    #[serde(default)]
    pub source: SourceConfig,

    /// Presentation defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Buildings document URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Local JSON document. Takes precedence over `url` when set.
    pub file: Option<PathBuf>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            file: None,
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Quiet period for interactive device search, in milliseconds.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_SOURCE_URL.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_search_debounce_ms() -> u64 {
    300
}

impl Defaults {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

// ── Source resolution ───────────────────────────────────────────────

/// The configured buildings document source.
pub enum ConfiguredSource {
    Http(HttpSource),
    File(FileSource),
}

impl DataSource for ConfiguredSource {
    async fn fetch(&self) -> Result<BuildingsPayload, facilities_api::Error> {
        match self {
            Self::Http(source) => source.fetch().await,
            Self::File(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.describe(),
            Self::File(source) => source.describe(),
        }
    }
}

impl SourceConfig {
    /// Validate and turn into a fetchable source. A `file` wins over `url`.
    pub fn resolve(&self) -> Result<ConfiguredSource, ConfigError> {
        if let Some(ref path) = self.file {
            return Ok(ConfiguredSource::File(FileSource::new(path.clone())));
        }

        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "source.timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        let url: url::Url = self.url.parse().map_err(|_| ConfigError::Validation {
            field: "source.url".into(),
            reason: format!("invalid URL: {}", self.url),
        })?;

        let transport = TransportConfig::default().with_timeout(Duration::from_secs(self.timeout));
        Ok(ConfiguredSource::Http(HttpSource::new(url, &transport)?))
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "facilities", "facilities").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("facilities");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file + environment. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FACILITIES_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`, creating parent directories.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
