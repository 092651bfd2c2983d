use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "tilegraph.toml";

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct MapConfig {
    #[serde(default = "default_map_path")]
    pub path: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default log filter, `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_render_ascii")]
    pub render_ascii: bool,
}

// Default values
fn default_map_path() -> String { "maps/level.json".to_string() }
fn default_log_level() -> String { "info".to_string() }
fn default_render_ascii() -> bool { true }

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: default_map_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            render_ascii: default_render_ascii(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            logging: LoggingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Where a `Config` came from, kept so it can be reported once logging is up
#[derive(Debug)]
pub enum ConfigSource {
    Loaded(PathBuf),
    Missing(PathBuf),
    Unreadable { path: PathBuf, error: std::io::Error },
    Invalid { path: PathBuf, error: toml::de::Error },
}

impl ConfigSource {
    /// True when defaults were used because the file could not be used
    pub fn is_fallback(&self) -> bool {
        matches!(self, ConfigSource::Unreadable { .. } | ConfigSource::Invalid { .. })
    }

    pub fn log(&self) {
        match self {
            ConfigSource::Loaded(path) => info!("Loaded configuration from {}", path.display()),
            ConfigSource::Missing(path) => {
                info!("No {} found, using default configuration", path.display())
            }
            ConfigSource::Unreadable { path, error } => {
                warn!("Failed to read {}: {}", path.display(), error);
                warn!("Using default configuration");
            }
            ConfigSource::Invalid { path, error } => {
                warn!("Failed to parse {}: {}", path.display(), error);
                warn!("Using default configuration");
            }
        }
    }
}

impl Config {
    /// Load configuration from `tilegraph.toml`, or use defaults if it doesn't exist
    pub fn load() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from `path`, falling back to defaults on any failure
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let (config, source) = Self::read_from(path);
        source.log();
        config
    }

    /// Like `load`, but leaves reporting the outcome to the caller
    pub fn read() -> (Self, ConfigSource) {
        Self::read_from(CONFIG_FILE)
    }

    pub fn read_from<P: AsRef<Path>>(path: P) -> (Self, ConfigSource) {
        let path = path.as_ref().to_path_buf();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => (config, ConfigSource::Loaded(path)),
                Err(error) => (Config::default(), ConfigSource::Invalid { path, error }),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                (Config::default(), ConfigSource::Missing(path))
            }
            Err(error) => (Config::default(), ConfigSource::Unreadable { path, error }),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
