//! # Configuration Management
//!
//! Loads `paperboard.toml`: where the weather comes from, which bus stops
//! to watch, network timeout and the output path. Missing or malformed
//! files fall back to the built-in defaults (Boulder, CO).

use chrono_tz::Tz;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_PATH: &str = "paperboard.toml";

/// Application configuration loaded from paperboard.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub location: LocationConfig,
    pub transit: TransitConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Forecast location
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Human-readable name carried in the weather record
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name (e.g. "America/Denver"). Passed to the forecast API
    /// and used for every time shown on the board.
    pub timezone: String,
}

/// RTD stop IDs for the two directions shown on the board
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransitConfig {
    pub north_stop: String,
    pub south_stop: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Where the rendered BMP is written
    pub path: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig { timeout_secs: 10 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: "display.bmp".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            location: LocationConfig {
                city: "Boulder, CO".to_string(),
                latitude: 40.02418864518805,
                longitude: -105.28462211989343,
                timezone: "America/Denver".to_string(),
            },
            transit: TransitConfig {
                north_stop: "12551".to_string(),
                south_stop: "19193".to_string(),
            },
            network: NetworkConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl LocationConfig {
    /// The configured zone, or UTC if the name is not a known IANA zone.
    pub fn zone(&self) -> Tz {
        self.timezone.parse().unwrap_or_else(|e| {
            warn!("Unknown timezone {:?} ({}), showing times in UTC", self.timezone, e);
            Tz::UTC
        })
    }
}

impl NetworkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from paperboard.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(DEFAULT_PATH)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!("Loaded configuration for {}", config.location.city);
                    config
                }
                Err(e) => {
                    warn!("Invalid config file {}: {}", path.display(), e);
                    warn!("Using default configuration (Boulder, CO)");
                    Self::default()
                }
            },
            Err(_) => {
                info!(
                    "No config file at {}, using default configuration (Boulder, CO)",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Save current configuration as pretty TOML
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }
}
