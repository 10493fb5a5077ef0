//! Configuration file support for Pulseboard.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/pulseboard/config.toml`.
//! Every knob has a default so host applications can ship without a file
//! and override single keys.

use crate::types::{HeightUnit, TemperatureUnit, WeightUnit};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub vitals: VitalsConfig,
}

/// Data table tuning
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableConfig {
    /// Fixed row height in pixels used by the virtualization math
    #[serde(default = "default_row_height")]
    pub row_height: f64,

    /// Rows rendered above the first visible row
    #[serde(default = "default_overscan_before")]
    pub overscan_before: usize,

    /// Total buffer rows added to the visible count
    #[serde(default = "default_overscan_total")]
    pub overscan_total: usize,

    /// Row count above which virtualization activates
    #[serde(default = "default_virtualization_threshold")]
    pub virtualization_threshold: usize,

    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_height: default_row_height(),
            overscan_before: default_overscan_before(),
            overscan_total: default_overscan_total(),
            virtualization_threshold: default_virtualization_threshold(),
            default_page_size: default_page_size(),
        }
    }
}

/// Medication lookup tuning
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiescence delay before a lookup is dispatched
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Queries shorter than this never dispatch
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
        }
    }
}

/// Default display units for the vitals form
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VitalsConfig {
    #[serde(default = "default_temperature_unit")]
    pub temperature_unit: TemperatureUnit,

    #[serde(default = "default_weight_unit")]
    pub weight_unit: WeightUnit,

    #[serde(default = "default_height_unit")]
    pub height_unit: HeightUnit,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            temperature_unit: default_temperature_unit(),
            weight_unit: default_weight_unit(),
            height_unit: default_height_unit(),
        }
    }
}

// Default value functions
fn default_row_height() -> f64 {
    48.0
}

fn default_overscan_before() -> usize {
    5
}

fn default_overscan_total() -> usize {
    10
}

fn default_virtualization_threshold() -> usize {
    100
}

fn default_page_size() -> usize {
    10
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_min_query_len() -> usize {
    2
}

fn default_temperature_unit() -> TemperatureUnit {
    TemperatureUnit::Fahrenheit
}

fn default_weight_unit() -> WeightUnit {
    WeightUnit::Lb
}

fn default_height_unit() -> HeightUnit {
    HeightUnit::In
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("pulseboard").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
