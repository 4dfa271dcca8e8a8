//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local use.

use std::env;
use std::path::PathBuf;

use crate::db::keys;
use crate::models::Coordinates;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the file-backed storage
    pub storage_dir: PathBuf,
    /// Storage key for the workout snapshot
    pub storage_key: String,
    /// Persist the sort direction across reloads (off by default)
    pub persist_sort_order: bool,
    /// Zoom level used when centering the map
    pub map_zoom: u8,
    /// Resolved user position, if known
    pub map_center: Option<Coordinates>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".workouts"),
            storage_key: keys::WORKOUTS.to_string(),
            persist_sort_order: false,
            map_zoom: 13,
            map_center: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        Ok(Self {
            storage_dir: env::var("WORKOUT_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            storage_key: env::var("WORKOUT_STORAGE_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.storage_key),
            persist_sort_order: match env::var("PERSIST_SORT_ORDER") {
                Ok(v) => parse_bool("PERSIST_SORT_ORDER", &v)?,
                Err(_) => defaults.persist_sort_order,
            },
            map_zoom: match env::var("MAP_ZOOM") {
                Ok(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "MAP_ZOOM",
                    value: v.clone(),
                })?,
                Err(_) => defaults.map_zoom,
            },
            map_center: match env::var("MAP_CENTER") {
                Ok(v) => Some(parse_coordinates("MAP_CENTER", &v)?),
                Err(_) => None,
            },
        })
    }

    /// Storage key for the persisted sort direction.
    pub fn sort_key(&self) -> String {
        format!("{}{}", self.storage_key, keys::SORT_SUFFIX)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        }),
    }
}

/// Parse `"lat,lng"`.
fn parse_coordinates(var: &'static str, value: &str) -> Result<Coordinates, ConfigError> {
    let invalid = || ConfigError::Invalid {
        var,
        value: value.to_string(),
    };

    let (lat, lng) = value.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
    Ok(Coordinates::new(lat, lng))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
