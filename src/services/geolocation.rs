// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Position resolution that gates application start.
//!
//! The map (and with it the store and marker registry) only comes up once a
//! position is known. When resolution fails, nothing else runs.

use crate::config::Config;
use crate::models::Coordinates;

/// Source of the user's current position.
pub trait PositionSource {
    fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Position taken from configuration (`MAP_CENTER`).
#[derive(Debug, Clone)]
pub struct ConfiguredPosition {
    position: Option<Coordinates>,
}

impl ConfiguredPosition {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.map_center)
    }
}

impl PositionSource for ConfiguredPosition {
    fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        let position = self.position.ok_or(GeolocationError::Unavailable)?;
        if !position.is_valid() {
            return Err(GeolocationError::InvalidPosition(position.lat, position.lng));
        }
        Ok(position)
    }
}

/// Errors from position resolution.
#[derive(Debug, thiserror::Error)]
pub enum GeolocationError {
    #[error("Could not get your position")]
    Unavailable,

    #[error("Position out of range: [{0}, {1}]")]
    InvalidPosition(f64, f64),
}
