// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout creation request submitted by the Presenter.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::workout::{check_measurements, Coordinates, WorkoutKind};

/// A request to log a new workout at a map position.
///
/// Numbers arrive already parsed; `validate` enforces the positivity rules
/// before any record is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkout {
    pub kind: WorkoutKind,
    /// Kilometers
    pub distance: f64,
    /// Minutes
    pub duration: f64,
    /// Cadence for running, elevation gain for cycling
    pub secondary_metric: f64,
    pub coordinates: Coordinates,
}

impl CreateWorkout {
    pub fn running(coordinates: Coordinates, distance: f64, duration: f64, cadence: f64) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance,
            duration,
            secondary_metric: cadence,
            coordinates,
        }
    }

    pub fn cycling(
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance,
            duration,
            secondary_metric: elevation_gain,
            coordinates,
        }
    }

    /// Reject non-finite or out-of-range inputs with `AppError::Validation`.
    pub fn validate(&self) -> Result<()> {
        check_measurements(self.distance, self.duration, self.secondary_metric)
            .map_err(AppError::Validation)?;
        if !self.coordinates.is_valid() {
            return Err(AppError::Validation(format!(
                "coordinates out of range: [{}, {}]",
                self.coordinates.lat, self.coordinates.lng
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let req = CreateWorkout::running(Coordinates::new(51.5, -0.1), 5.0, 25.0, 180.0);
        assert!(req.validate().is_ok());

        // Zero elevation gain is allowed
        let req = CreateWorkout::cycling(Coordinates::new(51.5, -0.1), 20.0, 60.0, 0.0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_duration() {
        let req = CreateWorkout::running(Coordinates::new(51.5, -0.1), 5.0, 0.0, 180.0);
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_rejects_nan_distance() {
        let req = CreateWorkout::cycling(Coordinates::new(51.5, -0.1), f64::NAN, 60.0, 10.0);
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_rejects_negative_cadence() {
        let req = CreateWorkout::running(Coordinates::new(51.5, -0.1), 5.0, 25.0, -1.0);
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let req = CreateWorkout::running(Coordinates::new(91.0, 0.0), 5.0, 25.0, 160.0);
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_deserializes_camel_case() {
        let json = r#"{"kind":"cycling","distance":12.5,"duration":40,"secondaryMetric":85,"coordinates":[48.1,11.5]}"#;
        let req: CreateWorkout = serde_json::from_str(json).unwrap();
        assert_eq!(req.kind, WorkoutKind::Cycling);
        assert_eq!(req.secondary_metric, 85.0);
        assert_eq!(req.coordinates, Coordinates::new(48.1, 11.5));
    }
}
