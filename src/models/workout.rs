// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model and its persisted representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;
use crate::time_utils::month_day_label;

/// Unique workout identifier, derived from the creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkoutId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WorkoutId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Activity kind. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Lowercase tag used in storage and CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized label used in descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map position as (latitude, longitude). Stored as a `[lat, lng]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and within the WGS84 latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

/// Kind-specific input metric: cadence (steps/min) or elevation gain (m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SecondaryMetric {
    Cadence(f64),
    ElevationGain(f64),
}

impl SecondaryMetric {
    pub fn value(&self) -> f64 {
        match self {
            SecondaryMetric::Cadence(v) | SecondaryMetric::ElevationGain(v) => *v,
        }
    }
}

/// Metric computed once from distance and duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivedMetric {
    /// Minutes per kilometer
    Pace(f64),
    /// Kilometers per hour
    Speed(f64),
}

impl DerivedMetric {
    pub fn value(&self) -> f64 {
        match self {
            DerivedMetric::Pace(v) | DerivedMetric::Speed(v) => *v,
        }
    }
}

/// Kind-specific payload. The variant is the single source of truth for
/// which secondary metric and which formula apply.
#[derive(Debug, Clone, PartialEq)]
enum Activity {
    Running { cadence: f64, pace: f64 },
    Cycling { elevation_gain: f64, speed: f64 },
}

/// One logged workout.
///
/// Immutable after construction except for the interaction counter.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    id: WorkoutId,
    coordinates: Coordinates,
    distance: f64,
    duration: f64,
    created_at: DateTime<Utc>,
    description: String,
    interaction_count: u32,
    activity: Activity,
}

impl WorkoutRecord {
    /// Build a running workout. `distance` in km, `duration` in minutes.
    pub fn running(
        id: WorkoutId,
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        cadence: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let activity = Activity::Running {
            cadence,
            pace: duration / distance,
        };
        Self::build(id, coordinates, distance, duration, created_at, activity)
    }

    /// Build a cycling workout. `distance` in km, `duration` in minutes.
    pub fn cycling(
        id: WorkoutId,
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let activity = Activity::Cycling {
            elevation_gain,
            speed: distance / (duration / 60.0),
        };
        Self::build(id, coordinates, distance, duration, created_at, activity)
    }

    /// Build a workout of the given kind; the secondary metric value is
    /// interpreted as cadence or elevation gain accordingly.
    pub fn new(
        id: WorkoutId,
        kind: WorkoutKind,
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        secondary_metric: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        match kind {
            WorkoutKind::Running => Self::running(
                id,
                coordinates,
                distance,
                duration,
                secondary_metric,
                created_at,
            ),
            WorkoutKind::Cycling => Self::cycling(
                id,
                coordinates,
                distance,
                duration,
                secondary_metric,
                created_at,
            ),
        }
    }

    fn build(
        id: WorkoutId,
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        created_at: DateTime<Utc>,
        activity: Activity,
    ) -> Self {
        let kind = match activity {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        };
        Self {
            id,
            coordinates,
            distance,
            duration,
            description: describe(kind, created_at),
            created_at,
            interaction_count: 0,
            activity,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.activity {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Distance in kilometers.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Duration in minutes.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn interaction_count(&self) -> u32 {
        self.interaction_count
    }

    pub fn secondary_metric(&self) -> SecondaryMetric {
        match self.activity {
            Activity::Running { cadence, .. } => SecondaryMetric::Cadence(cadence),
            Activity::Cycling { elevation_gain, .. } => {
                SecondaryMetric::ElevationGain(elevation_gain)
            }
        }
    }

    pub fn derived_metric(&self) -> DerivedMetric {
        match self.activity {
            Activity::Running { pace, .. } => DerivedMetric::Pace(pace),
            Activity::Cycling { speed, .. } => DerivedMetric::Speed(speed),
        }
    }

    pub(crate) fn record_interaction(&mut self) {
        self.interaction_count = self.interaction_count.saturating_add(1);
    }
}

fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), month_day_label(created_at))
}

/// Check the numeric invariants shared by creation requests and restored
/// records. Returns a human-readable reason on failure.
pub(crate) fn check_measurements(
    distance: f64,
    duration: f64,
    secondary_metric: f64,
) -> std::result::Result<(), String> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(format!("distance must be a positive number, got {}", distance));
    }
    if !duration.is_finite() || duration <= 0.0 {
        return Err(format!("duration must be a positive number, got {}", duration));
    }
    if !secondary_metric.is_finite() || secondary_metric < 0.0 {
        return Err(format!(
            "secondary metric must be a non-negative number, got {}",
            secondary_metric
        ));
    }
    Ok(())
}

/// Persisted workout record.
///
/// Derived metrics are never stored; they are recomputed on restore. Field
/// aliases accept blobs written by the earlier JavaScript client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWorkout {
    pub id: WorkoutId,
    #[serde(alias = "type")]
    pub kind: WorkoutKind,
    #[serde(alias = "coords")]
    pub coordinates: Coordinates,
    pub distance: f64,
    pub duration: f64,
    #[serde(alias = "date")]
    pub created_at: DateTime<Utc>,
    pub description: String,
    #[serde(alias = "clicks")]
    pub interaction_count: u32,
    /// Running only
    #[serde(default, alias = "cadnece", skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    /// Cycling only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
}

impl From<&WorkoutRecord> for StoredWorkout {
    fn from(record: &WorkoutRecord) -> Self {
        let (cadence, elevation_gain) = match record.secondary_metric() {
            SecondaryMetric::Cadence(v) => (Some(v), None),
            SecondaryMetric::ElevationGain(v) => (None, Some(v)),
        };
        Self {
            id: record.id.clone(),
            kind: record.kind(),
            coordinates: record.coordinates,
            distance: record.distance,
            duration: record.duration,
            created_at: record.created_at,
            description: record.description.clone(),
            interaction_count: record.interaction_count,
            cadence,
            elevation_gain,
        }
    }
}

impl TryFrom<StoredWorkout> for WorkoutRecord {
    type Error = AppError;

    /// Rebuild a full record through the kind's constructor so the derived
    /// metric and description come from the same code as a fresh record.
    fn try_from(stored: StoredWorkout) -> Result<Self, Self::Error> {
        let secondary = match stored.kind {
            WorkoutKind::Running => stored.cadence,
            WorkoutKind::Cycling => stored.elevation_gain,
        }
        .ok_or_else(|| {
            AppError::CorruptData(format!(
                "{} workout {} is missing its {}",
                stored.kind,
                stored.id,
                match stored.kind {
                    WorkoutKind::Running => "cadence",
                    WorkoutKind::Cycling => "elevationGain",
                }
            ))
        })?;

        check_measurements(stored.distance, stored.duration, secondary)
            .map_err(|reason| AppError::CorruptData(format!("workout {}: {}", stored.id, reason)))?;
        if !stored.coordinates.is_valid() {
            return Err(AppError::CorruptData(format!(
                "workout {}: invalid coordinates",
                stored.id
            )));
        }

        let mut record = WorkoutRecord::new(
            stored.id,
            stored.kind,
            stored.coordinates,
            stored.distance,
            stored.duration,
            secondary,
            stored.created_at,
        );
        if record.description != stored.description {
            tracing::debug!(
                workout_id = %record.id,
                stored = %stored.description,
                derived = %record.description,
                "Stored description differs; using derived description"
            );
        }
        record.interaction_count = stored.interaction_count;
        Ok(record)
    }
}
