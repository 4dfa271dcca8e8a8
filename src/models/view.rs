// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View data handed to the Presenter for list items and marker popups.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::workout::{
    Coordinates, DerivedMetric, SecondaryMetric, WorkoutId, WorkoutKind, WorkoutRecord,
};

/// A labeled metric value with its display unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LabeledMetric {
    pub label: &'static str,
    pub unit: &'static str,
    pub value: f64,
}

impl LabeledMetric {
    /// Value rounded to one decimal place, as shown in the workout list.
    pub fn formatted(&self) -> String {
        format!("{:.1}", self.value)
    }
}

impl From<DerivedMetric> for LabeledMetric {
    fn from(metric: DerivedMetric) -> Self {
        match metric {
            DerivedMetric::Pace(value) => Self {
                label: "pace",
                unit: "min/km",
                value,
            },
            DerivedMetric::Speed(value) => Self {
                label: "speed",
                unit: "km/h",
                value,
            },
        }
    }
}

impl From<SecondaryMetric> for LabeledMetric {
    fn from(metric: SecondaryMetric) -> Self {
        match metric {
            SecondaryMetric::Cadence(value) => Self {
                label: "cadence",
                unit: "spm",
                value,
            },
            SecondaryMetric::ElevationGain(value) => Self {
                label: "elevationGain",
                unit: "m",
                value,
            },
        }
    }
}

/// Everything the Presenter may read about one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutView {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub id: WorkoutId,
    #[cfg_attr(feature = "binding-generation", ts(type = "\"running\" | \"cycling\""))]
    pub kind: WorkoutKind,
    pub description: String,
    pub distance: f64,
    pub duration: f64,
    pub derived_metric: LabeledMetric,
    pub secondary_metric: LabeledMetric,
    #[cfg_attr(feature = "binding-generation", ts(type = "[number, number]"))]
    pub coordinates: Coordinates,
    pub icon: &'static str,
    /// Popup text: icon followed by the description
    pub popup_content: String,
    /// CSS class for the marker popup, e.g. `running-popup`
    pub popup_class: String,
}

impl From<&WorkoutRecord> for WorkoutView {
    fn from(record: &WorkoutRecord) -> Self {
        let kind = record.kind();
        Self {
            id: record.id().clone(),
            kind,
            description: record.description().to_string(),
            distance: record.distance(),
            duration: record.duration(),
            derived_metric: record.derived_metric().into(),
            secondary_metric: record.secondary_metric().into(),
            coordinates: record.coordinates(),
            icon: kind.icon(),
            popup_content: format!("{} {}", kind.icon(), record.description()),
            popup_class: format!("{}-popup", kind.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_running_view_labels() {
        let run = WorkoutRecord::running(
            "10".into(),
            Coordinates::new(40.0, -3.7),
            4.0,
            22.0,
            172.0,
            Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap(),
        );
        let view = WorkoutView::from(&run);

        assert_eq!(view.derived_metric.label, "pace");
        assert_eq!(view.derived_metric.unit, "min/km");
        assert_eq!(view.derived_metric.formatted(), "5.5");
        assert_eq!(view.secondary_metric.label, "cadence");
        assert_eq!(view.popup_content, "🏃‍♂️ Running on June 3");
        assert_eq!(view.popup_class, "running-popup");
    }

    #[test]
    fn test_cycling_view_labels() {
        let ride = WorkoutRecord::cycling(
            "11".into(),
            Coordinates::new(40.0, -3.7),
            27.0,
            60.0,
            320.0,
            Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap(),
        );
        let view = WorkoutView::from(&ride);

        assert_eq!(view.derived_metric.label, "speed");
        assert_eq!(view.derived_metric.unit, "km/h");
        assert_eq!(view.derived_metric.formatted(), "27.0");
        assert_eq!(view.secondary_metric.label, "elevationGain");
        assert_eq!(view.secondary_metric.value, 320.0);
        assert_eq!(view.popup_class, "cycling-popup");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let ride = WorkoutRecord::cycling(
            "12".into(),
            Coordinates::new(1.0, 2.0),
            10.0,
            30.0,
            5.0,
            Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap(),
        );
        let json = serde_json::to_value(WorkoutView::from(&ride)).unwrap();
        assert_eq!(json["kind"], "cycling");
        assert_eq!(json["derivedMetric"]["label"], "speed");
        assert_eq!(json["coordinates"], serde_json::json!([1.0, 2.0]));
    }
}
