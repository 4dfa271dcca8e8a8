// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use workout_tracker::config::Config;
use workout_tracker::db::MemoryStorage;
use workout_tracker::models::{Coordinates, CreateWorkout, WorkoutId, WorkoutView};
use workout_tracker::services::MarkerSink;
use workout_tracker::App;

/// Map call observed by the recording sink.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    Placed { handle: u32, id: WorkoutId },
    Released { handle: u32 },
    Centered { coordinates: Coordinates, zoom: u8 },
}

/// Marker sink that records every call and tracks which markers are on the map.
#[derive(Debug, Default)]
pub struct RecordingSink {
    next: u32,
    pub events: Vec<MapEvent>,
    pub on_map: HashSet<u32>,
}

impl MarkerSink for RecordingSink {
    type Handle = u32;

    fn place(&mut self, workout: &WorkoutView) -> u32 {
        self.next += 1;
        self.on_map.insert(self.next);
        self.events.push(MapEvent::Placed {
            handle: self.next,
            id: workout.id.clone(),
        });
        self.next
    }

    fn release(&mut self, handle: u32) {
        assert!(
            self.on_map.remove(&handle),
            "released unknown marker {}",
            handle
        );
        self.events.push(MapEvent::Released { handle });
    }

    fn center_on(&mut self, coordinates: Coordinates, zoom: u8) {
        self.events.push(MapEvent::Centered { coordinates, zoom });
    }
}

#[allow(dead_code)]
pub const HOME: Coordinates = Coordinates {
    lat: 37.3861,
    lng: -122.0839,
};

/// Fixed timestamp, offset by `millis`.
#[allow(dead_code)]
pub fn at(millis: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 14, 12, 0, 0).unwrap() + chrono::Duration::milliseconds(millis)
}

#[allow(dead_code)]
pub fn run_request(distance: f64) -> CreateWorkout {
    CreateWorkout::running(HOME, distance, distance * 5.0, 175.0)
}

#[allow(dead_code)]
pub fn ride_request(distance: f64) -> CreateWorkout {
    CreateWorkout::cycling(HOME, distance, distance * 3.0, 120.0)
}

/// Create an app over a shared in-memory storage with the default config.
#[allow(dead_code)]
pub fn test_app(storage: &MemoryStorage) -> App<RecordingSink> {
    test_app_with_config(storage, Config::default())
}

#[allow(dead_code)]
pub fn test_app_with_config(storage: &MemoryStorage, config: Config) -> App<RecordingSink> {
    App::new(config, Arc::new(storage.clone()), RecordingSink::default(), HOME)
}

/// Ids of the app's workouts in display order.
#[allow(dead_code)]
pub fn ids<S: MarkerSink>(app: &App<S>) -> Vec<String> {
    app.workouts()
        .into_iter()
        .map(|w| w.id.as_str().to_string())
        .collect()
}
