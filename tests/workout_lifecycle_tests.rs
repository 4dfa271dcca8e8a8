// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Create / delete / clear / interact flows through the application object.
//!
//! These verify the store and the marker registry stay 1:1 and that every
//! mutation re-persists the snapshot.

use workout_tracker::db::{KeyValueStorage, MemoryStorage};
use workout_tracker::error::AppError;
use workout_tracker::models::{DerivedMetric, WorkoutId, WorkoutKind};
use workout_tracker::services::WorkoutStore;

mod common;
use common::{at, ids, ride_request, run_request, test_app, MapEvent, HOME};

fn persisted_ids(storage: &MemoryStorage) -> Vec<String> {
    let blob = storage.get("workouts").unwrap().unwrap_or_else(|| "[]".into());
    WorkoutStore::deserialize(&blob)
        .unwrap()
        .iter()
        .map(|r| r.id().as_str().to_string())
        .collect()
}

#[test]
fn test_app_start_centers_map() {
    let storage = MemoryStorage::new();
    let app = test_app(&storage);

    assert_eq!(
        app.sink().events,
        vec![MapEvent::Centered {
            coordinates: HOME,
            zoom: 13
        }]
    );
    assert!(!app.has_workouts());
}

#[test]
fn test_create_computes_metrics_and_places_marker() {
    let storage = MemoryStorage::new();
    let mut app = test_app(&storage);

    let run = app.create_workout_at(run_request(5.0), at(0)).unwrap();
    assert_eq!(run.kind, WorkoutKind::Running);
    assert_eq!(run.derived_metric.value, 5.0);
    assert_eq!(run.description, "Running on April 14");

    let ride = app.create_workout_at(ride_request(20.0), at(10)).unwrap();
    assert_eq!(ride.kind, WorkoutKind::Cycling);
    assert_eq!(ride.derived_metric.value, 20.0);
    assert_eq!(ride.derived_metric.label, "speed");

    assert_eq!(app.markers().len(), 2);
    assert!(app.markers().contains(&run.id));
    assert!(app.markers().contains(&ride.id));
    assert_eq!(app.sink().on_map.len(), 2);
    assert!(app.has_workouts());
    assert_eq!(persisted_ids(&storage), ids(&app));
}

#[test]
fn test_same_tick_creates_distinct_ids() {
    let storage = MemoryStorage::new();
    let mut app = test_app(&storage);

    let a = app.create_workout_at(run_request(3.0), at(0)).unwrap();
    let b = app.create_workout_at(run_request(3.0), at(0)).unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(app.store().len(), 2);
}

#[test]
fn test_invalid_request_is_rejected_before_construction() {
    let storage = MemoryStorage::new();
    let mut app = test_app(&storage);

    let mut request = run_request(5.0);
    request.duration = -10.0;

    let err = app.create_workout_at(request, at(0)).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(app.store().is_empty());
    assert!(app.markers().is_empty());
    assert_eq!(storage.get("workouts").unwrap(), None);
}

#[test]
fn test_delete_removes_exactly_one_record_and_marker() {
    let storage = MemoryStorage::new();
    let mut app = test_app(&storage);

    let a = app.create_workout_at(run_request(3.0), at(0)).unwrap();
    let b = app.create_workout_at(ride_request(12.0), at(1)).unwrap();
    let c = app.create_workout_at(run_request(7.0), at(2)).unwrap();
    let b_handle = *app.markers().get(&b.id).unwrap();

    app.delete_workout(&b.id).unwrap();

    assert_eq!(ids(&app), vec![a.id.to_string(), c.id.to_string()]);
    assert_eq!(app.markers().len(), 2);
    assert!(!app.markers().contains(&b.id));
    assert!(app.markers().contains(&a.id));
    assert!(app.markers().contains(&c.id));
    assert!(!app.sink().on_map.contains(&b_handle));
    assert_eq!(
        app.sink().events.last(),
        Some(&MapEvent::Released { handle: b_handle })
    );
    assert_eq!(persisted_ids(&storage), ids(&app));
}

#[test]
fn test_delete_unknown_id_leaves_everything_unchanged() {
    let storage = MemoryStorage::new();
    let mut app = test_app(&storage);
    app.create_workout_at(run_request(3.0), at(0)).unwrap();
    let before = storage.get("workouts").unwrap();
    let events_before = app.sink().events.len();

    let err = app.delete_workout(&WorkoutId::new("does-not-exist")).unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(app.store().len(), 1);
    assert_eq!(app.markers().len(), 1);
    assert_eq!(app.sink().events.len(), events_before);
    assert_eq!(storage.get("workouts").unwrap(), before);
}

#[test]
fn test_delete_twice_fails_second_time() {
    let storage = MemoryStorage::new();
    let mut app = test_app(&storage);
    let a = app.create_workout_at(run_request(3.0), at(0)).unwrap();

    app.delete_workout(&a.id).unwrap();
    assert!(matches!(
        app.delete_workout(&a.id),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_clear_all_empties_store_and_registry() {
    let storage = MemoryStorage::new();
    let mut app = test_app(&storage);
    for i in 0..4 {
        app.create_workout_at(run_request(1.0 + i as f64), at(i))
            .unwrap();
    }

    app.clear_workouts().unwrap();

    assert!(app.store().is_empty());
    assert!(app.markers().is_empty());
    assert!(app.sink().on_map.is_empty());
    assert!(!app.has_workouts());
    assert_eq!(storage.get("workouts").unwrap().as_deref(), Some("[]"));

    // Starting fresh works, and ids are not reused
    let fresh = app.create_workout_at(ride_request(10.0), at(0)).unwrap();
    assert_eq!(app.store().len(), 1);
    assert_eq!(app.markers().len(), 1);
    assert_eq!(fresh.id.as_str(), (at(3).timestamp_millis() + 1).to_string());
}

#[test]
fn test_interaction_counts_and_centers_map() {
    let storage = MemoryStorage::new();
    let mut app = test_app(&storage);
    let mut request = ride_request(15.0);
    request.coordinates = workout_tracker::models::Coordinates::new(46.5, 8.0);
    let ride = app.create_workout_at(request, at(0)).unwrap();

    app.interact(&ride.id).unwrap();
    let view = app.interact(&ride.id).unwrap();

    assert_eq!(view.id, ride.id);
    assert_eq!(app.store().get(&ride.id).unwrap().interaction_count(), 2);
    assert_eq!(
        app.sink().events.last(),
        Some(&MapEvent::Centered {
            coordinates: workout_tracker::models::Coordinates::new(46.5, 8.0),
            zoom: 13
        })
    );

    // The counter is part of the persisted snapshot
    let restored =
        WorkoutStore::deserialize(&storage.get("workouts").unwrap().unwrap()).unwrap();
    assert_eq!(restored[0].interaction_count(), 2);
    // ...and does not affect what gets rendered
    assert_eq!(
        restored[0].derived_metric(),
        DerivedMetric::Speed(15.0 / (45.0 / 60.0))
    );
}

#[test]
fn test_interaction_unknown_id() {
    let storage = MemoryStorage::new();
    let mut app = test_app(&storage);

    assert!(matches!(
        app.interact(&WorkoutId::new("42")),
        Err(AppError::NotFound(_))
    ));
}
