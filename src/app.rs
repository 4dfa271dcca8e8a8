// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The application object.
//!
//! Owns the workout store, the marker registry and the sort toggle, and
//! keeps them in lockstep: every workout in the store has exactly one
//! marker, and every store mutation re-persists the snapshot.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::Config;
use crate::db::KeyValueStorage;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, CreateWorkout, WorkoutId, WorkoutRecord, WorkoutView};
use crate::services::{MarkerRegistry, MarkerSink, SortToggle, WorkoutIdGenerator, WorkoutStore};
use crate::time_utils::format_utc_rfc3339;

/// Application state for one session.
pub struct App<S: MarkerSink> {
    config: Config,
    storage: Arc<dyn KeyValueStorage>,
    store: WorkoutStore,
    markers: MarkerRegistry<S::Handle>,
    sink: S,
    sort_toggle: SortToggle,
    ids: WorkoutIdGenerator,
}

impl<S: MarkerSink> App<S> {
    /// Bring up the application once the user's position is known.
    ///
    /// The map is centered on `center`. The store starts empty; call
    /// [`App::restore`] to load persisted workouts.
    pub fn new(
        config: Config,
        storage: Arc<dyn KeyValueStorage>,
        mut sink: S,
        center: Coordinates,
    ) -> Self {
        sink.center_on(center, config.map_zoom);
        let store = WorkoutStore::new(storage.clone(), config.storage_key.clone());

        Self {
            config,
            storage,
            store,
            markers: MarkerRegistry::new(),
            sink,
            sort_toggle: SortToggle::default(),
            ids: WorkoutIdGenerator::new(),
        }
    }

    /// Load persisted workouts and place a marker for each.
    ///
    /// On corrupt or unreadable data the application continues with an
    /// empty store and the error is returned for the caller to report.
    pub fn restore(&mut self) -> Result<usize> {
        for handle in self.markers.clear_all() {
            self.sink.release(handle);
        }
        self.sort_toggle = SortToggle::default();

        let count = match self.store.load() {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(error = %err, "Starting with an empty workout list");
                return Err(err);
            }
        };

        let views: Vec<WorkoutView> = self.store.records().map(WorkoutView::from).collect();
        for view in views {
            self.ids.observe(&view.id);
            let handle = self.sink.place(&view);
            self.markers.register(view.id, handle)?;
        }

        if self.config.persist_sort_order {
            self.restore_sort_order();
        }

        tracing::info!(count, "Restored workouts");
        Ok(count)
    }

    fn restore_sort_order(&mut self) {
        let key = self.config.sort_key();
        let stored = match self.storage.get(&key) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read sort order");
                return;
            }
        };

        match stored.as_deref().map(str::trim) {
            Some("true") => self.apply_sort(true),
            Some("false") => self.apply_sort(false),
            Some(other) => tracing::warn!(key = %key, value = other, "Ignoring unknown sort order"),
            None => {}
        }
    }

    fn apply_sort(&mut self, ascending: bool) {
        self.store.sort(ascending);
        self.sort_toggle = SortToggle::new(!ascending);
    }

    // ─── Commands ────────────────────────────────────────────────

    /// Log a new workout created now.
    pub fn create_workout(&mut self, request: CreateWorkout) -> Result<WorkoutView> {
        self.create_workout_at(request, Utc::now())
    }

    /// Log a new workout with an explicit creation time.
    ///
    /// If only the storage write fails, the workout and its marker are kept
    /// and `AppError::StorageWrite` is returned.
    pub fn create_workout_at(
        &mut self,
        request: CreateWorkout,
        now: DateTime<Utc>,
    ) -> Result<WorkoutView> {
        request.validate()?;

        let id = self.ids.next_id(now);
        if self.markers.contains(&id) {
            return Err(AppError::DuplicateId(id.to_string()));
        }

        let record = WorkoutRecord::new(
            id,
            request.kind,
            request.coordinates,
            request.distance,
            request.duration,
            request.secondary_metric,
            now,
        );
        let view = WorkoutView::from(&record);

        let persisted = applied(self.store.add(record))?;
        let handle = self.sink.place(&view);
        self.markers.register(view.id.clone(), handle)?;

        tracing::info!(
            workout_id = %view.id,
            kind = %view.kind,
            created_at = %format_utc_rfc3339(now),
            "Workout created"
        );
        persisted.map(|_| view)
    }

    /// Delete one workout and its marker.
    pub fn delete_workout(&mut self, id: &WorkoutId) -> Result<()> {
        let persisted = applied(self.store.remove(id))?;
        let handle = self.markers.unregister(id)?;
        self.sink.release(handle);

        tracing::info!(workout_id = %id, "Workout deleted");
        persisted
    }

    /// Delete every workout and marker.
    pub fn clear_workouts(&mut self) -> Result<()> {
        let count = self.store.len();
        let persisted = applied(self.store.clear())?;
        for handle in self.markers.clear_all() {
            self.sink.release(handle);
        }

        tracing::info!(count, "All workouts deleted");
        persisted
    }

    /// Sort the list by distance, alternating direction on every call.
    ///
    /// Returns the direction applied (`true` for ascending).
    pub fn sort_workouts(&mut self) -> Result<bool> {
        let ascending = self.sort_toggle.advance();
        self.store.sort(ascending);
        tracing::debug!(ascending, "Sorted workouts");

        if self.config.persist_sort_order {
            self.storage
                .set(&self.config.sort_key(), &ascending.to_string())
                .map_err(|e| AppError::StorageWrite(e.to_string()))?;
        }
        Ok(ascending)
    }

    /// Record a click on a workout and center the map on it.
    pub fn interact(&mut self, id: &WorkoutId) -> Result<WorkoutView> {
        let persisted = applied(self.store.record_interaction(id))?;
        let view = self
            .workout(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        self.sink.center_on(view.coordinates, self.config.map_zoom);

        persisted.map(|_| view)
    }

    // ─── Queries ─────────────────────────────────────────────────

    /// View data for every workout, in display order.
    pub fn workouts(&self) -> Vec<WorkoutView> {
        self.store.records().map(WorkoutView::from).collect()
    }

    pub fn workout(&self, id: &WorkoutId) -> Option<WorkoutView> {
        self.store.get(id).map(WorkoutView::from)
    }

    /// Whether the sort/clear controls should be shown.
    pub fn has_workouts(&self) -> bool {
        !self.store.is_empty()
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn markers(&self) -> &MarkerRegistry<S::Handle> {
        &self.markers
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sort_toggle(&self) -> SortToggle {
        self.sort_toggle
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Separate invariant violations (abort, nothing changed) from results
/// where the store mutation stands (success or a failed storage write).
fn applied<T>(result: Result<T>) -> Result<Result<T>> {
    match result {
        Err(err) if !err.is_storage_failure() => Err(err),
        other => Ok(other),
    }
}
