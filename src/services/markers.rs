// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Marker registry and the map-widget seam.
//!
//! The registry only tracks handles. Placing and releasing markers on the
//! map is done through a [`MarkerSink`] by the application, using the
//! handles the registry hands back.

use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::models::{Coordinates, WorkoutId, WorkoutView};

/// Map widget operations the core needs.
pub trait MarkerSink {
    /// Opaque handle for a placed marker.
    type Handle;

    /// Place a marker with its popup for a workout.
    fn place(&mut self, workout: &WorkoutView) -> Self::Handle;

    /// Remove a previously placed marker from the map.
    fn release(&mut self, handle: Self::Handle);

    /// Center the map view on a position.
    fn center_on(&mut self, coordinates: Coordinates, zoom: u8);
}

/// Workout id to marker handle mapping, kept 1:1 with live workouts.
#[derive(Debug)]
pub struct MarkerRegistry<H> {
    handles: HashMap<WorkoutId, H>,
}

impl<H> Default for MarkerRegistry<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> MarkerRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: WorkoutId, handle: H) -> Result<()> {
        if self.handles.contains_key(&id) {
            return Err(AppError::DuplicateId(id.to_string()));
        }
        self.handles.insert(id, handle);
        Ok(())
    }

    /// Remove and return the handle so the caller can release it.
    pub fn unregister(&mut self, id: &WorkoutId) -> Result<H> {
        self.handles
            .remove(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Remove and return every handle for bulk release.
    pub fn clear_all(&mut self) -> Vec<H> {
        self.handles.drain().map(|(_, handle)| handle).collect()
    }

    pub fn get(&self, id: &WorkoutId) -> Option<&H> {
        self.handles.get(id)
    }

    pub fn contains(&self, id: &WorkoutId) -> bool {
        self.handles.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Headless sink that logs map operations and hands out numeric handles.
#[derive(Debug, Default)]
pub struct TracingMarkerSink {
    next_handle: u64,
}

impl TracingMarkerSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkerSink for TracingMarkerSink {
    type Handle = u64;

    fn place(&mut self, workout: &WorkoutView) -> u64 {
        self.next_handle += 1;
        tracing::debug!(
            handle = self.next_handle,
            workout_id = %workout.id,
            lat = workout.coordinates.lat,
            lng = workout.coordinates.lng,
            popup = %workout.popup_content,
            class = %workout.popup_class,
            "Placed marker"
        );
        self.next_handle
    }

    fn release(&mut self, handle: u64) {
        tracing::debug!(handle, "Released marker");
    }

    fn center_on(&mut self, coordinates: Coordinates, zoom: u8) {
        tracing::debug!(lat = coordinates.lat, lng = coordinates.lng, zoom, "Centered map");
    }
}
