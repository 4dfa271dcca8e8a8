// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - workout store, marker registry and supporting logic.

pub mod geolocation;
pub mod ids;
pub mod markers;
pub mod sort;
pub mod store;

pub use geolocation::{ConfiguredPosition, GeolocationError, PositionSource};
pub use ids::WorkoutIdGenerator;
pub use markers::{MarkerRegistry, MarkerSink, TracingMarkerSink};
pub use sort::SortToggle;
pub use store::WorkoutStore;
