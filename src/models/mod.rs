// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod request;
pub mod view;
pub mod workout;

pub use request::CreateWorkout;
pub use view::{LabeledMetric, WorkoutView};
pub use workout::{
    Coordinates, DerivedMetric, SecondaryMetric, StoredWorkout, WorkoutId, WorkoutKind,
    WorkoutRecord,
};
