// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time-derived workout id generation.

use chrono::{DateTime, Utc};

use crate::models::WorkoutId;

/// Issues strictly increasing ids from creation timestamps (epoch millis).
///
/// Two workouts created in the same millisecond still get distinct ids:
/// the second one takes `last + 1`.
#[derive(Debug, Default, Clone)]
pub struct WorkoutIdGenerator {
    last: Option<i64>,
}

impl WorkoutIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for a workout created at `now`.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> WorkoutId {
        let millis = now.timestamp_millis();
        let id = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(id);
        WorkoutId::new(id.to_string())
    }

    /// Account for an id that already exists (e.g. restored from storage)
    /// so it is never issued again. Non-numeric ids cannot collide with
    /// generated ones and are ignored.
    pub fn observe(&mut self, id: &WorkoutId) {
        if let Ok(value) = id.as_str().parse::<i64>() {
            if self.last.is_none_or(|last| value > last) {
                self.last = Some(value);
            }
        }
    }
}
