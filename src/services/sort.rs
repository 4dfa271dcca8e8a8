// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Distance ordering for the workout list.

use std::cmp::Ordering;

use crate::models::WorkoutRecord;

/// Compare two workouts by distance in the requested direction.
pub fn compare_by_distance(a: &WorkoutRecord, b: &WorkoutRecord, ascending: bool) -> Ordering {
    let ord = a.distance().total_cmp(&b.distance());
    if ascending {
        ord
    } else {
        ord.reverse()
    }
}

/// Stable sort by distance: equal distances keep their current relative order.
pub fn sort_by_distance<T, F>(items: &mut [T], ascending: bool, record: F)
where
    F: Fn(&T) -> &WorkoutRecord,
{
    items.sort_by(|a, b| compare_by_distance(record(a), record(b), ascending));
}

/// Sort direction flag owned by the application, flipped on every sort.
///
/// Starts `false`, so the first sort is descending and the next ascending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortToggle {
    ascending: bool,
}

impl SortToggle {
    pub fn new(ascending: bool) -> Self {
        Self { ascending }
    }

    /// Direction the next sort will use.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Return the direction to sort with now and flip for the next call.
    pub fn advance(&mut self) -> bool {
        let current = self.ascending;
        self.ascending = !current;
        current
    }
}
