// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory workout store with snapshot persistence.
//!
//! The store keeps two orders:
//! - the live order, which `sort` rearranges for display
//! - the insertion order, which is what gets persisted
//!
//! Every mutation writes the full snapshot. A failed write is reported as
//! `AppError::StorageWrite` but the in-memory mutation stays applied.

use anyhow::Context;
use std::collections::HashSet;
use std::sync::Arc;

use crate::db::KeyValueStorage;
use crate::error::{AppError, Result};
use crate::models::{StoredWorkout, WorkoutId, WorkoutRecord};
use crate::services::sort::sort_by_distance;

#[derive(Debug, Clone)]
struct Entry {
    /// Insertion sequence number
    seq: u64,
    record: WorkoutRecord,
}

/// Ordered collection of workouts backed by a key-value storage.
pub struct WorkoutStore {
    entries: Vec<Entry>,
    next_seq: u64,
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl WorkoutStore {
    /// Create an empty store persisting under `key`.
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    // ─── Persistence ─────────────────────────────────────────────

    /// Replace the contents with the persisted snapshot.
    ///
    /// A missing key loads an empty store. On a read failure or a corrupt
    /// snapshot the store is left empty (never partially loaded) and the
    /// error is returned.
    pub fn load(&mut self) -> Result<usize> {
        self.entries.clear();
        self.next_seq = 0;

        let blob = self
            .storage
            .get(&self.key)
            .map_err(|e| AppError::StorageRead(e.to_string()))?;

        let Some(blob) = blob else {
            tracing::debug!(key = %self.key, "No stored workouts");
            return Ok(0);
        };

        let records = Self::deserialize(&blob)?;
        for record in records {
            self.push(record);
        }

        tracing::info!(key = %self.key, count = self.entries.len(), "Loaded workouts");
        Ok(self.entries.len())
    }

    /// Write the current snapshot (insertion order) to storage.
    pub fn save(&self) -> Result<()> {
        let blob = self.serialize()?;
        self.storage.set(&self.key, &blob).map_err(|e| {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist workouts");
            AppError::StorageWrite(e.to_string())
        })
    }

    /// Encode every workout, in insertion order, as a JSON array.
    pub fn serialize(&self) -> Result<String> {
        let mut ordered: Vec<&Entry> = self.entries.iter().collect();
        ordered.sort_by_key(|e| e.seq);

        let stored: Vec<StoredWorkout> = ordered
            .into_iter()
            .map(|e| StoredWorkout::from(&e.record))
            .collect();

        Ok(serde_json::to_string(&stored).context("Failed to encode workouts")?)
    }

    /// Decode a JSON array of stored workouts into full records.
    ///
    /// All-or-nothing: any malformed element, missing kind-specific field,
    /// invariant violation or duplicate id fails the whole blob.
    pub fn deserialize(blob: &str) -> Result<Vec<WorkoutRecord>> {
        let stored: Vec<StoredWorkout> =
            serde_json::from_str(blob).map_err(|e| AppError::CorruptData(e.to_string()))?;

        let mut seen = HashSet::with_capacity(stored.len());
        let mut records = Vec::with_capacity(stored.len());
        for item in stored {
            if !seen.insert(item.id.clone()) {
                return Err(AppError::CorruptData(format!(
                    "duplicate workout id {}",
                    item.id
                )));
            }
            records.push(WorkoutRecord::try_from(item)?);
        }
        Ok(records)
    }

    // ─── Mutations ───────────────────────────────────────────────

    /// Append a workout and persist.
    pub fn add(&mut self, record: WorkoutRecord) -> Result<()> {
        if self.contains(record.id()) {
            return Err(AppError::DuplicateId(record.id().to_string()));
        }
        tracing::debug!(workout_id = %record.id(), kind = %record.kind(), "Adding workout");
        self.push(record);
        self.save()
    }

    /// Remove the workout with `id` and persist.
    pub fn remove(&mut self, id: &WorkoutId) -> Result<()> {
        let index = self
            .entries
            .iter()
            .position(|e| e.record.id() == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        self.entries.remove(index);
        tracing::debug!(workout_id = %id, "Removed workout");
        self.save()
    }

    /// Remove every workout and persist.
    pub fn clear(&mut self) -> Result<()> {
        let count = self.entries.len();
        self.entries.clear();
        tracing::debug!(count, "Cleared workouts");
        self.save()
    }

    /// Reorder the live sequence by distance. Not persisted.
    pub fn sort(&mut self, ascending: bool) {
        sort_by_distance(&mut self.entries, ascending, |e| &e.record);
    }

    /// Bump the interaction counter of a workout and persist.
    pub fn record_interaction(&mut self, id: &WorkoutId) -> Result<u32> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.record.id() == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        entry.record.record_interaction();
        let count = entry.record.interaction_count();
        self.save()?;
        Ok(count)
    }

    // ─── Queries ─────────────────────────────────────────────────

    pub fn get(&self, id: &WorkoutId) -> Option<&WorkoutRecord> {
        self.entries
            .iter()
            .map(|e| &e.record)
            .find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &WorkoutId) -> bool {
        self.get(id).is_some()
    }

    /// Workouts in live (display) order.
    pub fn records(&self) -> impl Iterator<Item = &WorkoutRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, record: WorkoutRecord) {
        self.entries.push(Entry {
            seq: self.next_seq,
            record,
        });
        self.next_seq += 1;
    }
}
