//! Storage layer (key-value backends).

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage keys as constants.
pub mod keys {
    /// Default key for the workout snapshot
    pub const WORKOUTS: &str = "workouts";
    /// Suffix appended to the workout key for the persisted sort direction
    pub const SORT_SUFFIX: &str = ".sort";
}

/// A string key-value store with get/set semantics.
///
/// Writes replace the whole value for a key. Implementations must make a
/// single `set` atomic: readers observe either the old or the new value.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Errors from storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Write rejected: {0}")]
    Rejected(String),

    #[error("I/O error: {0}")]
    Io(String),
}
