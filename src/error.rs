// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the store, registry and command layer.

use serde::Serialize;

/// Application error type.
///
/// Every variant is a distinct kind so the Presenter can pick a user-facing
/// message without inspecting strings.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Duplicate workout id: {0}")]
    DuplicateId(String),

    #[error("Workout not found: {0}")]
    NotFound(String),

    #[error("Stored workouts are corrupt: {0}")]
    CorruptData(String),

    #[error("Failed to read stored workouts: {0}")]
    StorageRead(String),

    #[error("Failed to persist workouts: {0}")]
    StorageWrite(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::DuplicateId(_) => "duplicate_id",
            AppError::NotFound(_) => "not_found",
            AppError::CorruptData(_) => "corrupt_data",
            AppError::StorageRead(_) => "storage_read_failure",
            AppError::StorageWrite(_) => "storage_write_failure",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// True when the in-memory mutation was applied but could not be persisted.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, AppError::StorageWrite(_))
    }

    /// Convert into the serializable body reported to the Presenter.
    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                None
            }
            other => Some(other.to_string()),
        };

        ErrorResponse {
            error: self.code().to_string(),
            details,
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, AppError>;
