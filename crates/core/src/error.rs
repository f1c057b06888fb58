// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tsk-core operations.

use thiserror::Error;

/// All possible errors that can occur in tsk-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid status: '{0}'\n  hint: valid statuses are: pending, active, done")]
    InvalidStatus(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("failed to serialize task: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to deserialize task: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for tsk-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
