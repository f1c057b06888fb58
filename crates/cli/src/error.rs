// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the tskrs library.
///
/// Every variant is recoverable at the command boundary; `main` renders it
/// and exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    // Argument errors
    #[error("tag cannot be empty\n  hint: write tags as #name")]
    EmptyTag,

    #[error("missing value for \"{scope}:\"")]
    MissingScopeValue { scope: String },

    #[error("invalid scope '{scope}'\n  hint: valid scopes are: {valid}")]
    InvalidScope { scope: String, valid: &'static str },

    #[error("missing title")]
    MissingTitle,

    #[error("invalid status: '{0}'\n  hint: valid statuses are: pending, active, done")]
    InvalidStatus(String),

    #[error("the {command} command requires filters\n  hint: select tasks by id, #tag or scope:value")]
    MissingFilters { command: &'static str },

    // Selection and confirmation
    #[error("no tasks match filters")]
    NoMatch,

    #[error("operation cancelled")]
    Cancelled,

    #[error("bulk delete is not supported ({count} tasks match)")]
    BulkDeleteUnsupported { count: usize },

    // Infrastructure
    #[error("config error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("failed to serialize task: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to deserialize task: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for tskrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<tsk_core::Error> for Error {
    fn from(e: tsk_core::Error) -> Self {
        match e {
            tsk_core::Error::InvalidStatus(s) => Error::InvalidStatus(s),
            tsk_core::Error::Database(e) => Error::Database(e),
            tsk_core::Error::Serialization(e) => Error::Serialization(e),
            tsk_core::Error::Deserialization(e) => Error::Deserialization(e),
            tsk_core::Error::Io(e) => Error::Io(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
