// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core task types for the tsk task tracker.
//!
//! A [`Task`] is stored as a row in the `tasks` table: the stable identifier
//! and the optional template reference are real columns, everything else is
//! serialized into the JSON `data` column.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::id::generate_id;

/// Workflow status of a task.
///
/// Transitions are user-directed; moving a task from `done` back to
/// `pending` is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not yet started. Initial state for new tasks.
    #[default]
    Pending,
    /// Currently being worked on.
    Active,
    /// Completed. Hidden from queries unless explicitly requested.
    Done,
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Active => "active",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "active" => Ok(Status::Active),
            "done" => Ok(Status::Done),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// The primary entity representing a tracked piece of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier, generated once at creation and never reused.
    #[serde(skip)]
    pub id: String,
    /// Dense, human-facing identifier from the assignments table.
    /// Zero until the task has been stored.
    #[serde(skip)]
    pub short_id: i64,
    /// Recurrence template this task was created from, if any.
    #[serde(skip)]
    pub template_id: Option<String>,
    /// Short description of the work.
    pub title: String,
    /// User-defined priority code such as `H`, `M` or `L`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Current workflow state.
    #[serde(default)]
    pub status: Status,
    /// Labels in insertion order. Duplicates are kept.
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task with a freshly generated stable id.
    pub fn new(title: String, created_at: DateTime<Utc>) -> Self {
        let id = generate_id(&title, &created_at);
        Task {
            id,
            short_id: 0,
            template_id: None,
            title,
            priority: None,
            status: Status::Pending,
            tags: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Serializes the payload portion of the task for the `data` column.
    pub fn to_payload(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Serialization)
    }

    /// Rebuilds a task from its columns and JSON payload.
    pub fn from_row(
        id: String,
        template_id: Option<String>,
        short_id: i64,
        payload: &str,
    ) -> Result<Self> {
        let mut task: Task = serde_json::from_str(payload).map_err(Error::Deserialization)?;
        task.id = id;
        task.template_id = template_id;
        task.short_id = short_id;
        Ok(task)
    }

    /// Returns true if the task is currently being worked on.
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
