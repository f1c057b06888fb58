// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Short identifier allocation.
//!
//! Every live task owns exactly one row in `assignments`, mapping a dense
//! positive integer to its stable id. New tasks take `MAX(id) + 1`, so a
//! freed number is only handed out again when it was the current maximum;
//! lower gaps are never compacted.
//!
//! Allocation is not guarded against concurrent processes: two invocations
//! computing the same maximum will collide on the primary key.

use rusqlite::{params, Connection};

use crate::error::Result;

/// Returns the short id the next allocation would receive.
pub fn next_short_id(conn: &Connection) -> Result<i64> {
    let next = conn.query_row(
        "SELECT COALESCE(MAX(id), 0) + 1 FROM assignments",
        [],
        |row| row.get(0),
    )?;
    Ok(next)
}

/// Assign a short id to `task_id` and return it.
///
/// Call inside the transaction that inserts the task row.
pub fn allocate(conn: &Connection, task_id: &str) -> Result<i64> {
    let short_id = next_short_id(conn)?;
    conn.execute(
        "INSERT INTO assignments (id, task_id) VALUES (?1, ?2)",
        params![short_id, task_id],
    )?;
    tracing::debug!(short_id, task_id, "allocated short id");
    Ok(short_id)
}

/// Drop the allocation rows for the given tasks.
///
/// Run after deleting the task rows. With `foreign_keys` on the cascade has
/// usually removed them already and this returns 0.
pub fn release(conn: &Connection, task_ids: &[String]) -> Result<usize> {
    let mut released = 0;
    let mut stmt = conn.prepare("DELETE FROM assignments WHERE task_id = ?1")?;
    for task_id in task_ids {
        released += stmt.execute(params![task_id])?;
    }
    Ok(released)
}

#[cfg(test)]
#[path = "assign_tests.rs"]
mod tests;
