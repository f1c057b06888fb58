// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed task store.
//!
//! The [`Database`] struct executes statements produced by
//! [`crate::query::compile`] and maps rows back into [`Task`] values.
//! Every compiled SQL text is traced at `debug` level before it runs.

use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection};
use std::collections::HashSet;
use std::path::Path;

use crate::assign;
use crate::error::Result;
use crate::id::generate_unique_id;
use crate::query::{compile, CompiledQuery, Edit, Filter, JsonPath, Statement};
use crate::task::Task;

/// SQL schema for the task database.
pub const SCHEMA: &str = r#"
-- Tasks keyed by stable id; everything else lives in the JSON payload
CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    template_id TEXT,
    data TEXT NOT NULL
);

-- Short id assignments, one per live task
CREATE TABLE IF NOT EXISTS assignments (
    id INTEGER PRIMARY KEY,
    task_id TEXT NOT NULL UNIQUE,
    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_tasks_template ON tasks(template_id);
"#;

/// Run schema creation and all migrations on a database connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    migrate_prune_orphan_assignments(conn)?;
    Ok(())
}

/// Migration: Remove assignments whose task no longer exists.
///
/// Databases written before deletes released their assignment rows can hold
/// short ids pointing at nothing, which would block reuse of the maximum.
fn migrate_prune_orphan_assignments(conn: &Connection) -> Result<()> {
    let pruned = conn.execute(
        "DELETE FROM assignments WHERE task_id NOT IN (SELECT id FROM tasks)",
        [],
    )?;
    if pruned > 0 {
        tracing::info!(pruned, "pruned orphaned short id assignments");
    }
    Ok(())
}

fn trace(query: &CompiledQuery) {
    tracing::debug!(target: "tsk::sql", "{}", query.sql);
}

/// SQLite database connection with task store operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Store a new task together with its short id assignment.
    ///
    /// Resolves stable id collisions by suffixing, then writes `task.id` and
    /// `task.short_id` back. Returns the allocated short id.
    pub fn add_task(&mut self, task: &mut Task) -> Result<i64> {
        let payload = task.to_payload()?;
        let tx = self.conn.transaction()?;

        let taken = taken_ids(&tx, &task.id)?;
        if taken.contains(&task.id) {
            task.id = generate_unique_id(&task.title, &task.created_at, |candidate| {
                taken.contains(candidate)
            });
        }

        tx.execute(
            "INSERT INTO tasks (id, template_id, data) VALUES (?1, ?2, ?3)",
            params![task.id, task.template_id, payload],
        )?;
        let short_id = assign::allocate(&tx, &task.id)?;
        tx.commit()?;

        task.short_id = short_id;
        tracing::info!(short_id, id = %task.id, "created task");
        Ok(short_id)
    }

    /// List tasks matching all filters, ordered by short id.
    ///
    /// Done tasks are hidden unless a filter targets `status`.
    pub fn list_tasks(&self, filters: &[Filter]) -> Result<Vec<Task>> {
        let query = compile(Statement::Select, filters);
        trace(&query);

        let mut stmt = self.conn.prepare(&query.sql)?;
        let rows = stmt
            .query_map(query.bindings().as_slice(), |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, template_id, short_id, payload)| {
                Task::from_row(id, template_id, short_id, &payload)
            })
            .collect()
    }

    /// Count tasks matching all filters.
    pub fn count_tasks(&self, filters: &[Filter]) -> Result<usize> {
        let query = compile(Statement::Count, filters);
        trace(&query);

        let count: i64 = self
            .conn
            .query_row(&query.sql, query.bindings().as_slice(), |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Apply edits to every matching task and return their short ids.
    ///
    /// The ids are collected before the update runs, since an edit may move
    /// a task out of the filter (e.g. marking it done). `updated_at` is
    /// refreshed unless the edits set it.
    pub fn edit_tasks(&mut self, filters: &[Filter], edits: &[Edit]) -> Result<Vec<i64>> {
        let mut edits = edits.to_vec();
        if !edits.iter().any(|e| e.path == JsonPath::UpdatedAt) {
            edits.push(Edit::new(
                JsonPath::UpdatedAt,
                Utc::now().to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ));
        }

        let tx = self.conn.transaction()?;
        let ids = short_ids_on(&tx, filters)?;

        let query = compile(Statement::Update(&edits), filters);
        trace(&query);
        let updated = tx.execute(&query.sql, query.bindings().as_slice())?;
        tx.commit()?;

        tracing::info!(updated, "edited tasks");
        Ok(ids)
    }

    /// Delete every matching task and its assignment; return the freed short ids.
    pub fn delete_tasks(&mut self, filters: &[Filter]) -> Result<Vec<i64>> {
        let tx = self.conn.transaction()?;

        let query = compile(Statement::Select, filters);
        trace(&query);
        let targets = {
            let mut stmt = tx.prepare(&query.sql)?;
            let rows = stmt
                .query_map(query.bindings().as_slice(), |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, i64>(2)?))
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows
        };

        let query = compile(Statement::Delete, filters);
        trace(&query);
        let deleted = tx.execute(&query.sql, query.bindings().as_slice())?;

        let task_ids: Vec<String> = targets.iter().map(|(id, _)| id.clone()).collect();
        assign::release(&tx, &task_ids)?;
        tx.commit()?;

        tracing::info!(deleted, "deleted tasks");
        Ok(targets.into_iter().map(|(_, short_id)| short_id).collect())
    }
}

/// Stable ids equal to `base` or carrying a collision suffix on it.
fn taken_ids(conn: &Connection, base: &str) -> Result<HashSet<String>> {
    let mut stmt = conn.prepare("SELECT id FROM tasks WHERE id = ?1 OR id LIKE ?1 || '-%'")?;
    let ids = stmt
        .query_map(params![base], |row| row.get(0))?
        .collect::<std::result::Result<HashSet<String>, _>>()?;
    Ok(ids)
}

fn short_ids_on(conn: &Connection, filters: &[Filter]) -> Result<Vec<i64>> {
    let query = compile(Statement::ShortIds, filters);
    trace(&query);

    let mut stmt = conn.prepare(&query.sql)?;
    let ids = stmt
        .query_map(query.bindings().as_slice(), |row| row.get(0))?
        .collect::<std::result::Result<Vec<i64>, _>>()?;
    Ok(ids)
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
