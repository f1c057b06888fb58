// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::Serialize;
use tsk_core::{Database, Status, Task};

use crate::args::{CommandKind, ParseContext};
use crate::cli::OutputFormat;
use crate::colors;
use crate::display::{render_table, task_rows, terminal_width};
use crate::error::Result;

use super::{open_db, prepare, Options};

/// Shown instead of an empty table.
pub const EMPTY_MESSAGE: &str = "No tasks match filters";

/// JSON representation of a task for list output.
#[derive(Serialize)]
struct ListTaskJson<'a> {
    id: i64,
    task_id: &'a str,
    title: &'a str,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<&'a str>,
    tags: &'a [String],
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Task> for ListTaskJson<'a> {
    fn from(task: &'a Task) -> Self {
        ListTaskJson {
            id: task.short_id,
            task_id: &task.id,
            title: &task.title,
            status: task.status,
            priority: task.priority.as_deref(),
            tags: &task.tags,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

pub fn run(options: &Options, words: &[String], format: OutputFormat) -> Result<()> {
    let (ctx, config) = prepare(options, CommandKind::List, words)?;
    let db = open_db(&config)?;
    run_impl(&db, &ctx, format)?;
    Ok(())
}

pub(crate) fn run_impl(
    db: &Database,
    ctx: &ParseContext,
    format: OutputFormat,
) -> Result<Vec<Task>> {
    let tasks = db.list_tasks(ctx.filters())?;
    let color = colors::should_colorize();
    println!("{}", render(&tasks, format, Utc::now(), color, terminal_width())?);
    Ok(tasks)
}

/// Render tasks in the requested format.
pub(crate) fn render(
    tasks: &[Task],
    format: OutputFormat,
    now: DateTime<Utc>,
    color: bool,
    width: Option<usize>,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let items: Vec<ListTaskJson> = tasks.iter().map(ListTaskJson::from).collect();
            Ok(serde_json::to_string_pretty(&items)?)
        }
        OutputFormat::Text if tasks.is_empty() => Ok(EMPTY_MESSAGE.to_string()),
        OutputFormat::Text => Ok(render_table(&task_rows(tasks, now, color), color, width)),
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
