// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Table rendering for `tsk list`.

use chrono::{DateTime, Utc};
use std::io::IsTerminal;
use tsk_core::Task;

use crate::colors;

/// Column headers, in display order.
pub const COLUMNS: [&str; 6] = ["ID", "Active", "Age", "P", "Tags", "Title"];

/// Marker for active tasks when rows cannot be highlighted.
pub const ACTIVE_MARK: &str = "\u{2714}\u{FE0E}";

const COLUMN_GAP: &str = "  ";
const ELLIPSIS: char = '\u{2026}';

/// A table row ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub cells: [String; 6],
    pub highlight: bool,
}

/// Build display rows, one per task.
///
/// With colors the active row is highlighted; without them the Active
/// column carries a check mark instead.
pub fn task_rows(tasks: &[Task], now: DateTime<Utc>, color: bool) -> Vec<Row> {
    tasks
        .iter()
        .map(|task| {
            let active = task.is_active();
            let marker = if active && !color { ACTIVE_MARK } else { "" };
            Row {
                cells: [
                    task.short_id.to_string(),
                    marker.to_string(),
                    format_age(task.created_at, now),
                    task.priority.clone().unwrap_or_default(),
                    task.tags.join(" "),
                    task.title.clone(),
                ],
                highlight: active,
            }
        })
        .collect()
}

/// Render rows as an aligned table.
///
/// The last column is truncated when `width` is known and the line would
/// overflow it.
pub fn render_table(rows: &[Row], color: bool, width: Option<usize>) -> String {
    let mut widths = COLUMNS.map(display_width);
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(&row.cells) {
            *w = (*w).max(display_width(cell));
        }
    }

    let header_cells = COLUMNS.map(String::from);
    let mut lines = Vec::with_capacity(rows.len() + 1);

    let header = format_line(&header_cells, &widths, width);
    lines.push(if color { colors::header(&header) } else { header });

    for row in rows {
        let line = format_line(&row.cells, &widths, width);
        lines.push(if color && row.highlight {
            colors::active(&line)
        } else {
            line
        });
    }

    lines.join("\n")
}

fn format_line(cells: &[String; 6], widths: &[usize; 6], max_width: Option<usize>) -> String {
    let mut line = String::new();
    let last = cells.len() - 1;

    for (i, (cell, &w)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        if i == last {
            let room = max_width.map(|max| max.saturating_sub(display_width(&line)));
            line.push_str(&truncate(cell, room));
        } else {
            line.push_str(cell);
            line.push_str(&" ".repeat(w - display_width(cell)));
        }
    }

    line.trim_end().to_string()
}

fn truncate(text: &str, room: Option<usize>) -> String {
    match room {
        Some(room) if display_width(text) > room => {
            let mut out: String = text.chars().take(room.saturating_sub(1)).collect();
            out.push(ELLIPSIS);
            out
        }
        _ => text.to_string(),
    }
}

/// Width in terminal columns, ignoring variation selectors.
fn display_width(text: &str) -> usize {
    text.chars().filter(|c| *c != '\u{FE0E}').count()
}

/// Terminal width, when stdout is a terminal.
pub fn terminal_width() -> Option<usize> {
    if !std::io::stdout().is_terminal() {
        return None;
    }
    crossterm::terminal::size().ok().map(|(cols, _)| usize::from(cols))
}

/// Format the time since `since` as a compact age like `5m` or `3w`.
pub fn format_age(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - since).num_seconds().max(0);

    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const WEEK: i64 = 7 * DAY;
    const MONTH: i64 = 30 * DAY;
    const YEAR: i64 = 365 * DAY;

    match secs {
        s if s < MINUTE => format!("{}s", s),
        s if s < HOUR => format!("{}m", s / MINUTE),
        s if s < DAY => format!("{}h", s / HOUR),
        s if s < WEEK => format!("{}d", s / DAY),
        s if s < MONTH => format!("{}w", s / WEEK),
        s if s < YEAR => format!("{}mo", s / MONTH),
        s => format!("{}y", s / YEAR),
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
