// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text styling.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles matching the list and example colors.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Words accepted by every task command, shown after the main help.
pub fn syntax() -> String {
    colors::examples(
        "\
Arguments:
  Buy milk          Free text: the title for add
  #errand           Tag: added on add, matched otherwise
  priority:H        Scope: p, priority, status, id, tag
  priority.not:H    Negated scope (p, priority, status, id)
  3                 Short id: selects task 3

Examples:
  tsk add Buy milk #errand p:H    Create a task
  tsk list #errand                List tasks tagged errand
  tsk start 3                     Start task 3
  tsk done #errand                Finish every errand",
    )
}
