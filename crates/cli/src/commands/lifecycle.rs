// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status transitions: `start`, `stop` and `done`.

use tsk_core::{Database, Edit, JsonPath, Status};

use crate::args::{CommandKind, ParseContext};
use crate::error::{Error, Result};
use crate::prompt::{stdin_prompt, Prompt};

use super::{open_db, pluralize, prepare, Options, CONFIRM_MESSAGE};

/// A status change applied to every selected task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Start,
    Stop,
    Done,
}

impl Transition {
    pub fn command(&self) -> CommandKind {
        match self {
            Transition::Start => CommandKind::Start,
            Transition::Stop => CommandKind::Stop,
            Transition::Done => CommandKind::Done,
        }
    }

    /// Status written by the transition.
    pub fn target(&self) -> Status {
        match self {
            Transition::Start => Status::Active,
            Transition::Stop => Status::Pending,
            Transition::Done => Status::Done,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Transition::Start => "start",
            Transition::Stop => "stop",
            Transition::Done => "complete",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            Transition::Start => "Started",
            Transition::Stop => "Stopped",
            Transition::Done => "Completed",
        }
    }
}

pub fn run(options: &Options, transition: Transition, words: &[String]) -> Result<()> {
    let (ctx, config) = prepare(options, transition.command(), words)?;
    let mut db = open_db(&config)?;
    run_impl(&mut db, &ctx, transition, &mut stdin_prompt())?;
    Ok(())
}

/// Count the selection, confirm when bulk, then edit status.
///
/// Returns the short ids of the edited tasks.
pub(crate) fn run_impl(
    db: &mut Database,
    ctx: &ParseContext,
    transition: Transition,
    prompt: &mut dyn Prompt,
) -> Result<Vec<i64>> {
    let filters = ctx.filters();
    let count = db.count_tasks(filters)?;
    if count == 0 {
        return Err(Error::NoMatch);
    }

    println!(
        "This command will {} {} {}",
        transition.verb(),
        count,
        pluralize(count)
    );

    if ctx.config.is_bulk(count) && !prompt.confirm(CONFIRM_MESSAGE) {
        return Err(Error::Cancelled);
    }

    let edits = [Edit::new(JsonPath::Status, transition.target().as_str())];
    let ids = db.edit_tasks(filters, &edits)?;
    for id in &ids {
        println!("{} task {}", transition.past_tense(), id);
    }
    Ok(ids)
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
