// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tsk_core::Database;

use crate::args::{CommandKind, ParseContext};
use crate::error::{Error, Result};
use crate::prompt::{stdin_prompt, Prompt};

use super::{open_db, prepare, Options, CONFIRM_MESSAGE};

pub fn run(options: &Options, words: &[String]) -> Result<()> {
    let (ctx, config) = prepare(options, CommandKind::Delete, words)?;
    let mut db = open_db(&config)?;
    run_impl(&mut db, &ctx, &mut stdin_prompt())?;
    Ok(())
}

/// Delete exactly one selected task after confirmation.
///
/// Deleting several tasks at once is refused before anything is asked.
pub(crate) fn run_impl(
    db: &mut Database,
    ctx: &ParseContext,
    prompt: &mut dyn Prompt,
) -> Result<Vec<i64>> {
    let filters = ctx.filters();
    let count = db.count_tasks(filters)?;
    match count {
        0 => return Err(Error::NoMatch),
        1 => {}
        _ => return Err(Error::BulkDeleteUnsupported { count }),
    }

    if !prompt.confirm(CONFIRM_MESSAGE) {
        return Err(Error::Cancelled);
    }

    let ids = db.delete_tasks(filters)?;
    for id in &ids {
        println!("Deleted task {}", id);
    }
    Ok(ids)
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
