// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use tsk_core::Database;

use crate::args::{CommandKind, ParseContext};
use crate::error::{Error, Result};

use super::{open_db, prepare, Options};

pub fn run(options: &Options, words: &[String]) -> Result<()> {
    let (ctx, config) = prepare(options, CommandKind::Add, words)?;
    let mut db = open_db(&config)?;
    run_impl(&mut db, &ctx, Utc::now())?;
    Ok(())
}

/// Store the drafted task and report its short id.
pub(crate) fn run_impl(db: &mut Database, ctx: &ParseContext, now: DateTime<Utc>) -> Result<i64> {
    let draft = ctx.draft().ok_or(Error::MissingTitle)?;
    let mut task = draft.clone().into_task(now);
    let short_id = db.add_task(&mut task)?;

    println!("Created task {}", short_id);
    Ok(short_id)
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
