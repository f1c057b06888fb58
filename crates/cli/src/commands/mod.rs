// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod delete;
pub mod lifecycle;
pub mod list;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::PathBuf;

use tsk_core::Database;

use crate::args::{CommandKind, ParseContext};
use crate::config::Config;
use crate::env;
use crate::error::Result;

/// Question asked before a mutation proceeds.
pub const CONFIRM_MESSAGE: &str = "Are you sure you want to continue?";

/// Global options shared by every task command.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Explicit config file (`--config`).
    pub config: Option<PathBuf>,
    /// Bulk threshold override (`--bulk`).
    pub bulk: Option<usize>,
}

/// Load configuration and interpret the command's words.
///
/// Runs before the database is opened so malformed input never touches it.
pub fn prepare(
    options: &Options,
    command: CommandKind,
    words: &[String],
) -> Result<(ParseContext, Config)> {
    let config = Config::discover(options.config.as_deref())?;
    let ctx = ParseContext::parse(command, words, config.context_config(options.bulk))?;
    tracing::debug!(
        command = command.name(),
        filters = ctx.filters().len(),
        "parsed arguments"
    );
    Ok((ctx, config))
}

/// Helper to open the database named by the environment or config.
pub fn open_db(config: &Config) -> Result<Database> {
    let db_path = config.db_path(env::db_path())?;
    tracing::debug!(path = %db_path.display(), "opening database");
    Ok(Database::open(&db_path)?)
}

/// `"task"` or `"tasks"` depending on `count`.
pub fn pluralize(count: usize) -> &'static str {
    if count == 1 {
        "task"
    } else {
        "tasks"
    }
}
