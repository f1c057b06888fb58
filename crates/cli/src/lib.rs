// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tskrs - the command-line side of the tsk task tracker.
//!
//! Commands take free-form words instead of flags. Each word is classified
//! as text, a `#tag` or a `scope:value` pair ([`args::token`]); the command
//! then reads the tokens either as a new task or as filters
//! ([`args::context`]). Storage and SQL compilation live in [`tsk_core`].
//!
//! # Main Components
//!
//! - [`args`] - word classification and per-command interpretation
//! - [`Config`] - user configuration (database location, bulk threshold)
//! - [`Error`] - error type for all commands
//!
//! ```rust,ignore
//! use tskrs::args::{CommandKind, ContextConfig, ParseContext};
//!
//! let ctx = ParseContext::parse(CommandKind::Done, &["#errand"], ContextConfig::default())?;
//! let db = tsk_core::Database::open(&path)?;
//! let count = db.count_tasks(ctx.filters())?;
//! ```

pub mod args;
mod cli;
pub mod colors;
mod commands;
pub mod config;
mod display;
pub mod env;
pub mod error;
pub mod help;
pub mod prompt;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::lifecycle::Transition;
use commands::Options;

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let options = Options {
        config: cli.config,
        bulk: cli.bulk,
    };

    match cli.command {
        Command::Add { args } => commands::add::run(&options, &args),
        Command::List { args, format } => commands::list::run(&options, &args, format),
        Command::Start { args } => commands::lifecycle::run(&options, Transition::Start, &args),
        Command::Stop { args } => commands::lifecycle::run(&options, Transition::Stop, &args),
        Command::Done { args } => commands::lifecycle::run(&options, Transition::Done, &args),
        Command::Delete { args } => commands::delete::run(&options, &args),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "tsk", &mut std::io::stdout());
            Ok(())
        }
    }
}
