// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for `list`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "tsk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A personal task tracker for the command line")]
#[command(after_help = help::syntax())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Read configuration from <path> instead of the default location
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Ask for confirmation when at least <n> tasks are affected
    #[arg(long, global = true, value_name = "n")]
    pub bulk: Option<usize>,

    /// Log compiled SQL and other debug output to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new task
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  tsk add Buy milk                  Create a task
  tsk add Buy milk #errand          Create a tagged task
  tsk add Call bank priority:H      Create a task with priority H"))]
    Add {
        /// Title words, #tags and priority:<value>
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List open tasks
    #[command(
        visible_alias = "ls",
        after_help = colors::examples("\
Examples:
  tsk list                          List pending and active tasks
  tsk list #errand                  List tasks tagged errand
  tsk list status:done              List completed tasks
  tsk list priority.not:L           List tasks not at priority L"))]
    List {
        /// Short ids, #tags and scope:value filters
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,

        /// Output format
        #[arg(long = "format", short = 'f', value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Start work on task(s)
    #[command(arg_required_else_help = true)]
    Start {
        /// Short ids, #tags and scope:value filters
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Move task(s) back to pending
    #[command(arg_required_else_help = true)]
    Stop {
        /// Short ids, #tags and scope:value filters
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Mark task(s) as done
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  tsk done 3                        Complete task 3
  tsk done #errand                  Complete every open errand"))]
    Done {
        /// Short ids, #tags and scope:value filters
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Delete a single task
    #[command(visible_alias = "rm", arg_required_else_help = true)]
    Delete {
        /// Short ids, #tags and scope:value filters
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
