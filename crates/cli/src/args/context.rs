// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turning classified tokens into command intent.
//!
//! The same token shape means different things depending on the command:
//! `add` reads tokens as the payload of a new task, while `list`, `start`,
//! `stop`, `done` and `delete` read them as selection predicates. The two
//! interpretations are kept in separate tables (`assignment_scope` and
//! `selection_scope`).

use chrono::{DateTime, Utc};
use tsk_core::{Column, Filter, FilterKey, JsonPath, Operator, Param, Status, Task};

use crate::error::{Error, Result};

use super::token::{classify, Token};

/// Bulk mutations at or above this many tasks ask for confirmation.
pub const DEFAULT_BULK_THRESHOLD: usize = 4;

/// Suffix on a scope that turns equality into inequality (`priority.not:H`).
const NEGATION_SUFFIX: &str = ".not";

const CREATE_SCOPES: &str = "priority, p";
const SELECT_SCOPES: &str = "priority, p, status, id, tag (append .not to negate priority, status or id)";

/// The command a parse is performed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    List,
    Start,
    Stop,
    Done,
    Delete,
}

/// How a command interprets its tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Tokens describe a task to create.
    Create,
    /// Tokens select existing tasks.
    Select,
}

impl CommandKind {
    /// Returns the command name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Add => "add",
            CommandKind::List => "list",
            CommandKind::Start => "start",
            CommandKind::Stop => "stop",
            CommandKind::Done => "done",
            CommandKind::Delete => "delete",
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            CommandKind::Add => Mode::Create,
            _ => Mode::Select,
        }
    }

    /// Mutating selection commands refuse to run against the whole table.
    pub fn requires_filters(&self) -> bool {
        matches!(
            self,
            CommandKind::Start | CommandKind::Stop | CommandKind::Done | CommandKind::Delete
        )
    }
}

/// Per-invocation behaviour knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextConfig {
    /// Number of matched tasks at which a mutation requires confirmation.
    pub bulk_threshold: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        ContextConfig {
            bulk_threshold: DEFAULT_BULK_THRESHOLD,
        }
    }
}

impl ContextConfig {
    /// Returns true if mutating `count` tasks needs confirmation.
    pub fn is_bulk(&self, count: usize) -> bool {
        count >= self.bulk_threshold
    }
}

/// Fields collected for a task being created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub priority: Option<String>,
    pub tags: Vec<String>,
}

impl TaskDraft {
    /// Build the task to store.
    pub fn into_task(self, now: DateTime<Utc>) -> Task {
        let mut task = Task::new(self.title, now);
        task.priority = self.priority;
        task.tags = self.tags;
        task
    }
}

/// What the tokens amount to for the invoking command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Create(TaskDraft),
    Select(Vec<Filter>),
}

/// Parsed command input passed from argument handling to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext {
    pub command: CommandKind,
    pub tokens: Vec<Token>,
    pub intent: Intent,
    pub config: ContextConfig,
}

impl ParseContext {
    /// Classify raw words and build the context in one step.
    pub fn parse<S: AsRef<str>>(
        command: CommandKind,
        words: &[S],
        config: ContextConfig,
    ) -> Result<Self> {
        let tokens = classify(words)?;
        Self::build(command, tokens, config)
    }

    /// Interpret classified tokens for `command`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidScope`] for a scope the command does not understand
    /// - [`Error::MissingTitle`] when creating without any text
    /// - [`Error::MissingFilters`] when a mutating command selects nothing
    pub fn build(command: CommandKind, tokens: Vec<Token>, config: ContextConfig) -> Result<Self> {
        let intent = match command.mode() {
            Mode::Create => Intent::Create(build_draft(&tokens)?),
            Mode::Select => {
                let filters = build_filters(&tokens)?;
                if filters.is_empty() && command.requires_filters() {
                    return Err(Error::MissingFilters {
                        command: command.name(),
                    });
                }
                Intent::Select(filters)
            }
        };

        Ok(ParseContext {
            command,
            tokens,
            intent,
            config,
        })
    }

    /// Selection filters; empty for creation.
    pub fn filters(&self) -> &[Filter] {
        match &self.intent {
            Intent::Select(filters) => filters,
            Intent::Create(_) => &[],
        }
    }

    /// The draft task; `None` for selection.
    pub fn draft(&self) -> Option<&TaskDraft> {
        match &self.intent {
            Intent::Create(draft) => Some(draft),
            Intent::Select(_) => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Create mode
// ─────────────────────────────────────────────────────────────────────────────

/// Fields a scoped token may assign on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssignTarget {
    Priority,
}

fn assignment_scope(scope: &str) -> Option<AssignTarget> {
    match scope {
        "priority" | "p" => Some(AssignTarget::Priority),
        _ => None,
    }
}

fn build_draft(tokens: &[Token]) -> Result<TaskDraft> {
    let mut draft = TaskDraft::default();
    let mut words = Vec::new();

    for token in tokens {
        match token {
            Token::Text(text) => words.push(text.as_str()),
            Token::Tag(tag) => draft.tags.push(tag.clone()),
            Token::Scoped { scope, value } => match assignment_scope(scope) {
                Some(AssignTarget::Priority) => draft.priority = Some(value.clone()),
                None => {
                    return Err(Error::InvalidScope {
                        scope: scope.clone(),
                        valid: CREATE_SCOPES,
                    })
                }
            },
        }
    }

    draft.title = words.join(" ");
    if draft.title.trim().is_empty() {
        return Err(Error::MissingTitle);
    }
    Ok(draft)
}

// ─────────────────────────────────────────────────────────────────────────────
// Select mode
// ─────────────────────────────────────────────────────────────────────────────

/// What a scoped token filters on during selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectTarget {
    Priority,
    Status,
    TaskId,
    Tag,
}

fn selection_scope(scope: &str) -> Option<SelectTarget> {
    match scope {
        "priority" | "p" => Some(SelectTarget::Priority),
        "status" => Some(SelectTarget::Status),
        "id" => Some(SelectTarget::TaskId),
        "tag" => Some(SelectTarget::Tag),
        _ => None,
    }
}

fn build_filters(tokens: &[Token]) -> Result<Vec<Filter>> {
    let mut filters = Vec::new();

    for token in tokens {
        match token {
            Token::Text(text) => match parse_short_id(text) {
                Some(id) => filters.push(Filter::short_id(id)),
                None => tracing::debug!(text = %text, "ignoring free text in selection"),
            },
            Token::Tag(tag) => filters.push(Filter::has_tag(tag.clone())),
            Token::Scoped { scope, value } => filters.push(scoped_filter(scope, value)?),
        }
    }

    Ok(filters)
}

fn scoped_filter(scope: &str, value: &str) -> Result<Filter> {
    let (name, op) = match scope.strip_suffix(NEGATION_SUFFIX) {
        Some(name) => (name, Operator::Ne),
        None => (scope, Operator::Eq),
    };

    let invalid = || Error::InvalidScope {
        scope: scope.to_string(),
        valid: SELECT_SCOPES,
    };

    let target = selection_scope(name).ok_or_else(invalid)?;
    let filter = match target {
        SelectTarget::Priority => Filter::field(JsonPath::Priority, op, value),
        SelectTarget::Status => {
            let status: Status = value.parse()?;
            Filter::field(JsonPath::Status, op, status.as_str())
        }
        SelectTarget::TaskId => Filter {
            key: FilterKey::Column(Column::TaskId),
            op,
            value: Param::Text(value.to_string()),
        },
        SelectTarget::Tag if op == Operator::Eq => Filter::has_tag(value),
        SelectTarget::Tag => return Err(invalid()),
    };
    Ok(filter)
}

/// Positive integers address tasks by short id.
///
/// Digit runs past `i64::MAX` still select, and match nothing.
fn parse_short_id(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match text.parse::<i64>() {
        Ok(0) => None,
        Ok(id) => Some(id),
        Err(_) => Some(i64::MAX),
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
