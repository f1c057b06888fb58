// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Free-form command arguments.
//!
//! Commands take loose words rather than flags:
//!
//! ```text
//! tsk add Buy milk #errand priority:H
//! tsk done 3
//! tsk list #errand priority.not:L
//! ```
//!
//! [`token`] classifies each word; [`context`] interprets the tokens for the
//! invoking command, producing either a task draft or a filter set.

pub mod context;
pub mod token;

pub use context::{
    CommandKind, ContextConfig, Intent, Mode, ParseContext, TaskDraft, DEFAULT_BULK_THRESHOLD,
};
pub use token::{classify, classify_word, Token};
