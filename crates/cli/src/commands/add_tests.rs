// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use tsk_core::Status;

#[test]
fn creates_pending_task_with_payload() {
    let mut ctx = TestContext::new();
    let parsed = ctx.parse(CommandKind::Add, &["Buy", "milk", "#errand", "priority:H"]);

    let id = run_impl(&mut ctx.db, &parsed, Utc::now()).unwrap();
    assert_eq!(id, 1);

    let task = ctx.task(1).unwrap();
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.tags, vec!["errand"]);
    assert_eq!(task.priority.as_deref(), Some("H"));
    assert_eq!(task.status, Status::Pending);
    assert_eq!(task.created_at, task.updated_at);
}

#[test]
fn ids_increase_per_add() {
    let mut ctx = TestContext::new();
    for expected in 1..=3 {
        let parsed = ctx.parse(CommandKind::Add, &["task"]);
        assert_eq!(run_impl(&mut ctx.db, &parsed, Utc::now()).unwrap(), expected);
    }
}

#[test]
fn selection_context_has_no_draft() {
    let mut ctx = TestContext::new();
    let parsed = ctx.parse(CommandKind::List, &[]);
    let err = run_impl(&mut ctx.db, &parsed, Utc::now()).unwrap_err();
    assert!(matches!(err, Error::MissingTitle));
}
