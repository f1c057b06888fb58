// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{ScriptedPrompt, TestContext};
use crate::commands::lifecycle::{self, Transition};

fn list(ctx: &TestContext, words: &[&str]) -> Vec<Task> {
    let parsed = ctx.parse(CommandKind::List, words);
    run_impl(&ctx.db, &parsed, OutputFormat::Text).unwrap()
}

fn finish(ctx: &mut TestContext, id: &str) {
    let parsed = ctx.parse(CommandKind::Done, &[id]);
    let mut prompt = ScriptedPrompt::answering(true);
    lifecycle::run_impl(&mut ctx.db, &parsed, Transition::Done, &mut prompt).unwrap();
}

#[test]
fn lists_open_tasks_in_id_order() {
    let mut ctx = TestContext::new();
    ctx.add(&["a"]);
    ctx.add(&["b"]);
    ctx.add(&["c"]);
    finish(&mut ctx, "2");

    let ids: Vec<i64> = list(&ctx, &[]).iter().map(|t| t.short_id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn status_filter_shows_done_tasks() {
    let mut ctx = TestContext::new();
    ctx.add(&["a"]);
    ctx.add(&["b"]);
    finish(&mut ctx, "1");

    let tasks = list(&ctx, &["status:done"]);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "a");
}

#[test]
fn tag_and_priority_filters_combine() {
    let mut ctx = TestContext::new();
    ctx.add(&["a", "#x", "p:H"]);
    ctx.add(&["b", "#x", "p:L"]);
    ctx.add(&["c", "#y", "p:H"]);

    let tasks = list(&ctx, &["#x", "priority.not:L"]);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "a");
}

#[test]
fn missing_priority_passes_negated_priority() {
    let mut ctx = TestContext::new();
    ctx.add(&["a"]);

    assert_eq!(list(&ctx, &["p.not:H"]).len(), 1);
}

#[test]
fn empty_text_output_is_a_message() {
    let out = render(&[], OutputFormat::Text, Utc::now(), false, None).unwrap();
    assert_eq!(out, EMPTY_MESSAGE);
}

#[test]
fn empty_json_output_is_an_array() {
    let out = render(&[], OutputFormat::Json, Utc::now(), false, None).unwrap();
    assert_eq!(out, "[]");
}

#[test]
fn json_output_carries_fields() {
    let mut ctx = TestContext::new();
    ctx.add(&["Buy", "milk", "#errand"]);
    let tasks = list(&ctx, &[]);

    let out = render(&tasks, OutputFormat::Json, Utc::now(), false, None).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["id"], 1);
    assert_eq!(value[0]["title"], "Buy milk");
    assert_eq!(value[0]["status"], "pending");
    assert_eq!(value[0]["tags"][0], "errand");
    assert!(value[0].get("priority").is_none());
    assert_eq!(value[0]["task_id"].as_str().unwrap().len(), 8);
}

#[test]
fn text_output_has_header_and_rows() {
    let mut ctx = TestContext::new();
    ctx.add(&["Buy", "milk"]);
    let tasks = list(&ctx, &[]);

    let out = render(&tasks, OutputFormat::Text, Utc::now(), false, None).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID  Active  Age"));
    assert!(lines[1].ends_with("Buy milk"));
}
