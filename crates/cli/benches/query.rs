// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for argument interpretation and SQL compilation.

#![allow(clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tsk_core::{compile, Edit, JsonPath, Statement};
use tskrs::args::{classify, CommandKind, ContextConfig, ParseContext};

const INPUTS: [(&str, &[&str]); 4] = [
    ("short_id", &["3"]),
    ("tag", &["#errand"]),
    ("scoped", &["priority.not:L", "status:active"]),
    ("mixed", &["#errand", "#home", "2", "p:H", "id:ab12cd34"]),
];

fn argument_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("argument_parsing");

    for (name, words) in INPUTS {
        group.bench_with_input(BenchmarkId::new("classify", name), words, |b, w| {
            b.iter(|| classify(w))
        });
        group.bench_with_input(BenchmarkId::new("parse_context", name), words, |b, w| {
            b.iter(|| ParseContext::parse(CommandKind::List, w, ContextConfig::default()))
        });
    }
    group.finish();
}

fn sql_compilation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_compilation");
    let edits = [
        Edit::new(JsonPath::Status, "done"),
        Edit::new(JsonPath::UpdatedAt, "2026-01-01T00:00:00Z"),
    ];

    for (name, words) in INPUTS {
        let ctx = ParseContext::parse(CommandKind::List, words, ContextConfig::default())
            .expect("valid words");
        let filters = ctx.filters().to_vec();

        group.bench_with_input(BenchmarkId::new("select", name), &filters, |b, f| {
            b.iter(|| compile(Statement::Select, f))
        });
        group.bench_with_input(BenchmarkId::new("update", name), &filters, |b, f| {
            b.iter(|| compile(Statement::Update(&edits), f))
        });
    }
    group.finish();
}

criterion_group!(benches, argument_parsing, sql_compilation);
criterion_main!(benches);
