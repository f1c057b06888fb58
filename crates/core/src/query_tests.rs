// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

const JOIN: &str = "FROM tasks JOIN assignments ON tasks.id = assignments.task_id";

// ─────────────────────────────────────────────────────────────────────────────
// Statement shapes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn select_without_filters_hides_done() {
    let query = compile(Statement::Select, &[]);
    assert_eq!(
        query.sql,
        format!(
            "SELECT tasks.id, tasks.template_id, assignments.id, tasks.data {JOIN} \
             WHERE tasks.data ->> '$.status' IS NOT 'done' ORDER BY assignments.id"
        )
    );
    assert!(query.params.is_empty());
}

#[test]
fn count_uses_same_join() {
    let query = compile(Statement::Count, &[Filter::short_id(3)]);
    assert_eq!(
        query.sql,
        format!(
            "SELECT COUNT(tasks.id) {JOIN} \
             WHERE tasks.data ->> '$.status' IS NOT 'done' AND assignments.id = ?1"
        )
    );
    assert_eq!(query.params, vec![Param::Integer(3)]);
}

#[test]
fn short_ids_are_ordered() {
    let query = compile(Statement::ShortIds, &[]);
    assert!(query.sql.starts_with("SELECT assignments.id FROM tasks"));
    assert!(query.sql.ends_with("ORDER BY assignments.id"));
}

#[test]
fn update_binds_edits_before_filters() {
    let edits = [
        Edit::new(JsonPath::Status, "active"),
        Edit::new(JsonPath::UpdatedAt, "2026-01-01T00:00:00Z"),
    ];
    let query = compile(Statement::Update(&edits), &[Filter::has_tag("errand")]);

    assert_eq!(
        query.sql,
        format!(
            "UPDATE tasks SET data = json_set(data, '$.status', ?1, '$.updated_at', ?2) \
             WHERE tasks.id IN (SELECT tasks.id {JOIN} \
             WHERE tasks.data ->> '$.status' IS NOT 'done' AND \
             EXISTS (SELECT 1 FROM json_each(tasks.data, '$.tags') WHERE json_each.value = ?3))"
        )
    );
    assert_eq!(
        query.params,
        vec![
            Param::Text("active".into()),
            Param::Text("2026-01-01T00:00:00Z".into()),
            Param::Text("errand".into()),
        ]
    );
}

#[test]
fn update_without_edits_is_still_valid_sql() {
    let query = compile(Statement::Update(&[]), &[Filter::short_id(1)]);
    assert!(query.sql.starts_with("UPDATE tasks SET data = data WHERE"));
}

#[test]
fn delete_targets_subselect() {
    let query = compile(Statement::Delete, &[Filter::short_id(2)]);
    assert_eq!(
        query.sql,
        format!(
            "DELETE FROM tasks WHERE tasks.id IN (SELECT tasks.id {JOIN} \
             WHERE tasks.data ->> '$.status' IS NOT 'done' AND assignments.id = ?1)"
        )
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Predicate translation
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    short_id = { Filter::short_id(5), "assignments.id = ?1" },
    task_id = { Filter::task_id("abc"), "tasks.id = ?1" },
    priority_eq = { Filter::field(JsonPath::Priority, Operator::Eq, "H"), "tasks.data ->> '$.priority' = ?1" },
    priority_ne = { Filter::field(JsonPath::Priority, Operator::Ne, "H"), "tasks.data ->> '$.priority' IS NOT ?1" },
    template_ne = {
        Filter { key: FilterKey::Column(Column::TemplateId), op: Operator::Ne, value: Param::Text("t".into()) },
        "tasks.template_id IS NOT ?1"
    },
)]
fn predicate_rendering(filter: Filter, expected: &str) {
    let query = compile(Statement::Count, &[filter]);
    assert!(
        query.sql.ends_with(expected),
        "{} does not end with {}",
        query.sql,
        expected
    );
}

#[test]
fn status_filter_replaces_implicit_exclusion() {
    let filters = [Filter::field(JsonPath::Status, Operator::Eq, "done")];
    let query = compile(Statement::Select, &filters);
    assert!(!query.sql.contains("'done'"));
    assert!(query.sql.contains("tasks.data ->> '$.status' = ?1"));
}

#[test]
fn status_inequality_also_counts_as_targeting_status() {
    let filters = [Filter::field(JsonPath::Status, Operator::Ne, "active")];
    let query = compile(Statement::Count, &filters);
    assert!(!query.sql.contains("IS NOT 'done'"));
}

#[test]
fn predicates_follow_supplied_order() {
    let filters = [Filter::has_tag("a"), Filter::short_id(1), Filter::has_tag("b")];
    let query = compile(Statement::Count, &filters);

    let tag_pos = query.sql.find("json_each").unwrap();
    let id_pos = query.sql.find("assignments.id = ?2").unwrap();
    assert!(tag_pos < id_pos);
    assert!(query.sql.ends_with("json_each.value = ?3)"));
    assert_eq!(
        query.params,
        vec![
            Param::Text("a".into()),
            Param::Integer(1),
            Param::Text("b".into())
        ]
    );
}

#[test]
fn user_values_never_appear_in_sql() {
    let hostile = "x' OR 1=1 --";
    let filters = [
        Filter::has_tag(hostile),
        Filter::field(JsonPath::Priority, Operator::Eq, hostile),
    ];
    let edits = [Edit::new(JsonPath::Title, hostile)];

    for statement in [
        Statement::Select,
        Statement::Count,
        Statement::Update(&edits),
        Statement::Delete,
    ] {
        let query = compile(statement, &filters);
        assert!(!query.sql.contains(hostile));
    }
}

#[test]
fn compile_is_deterministic() {
    let filters = [Filter::has_tag("errand"), Filter::short_id(4)];
    assert_eq!(
        compile(Statement::Select, &filters),
        compile(Statement::Select, &filters)
    );
}

#[test]
fn targets_status_only_for_status_field() {
    assert!(Filter::field(JsonPath::Status, Operator::Eq, "done").targets_status());
    assert!(!Filter::field(JsonPath::Priority, Operator::Eq, "done").targets_status());
    assert!(!Filter::short_id(1).targets_status());
}
