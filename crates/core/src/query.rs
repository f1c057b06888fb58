// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query compilation for task selection and mutation.
//!
//! Filters and edits are a small intermediate representation that
//! [`compile`] renders into one parameterized SQL statement against the
//! `tasks` table joined to `assignments`. Every user-supplied value travels
//! as a bound parameter; the only literal ever written into the SQL text is
//! the implicit `'done'` exclusion produced here.
//!
//! # Statement shapes
//!
//! - [`Statement::Select`] - task columns plus raw payload, ordered by short id
//! - [`Statement::Count`] - `COUNT` over the same join
//! - [`Statement::ShortIds`] - allocated short ids of matching tasks
//! - [`Statement::Update`] - `json_set` of each edited payload field
//! - [`Statement::Delete`] - removes matching task rows

use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;

/// Join clause shared by every statement shape.
const FROM_JOIN: &str = "FROM tasks JOIN assignments ON tasks.id = assignments.task_id";

/// Predicate prepended unless a filter targets `status` explicitly.
const HIDE_DONE: &str = "tasks.data ->> '$.status' IS NOT 'done'";

/// Real columns reachable from a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// `tasks.id`, the stable identifier.
    TaskId,
    /// `tasks.template_id`, the recurrence template reference.
    TemplateId,
    /// `assignments.id`, the allocated short identifier.
    ShortId,
}

impl Column {
    fn sql(&self) -> &'static str {
        match self {
            Column::TaskId => "tasks.id",
            Column::TemplateId => "tasks.template_id",
            Column::ShortId => "assignments.id",
        }
    }
}

/// Fields of the JSON payload that queries may read or edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonPath {
    Title,
    Priority,
    Status,
    Tags,
    UpdatedAt,
}

impl JsonPath {
    /// Returns the payload key.
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonPath::Title => "title",
            JsonPath::Priority => "priority",
            JsonPath::Status => "status",
            JsonPath::Tags => "tags",
            JsonPath::UpdatedAt => "updated_at",
        }
    }

    /// Returns the SQLite JSON path selector, e.g. `'$.status'`.
    fn selector(&self) -> String {
        format!("'$.{}'", self.as_str())
    }
}

/// What a filter compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    /// A direct column comparison.
    Column(Column),
    /// A JSON-path extraction from `tasks.data`.
    Field(JsonPath),
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Equality (`=`).
    Eq,
    /// Inequality (`IS NOT`); also matches an absent field.
    Ne,
    /// Membership in a JSON array field.
    HasTag,
}

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Text(String),
    Integer(i64),
}

impl ToSql for Param {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Param::Text(s) => s.to_sql(),
            Param::Integer(i) => i.to_sql(),
        }
    }
}

/// A single predicate term. Filters compose with `AND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub key: FilterKey,
    pub op: Operator,
    pub value: Param,
}

impl Filter {
    /// Selects the task holding the given short id.
    pub fn short_id(id: i64) -> Self {
        Filter {
            key: FilterKey::Column(Column::ShortId),
            op: Operator::Eq,
            value: Param::Integer(id),
        }
    }

    /// Selects the task with the given stable id.
    pub fn task_id(id: impl Into<String>) -> Self {
        Filter {
            key: FilterKey::Column(Column::TaskId),
            op: Operator::Eq,
            value: Param::Text(id.into()),
        }
    }

    /// Selects tasks whose tag list contains `tag`.
    pub fn has_tag(tag: impl Into<String>) -> Self {
        Filter {
            key: FilterKey::Field(JsonPath::Tags),
            op: Operator::HasTag,
            value: Param::Text(tag.into()),
        }
    }

    /// Compares a payload field with a text value.
    pub fn field(path: JsonPath, op: Operator, value: impl Into<String>) -> Self {
        Filter {
            key: FilterKey::Field(path),
            op,
            value: Param::Text(value.into()),
        }
    }

    /// Returns true if this filter reads the payload `status` field.
    pub fn targets_status(&self) -> bool {
        self.key == FilterKey::Field(JsonPath::Status)
    }
}

/// Overwrites a single payload field, leaving the rest of the document intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub path: JsonPath,
    pub value: Param,
}

impl Edit {
    pub fn new(path: JsonPath, value: impl Into<String>) -> Self {
        Edit {
            path,
            value: Param::Text(value.into()),
        }
    }
}

/// Statement shape to compile.
#[derive(Debug, Clone, Copy)]
pub enum Statement<'a> {
    Select,
    Count,
    ShortIds,
    Update(&'a [Edit]),
    Delete,
}

/// SQL text plus its positional parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<Param>,
}

impl CompiledQuery {
    /// Parameters in the form rusqlite expects.
    pub fn bindings(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p as &dyn ToSql).collect()
    }
}

/// Accumulates placeholders so numbering follows emission order.
struct Binder {
    params: Vec<Param>,
}

impl Binder {
    fn bind(&mut self, value: &Param) -> String {
        self.params.push(value.clone());
        format!("?{}", self.params.len())
    }
}

/// Compile a statement over the given filters.
///
/// Compilation is total: any combination of well-formed filters and edits
/// renders to SQL. Predicates appear in the order supplied, after the
/// implicit `done` exclusion.
pub fn compile(statement: Statement<'_>, filters: &[Filter]) -> CompiledQuery {
    let mut binder = Binder { params: Vec::new() };

    let sql = match statement {
        Statement::Select => format!(
            "SELECT tasks.id, tasks.template_id, assignments.id, tasks.data {FROM_JOIN}{} ORDER BY assignments.id",
            where_clause(&mut binder, filters)
        ),
        Statement::Count => format!(
            "SELECT COUNT(tasks.id) {FROM_JOIN}{}",
            where_clause(&mut binder, filters)
        ),
        Statement::ShortIds => format!(
            "SELECT assignments.id {FROM_JOIN}{} ORDER BY assignments.id",
            where_clause(&mut binder, filters)
        ),
        Statement::Update(edits) => {
            let set = set_clause(&mut binder, edits);
            format!(
                "UPDATE tasks SET {set} WHERE tasks.id IN ({})",
                subselect(&mut binder, filters)
            )
        }
        Statement::Delete => format!(
            "DELETE FROM tasks WHERE tasks.id IN ({})",
            subselect(&mut binder, filters)
        ),
    };

    CompiledQuery {
        sql,
        params: binder.params,
    }
}

/// SQLite cannot join in `UPDATE`/`DELETE`, so mutations target ids from a
/// subquery with the same predicates as selection.
fn subselect(binder: &mut Binder, filters: &[Filter]) -> String {
    format!(
        "SELECT tasks.id {FROM_JOIN}{}",
        where_clause(binder, filters)
    )
}

fn set_clause(binder: &mut Binder, edits: &[Edit]) -> String {
    if edits.is_empty() {
        return "data = data".to_string();
    }

    let pairs: Vec<String> = edits
        .iter()
        .map(|edit| format!("{}, {}", edit.path.selector(), binder.bind(&edit.value)))
        .collect();
    format!("data = json_set(data, {})", pairs.join(", "))
}

fn where_clause(binder: &mut Binder, filters: &[Filter]) -> String {
    let mut predicates = Vec::with_capacity(filters.len() + 1);

    if !filters.iter().any(Filter::targets_status) {
        predicates.push(HIDE_DONE.to_string());
    }
    for filter in filters {
        predicates.push(predicate(binder, filter));
    }

    if predicates.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", predicates.join(" AND "))
    }
}

fn predicate(binder: &mut Binder, filter: &Filter) -> String {
    let placeholder = binder.bind(&filter.value);

    let operand = match filter.key {
        FilterKey::Column(column) => column.sql().to_string(),
        FilterKey::Field(path) => {
            if filter.op == Operator::HasTag {
                return format!(
                    "EXISTS (SELECT 1 FROM json_each(tasks.data, {}) WHERE json_each.value = {placeholder})",
                    path.selector()
                );
            }
            format!("tasks.data ->> {}", path.selector())
        }
    };

    match filter.op {
        Operator::Eq | Operator::HasTag => format!("{operand} = {placeholder}"),
        Operator::Ne => format!("{operand} IS NOT {placeholder}"),
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
