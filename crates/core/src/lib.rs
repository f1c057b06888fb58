// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tsk-core: storage and query engine for the tsk task tracker
//!
//! Tasks live in an embedded SQLite database as JSON payloads keyed by a
//! stable id, with a separate table handing out short integer ids for
//! display and selection. This crate compiles filter/edit sets into SQL and
//! executes them; command-line parsing lives in the `tsk` crate.

pub mod assign;
pub mod db;
pub mod error;
pub mod id;
pub mod query;
pub mod task;

pub use db::Database;
pub use error::{Error, Result};
pub use query::{
    compile, Column, CompiledQuery, Edit, Filter, FilterKey, JsonPath, Operator, Param, Statement,
};
pub use task::{Status, Task};
