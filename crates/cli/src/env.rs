// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Environment variable names read by the CLI.
pub mod vars {
    pub const TSK_DB: &str = "TSK_DB";
    pub const TSK_DEBUG: &str = "TSK_DEBUG";
    pub const DEBUG: &str = "DEBUG";
    pub const NO_COLOR: &str = "NO_COLOR";
    pub const COLOR: &str = "COLOR";
}

/// Returns the value of `TSK_DB` if set and non-empty.
pub fn db_path() -> Option<PathBuf> {
    std::env::var(vars::TSK_DB)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns `true` if `TSK_DEBUG` or `DEBUG` is set to a non-empty value.
pub fn debug() -> bool {
    [vars::TSK_DEBUG, vars::DEBUG]
        .iter()
        .any(|name| std::env::var(name).is_ok_and(|v| !v.is_empty()))
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
