// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stable task identifiers.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Generate a task ID from title and timestamp.
/// Format: first 8 hex chars of SHA256(title + timestamp)
pub fn generate_id(title: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", title, created_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    hex::encode(&hash[..4])
}

/// Generate a unique ID, handling collisions by appending incrementing suffix.
pub fn generate_unique_id<F>(title: &str, created_at: &DateTime<Utc>, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base_id = generate_id(title, created_at);

    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
