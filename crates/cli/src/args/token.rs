// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of raw command-line words.
//!
//! Words become one of three token kinds:
//!
//! ```text
//! Buy milk       # free text
//! #errand        # tag
//! priority:H     # scoped (scope "priority", value "H")
//! ```
//!
//! Whether a token is a payload or a predicate is decided later by the
//! context builder, based on the invoking command.

use crate::error::{Error, Result};

/// Prefix marking a tag word.
pub const TAG_MARKER: char = '#';

/// Separator between scope and value in a scoped word.
pub const SCOPE_SEPARATOR: char = ':';

/// A classified command-line word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Plain text; title words on creation.
    Text(String),
    /// A tag with the marker stripped.
    Tag(String),
    /// A `scope:value` pair, both sides verbatim.
    Scoped { scope: String, value: String },
}

/// Classify raw words in order. Blank words are skipped.
pub fn classify<S: AsRef<str>>(words: &[S]) -> Result<Vec<Token>> {
    let mut tokens = Vec::with_capacity(words.len());
    for word in words {
        if let Some(token) = classify_word(word.as_ref())? {
            tokens.push(token);
        }
    }
    Ok(tokens)
}

/// Classify a single word. Returns `None` for blank input.
pub fn classify_word(word: &str) -> Result<Option<Token>> {
    if word.trim().is_empty() {
        return Ok(None);
    }

    if let Some(tag) = word.strip_prefix(TAG_MARKER) {
        if tag.trim().is_empty() {
            return Err(Error::EmptyTag);
        }
        return Ok(Some(Token::Tag(tag.to_string())));
    }

    if let Some((scope, value)) = word.split_once(SCOPE_SEPARATOR) {
        if is_scope_name(scope) {
            if value.is_empty() {
                return Err(Error::MissingScopeValue {
                    scope: scope.to_string(),
                });
            }
            return Ok(Some(Token::Scoped {
                scope: scope.to_string(),
                value: value.to_string(),
            }));
        }
    }

    Ok(Some(Token::Text(word.to_string())))
}

/// Scope names start with a letter and contain letters, digits, `_` or `.`.
fn is_scope_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
