// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn text(s: &str) -> Token {
    Token::Text(s.to_string())
}

fn scoped(scope: &str, value: &str) -> Token {
    Token::Scoped {
        scope: scope.to_string(),
        value: value.to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Single words
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    plain = { "milk", text("milk") },
    number = { "3", text("3") },
    tag = { "#errand", Token::Tag("errand".into()) },
    tag_with_colon = { "#a:b", Token::Tag("a:b".into()) },
    scoped_word = { "priority:H", scoped("priority", "H") },
    scoped_modifier = { "priority.not:H", scoped("priority.not", "H") },
    value_with_colon = { "id:a:b", scoped("id", "a:b") },
    leading_colon = { ":foo", text(":foo") },
    time_of_day = { "12:30", text("12:30") },
    spaced_scope = { "a b:c", text("a b:c") },
    hash_inside = { "c#", text("c#") },
)]
fn classify_word_kinds(word: &str, expected: Token) {
    assert_eq!(classify_word(word).unwrap(), Some(expected));
}

#[parameterized(
    empty = { "" },
    spaces = { "   " },
)]
fn blank_words_are_skipped(word: &str) {
    assert_eq!(classify_word(word).unwrap(), None);
}

#[parameterized(
    bare_marker = { "#" },
    marker_and_space = { "# " },
)]
fn empty_tag_fails(word: &str) {
    assert!(matches!(classify_word(word), Err(Error::EmptyTag)));
}

#[test]
fn empty_scope_value_names_scope() {
    let err = classify_word("priority:").unwrap_err();
    assert!(matches!(err, Error::MissingScopeValue { ref scope } if scope == "priority"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Sequences
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn plain_words_stay_text_in_order() {
    let words = ["Buy", "milk", "and", "eggs"];
    let tokens = classify(&words).unwrap();
    assert_eq!(
        tokens,
        vec![text("Buy"), text("milk"), text("and"), text("eggs")]
    );
}

#[test]
fn mixed_words_keep_order() {
    let words = vec![
        "Buy".to_string(),
        "#errand".to_string(),
        "milk".to_string(),
        "priority:H".to_string(),
    ];
    let tokens = classify(&words).unwrap();
    assert_eq!(
        tokens,
        vec![
            text("Buy"),
            Token::Tag("errand".into()),
            text("milk"),
            scoped("priority", "H"),
        ]
    );
}

#[test]
fn first_error_aborts_classification() {
    let words = ["ok", "#", "priority:"];
    assert!(matches!(classify(&words), Err(Error::EmptyTag)));
}

#[test]
fn empty_input_yields_no_tokens() {
    let words: [&str; 0] = [];
    assert!(classify(&words).unwrap().is_empty());
}
