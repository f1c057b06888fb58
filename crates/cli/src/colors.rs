// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and list output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and scoped words: medium grey
    pub const CONTEXT: u8 = 245;
    /// Active task rows: soft green
    pub const ACTIVE: u8 = 114;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, codes::RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (placeholders, scoped words) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Highlight an active task row.
pub fn active(text: &str) -> String {
    paint(codes::ACTIVE, text)
}

/// Colorize an examples help block when colors are enabled.
///
/// ```text
/// Examples:
///   tsk add Buy milk #errand    Create a tagged task
/// ```
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 256);

    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
            continue;
        }

        if let Some(cmd_end) = find_description_start(trimmed) {
            result.push_str(indent);
            result.push_str(&colorize_command(&trimmed[..cmd_end]));
            result.push_str(&trimmed[cmd_end..]);
            continue;
        }

        result.push_str(line);
    }

    result
}

/// Colorize an example command line word by word.
///
/// Tags, `scope:value` words and `<placeholders>` use the context color,
/// everything else the literal color.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.is_empty() {
                String::new()
            } else if word.starts_with('#') || word.starts_with('<') || word.contains(':') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut space_start = None;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b' ' {
            space_start.get_or_insert(i);
        } else if let Some(start) = space_start.take() {
            if i - start >= 2 {
                return Some(start);
            }
        }
    }

    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
