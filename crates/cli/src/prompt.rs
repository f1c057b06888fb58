// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Yes/no confirmation before mutating tasks.

use std::io::{self, BufRead, Write};

/// Asks the user to confirm an operation.
pub trait Prompt {
    /// Returns true if the operation should proceed.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Line-based prompt over any reader and writer.
///
/// Answers starting with `y` accept and `n` decline. Anything else, or a
/// read failure, is reported and accepted.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompt { input, output }
    }

    fn read_answer(&mut self) -> Option<char> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.chars().next().unwrap_or('\n')),
        }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        let _ = write!(self.output, "{} (y/n) ", message);
        let _ = self.output.flush();

        match self.read_answer() {
            Some('y') => true,
            Some('n') => false,
            Some(_) => {
                let _ = writeln!(self.output, "Invalid input");
                true
            }
            None => {
                let _ = writeln!(self.output, "Failed to read input");
                true
            }
        }
    }
}

/// Prompt reading from stdin and writing to stdout.
pub fn stdin_prompt() -> LinePrompt<io::StdinLock<'static>, io::Stdout> {
    LinePrompt::new(io::stdin().lock(), io::stdout())
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
