// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result classification
//!
//! A script's exit code is a three-way reminder signal:
//!
//! - `0`: done recently, nothing to report
//! - `2`: not done recently, report the script name
//! - `3`: not done recently, report each non-empty line of its output
//!
//! Anything else is unrecognized and reports nothing.

use crate::runner::ScriptResult;

pub const EXIT_RECENT: i32 = 0;
pub const EXIT_NEEDS_NAME: i32 = 2;
pub const EXIT_NEEDS_BODY: i32 = 3;

/// Classified reminder signal of one script run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Recent,
    NeedsName(String),
    NeedsBody(Vec<String>),
    Unrecognized { name: String, exit_code: i32 },
}

/// Map a script result to its reminder signal
pub fn classify(result: &ScriptResult) -> Outcome {
    match result.exit_code {
        EXIT_RECENT => Outcome::Recent,
        EXIT_NEEDS_NAME => Outcome::NeedsName(result.name.clone()),
        EXIT_NEEDS_BODY => Outcome::NeedsBody(
            result
                .output
                .trim()
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        ),
        exit_code => Outcome::Unrecognized {
            name: result.name.clone(),
            exit_code,
        },
    }
}

impl Outcome {
    /// Reminder lines to emit, in order
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Outcome::NeedsName(name) => vec![name],
            Outcome::NeedsBody(lines) => lines,
            Outcome::Recent | Outcome::Unrecognized { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
