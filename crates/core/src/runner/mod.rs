// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script runners
//!
//! A runner executes one enabled script to completion and reports its exit
//! code and standard output. Every exit code is a valid result; only
//! failing to start the script at all is an error.

mod process;
mod traced;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use process::ProcessRunner;
pub use traced::TracedRunner;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRunner;

use crate::script::Script;
use async_trait::async_trait;
use thiserror::Error;

/// Outcome of running one script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptResult {
    pub name: String,
    pub exit_code: i32,
    pub output: String,
}

impl ScriptResult {
    pub fn new(name: impl Into<String>, exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exit_code,
            output: output.into(),
        }
    }
}

/// Errors that stop a single script from producing a result
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{name}: could not read script: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{name}: could not parse interpreter {interpreter:?}")]
    Interpreter { name: String, interpreter: String },
    #[error("{name}: failed to spawn {program}: {source}")]
    Spawn {
        name: String,
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{name}: failed waiting for process: {source}")]
    Wait {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{name}: worker task failed: {message}")]
    Panicked { name: String, message: String },
}

impl RunError {
    /// Name of the script this error belongs to
    pub fn name(&self) -> &str {
        match self {
            RunError::Read { name, .. }
            | RunError::Interpreter { name, .. }
            | RunError::Spawn { name, .. }
            | RunError::Wait { name, .. }
            | RunError::Panicked { name, .. } => name,
        }
    }
}

/// Runs one script to completion
#[async_trait]
pub trait ScriptRunner: Send + Sync + 'static {
    async fn run(&self, script: Script) -> Result<ScriptResult, RunError>;
}
