// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child-process runner

use super::{RunError, ScriptResult, ScriptRunner};
use crate::script::{command_line, Script};
use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Runs scripts as child processes through their shebang interpreter
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    interpreter: String,
}

impl ProcessRunner {
    /// `interpreter` is used for scripts without a usable shebang line
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Argument vector used to launch `script`
    pub fn command_for(&self, script: &Script) -> Result<Vec<String>, RunError> {
        let name = script.name();
        let interpreter = script
            .detect_shebang()
            .map_err(|source| RunError::Read {
                name: name.clone(),
                source,
            })?
            .unwrap_or_else(|| self.interpreter.clone());

        command_line(&interpreter, &script.path)
            .ok_or(RunError::Interpreter { name, interpreter })
    }
}

#[async_trait]
impl ScriptRunner for ProcessRunner {
    async fn run(&self, script: Script) -> Result<ScriptResult, RunError> {
        let name = script.name();
        let args = self.command_for(&script)?;
        let (program, rest) = args.split_first().ok_or_else(|| RunError::Interpreter {
            name: name.clone(),
            interpreter: self.interpreter.clone(),
        })?;

        tracing::debug!(script = %name, command = %args.join(" "), "starting");

        let child = Command::new(program)
            .args(rest)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RunError::Spawn {
                name: name.clone(),
                program: program.clone(),
                source,
            })?;

        // Both pipes are drained while waiting so a chatty child never blocks
        let output = child
            .wait_with_output()
            .await
            .map_err(|source| RunError::Wait {
                name: name.clone(),
                source,
            })?;

        for line in String::from_utf8_lossy(&output.stderr).lines() {
            tracing::debug!(script = %name, "{}", line.trim_end());
        }

        Ok(ScriptResult {
            exit_code: exit_code(&output.status),
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
            name,
        })
    }
}

/// Exit code of a finished child; a signal death reads as the negated signal
fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
