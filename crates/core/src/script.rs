// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script descriptors and interpreter detection

use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File name suffix that marks a script as enabled without the execute bit
pub const ENABLED_SUFFIX: &str = ".enabled";

const SHEBANG: &str = "#!";
const ENV_PREFIX: &str = "/usr/bin/env ";

/// One discoverable reminder script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
    pub path: PathBuf,
    pub enabled: bool,
}

impl Script {
    pub fn new(path: impl Into<PathBuf>, enabled: bool) -> Self {
        Self {
            path: path.into(),
            enabled,
        }
    }

    /// Build a descriptor for a file on disk, deciding `enabled` from its
    /// permissions and file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let enabled = is_executable(&path) || has_enabled_suffix(&path);
        Self { path, enabled }
    }

    /// File name with its final extension stripped
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Interpreter command line from the script's shebang, if it has a usable one
    pub fn detect_shebang(&self) -> io::Result<Option<String>> {
        let mut reader = BufReader::new(File::open(&self.path)?);
        let mut first_line = Vec::new();
        reader.read_until(b'\n', &mut first_line)?;
        Ok(parse_shebang(&String::from_utf8_lossy(&first_line)))
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Script(path={}, enabled={})",
            self.path.display(),
            self.enabled
        )
    }
}

/// Extract the interpreter from a script's first line.
///
/// A leading `/usr/bin/env ` is dropped since the command is looked up in
/// PATH anyway. Returns `None` without a shebang or when it is blank.
pub fn parse_shebang(first_line: &str) -> Option<String> {
    let interp = first_line.strip_prefix(SHEBANG)?.trim();
    let interp = interp.strip_prefix(ENV_PREFIX).unwrap_or(interp).trim();
    if interp.is_empty() {
        None
    } else {
        Some(interp.to_string())
    }
}

/// Argument vector for running `script` with `interpreter`.
///
/// The interpreter is tokenized with shell quoting rules. Returns `None`
/// when the interpreter cannot be tokenized (e.g. an unterminated quote).
pub fn command_line(interpreter: &str, script: &Path) -> Option<Vec<String>> {
    let mut args = shlex::split(interpreter)?;
    args.push(script.display().to_string());
    Some(args)
}

fn has_enabled_suffix(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().ends_with(ENABLED_SUFFIX))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    false
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
