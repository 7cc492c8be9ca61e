// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script discovery
//!
//! Walks the configured directories lazily, one directory at a time, so a
//! consumer that stops early never touches the remaining directories.
//! Missing directories are reported and skipped; they never end the scan.

use crate::script::Script;
use std::fs::{self, ReadDir};
use std::path::PathBuf;

/// Base names always skipped during a scan
pub const IGNORE_FILES: &[&str] = &[
    "__pycache__",
    ".git",
    ".mypy_cache",
    ".pytest_cache",
    ".stignore",
];

/// Printed when no search directories are configured
pub const MISSING_PATH_HELP: &str = "The REMINDER_SINK_PATH environment variable is not set. \
It should contain a colon-delimited list of directories that contain reminder-sink jobs. \
For example, in your shell profile, set:\n\
export REMINDER_SINK_PATH=\"${HOME}/.local/share/reminder-sink:${HOME}/data/reminder-sink\"";

/// Start discovering scripts in `search_dirs`.
///
/// `None` means nothing was configured: a diagnostic is printed and the
/// resulting iterator is empty.
pub fn discover(search_dirs: Option<&[PathBuf]>) -> Discovery {
    let dirs = match search_dirs {
        Some(dirs) => dirs.to_vec(),
        None => {
            eprintln!("{}", MISSING_PATH_HELP);
            Vec::new()
        }
    };
    Discovery {
        dirs: dirs.into_iter(),
        current: None,
    }
}

/// Lazy iterator over the scripts in each search directory, in order
pub struct Discovery {
    dirs: std::vec::IntoIter<PathBuf>,
    current: Option<(PathBuf, ReadDir)>,
}

impl Discovery {
    /// Open the next directory that can be read, reporting the rest
    fn open_next_dir(&mut self) -> Option<(PathBuf, ReadDir)> {
        for dir in self.dirs.by_ref() {
            tracing::debug!(dir = %dir.display(), "searching");
            if !dir.is_dir() {
                eprintln!("Error: {} is not a directory", dir.display());
                continue;
            }
            match fs::read_dir(&dir) {
                Ok(entries) => return Some((dir, entries)),
                Err(e) => {
                    eprintln!("Error: could not read {}: {}", dir.display(), e);
                    continue;
                }
            }
        }
        None
    }
}

impl Iterator for Discovery {
    type Item = Script;

    fn next(&mut self) -> Option<Script> {
        loop {
            if self.current.is_none() {
                self.current = Some(self.open_next_dir()?);
            }
            let (dir, entries) = self.current.as_mut()?;

            match entries.next() {
                Some(Ok(entry)) => {
                    let file_name = entry.file_name();
                    if is_ignored(&file_name.to_string_lossy()) {
                        continue;
                    }
                    let path = dir.join(&file_name);
                    let path = std::path::absolute(&path).unwrap_or(path);
                    return Some(Script::from_path(path));
                }
                Some(Err(e)) => {
                    tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                }
                None => {
                    tracing::debug!(dir = %dir.display(), "finished searching");
                    self.current = None;
                }
            }
        }
    }
}

fn is_ignored(name: &str) -> bool {
    IGNORE_FILES.contains(&name)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
