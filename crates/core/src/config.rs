// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment configuration
//!
//! Resolved once by the binary and handed to the core as plain values.

use crate::silence::SILENT_FILE_NAME;
use std::path::{Path, PathBuf};

pub const PATH_VAR: &str = "REMINDER_SINK_PATH";
pub const INTERPRETER_VAR: &str = "REMINDER_SINK_DEFAULT_INTERPRETER";
pub const SILENT_FILE_VAR: &str = "REMINDER_SINK_SILENT_FILE";
pub const DEBUG_VAR: &str = "REMINDER_SINK_DEBUG";
pub const OUTPUT_FILE_VAR: &str = "REMINDER_SINK_OUTPUT_FILE";

/// Interpreter used for scripts without a usable shebang
pub const DEFAULT_INTERPRETER: &str = "bash";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directories to scan, or `None` when the path variable is unset/empty
    pub search_dirs: Option<Vec<PathBuf>>,
    pub interpreter: String,
    pub silent_file: PathBuf,
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let search_dirs = lookup(PATH_VAR)
            .filter(|v| !v.is_empty())
            .map(|v| split_search_path(&v));

        let interpreter = lookup(INTERPRETER_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string());

        let silent_file = match lookup(SILENT_FILE_VAR).filter(|v| !v.is_empty()) {
            Some(path) => PathBuf::from(path),
            None => cache_dir(&lookup).join(SILENT_FILE_NAME),
        };
        let silent_file = absolute(&expand_home(&silent_file, &lookup));

        Self {
            search_dirs,
            interpreter,
            silent_file,
        }
    }
}

/// Split a colon-delimited directory list, skipping blank segments
pub fn split_search_path(value: &str) -> Vec<PathBuf> {
    value
        .split(':')
        .filter(|d| !d.trim().is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Number of workers to use when none is configured
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn home_dir(lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn cache_dir(lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(xdg) = lookup("XDG_CACHE_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg);
    }
    home_dir(lookup).join(".cache")
}

fn expand_home(path: &Path, lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home_dir(lookup).join(rest),
        Err(_) => path.to_path_buf(),
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
