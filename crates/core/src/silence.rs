// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Suppression store
//!
//! Silenced reminders live in a single text file, one `pattern:expires_at`
//! entry per line, where `expires_at` is an absolute Unix timestamp. The
//! file is append-only; the only other mutation is deleting it whole, either
//! on reset or when autoprune finds nothing left to suppress.
//!
//! Loading never fails on content: blank lines are skipped, malformed lines
//! are logged and skipped, and entries whose expiry has passed are dropped.

use crate::clock::{Clock, SystemClock};
use glob::Pattern;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default file name of the suppression store inside the cache directory
pub const SILENT_FILE_NAME: &str = "reminder-sink-silent.txt";

#[derive(Debug, Error)]
pub enum SilenceError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// File-backed set of silenced reminder patterns
#[derive(Clone)]
pub struct SilenceStore<C: Clock = SystemClock> {
    path: PathBuf,
    clock: C,
}

impl SilenceStore<SystemClock> {
    /// Open the store backed by the given file. The file need not exist.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, SystemClock)
    }
}

impl<C: Clock> SilenceStore<C> {
    pub fn with_clock(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the patterns that are still active, in file order.
    ///
    /// "Now" is captured once, so every entry is judged against the same
    /// instant. A missing file yields no patterns.
    pub fn load(&self) -> Result<Vec<String>, SilenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "silence file does not exist, skipping load");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let now = self.clock.now();
        let active: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| active_pattern(line, now))
            .collect();

        tracing::debug!(count = active.len(), "loaded active silencers");
        Ok(active)
    }

    /// Silence `pattern` for `duration_secs` seconds from now.
    ///
    /// Appends exactly one line; the file (and its parent directory) is
    /// created when missing. An invalid pattern leaves the file untouched.
    pub fn add(&self, pattern: &str, duration_secs: u64) -> Result<(), SilenceError> {
        validate_pattern(pattern)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let expires_at = self.clock.now().saturating_add(duration_secs);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format!("{}:{}\n", pattern, expires_at).as_bytes())?;

        tracing::debug!(pattern, expires_at, "silenced");
        Ok(())
    }

    /// Delete the backing file when nothing in it is still active.
    ///
    /// Pruning is all-or-nothing: with any active pattern the file is kept
    /// as is, even if it also holds expired lines. Returns whether the file
    /// was deleted.
    pub fn autoprune(&self, active: &[String]) -> Result<bool, SilenceError> {
        if !active.is_empty() {
            tracing::debug!(path = %self.path.display(), "has active silencers, skipping auto-prune");
            return Ok(false);
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "does not exist, skipping auto-prune");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            tracing::debug!(path = %self.path.display(), "is empty, skipping auto-prune");
            return Ok(false);
        }

        tracing::debug!(path = %self.path.display(), "no active silencers, deleting file");
        fs::remove_file(&self.path)?;
        Ok(true)
    }

    /// Delete the backing file unconditionally. Returns whether it existed.
    pub fn reset(&self) -> Result<bool, SilenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Check that a pattern can be stored in the silence file
pub fn validate_pattern(pattern: &str) -> Result<(), SilenceError> {
    if pattern.contains(':') {
        return Err(SilenceError::InvalidPattern(
            "pattern to silence cannot contain ':'".to_string(),
        ));
    }
    if pattern.trim().is_empty() {
        return Err(SilenceError::InvalidPattern(
            "no text passed as input pattern".to_string(),
        ));
    }
    Ok(())
}

/// Parse one non-blank line, returning its pattern if it has not expired
fn active_pattern(line: &str, now: u64) -> Option<String> {
    let (pattern, epoch) = line.split_once(':').unwrap_or((line, ""));

    let expires_at = if !epoch.is_empty() && epoch.bytes().all(|b| b.is_ascii_digit()) {
        epoch.parse::<u64>().ok()
    } else {
        None
    };
    let Some(expires_at) = expires_at else {
        tracing::warn!(line, "failed to parse integer from line");
        return None;
    };

    if now > expires_at {
        let expired = chrono::DateTime::from_timestamp(expires_at as i64, 0)
            .map(|dt| dt.with_timezone(&chrono::Local).to_string())
            .unwrap_or_default();
        tracing::debug!(pattern, expires_at, %expired, "expired, skipping");
        return None;
    }
    if pattern.is_empty() {
        return None;
    }

    tracing::debug!(pattern, "active silencer");
    Some(pattern.to_string())
}

/// True when `name` matches any of the `active` shell-style patterns
pub fn is_suppressed(name: &str, active: &[String]) -> bool {
    SilenceSet::new(active).is_silenced(name)
}

enum Matcher {
    Glob(Pattern),
    Literal(String),
}

/// Rewrite a shell-style pattern into one `glob::Pattern` accepts.
///
/// Runs of `*` collapse into one, since `**` only compiles as a whole path
/// component. A `[` without a closing bracket matches itself.
fn shell_glob(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }
    out
}

/// Index of the `]` closing the class opened at `start`. A `]` right after
/// the opening `[` or `[!` is part of the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}

/// Pre-compiled active patterns, built once per run
pub struct SilenceSet {
    matchers: Vec<Matcher>,
}

impl SilenceSet {
    pub fn new(active: &[String]) -> Self {
        let matchers = active
            .iter()
            .map(|p| match Pattern::new(&shell_glob(p)) {
                Ok(glob) => Matcher::Glob(glob),
                Err(e) => {
                    tracing::debug!(pattern = %p, error = %e, "not a valid glob, matching literally");
                    Matcher::Literal(p.clone())
                }
            })
            .collect();
        Self { matchers }
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn is_silenced(&self, name: &str) -> bool {
        self.matchers.iter().any(|m| match m {
            Matcher::Glob(glob) => glob.matches(name),
            Matcher::Literal(literal) => literal == name,
        })
    }
}

#[cfg(test)]
#[path = "silence_tests.rs"]
mod tests;
