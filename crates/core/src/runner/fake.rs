// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake script runner for testing
#![cfg_attr(coverage_nightly, coverage(off))]
#![allow(clippy::panic)]

use super::{RunError, ScriptResult, ScriptRunner};
use crate::script::Script;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
struct Behavior {
    exit_code: i32,
    output: String,
    delay: Duration,
    spawn_fails: bool,
    panics: bool,
}

#[derive(Default)]
struct FakeState {
    behaviors: HashMap<String, Behavior>,
    calls: Vec<String>,
}

/// Fake runner with scripted results per script name.
///
/// Unknown scripts exit 0 with no output. Tracks how many runs were in
/// flight at once.
#[derive(Clone, Default)]
pub struct FakeRunner {
    state: Arc<Mutex<FakeState>>,
    in_flight: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    fn update(self, name: &str, f: impl FnOnce(&mut Behavior)) -> Self {
        {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            f(state.behaviors.entry(name.to_string()).or_default());
        }
        self
    }

    /// Script `name` to exit with `exit_code` and print `output`
    pub fn script(self, name: &str, exit_code: i32, output: &str) -> Self {
        self.update(name, |b| {
            b.exit_code = exit_code;
            b.output = output.to_string();
        })
    }

    /// Delay the completion of `name`
    pub fn with_delay(self, name: &str, delay: Duration) -> Self {
        self.update(name, |b| b.delay = delay)
    }

    /// Make `name` fail as if its process could not be spawned
    pub fn failing(self, name: &str) -> Self {
        self.update(name, |b| b.spawn_fails = true)
    }

    /// Make `name` panic inside its worker task
    pub fn panicking(self, name: &str) -> Self {
        self.update(name, |b| b.panics = true)
    }

    /// Names of scripts run so far, in start order
    pub fn calls(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Highest number of runs that were in flight at the same time
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScriptRunner for FakeRunner {
    async fn run(&self, script: Script) -> Result<ScriptResult, RunError> {
        let name = script.name();
        let behavior = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.calls.push(name.clone());
            state.behaviors.get(&name).cloned().unwrap_or_default()
        };

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);

        if !behavior.delay.is_zero() {
            tokio::time::sleep(behavior.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if behavior.panics {
            panic!("fake runner panic for {}", name);
        }
        if behavior.spawn_fails {
            return Err(RunError::Spawn {
                name,
                program: "fake".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "fake spawn failure"),
            });
        }

        Ok(ScriptResult::new(name, behavior.exit_code, behavior.output))
    }
}
