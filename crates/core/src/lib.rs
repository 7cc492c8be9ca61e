// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! reminder-sink-core: run reminder scripts and report what is overdue
//!
//! This crate provides:
//! - Script discovery over configured directories
//! - A child-process runner driven by each script's shebang
//! - A bounded worker pool yielding results in completion order
//! - Exit-code classification and a silencing-aware output sink
//! - The file-backed store of silenced reminders

pub mod clock;
pub mod config;
pub mod discovery;
pub mod outcome;
pub mod pool;
pub mod runner;
pub mod script;
pub mod silence;
pub mod sink;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::Config;
pub use discovery::{discover, Discovery};
pub use outcome::{classify, Outcome};
pub use pool::{CompletionStream, PoolError, WorkerPool};
pub use runner::{ProcessRunner, RunError, ScriptResult, ScriptRunner, TracedRunner};
pub use script::Script;
pub use silence::{is_suppressed, SilenceError, SilenceSet, SilenceStore};
pub use sink::{Destination, OutputSink, RunSummary};

#[cfg(any(test, feature = "test-support"))]
pub use runner::FakeRunner;
