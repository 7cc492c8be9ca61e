// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced runner wrapper for consistent observability

use super::{RunError, ScriptResult, ScriptRunner};
use crate::script::Script;
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any ScriptRunner
#[derive(Clone)]
pub struct TracedRunner<R> {
    inner: R,
}

impl<R> TracedRunner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R: ScriptRunner> ScriptRunner for TracedRunner<R> {
    async fn run(&self, script: Script) -> Result<ScriptResult, RunError> {
        let span = tracing::debug_span!("script.run", script = %script.name());

        async move {
            tracing::debug!(path = %script.path.display(), "running");

            let start = std::time::Instant::now();
            let result = self.inner.run(script).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(r) => tracing::debug!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    exit_code = r.exit_code,
                    output = ?r.output.trim(),
                    "finished"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "run failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
