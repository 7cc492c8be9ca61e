// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker pool and completion stream
//!
//! A fixed number of workers pull enabled scripts from a shared work queue
//! and push each result onto a completion channel. The consumer reads that
//! channel, so results arrive in the order scripts finish rather than the
//! order they were submitted. Each run happens in its own task, so a
//! panicking runner surfaces as an error for that script only.

use crate::runner::{RunError, ScriptResult, ScriptRunner};
use crate::script::Script;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("concurrency must be at least 1, got {0}")]
    InvalidConcurrency(usize),
}

/// Bounded pool that runs scripts through a [`ScriptRunner`]
pub struct WorkerPool<R> {
    runner: Arc<R>,
    concurrency: usize,
}

impl<R: ScriptRunner> WorkerPool<R> {
    pub fn new(runner: R, concurrency: usize) -> Result<Self, PoolError> {
        if concurrency == 0 {
            return Err(PoolError::InvalidConcurrency(concurrency));
        }
        Ok(Self {
            runner: Arc::new(runner),
            concurrency,
        })
    }

    /// Submit every enabled script and return the stream of their results.
    ///
    /// `scripts` is consumed lazily on a blocking thread, so discovery may
    /// still be scanning directories while the first results come in.
    /// Must be called from within a tokio runtime.
    pub fn submit<I>(&self, scripts: I) -> CompletionStream
    where
        I: IntoIterator<Item = Script>,
        I::IntoIter: Send + 'static,
    {
        tracing::debug!(concurrency = self.concurrency, "running scripts");

        let (work_tx, work_rx) = mpsc::channel::<Script>(self.concurrency);
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        let work_rx = Arc::new(Mutex::new(work_rx));
        let mut tasks = JoinSet::new();

        let scripts = scripts.into_iter();
        tasks.spawn_blocking(move || {
            for script in scripts {
                if !script.enabled {
                    tracing::debug!(script = %script.name(), "not enabled");
                    continue;
                }
                if work_tx.blocking_send(script).is_err() {
                    break;
                }
            }
        });

        for worker in 0..self.concurrency {
            let runner = Arc::clone(&self.runner);
            let work_rx = Arc::clone(&work_rx);
            let done_tx = done_tx.clone();

            tasks.spawn(async move {
                loop {
                    let next = work_rx.lock().await.recv().await;
                    let Some(script) = next else { break };

                    let name = script.name();
                    let runner = Arc::clone(&runner);
                    let result = match tokio::spawn(async move { runner.run(script).await }).await
                    {
                        Ok(result) => result,
                        Err(e) => {
                            tracing::error!(script = %name, error = %e, "script run panicked");
                            Err(RunError::Panicked {
                                name,
                                message: e.to_string(),
                            })
                        }
                    };

                    if done_tx.send(result).is_err() {
                        break;
                    }
                }
                tracing::trace!(worker, "worker finished");
            });
        }

        CompletionStream {
            results: done_rx,
            _tasks: tasks,
        }
    }
}

/// Results of submitted scripts, yielded in completion order.
///
/// Dropping the stream stops the workers; scripts already running are left
/// to finish on their own.
pub struct CompletionStream {
    results: mpsc::UnboundedReceiver<Result<ScriptResult, RunError>>,
    _tasks: JoinSet<()>,
}

impl CompletionStream {
    /// Next finished script, or `None` once every submitted script is done
    pub async fn next(&mut self) -> Option<Result<ScriptResult, RunError>> {
        self.results.recv().await
    }

    /// Wait for every remaining result, in completion order
    pub async fn collect(mut self) -> Vec<Result<ScriptResult, RunError>> {
        let mut all = Vec::new();
        while let Some(result) = self.next().await {
            all.push(result);
        }
        all
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
