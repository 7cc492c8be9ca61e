// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output sink
//!
//! The single consumer of the completion stream. Classifies each result as
//! it arrives, drops silenced lines, and writes the rest to every
//! destination in a fixed order. Workers never touch the destinations.

use crate::outcome::{classify, Outcome};
use crate::pool::CompletionStream;
use crate::silence::SilenceSet;
use std::io::{self, Write};

/// A named output destination
pub struct Destination {
    name: String,
    writer: Box<dyn Write + Send>,
}

impl Destination {
    pub fn new(name: impl Into<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            name: name.into(),
            writer: Box::new(writer),
        }
    }

    /// Standard output
    pub fn stdout() -> Self {
        Self::new("<stdout>", io::stdout())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Counts gathered while draining a completion stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Scripts that produced a result
    pub completed: usize,
    /// Scripts that could not be run
    pub failed: usize,
    /// Scripts that exited with an unrecognized code
    pub unrecognized: usize,
    /// Lines written
    pub written: usize,
    /// Lines dropped by a silence pattern
    pub silenced: usize,
}

/// Writes classified reminder lines to its destinations
pub struct OutputSink {
    destinations: Vec<Destination>,
    silenced: SilenceSet,
}

impl OutputSink {
    pub fn new(silenced: SilenceSet) -> Self {
        Self {
            destinations: Vec::new(),
            silenced,
        }
    }

    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destinations.push(destination);
        self
    }

    pub fn destination_names(&self) -> Vec<&str> {
        self.destinations.iter().map(Destination::name).collect()
    }

    /// Write each line that is not silenced to every destination.
    ///
    /// Returns the number of lines written.
    pub fn write_lines(&mut self, lines: &[String]) -> io::Result<usize> {
        let mut written = 0;
        for line in lines {
            if self.silenced.is_silenced(line) {
                tracing::debug!(line = %line, "silenced");
                continue;
            }
            for destination in &mut self.destinations {
                writeln!(destination.writer, "{}", line)?;
            }
            written += 1;
        }
        Ok(written)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        for destination in &mut self.destinations {
            destination.writer.flush()?;
        }
        Ok(())
    }

    /// Consume `stream` to the end, writing each result as it completes.
    ///
    /// A script that failed to run is counted; it never stops the other
    /// results from being written. Only a write failure aborts. The failure
    /// itself is reported where it happens (runner or pool), so it is only
    /// traced here.
    pub async fn drain(&mut self, stream: &mut CompletionStream) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();

        while let Some(result) = stream.next().await {
            let result = match result {
                Ok(result) => result,
                Err(e) => {
                    tracing::debug!(script = %e.name(), error = %e, "skipping failed script");
                    summary.failed += 1;
                    continue;
                }
            };
            summary.completed += 1;

            let outcome = classify(&result);
            if let Outcome::Unrecognized { name, exit_code } = &outcome {
                tracing::error!(
                    exit_code,
                    "{}: exited with non-(0,2,3) exit code. Pass --debug or set REMINDER_SINK_DEBUG=1 to see output",
                    name
                );
                summary.unrecognized += 1;
            }

            let lines = outcome.into_lines();
            let written = self.write_lines(&lines)?;
            summary.written += written;
            summary.silenced += lines.len() - written;
        }

        self.flush()?;
        tracing::debug!(?summary, "run complete");
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
