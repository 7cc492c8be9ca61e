// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reminder-sink run` - Run every enabled script and print the reminders

use anyhow::{Context, Result};
use clap::Args;
use reminder_sink_core::config::{self, default_concurrency};
use reminder_sink_core::{
    discover, Config, Destination, OutputSink, ProcessRunner, SilenceSet, SilenceStore,
    TracedRunner, WorkerPool,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct RunArgs {
    /// Number of scripts to run at once
    #[arg(short, long, default_value_t = default_concurrency())]
    pub cpu_count: usize,

    /// Additional file to write results to
    #[arg(short, long, env = config::OUTPUT_FILE_VAR)]
    pub file: Option<PathBuf>,

    /// Remove the silence file if none of its entries are active
    #[arg(short, long)]
    pub autoprune: bool,
}

pub async fn handle(args: RunArgs, config: &Config) -> Result<()> {
    let store = SilenceStore::open(&config.silent_file);
    let active = store.load()?;
    tracing::debug!(silenced = ?active, "loaded silencers");
    if args.autoprune {
        store.autoprune(&active)?;
    }

    let mut sink = OutputSink::new(SilenceSet::new(&active)).with_destination(Destination::stdout());
    if let Some(path) = args.file {
        if path == Path::new("-") {
            eprintln!(
                "This already writes to STDOUT ('-'), -f/--file is to specify another file"
            );
        } else {
            let file = File::create(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            sink = sink.with_destination(Destination::new(
                path.display().to_string(),
                BufWriter::new(file),
            ));
        }
    }

    eprintln!("Writing to [{}]", sink.destination_names().join(", "));

    let runner = TracedRunner::new(ProcessRunner::new(config.interpreter.as_str()));
    let pool = WorkerPool::new(runner, args.cpu_count)?;
    let mut stream = pool.submit(discover(config.search_dirs.as_deref()));
    sink.drain(&mut stream).await?;

    Ok(())
}
