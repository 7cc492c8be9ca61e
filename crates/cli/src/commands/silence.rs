// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reminder-sink silence` - Temporarily silence reminders
//!
//! Useful to ignore a reminder for a while without changing the script
//! that produces it. The file location follows REMINDER_SINK_SILENT_FILE.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use reminder_sink_core::{Config, SilenceError, SilenceStore};
use std::time::Duration;

use crate::error::CliError;

const ONE_DAY: &str = "86400";

#[derive(Args)]
pub struct SilenceArgs {
    #[command(subcommand)]
    pub command: SilenceCommand,
}

#[derive(Subcommand)]
pub enum SilenceCommand {
    /// Silence a reminder
    ///
    /// NAME may be a unix-like glob. To pick one interactively:
    ///
    ///   reminder-sink silence add "$(reminder-sink run | fzf)"
    Add {
        /// How long to silence for, in seconds or as a duration like "2h30m"
        #[arg(short, long, default_value = ONE_DAY, value_parser = parse_duration)]
        duration: Duration,
        /// Reminder name or glob
        name: String,
    },
    /// List active silenced reminders
    List,
    /// Reset all silenced reminders
    Reset {
        /// Only reset if every silenced reminder has expired
        #[arg(short = 'f', long)]
        if_expired: bool,
    },
    /// Print the location of the silence file
    File,
}

pub fn handle(command: SilenceCommand, config: &Config) -> Result<()> {
    let store = SilenceStore::open(&config.silent_file);

    match command {
        SilenceCommand::Add { duration, name } => {
            store
                .add(&name, duration.as_secs())
                .map_err(|e| match e {
                    SilenceError::InvalidPattern(_) => anyhow!(CliError::invalid_pattern(&name, e)),
                    other => anyhow!(other),
                })?;
        }
        SilenceCommand::List => {
            for pattern in store.load()? {
                println!("{}", pattern);
            }
        }
        SilenceCommand::Reset { if_expired } => {
            if if_expired {
                let active = store.load()?;
                store.autoprune(&active)?;
            } else {
                store.reset()?;
            }
        }
        SilenceCommand::File => println!("{}", store.path().display()),
    }

    Ok(())
}

/// Parse plain seconds or a human duration such as "1d" or "2h30m"
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if let Ok(secs) = s.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }
    humantime::parse_duration(s).map_err(|e| format!("invalid duration {s:?}: {e}"))
}
