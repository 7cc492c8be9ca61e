// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reminder-sink list` - Print discovered scripts

use clap::Args;
use reminder_sink_core::{discover, Config};

use crate::output::{print_scripts, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Only list enabled scripts
    #[arg(short, long)]
    pub enabled: bool,

    /// What to print for each script
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Repr)]
    pub output_format: OutputFormat,
}

pub fn handle(args: ListArgs, config: &Config) {
    let scripts: Vec<_> = discover(config.search_dirs.as_deref())
        .filter(|s| !args.enabled || s.enabled)
        .collect();
    print_scripts(&scripts, args.output_format);
}
