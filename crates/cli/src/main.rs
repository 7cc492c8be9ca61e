// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! reminder-sink - run reminder scripts and print what needs doing

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};
use commands::{list, run, silence, test};
use reminder_sink_core::{config, Config};
use std::process::ExitCode;

use crate::error::CliError;

const USAGE: &str = "\
Runs reminder scripts found in REMINDER_SINK_PATH in parallel.

The exit code of each script determines what happens:
  0   nothing needs doing
  2   print the name of the script
  3   print each line the script wrote to stdout
Any other exit code is logged as an error.";

#[derive(Parser)]
#[command(
    name = "reminder-sink",
    version,
    about = "Run reminder scripts and print what needs doing",
    long_about = USAGE,
    after_help = "See https://github.com/seanbreckenridge/reminder-sink for more information"
)]
struct Cli {
    /// Print debug information
    #[arg(
        short,
        long,
        env = config::DEBUG_VAR,
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all scripts in parallel
    Run(run::RunArgs),
    /// List all scripts
    List(list::ListArgs),
    /// Test a script
    Test(test::TestArgs),
    /// Temporarily silence a reminder
    Silence(silence::SilenceArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug = cli.debug || matches!(cli.command, Commands::Test(_));
    setup_logging(debug);

    match dispatch(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_err) => eprint!("{}", cli_err),
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(command: Commands) -> Result<ExitCode> {
    let config = Config::from_env();
    tracing::debug!(?config, "resolved configuration");

    match command {
        Commands::Run(args) => run::handle(args, &config).await?,
        Commands::List(args) => list::handle(args, &config),
        Commands::Test(args) => return test::handle(args, &config).await,
        Commands::Silence(args) => silence::handle(args.command, &config)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn setup_logging(debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
