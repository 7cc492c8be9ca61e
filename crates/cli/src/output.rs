// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use reminder_sink_core::Script;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Script(path=..., enabled=...)
    Repr,
    /// Just the path
    Path,
    /// One JSON object per line
    Json,
}

/// Render a script in the specified format
pub fn format_script(script: &Script, format: OutputFormat) -> String {
    match format {
        OutputFormat::Repr => script.to_string(),
        OutputFormat::Path => script.path.display().to_string(),
        OutputFormat::Json => {
            serde_json::to_string(script).unwrap_or_else(|_| script.to_string())
        }
    }
}

/// Print a list of scripts
pub fn print_scripts<'a>(scripts: impl IntoIterator<Item = &'a Script>, format: OutputFormat) {
    for script in scripts {
        println!("{}", format_script(script, format));
    }
}
