//! Help and argument parsing specs

use crate::prelude::*;

#[test]
fn help_lists_every_command() {
    let temp = Project::empty();

    temp.rs()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("list")
        .stdout_has("test")
        .stdout_has("silence");
}

#[test]
fn silence_help_lists_subcommands() {
    let temp = Project::empty();

    temp.rs()
        .args(&["silence", "--help"])
        .passes()
        .stdout_has("add")
        .stdout_has("reset")
        .stdout_has("file");
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let temp = Project::empty();

    temp.rs().code(2).stderr_has("Usage");
}

#[test]
fn debug_flag_logs_to_stderr_only() {
    let temp = Project::empty();
    temp.script("water", "exit 2");

    temp.rs()
        .args(&["--debug", "run"])
        .passes()
        .stdout_eq("water\n")
        .stderr_has("DEBUG");
}

#[test]
fn debug_env_var_enables_debug_logging() {
    let temp = Project::empty();
    temp.script("water", "exit 2");

    temp.rs()
        .env("REMINDER_SINK_DEBUG", "1")
        .args(&["run"])
        .passes()
        .stderr_has("DEBUG");
}
