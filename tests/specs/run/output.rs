//! `run` output specs
//!
//! Exit code 2 prints the script name, 3 prints its output lines, 0 prints
//! nothing, and anything else is logged.

use crate::prelude::*;

#[test]
fn prints_names_and_lines_of_due_reminders() {
    let temp = Project::empty();
    temp.script("fine", "exit 0");
    temp.script("water", "exit 2");
    temp.script("chores", "echo dishes\necho\necho laundry\nexit 3");

    temp.rs()
        .args(&["run"])
        .passes()
        .stdout_lines_sorted(&["dishes", "laundry", "water"]);
}

#[test]
fn disabled_scripts_do_not_run() {
    let temp = Project::empty();
    temp.disabled_script("off", "exit 2");
    temp.disabled_script("on.enabled", "exit 2");

    temp.rs().args(&["run"]).passes().stdout_eq("on\n");
}

#[test]
fn unrecognized_exit_code_is_logged() {
    let temp = Project::empty();
    temp.script("broken", "echo oops\nexit 1");
    temp.script("water", "exit 2");

    temp.rs()
        .args(&["run"])
        .passes()
        .stdout_eq("water\n")
        .stderr_has("broken: exited with non-(0,2,3) exit code");
}

#[test]
fn scripts_without_shebang_use_default_interpreter() {
    let temp = Project::empty();
    temp.file("jobs/plain.enabled", "exit 2\n");

    temp.rs()
        .env("REMINDER_SINK_DEFAULT_INTERPRETER", "sh")
        .args(&["run"])
        .passes()
        .stdout_eq("plain\n");
}

#[test]
fn missing_directory_is_skipped() {
    let temp = Project::empty();
    temp.script("water", "exit 2");
    let path = format!("{}:{}", temp.path().join("gone").display(), temp.jobs_dir().display());

    temp.rs()
        .env("REMINDER_SINK_PATH", path)
        .args(&["run"])
        .passes()
        .stdout_eq("water\n")
        .stderr_has("is not a directory");
}

#[test]
fn single_worker_still_runs_everything() {
    let temp = Project::empty();
    for name in ["a", "b", "c", "d"] {
        temp.script(name, "exit 2");
    }

    temp.rs()
        .args(&["run", "--cpu-count", "1"])
        .passes()
        .stdout_lines_sorted(&["a", "b", "c", "d"]);
}

#[test]
fn zero_workers_is_rejected() {
    let temp = Project::empty();

    temp.rs()
        .args(&["run", "-c", "0"])
        .fails()
        .stderr_has("concurrency must be at least 1");
}
