//! `run` destination specs

use crate::prelude::*;

#[test]
fn announces_stdout_destination() {
    let temp = Project::empty();

    temp.rs()
        .args(&["run"])
        .passes()
        .stdout_eq("")
        .stderr_has("Writing to [<stdout>]");
}

#[test]
fn file_flag_adds_a_destination() {
    let temp = Project::empty();
    temp.script("water", "exit 2");

    temp.rs()
        .args(&["run", "-f", "out.txt"])
        .passes()
        .stdout_eq("water\n")
        .stderr_has("Writing to [<stdout>, out.txt]");

    let written = std::fs::read_to_string(temp.path().join("out.txt")).unwrap();
    similar_asserts::assert_eq!(written, "water\n");
}

#[test]
fn output_file_env_var_adds_a_destination() {
    let temp = Project::empty();
    temp.script("water", "exit 2");

    temp.rs()
        .env("REMINDER_SINK_OUTPUT_FILE", "env-out.txt")
        .args(&["run"])
        .passes()
        .stdout_eq("water\n");

    let written = std::fs::read_to_string(temp.path().join("env-out.txt")).unwrap();
    similar_asserts::assert_eq!(written, "water\n");
}

#[test]
fn dash_file_is_rejected_with_a_warning() {
    let temp = Project::empty();
    temp.script("water", "exit 2");

    temp.rs()
        .args(&["run", "--file", "-"])
        .passes()
        .stdout_eq("water\n")
        .stderr_has("This already writes to STDOUT")
        .stderr_has("Writing to [<stdout>]");
}
