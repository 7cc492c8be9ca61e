//! Silencing during `run`

use crate::prelude::*;

#[test]
fn silenced_names_are_not_printed() {
    let temp = Project::empty();
    temp.script("water", "exit 2");
    temp.script("stretch", "exit 2");
    temp.rs().args(&["silence", "add", "water"]).passes();

    temp.rs().args(&["run"]).passes().stdout_eq("stretch\n");
}

#[test]
fn globs_silence_output_lines() {
    let temp = Project::empty();
    temp.script("chores", "echo backup-photos\necho backup-mail\necho dishes\nexit 3");
    temp.rs().args(&["silence", "add", "backup-*"]).passes();

    temp.rs().args(&["run"]).passes().stdout_eq("dishes\n");
}

#[test]
fn silenced_lines_skip_the_output_file_too() {
    let temp = Project::empty();
    temp.script("water", "exit 2");
    temp.script("stretch", "exit 2");
    temp.rs().args(&["silence", "add", "stretch"]).passes();

    temp.rs().args(&["run", "-f", "out.txt"]).passes();

    let written = std::fs::read_to_string(temp.path().join("out.txt")).unwrap();
    similar_asserts::assert_eq!(written, "water\n");
}

#[test]
fn expired_silencers_no_longer_apply() {
    let temp = Project::empty();
    temp.script("water", "exit 2");
    temp.file("silent.txt", "water:1\n");

    temp.rs().args(&["run"]).passes().stdout_eq("water\n");
    assert!(temp.silent_file().exists());
}

#[test]
fn autoprune_deletes_fully_expired_file() {
    let temp = Project::empty();
    temp.script("water", "exit 2");
    temp.file("silent.txt", "water:1\n");

    temp.rs()
        .args(&["run", "--autoprune"])
        .passes()
        .stdout_eq("water\n");

    assert!(!temp.silent_file().exists());
}

#[test]
fn autoprune_keeps_file_with_active_entries() {
    let temp = Project::empty();
    temp.script("water", "exit 2");
    temp.file("silent.txt", "old:1\n");
    temp.rs().args(&["silence", "add", "water"]).passes();

    temp.rs().args(&["run", "-a"]).passes().stdout_eq("");

    let contents = std::fs::read_to_string(temp.silent_file()).unwrap();
    assert!(contents.starts_with("old:1\n"));
}
