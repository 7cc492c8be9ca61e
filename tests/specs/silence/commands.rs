//! `silence` subcommand specs

use crate::prelude::*;

#[test]
fn file_prints_the_silence_file_location() {
    let temp = Project::empty();

    temp.rs()
        .args(&["silence", "file"])
        .passes()
        .stdout_eq(&format!("{}\n", temp.silent_file().display()));
}

#[test]
fn added_patterns_are_listed() {
    let temp = Project::empty();

    temp.rs().args(&["silence", "add", "water"]).passes();
    temp.rs().args(&["silence", "add", "-d", "2h", "back*"]).passes();

    temp.rs()
        .args(&["silence", "list"])
        .passes()
        .stdout_eq("water\nback*\n");
}

#[test]
fn add_writes_pattern_and_expiry() {
    let temp = Project::empty();

    temp.rs()
        .args(&["silence", "add", "--duration", "60", "water"])
        .passes();

    let contents = std::fs::read_to_string(temp.silent_file()).unwrap();
    let (pattern, expires) = contents.trim_end().split_once(':').unwrap();
    assert_eq!(pattern, "water");
    assert!(expires.parse::<u64>().is_ok(), "bad expiry in {contents:?}");
}

#[test]
fn pattern_with_colon_is_rejected() {
    let temp = Project::empty();

    temp.rs()
        .args(&["silence", "add", "a:b"])
        .fails()
        .stderr_has("cannot contain ':'");

    assert!(!temp.silent_file().exists());
}

#[test]
fn blank_pattern_is_rejected() {
    let temp = Project::empty();

    temp.rs()
        .args(&["silence", "add", "  "])
        .fails()
        .stderr_has("no text passed as input pattern");
}

#[test]
fn expired_entries_are_not_listed() {
    let temp = Project::empty();
    temp.file("silent.txt", "old:1\n\nnot-a-line\n");

    temp.rs().args(&["silence", "list"]).passes().stdout_eq("");
}

#[test]
fn reset_deletes_the_file() {
    let temp = Project::empty();
    temp.rs().args(&["silence", "add", "water"]).passes();

    temp.rs().args(&["silence", "reset"]).passes();

    assert!(!temp.silent_file().exists());
}

#[test]
fn reset_without_file_succeeds() {
    let temp = Project::empty();

    temp.rs().args(&["silence", "reset"]).passes();
}

#[test]
fn reset_if_expired_keeps_active_entries() {
    let temp = Project::empty();
    temp.rs().args(&["silence", "add", "water"]).passes();

    temp.rs().args(&["silence", "reset", "-f"]).passes();

    assert!(temp.silent_file().exists());
}

#[test]
fn reset_if_expired_deletes_fully_expired_file() {
    let temp = Project::empty();
    temp.file("silent.txt", "old:1\nolder:2\n");

    temp.rs()
        .args(&["silence", "reset", "--if-expired"])
        .passes();

    assert!(!temp.silent_file().exists());
}
