//! `list` specs

use crate::prelude::*;

#[test]
fn lists_scripts_in_repr_format_by_default() {
    let temp = Project::empty();
    let on = temp.script("on", "exit 0");
    let off = temp.disabled_script("off", "exit 0");

    let on_line = format!("Script(path={}, enabled=true)", on.display());
    let off_line = format!("Script(path={}, enabled=false)", off.display());
    temp.rs()
        .args(&["list"])
        .passes()
        .stdout_lines_sorted(&[on_line.as_str(), off_line.as_str()]);
}

#[test]
fn enabled_flag_hides_disabled_scripts() {
    let temp = Project::empty();
    let on = temp.script("on", "exit 0");
    temp.disabled_script("off", "exit 0");

    temp.rs()
        .args(&["list", "--enabled", "-o", "path"])
        .passes()
        .stdout_eq(&format!("{}\n", on.display()));
}

#[test]
fn enabled_suffix_counts_as_enabled() {
    let temp = Project::empty();
    let path = temp.disabled_script("stretch.enabled", "exit 2");

    temp.rs()
        .args(&["list", "-e", "-o", "path"])
        .passes()
        .stdout_eq(&format!("{}\n", path.display()));
}

#[test]
fn json_format_prints_one_object_per_line() {
    let temp = Project::empty();
    let on = temp.script("on", "exit 0");

    temp.rs()
        .args(&["list", "--output-format", "json"])
        .passes()
        .stdout_eq(&format!(
            "{{\"path\":\"{}\",\"enabled\":true}}\n",
            on.display()
        ));
}

#[test]
fn ignored_names_are_not_listed() {
    let temp = Project::empty();
    temp.file("jobs/.stignore", "*.tmp\n");
    std::fs::create_dir_all(temp.jobs_dir().join(".git")).unwrap();
    let on = temp.script("on", "exit 0");

    temp.rs()
        .args(&["list", "-o", "path"])
        .passes()
        .stdout_eq(&format!("{}\n", on.display()));
}

#[test]
fn unset_path_prints_help_and_lists_nothing() {
    let temp = Project::empty();
    temp.script("on", "exit 0");

    temp.rs()
        .env_remove("REMINDER_SINK_PATH")
        .args(&["list"])
        .passes()
        .stdout_eq("")
        .stderr_has("REMINDER_SINK_PATH environment variable is not set");
}
