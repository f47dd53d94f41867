//! Integration tests for the sort, check and graph commands.
//!
//! These run against real directories, both through the library entry points
//! and through the `reqsort` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use reqsort_cli::cli::{CheckArgs, SortArgs, SortMode, SourceArgs};
use reqsort_cli::commands::{check, sort};
use reqsort_cli::pipeline::{self, RunConfig};
use reqsort_cli::{CliError, StatusKind};
use reqsort_graph::CycleCheck;
use reqsort_scan::NativeRuntime;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// `a.txt` requires `z.txt`, so topology order is the reverse of name order.
fn a_requires_z() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "require 'z.txt'\nalpha");
    write(temp.path(), "z.txt", "zulu");
    temp
}

fn reqsort(dir: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("reqsort");
    cmd.current_dir(dir.path());
    for key in ["ROOT", "MODE", "OUTPUT", "CYCLE_CHECK", "FOLLOW_LINKS"] {
        cmd.env_remove(format!("REQSORT_{key}"));
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

fn source(dir: &TempDir) -> SourceArgs {
    SourceArgs {
        root: Some(dir.path().to_path_buf()),
        ..Default::default()
    }
}

#[test]
fn test_sort_topology_writes_dependencies_first() {
    let temp = a_requires_z();

    reqsort(&temp)
        .arg("sort")
        .assert()
        .success()
        .stdout("Sorted by TOPOLOGY files:\nz.txt\na.txt\n");

    let output = fs::read_to_string(temp.path().join("sorted.txt")).unwrap();
    assert_eq!(output, "zulu\nrequire 'z.txt'\nalpha\n");
}

#[test]
fn test_sort_by_name() {
    let temp = a_requires_z();

    reqsort(&temp)
        .args(["sort", "--mode", "name"])
        .assert()
        .success()
        .stdout("Sorted by NAME files:\na.txt\nz.txt\n");

    let output = fs::read_to_string(temp.path().join("sorted.txt")).unwrap();
    assert_eq!(output, "require 'z.txt'\nalpha\nzulu\n");
}

#[test]
fn test_targets_resolve_from_root() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "sub/b.txt", "require 'c.txt'");
    write(temp.path(), "c.txt", "c");

    let args = SortArgs {
        source: source(&temp),
        mode: Some(SortMode::Topology),
        json: false,
    };
    sort::execute(args).unwrap();

    let output = fs::read_to_string(temp.path().join("sorted.txt")).unwrap();
    assert_eq!(output, "c\nrequire 'c.txt'\n");
}

#[test]
fn test_rerun_does_not_collect_output() {
    let temp = a_requires_z();

    reqsort(&temp).arg("sort").assert().success();
    reqsort(&temp)
        .arg("sort")
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted.txt").not());

    let output = fs::read_to_string(temp.path().join("sorted.txt")).unwrap();
    assert_eq!(output, "zulu\nrequire 'z.txt'\nalpha\n");
}

#[cfg(unix)]
#[test]
fn test_rerun_through_symlinked_root_skips_output() {
    let temp = TempDir::new().unwrap();
    let real = temp.path().join("real");
    write(&real, "a.txt", "alpha");
    let link = temp.path().join("link");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let config = RunConfig {
        root: link.clone(),
        output: link.join("sorted.txt"),
        mode: SortMode::Topology,
        cycle_check: CycleCheck::Strict,
        follow_links: false,
    };
    let first = pipeline::run(&NativeRuntime, &config).unwrap();
    let second = pipeline::run(&NativeRuntime, &config).unwrap();

    assert_eq!(first.files, vec!["a.txt"]);
    assert_eq!(second.files, vec!["a.txt"]);
    assert_eq!(fs::read_to_string(real.join("sorted.txt")).unwrap(), "alpha\n");
}

#[test]
fn test_requiring_previous_output_is_invalid() {
    let temp = a_requires_z();
    reqsort(&temp).arg("sort").assert().success();

    write(temp.path(), "a.txt", "require 'sorted.txt'");
    reqsort(&temp)
        .arg("sort")
        .assert()
        .code(3)
        .stdout(predicate::str::contains(
            "Invalid requirement in file: a.txt ('sorted.txt' is not one of the scanned files)",
        ));
}

#[test]
fn test_empty_directory_reports_no_files() {
    let temp = TempDir::new().unwrap();

    reqsort(&temp)
        .arg("sort")
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Status: NO_FILES_FOUND Message: No files were found",
        ));

    assert!(!temp.path().join("sorted.txt").exists());
}

#[test]
fn test_missing_requirement_is_invalid() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "require 'missing.txt'");

    reqsort(&temp)
        .arg("sort")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("INVALID_REQUIREMENT"))
        .stdout(predicate::str::contains("a.txt"));

    assert!(!temp.path().join("sorted.txt").exists());
}

#[test]
fn test_cycle_is_reported_and_nothing_written() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "x.txt", "require 'y.txt'");
    write(temp.path(), "y.txt", "require 'x.txt'");

    reqsort(&temp)
        .arg("sort")
        .assert()
        .code(4)
        .stdout(predicate::str::contains("Status: CYCLE_DETECTED"))
        .stdout(predicate::str::contains("Found cycle:"))
        .stderr(predicate::str::contains("CYCLE_DETECTED"));

    assert!(!temp.path().join("sorted.txt").exists());
}

#[test]
fn test_cycle_does_not_matter_in_name_mode() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "x.txt", "require 'y.txt'");
    write(temp.path(), "y.txt", "require 'x.txt'");

    reqsort(&temp)
        .args(["sort", "-m", "name"])
        .assert()
        .success()
        .stdout("Sorted by NAME files:\nx.txt\ny.txt\n");
}

#[test]
fn test_sort_json_output() {
    let temp = a_requires_z();

    let assert = reqsort(&temp).args(["sort", "--json"]).assert().success();
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(value["status"]["kind"], "OK");
    assert_eq!(value["mode"], "topology");
    assert_eq!(value["files"], serde_json::json!(["z.txt", "a.txt"]));
}

#[test]
fn test_custom_output_path() {
    let temp = a_requires_z();

    reqsort(&temp)
        .args(["sort", "--output", "bundle.txt"])
        .assert()
        .success();

    assert!(temp.path().join("bundle.txt").exists());
    assert!(!temp.path().join("sorted.txt").exists());
}

#[test]
fn test_config_file_in_root_sets_mode() {
    let temp = a_requires_z();
    let project = temp.path().join("project");
    write(&project, "b.txt", "b");
    write(&project, "a.txt", "require 'b.txt'");
    write(&project, "reqsort.toml", "mode = \"name\"\n");

    reqsort(&temp)
        .args(["sort", "project"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sorted by NAME files:\na.txt\nb.txt\n"));
}

#[test]
fn test_invalid_mode_is_rejected() {
    let temp = a_requires_z();

    reqsort(&temp)
        .args(["sort", "--mode", "size"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_check_reports_counts_without_writing() {
    let temp = a_requires_z();

    reqsort(&temp)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("2 files, 1 requirements, 1 edges"))
        .stderr(predicate::str::contains("Top-level files: a.txt"));

    assert!(!temp.path().join("sorted.txt").exists());
}

#[test]
fn test_check_fails_on_cycle() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "require 'b.txt'");
    write(temp.path(), "b.txt", "require 'c.txt'");
    write(temp.path(), "c.txt", "require 'a.txt'");

    let err = check::execute(CheckArgs {
        source: source(&temp),
    })
    .unwrap_err();

    match err {
        CliError::Run(status) => assert_eq!(status.kind, StatusKind::CycleDetected),
        other => panic!("expected a run failure, got {other:?}"),
    }
}

#[test]
fn test_graph_json() {
    let temp = a_requires_z();

    let assert = reqsort(&temp)
        .args(["graph", "--format", "json"])
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(value["files"], serde_json::json!(["a.txt", "z.txt"]));
    assert_eq!(value["edges"], serde_json::json!([["a.txt", "z.txt"]]));
}

#[test]
fn test_graph_dot_prints_cycles() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "require 'b.txt'");
    write(temp.path(), "b.txt", "require 'c.txt'");
    write(temp.path(), "c.txt", "require 'a.txt'");

    reqsort(&temp)
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph"))
        .stdout(predicate::str::contains("0 -> 1"))
        .stdout(predicate::str::contains("2 -> 0"));
}

#[test]
fn test_graph_rejects_mutual_requirement() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "x.txt", "require 'y.txt'");
    write(temp.path(), "y.txt", "require 'x.txt'");

    reqsort(&temp)
        .arg("graph")
        .assert()
        .code(4)
        .stdout(predicate::str::contains("CYCLE_DETECTED"));
}
