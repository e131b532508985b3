use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::{tempdir, NamedTempFile};

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
}

fn commit_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", &format!("add {name}")]);
}

fn log_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

const LOG: &[&str] = &[
    "'2024-07-01 10:00:00 +0200 ~ Ada'",
    "'2024-07-01 11:00:00 +0200 ~ Ada'",
    "'2024-05-01 09:00:00 +0000 ~ Grace'",
    "'2024-03-15 09:00:00 +0000 ~ Grace'",
];

fn githeat() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("githeat").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("CLICOLOR_FORCE");
    cmd
}

#[test]
fn json_from_log_file_covers_the_window() {
    let log = log_file(LOG);
    let out = githeat()
        .arg("--log-file")
        .arg(log.path())
        .args(["--as-of", "2024-07-15", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["window_start"], "2023-07-09");
    assert_eq!(v["window_end"], "2024-07-15");
    assert_eq!(v["total_events"], 4);

    let columns = v["columns"].as_array().unwrap();
    assert!(columns.iter().all(|c| c["slots"].as_array().unwrap().len() == 7));
    assert!(columns.iter().any(|c| c["separator"] == true));

    let days: usize = columns
        .iter()
        .flat_map(|c| c["slots"].as_array().unwrap())
        .filter(|s| !s.is_null())
        .count();
    assert_eq!(days, 373);

    let buckets: Vec<u64> = columns
        .iter()
        .flat_map(|c| c["slots"].as_array().unwrap())
        .filter(|s| s["date"] == "2024-07-01")
        .map(|s| s["bucket"].as_u64().unwrap())
        .collect();
    assert_eq!(buckets, vec![5]);
}

#[test]
fn merge_flag_drops_separator_columns() {
    let log = log_file(LOG);
    let out = githeat()
        .arg("--log-file")
        .arg(log.path())
        .args(["--as-of", "2024-07-15", "--json", "--merge"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(v["columns"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["separator"] == false));
}

#[test]
fn block_output_has_seven_rows() {
    let log = log_file(LOG);
    let out = githeat()
        .arg("--log-file")
        .arg(log.path())
        .args(["--as-of", "2024-07-15", "--no-month-header"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 7);
}

#[test]
fn inline_output_with_stats() {
    let log = log_file(LOG);
    githeat()
        .arg("--log-file")
        .arg(log.path())
        .args(["--as-of", "2024-07-15", "--type", "inline", "--stat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jul 09, 2023"))
        .stdout(predicate::str::contains("Jul 15, 2024"))
        .stdout(predicate::str::contains("Top 5 committers:\n1. Ada: 2\n2. Grace: 2\n"));
}

#[test]
fn empty_log_reports_no_contribution() {
    let log = log_file(&[]);
    githeat()
        .arg("--log-file")
        .arg(log.path())
        .args(["--as-of", "2024-07-15"])
        .assert()
        .success()
        .stdout(predicate::str::diff("No contribution found\n"));
}

#[test]
fn unmatched_author_reports_no_contribution() {
    let log = log_file(LOG);
    githeat()
        .arg("--log-file")
        .arg(log.path())
        .args(["--as-of", "2024-07-15", "--author", "Linus"])
        .assert()
        .success()
        .stdout(predicate::str::diff("No contribution found\n"));
}

#[test]
fn strict_mode_fails_on_garbage() {
    let log = log_file(&["'2024-07-01 10:00:00 +0200 ~ Ada'", "garbage"]);
    githeat()
        .arg("--log-file")
        .arg(log.path())
        .args(["--as-of", "2024-07-15", "--strict"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());

    githeat()
        .arg("--log-file")
        .arg(log.path())
        .args(["--as-of", "2024-07-15", "--json"])
        .assert()
        .success();
}

#[test]
fn log_from_stdin() {
    githeat()
        .args(["--log-file", "-", "--as-of", "2024-07-15", "--json"])
        .write_stdin(LOG.join("\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_events\": 4"));
}

#[test]
fn undecodable_author_does_not_sink_the_log() {
    let mut log = NamedTempFile::new().unwrap();
    log.write_all(b"'2024-07-01 10:00:00 +0200 ~ Ada'\n").unwrap();
    log.write_all(b"'2024-07-02 10:00:00 +0200 ~ Jos\xe9'\n").unwrap();
    log.write_all(b"'2024-07-03 10:00:00 +0200 ~ Grace'\n").unwrap();

    let out = githeat()
        .arg("--log-file")
        .arg(log.path())
        .args(["--as-of", "2024-07-15", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["total_events"], 3);
}

#[test]
fn missing_log_file_is_named_in_the_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.log");
    githeat()
        .arg("--log-file")
        .arg(&missing)
        .args(["--as-of", "2024-07-15"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nope.log"))
        .stderr(predicate::str::contains("initialized git directory").not());
}

#[test]
fn not_a_repository_fails_without_output() {
    let dir = tempdir().unwrap();
    githeat()
        .current_dir(dir.path())
        .arg("--repo")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("initialized git directory"));
}

#[test]
fn repository_commits_are_counted() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    commit_file(dir.path(), "src/a.rs", "fn a(){}\n");
    commit_file(dir.path(), "src/b.rs", "fn b(){}\n");

    let out = githeat()
        .current_dir(dir.path())
        .arg("--repo")
        .arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["total_events"], 2);
    assert_eq!(v["top_committers"][0]["author"], "Your Name");
    assert_eq!(v["top_committers"][0]["commits"], 2);
}

#[test]
fn repository_without_commits_reports_no_contribution() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());

    githeat()
        .current_dir(dir.path())
        .arg("--repo")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("No contribution found\n"));
}
