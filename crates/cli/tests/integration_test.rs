//! End-to-end tests for the `lu` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn lu(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lu"));
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

/// `root/a.txt` (2 lines), `root/sub/b.txt` (3 lines).
fn sample_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("root/sub")).unwrap();
    fs::write(dir.path().join("root/a.txt"), "one\ntwo\n").unwrap();
    fs::write(dir.path().join("root/sub/b.txt"), "1\n2\n3\n").unwrap();
    dir
}

/// Path the binary prints for `rel`: its working directory is reported with symlinks resolved.
fn shown(dir: &TempDir, rel: &str) -> String {
    fs::canonicalize(dir.path()).unwrap().join(rel).display().to_string()
}

#[test]
fn shows_help() {
    lu(Path::new("."))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Display line usage statistics"))
        .stdout(predicate::str::contains("--summarize"));
}

#[test]
fn requires_a_directory() {
    lu(Path::new("."))
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn lists_every_file() {
    let dir = sample_tree();
    let expected = format!(
        "2\t{}\n3\t{}\n",
        shown(&dir, "root/a.txt"),
        shown(&dir, "root/sub/b.txt")
    );
    lu(dir.path())
        .arg("root")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn lists_every_file_with_total() {
    let dir = sample_tree();
    lu(dir.path())
        .args(["-c", "root"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("5\ttotal\n"))
        .stdout(predicate::str::starts_with("2\t"));
}

#[test]
fn summarizes_per_root() {
    let dir = sample_tree();
    lu(dir.path())
        .args(["-s", "root"])
        .assert()
        .success()
        .stdout("5\troot\n");

    lu(dir.path())
        .args(["-s", "-c", "root"])
        .assert()
        .success()
        .stdout("5\troot\n5\ttotal\n");
}

#[test]
fn missing_root_is_silently_skipped() {
    let dir = sample_tree();
    lu(dir.path())
        .args(["-s", "-c", "nowhere", "root"])
        .assert()
        .success()
        .stdout("5\troot\n5\ttotal\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn same_directory_under_two_labels_counts_twice() {
    let dir = sample_tree();
    let root = dir.path().join("root");
    let absolute = root.to_str().unwrap();
    lu(&root)
        .args(["-s", "-c", absolute, "."])
        .assert()
        .success()
        .stdout(format!("5\t.\n5\t{absolute}\n10\ttotal\n"));
}

#[test]
fn unterminated_last_line_is_not_counted() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("d")).unwrap();
    fs::write(dir.path().join("d/no_eol.txt"), "a\nb\nc").unwrap();
    fs::write(dir.path().join("d/empty.txt"), "").unwrap();
    lu(dir.path())
        .args(["-s", "d"])
        .assert()
        .success()
        .stdout("2\td\n");
}

#[test]
fn output_is_stable_across_runs() {
    let dir = sample_tree();
    let first = lu(dir.path()).args(["-c", "root"]).output().unwrap();
    let second = lu(dir.path()).args(["-c", "root"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn tiny_buffer_gives_same_counts() {
    let dir = sample_tree();
    lu(dir.path())
        .args(["-s", "-b", "1", "root"])
        .assert()
        .success()
        .stdout("5\troot\n");
}

#[test]
fn rejects_zero_buffer() {
    let dir = sample_tree();
    lu(dir.path())
        .args(["-b", "0", "root"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("at least 1 byte"));
}

#[cfg(unix)]
#[test]
fn unreadable_file_fails_without_partial_output() {
    use std::os::unix::fs::PermissionsExt;

    let dir = sample_tree();
    let locked = dir.path().join("root/sub/locked.txt");
    fs::write(&locked, "x\n").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::File::open(&locked).is_ok() {
        return;
    }

    lu(dir.path())
        .args(["-c", "root"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("locked.txt"));

    lu(dir.path())
        .args(["-k", "-s", "-c", "root"])
        .assert()
        .failure()
        .code(1)
        .stdout("5\troot\n5\ttotal\n")
        .stderr(predicate::str::contains("lu: Failed to read file"));
}

#[cfg(unix)]
#[test]
fn symlinked_root_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("real")).unwrap();
    fs::write(dir.path().join("real/a.txt"), "1\n2\n").unwrap();
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

    lu(dir.path())
        .args(["-s", "-c", "link", "real"])
        .assert()
        .success()
        .stdout("2\treal\n2\ttotal\n");

    lu(dir.path())
        .arg("link")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn empty_directory_is_listed_with_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();
    lu(dir.path())
        .args(["-s", "empty"])
        .assert()
        .success()
        .stdout("0\tempty\n");
}
