use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// ```text
/// tmp/root/
///   foo/bar.txt
///   b/target.txt
///   notes.md
/// ```
fn tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");
    fs::create_dir_all(root.join("foo")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("foo").join("bar.txt"), "").unwrap();
    fs::write(root.join("b").join("target.txt"), "").unwrap();
    fs::write(root.join("notes.md"), "").unwrap();
    dir
}

fn rfind(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rfind").unwrap();
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_matched_directory_but_not_its_contents() {
    let dir = tree();
    rfind(dir.path())
        .args(["foo", "root"])
        .assert()
        .success()
        .stdout("root/foo\n");
}

#[test]
fn no_matches_prints_nothing_and_succeeds() {
    let dir = tree();
    rfind(dir.path())
        .args(["zzz", "root"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn one_argument_is_a_usage_error() {
    let dir = tree();
    rfind(dir.path())
        .arg("foo")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("PATH"));
}

#[test]
fn bad_pattern_fails_without_output() {
    let dir = tree();
    rfind(dir.path())
        .args(["(", "root"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("invalid regex"));
}

#[test]
fn regex_and_glob_each_get_a_chance() {
    let dir = tree();
    // regex only: searched anywhere, the glob would need the whole path
    rfind(dir.path())
        .args([r"target\.txt", "root"])
        .assert()
        .success()
        .stdout("root/b/target.txt\n");

    // glob only: `*.md` is not a valid regex, so use one that is but does not hit
    fs::write(dir.path().join("root").join("a+b.txt"), "").unwrap();
    rfind(dir.path())
        .args(["root/a+b.txt", "root"])
        .assert()
        .success()
        .stdout("root/a+b.txt\n");
}

#[test]
fn dot_root_prints_bare_relative_paths() {
    let dir = tree();
    rfind(&dir.path().join("root"))
        .args([r"^b/", "."])
        .assert()
        .success()
        .stdout("b/target.txt\n");
}

#[test]
fn missing_root_warns_and_succeeds() {
    let dir = tree();
    rfind(dir.path())
        .args(["foo", "nowhere"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn print0_separates_with_nul() {
    let dir = tree();
    rfind(dir.path())
        .args(["-0", r"\.(md|txt)$", "root"])
        .assert()
        .success()
        .stdout("root/b/target.txt\0root/foo/bar.txt\0root/notes.md\0");
}

#[test]
fn inert_flags_are_accepted() {
    let dir = tree();
    rfind(dir.path())
        .args(["-H", "-I", "-d", "1", "-t", "f", "-j", "2", "--color", "never", "foo", "root"])
        .assert()
        .success()
        .stdout("root/foo\n");
}

#[test]
fn version_exits_zero() {
    let dir = tree();
    rfind(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[cfg(unix)]
#[test]
fn unreadable_directory_warns_and_walk_continues() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tree();
    let locked = dir.path().join("root").join("a");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // running as root: permissions are not enforced
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = rfind(dir.path()).args(["target", "root"]).assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert
        .success()
        .stdout("root/b/target.txt\n")
        .stderr(predicate::str::contains("root/a: permission denied"));
}

#[test]
fn unpaired_brace_is_a_literal() {
    let dir = tree();
    fs::write(dir.path().join("root").join("a}"), "").unwrap();
    rfind(dir.path())
        .args(["a}", "root"])
        .assert()
        .success()
        .stdout("root/a}\n");
}

#[test]
fn color_follows_each_stream() {
    let dir = tree();
    // captured output is not a terminal
    rfind(dir.path())
        .args(["foo", "root"])
        .assert()
        .success()
        .stdout("root/foo\n");

    rfind(dir.path())
        .args(["--color", "always", "foo", "nowhere"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\x1b["));
    rfind(dir.path())
        .args(["--color", "always", "foo", "root"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").and(predicate::str::contains("root/foo")));
}
