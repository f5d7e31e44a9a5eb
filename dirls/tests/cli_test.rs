use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

fn get_dirls_cmd() -> Command {
    Command::cargo_bin("dirls").unwrap()
}

#[test]
fn test_lists_current_directory_without_arguments() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), b"hello").unwrap();
    let absolute = fs::canonicalize(dir.path()).unwrap();

    let mut cmd = get_dirls_cmd();
    cmd.current_dir(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hello.txt"))
        .stdout(predicate::str::contains(format!("Directory: \"{}\".", absolute.display())))
        .stdout(predicate::str::contains("    Total: 1 entry."))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_entries_are_sorted_byte_wise() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["B", "a", "C"] {
        fs::write(dir.path().join(name), b"").unwrap();
    }

    let output = get_dirls_cmd().arg(dir.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("    "))
        .filter_map(|line| line.rsplit("  ").next())
        .take(3)
        .collect();
    assert_eq!(names, vec!["B", "C", "a"]);
    assert!(stdout.contains("    Total: 3 entries."));
}

#[test]
fn test_sizes_and_modes() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data"), vec![0u8; 1024]).unwrap();
    fs::create_dir(dir.path().join("folder")).unwrap();

    get_dirls_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"  1\.0kB +-rw.+  data\n").unwrap())
        .stdout(predicate::str::is_match(r"  - +drwx.+  folder\n").unwrap());
}

#[test]
fn test_empty_directory() {
    let dir = tempfile::tempdir().unwrap();

    get_dirls_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory Is Empty"))
        .stdout(predicate::str::contains("    Total: no entries."));
}

#[test]
fn test_path_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    get_dirls_cmd()
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "dirls: can not find the entry \"{}\".",
            missing.display()
        )));
}

#[test]
fn test_path_is_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, b"").unwrap();

    get_dirls_cmd()
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "dirls: the entry \"{}\" is not a directory.",
            file.display()
        )));
}

#[cfg(unix)]
#[test]
fn test_directory_cannot_be_opened() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // Running with privileges that ignore permissions.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o700)).unwrap();
        return;
    }

    let assert = get_dirls_cmd().arg(&locked).assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o700)).unwrap();
    assert.code(1).stderr(predicate::str::contains(format!(
        "dirls: can not open directory \"{}\".",
        locked.display()
    )));
}

#[test]
fn test_valid_path_listed_despite_invalid_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("present.txt"), b"").unwrap();
    let missing = dir.path().join("missing");

    get_dirls_cmd()
        .arg(&missing)
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("present.txt"))
        .stdout(predicate::str::contains("    Total: 1 entry."))
        .stderr(predicate::str::contains("can not find the entry"));
}

#[test]
fn test_help_does_not_list() {
    let dir = tempfile::tempdir().unwrap();

    get_dirls_cmd()
        .arg(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("Directory:").not());
}

#[test]
fn test_version() {
    get_dirls_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "dirls v{} (compiled for ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_license_does_not_list() {
    get_dirls_cmd()
        .arg("/definitely/not/here")
        .arg("--license")
        .assert()
        .success()
        .stdout(predicate::str::contains("BSD-3-Clause License."))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_debug_logs_to_stderr() {
    let dir = tempfile::tempdir().unwrap();

    get_dirls_cmd()
        .arg("--debug")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("dirls: listing").not())
        .stderr(predicate::str::contains("dirls: listing"));
}

#[test]
fn test_hyphenated_directories_are_listed() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("-x")).unwrap();
    fs::create_dir(dir.path().join("-d")).unwrap();
    fs::write(dir.path().join("-d").join("inside.txt"), b"").unwrap();
    let absolute = fs::canonicalize(dir.path()).unwrap();

    get_dirls_cmd()
        .current_dir(dir.path())
        .arg("-x")
        .arg("-d")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Directory: \"{}\".",
            absolute.join("-x").display()
        )))
        .stdout(predicate::str::contains(format!(
            "Directory: \"{}\".",
            absolute.join("-d").display()
        )))
        .stdout(predicate::str::contains("inside.txt"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_help_after_unknown_hyphenated_argument() {
    get_dirls_cmd()
        .arg("-x")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("Directory:").not());
}
