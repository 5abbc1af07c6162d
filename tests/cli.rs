use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn sourcepad(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sourcepad").unwrap();
    cmd.env("SOURCEPAD_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_then_list() {
    let home = tempfile::tempdir().unwrap();

    sourcepad(home.path())
        .args([
            "add",
            "Algorithm Researchers",
            "y/article",
            "d/A research about researchers on algorithms.",
            "t/research",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been added"));

    assert!(home.path().join("sources.json").exists());
    assert!(!home.path().join("bin.json").exists());

    sourcepad(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm Researchers"))
        .stdout(predicate::str::contains("Listed all 1 sources"));
}

#[test]
fn delete_and_restore_across_runs() {
    let home = tempfile::tempdir().unwrap();

    sourcepad(home.path()).args(["add", "Graphs"]).assert().success();
    sourcepad(home.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recycle bin"));

    sourcepad(home.path())
        .args(["--bin", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graphs"));

    sourcepad(home.path())
        .args(["--bin", "restore", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source restored"));

    sourcepad(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graphs"));
}

#[test]
fn errors_exit_with_failure() {
    let home = tempfile::tempdir().unwrap();

    sourcepad(home.path())
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command"));

    sourcepad(home.path())
        .args(["restore", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unavailable in source manager mode"));

    sourcepad(home.path())
        .args(["delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn interactive_session() {
    let home = tempfile::tempdir().unwrap();

    sourcepad(home.path())
        .write_stdin("add Graphs a/Knuth\nadd Graphs a/Knuth\nswitch\nlist\nhistory\nexit\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("has been added"))
        .stdout(predicate::str::contains("Switched to recycle bin mode"))
        .stdout(predicate::str::contains("The recycle bin is empty"))
        .stdout(predicate::str::contains("Exiting"))
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn unreadable_library_starts_empty() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("sources.json"), "{ not json").unwrap();

    sourcepad(home.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not load the library"))
        .stdout(predicate::str::contains("The library is empty"));
}

#[test]
fn config_renames_collection_files() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{ "library_file": "refs.json" }"#,
    )
    .unwrap();

    sourcepad(home.path()).args(["add", "Graphs"]).assert().success();

    assert!(home.path().join("refs.json").exists());
    assert!(!home.path().join("sources.json").exists());
}
