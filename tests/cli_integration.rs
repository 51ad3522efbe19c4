use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dirsnap() -> Command {
    Command::cargo_bin("dirsnap").unwrap()
}

#[test]
fn shows_help() {
    dirsnap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("directory tree"));
}

#[test]
fn shows_version() {
    dirsnap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn print_subcommand_help() {
    dirsnap()
        .args(["print", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Print the directory tree"));
}

#[test]
fn export_subcommand_help() {
    dirsnap()
        .args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("save it to a file"));
}

#[test]
fn verbose_flag_accepted() {
    let dir = TempDir::new().unwrap();
    dirsnap()
        .arg("-vvv")
        .arg("print")
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn invalid_config_path_fails() {
    dirsnap()
        .args(["--config", "/nonexistent/path.toml", "print"])
        .assert()
        .failure();
}

#[test]
fn completions_generate_output() {
    dirsnap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dirsnap"));
}
