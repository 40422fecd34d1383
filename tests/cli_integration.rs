//! Integration tests for the jmake binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const JUSTFILE: &str = "# Default recipe - show available commands
default:
    @just --list

alias b := build

# Build it
build:
    go build

# Run with args
run *ARGS:
    go run . {{ARGS}}

# Deploy somewhere
deploy env tag=\"latest\":
    ./deploy {{env}} {{tag}}

# Needs files
cat +FILES:
    cat {{FILES}}
";

fn project(content: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("justfile"), content).unwrap();
    dir
}

/// jmake with an isolated config directory
fn jmake(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jmake").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("JMAKE_MAKE")
        .env_remove("JMAKE_LOG");
    cmd
}

fn file_arg(dir: &TempDir) -> String {
    dir.path().join("justfile").to_str().unwrap().to_string()
}

#[test]
fn test_list_command() {
    let dir = project(JUSTFILE);

    jmake(dir.path())
        .args(["--file", &file_arg(&dir), "--list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Available recipes:"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("# Build it"))
        .stdout(predicate::str::contains("run *ARGS"))
        .stdout(predicate::str::contains("+FILES"))
        .stdout(predicate::str::contains("default").not());
}

#[test]
fn test_no_target_with_list_default_lists() {
    let dir = project(JUSTFILE);

    jmake(dir.path())
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Available recipes:"))
        .stdout(predicate::str::contains("deploy env tag=\"latest\""));
}

#[test]
fn test_settings_line_keeps_list_default() {
    let dir = project(&format!("set shell := [\"bash\", \"-c\"]\n\n{}", JUSTFILE));

    jmake(dir.path())
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Available recipes:"))
        .stdout(predicate::str::contains("set shell").not());
}

#[test]
fn test_justfile_discovered_from_subdirectory() {
    let dir = project(JUSTFILE);
    let nested = dir.path().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    jmake(dir.path())
        .current_dir(&nested)
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Run with args"));
}

#[test]
fn test_dump_command() {
    let dir = project(JUSTFILE);

    jmake(dir.path())
        .args(["-f", &file_arg(&dir), "--dump"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Generated by jmake"))
        .stdout(predicate::str::contains("SHELL := /bin/bash"))
        .stdout(predicate::str::contains(".PHONY: build run deploy cat help"))
        .stdout(predicate::str::contains("run:\n\tgo run . $(ARGS)"))
        .stdout(predicate::str::contains("deploy: tag ?= latest"))
        .stdout(predicate::str::contains("default:").not());
}

#[test]
#[cfg(target_os = "linux")]
fn test_dump_uses_configured_shell() {
    let dir = project("build:\n\tgo build\n");
    let config_dir = dir.path().join("jmake");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[make]\nshell = \"/bin/sh\"\n",
    )
    .unwrap();

    jmake(dir.path())
        .args(["-f", &file_arg(&dir), "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SHELL := /bin/sh"));
}

#[test]
fn test_dry_run_prints_make_command() {
    let dir = project(JUSTFILE);

    jmake(dir.path())
        .args(["-n", "-f", &file_arg(&dir), "deploy", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("make --no-print-directory -f "))
        .stdout(predicate::str::contains(".mk deploy env=prod\n"));
}

#[test]
fn test_dry_run_resolves_alias_and_variadic() {
    let dir = project(JUSTFILE);

    jmake(dir.path())
        .args(["--dry-run", "-f", &file_arg(&dir), "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".mk build\n"));

    jmake(dir.path())
        .args(["--dry-run", "-f", &file_arg(&dir), "run", "--verbose", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".mk run ARGS=--verbose x\n"));
}

#[test]
fn test_dry_run_uses_make_override() {
    let dir = project(JUSTFILE);

    jmake(dir.path())
        .env("JMAKE_MAKE", "gmake")
        .args(["-n", "-f", &file_arg(&dir), "build"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gmake "));
}

#[test]
fn test_unknown_recipe() {
    let dir = project(JUSTFILE);

    jmake(dir.path())
        .args(["-f", &file_arg(&dir), "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown recipe: nope"));
}

#[test]
fn test_missing_required_argument() {
    let dir = project(JUSTFILE);

    jmake(dir.path())
        .args(["-f", &file_arg(&dir), "deploy"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "recipe 'deploy' requires argument 'env'",
        ));
}

#[test]
fn test_missing_variadic_argument() {
    let dir = project(JUSTFILE);

    jmake(dir.path())
        .args(["-f", &file_arg(&dir), "cat"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at least one argument for 'FILES'"));
}

#[test]
fn test_unknown_flag() {
    let dir = project(JUSTFILE);

    jmake(dir.path())
        .current_dir(dir.path())
        .arg("--bogus")
        .assert()
        .code(1);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();

    jmake(dir.path())
        .args(["-f", dir.path().join("missing").to_str().unwrap(), "--list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_no_recipes() {
    let dir = project("# empty\nx := 1\n");

    jmake(dir.path())
        .args(["-f", &file_arg(&dir)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no recipes found"));
}

#[test]
fn test_version_and_help() {
    let dir = tempdir().unwrap();

    jmake(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("jmake "));

    jmake(dir.path())
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    jmake(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--dump"));
}
