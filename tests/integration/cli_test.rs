use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use clap::Parser;
use depwalk::cli::Args;
use tempfile::TempDir;

fn depwalk(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_depwalk"))
        .args(args)
        .current_dir(cwd)
        // Keep the caller's environment from leaking into the run
        .env_remove("DEPWALK_SCAN_PATH")
        .env_remove("DEPWALK_QUIET")
        .env_remove("DEPWALK_OUTPUT_FORMAT")
        .output()
        .unwrap()
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.js"), "require('fs');").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(
        dir.path().join("sub/b.js"),
        "import a from './a';\nimport fs from 'fs';\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_cli_args_defaults() {
    let args = Args::parse_from(["depwalk"]);
    assert_eq!(args.path, None);
    assert!(args.exclude.is_empty());
    assert!(args.extensions.is_empty());
    assert_eq!(args.output, None);
    assert!(!args.quiet);
    assert!(!args.dedupe);
}

#[test]
fn test_cli_rejects_unknown_output_format() {
    assert!(Args::try_parse_from(["depwalk", "--output", "yaml"]).is_err());
}

#[test]
fn test_quiet_scan_prints_only_the_index() {
    let dir = project();
    let output = depwalk(&[dir.path().to_str().unwrap(), "--quiet"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let index: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        index,
        serde_json::json!({ "fs": ["a.js", "sub/b.js"], "./a": ["sub/b.js"] })
    );
}

#[test]
fn test_relative_target_is_resolved_against_cwd() {
    let dir = project();
    let output = depwalk(&["sub", "--quiet", "--output", "csv"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "module,file\n./a,b.js\nfs,b.js\n");
}

#[test]
fn test_summary_goes_to_stderr() {
    let dir = project();
    let output = depwalk(
        &[dir.path().to_str().unwrap(), "--no-progress", "--no-colors"],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Scanned 2 files"));
    assert!(serde_json::from_slice::<serde_json::Value>(&output.stdout).is_ok());
}

#[test]
fn test_output_file() {
    let dir = project();
    let target = dir.path().join("deps.json");
    let output = depwalk(
        &[
            dir.path().to_str().unwrap(),
            "--quiet",
            "--output-file",
            target.to_str().unwrap(),
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(target).unwrap()).unwrap();
    assert_eq!(written["fs"], serde_json::json!(["a.js", "sub/b.js"]));
}

#[test]
fn test_file_target_exits_with_configuration_error() {
    let dir = project();
    let output = depwalk(&[dir.path().join("a.js").to_str().unwrap()], dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("is not a directory"));
}

#[test]
fn test_missing_target_exits_with_not_found_error() {
    let dir = project();
    let output = depwalk(&[dir.path().join("gone").to_str().unwrap()], dir.path());

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not exist"));
    assert!(!stderr.contains("is not a directory"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    let output = depwalk(&["--init"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    let written = fs::read_to_string(dir.path().join(".depwalk.toml")).unwrap();
    assert!(written.contains("exclude_dirs"));

    fs::write(dir.path().join(".depwalk.toml"), "quiet = true\n").unwrap();
    let output = depwalk(&["--init"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(dir.path().join(".depwalk.toml")).unwrap(),
        "quiet = true\n"
    );
}

#[test]
fn test_config_file_in_cwd_is_used() {
    let dir = project();
    fs::write(
        dir.path().join(".depwalk.toml"),
        "quiet = true\noutput_format = \"csv\"\nexclude_dirs = [\"sub\"]\n",
    )
    .unwrap();

    let output = depwalk(&[], dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "module,file\nfs,a.js\n");
}
