use std::fs;
use std::path::Path;

use depwalk::{aggregate, ReferenceRecord, ScanError, Scanner, Settings, TraversalPolicy};
use tempfile::TempDir;
use walkdir::WalkDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn settings_for(root: &Path) -> Settings {
    Settings {
        scan_path: root.to_path_buf(),
        threads: 4,
        ..Settings::default()
    }
}

/// A small project with references spread over several levels
fn sample_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(root, "a.js", "const fs = require('fs');\n");
    write(root, "sub/b.js", "const fs = require('fs');\nconst a = require('./a');\n");
    write(root, "node_modules/c.js", "const _ = require('lodash');\n");

    dir
}

/// Eligible files under `root`, computed without the walker
fn eligible_files(root: &Path, policy: &TraversalPolicy) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !policy.is_excluded_dir(entry.file_name())
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && policy.is_eligible_file(entry.path()))
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}

#[test]
fn test_reference_project_index() {
    let dir = sample_project();

    let report = Scanner::new(settings_for(dir.path())).scan().unwrap();
    let json = serde_json::to_value(&report.index).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "fs": ["a.js", "sub/b.js"], "./a": ["sub/b.js"] })
    );
    assert!(!report.index.contains("lodash"));
    assert_eq!(report.files_scanned, 2);
    assert!(!report.has_issues());
}

#[test]
fn test_every_eligible_file_is_visited() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "index.js", "import x from 'x';");
    write(root, "lib/util.mjs", "export * from './helpers';");
    write(root, "lib/deep/er/file.js", "require('deep');");
    write(root, "lib/readme.md", "require('not-js');");
    write(root, "lib/types.d.ts", "import y from 'y';");
    write(root, ".git/hooks/x.js", "require('hook');");
    write(root, "pkg/node_modules/dep/index.js", "require('nested');");

    let settings = settings_for(root);
    let expected = eligible_files(root, &settings.policy());
    let report = Scanner::new(settings).scan().unwrap();

    let mut seen: Vec<String> = report.index.pairs().map(|(_, file)| file.to_string()).collect();
    seen.sort();
    seen.dedup();

    assert_eq!(seen, expected);
    assert_eq!(report.files_scanned, expected.len());
}

#[test]
fn test_total_entries_match_reference_occurrences() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.js", "require('fs'); require('fs'); require('path');");
    write(root, "b/c.js", "import 'fs'; export { x } from './a';");

    let report = Scanner::new(settings_for(root)).scan().unwrap();

    assert_eq!(report.reference_count(), 5);
    assert_eq!(report.index.get("fs").unwrap(), ["a.js", "a.js", "b/c.js"]);
}

#[test]
fn test_dedupe_lists_a_file_once_per_module() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.js", "require('fs'); require('fs'); require('path');");

    let settings = Settings {
        dedupe_per_file: true,
        ..settings_for(dir.path())
    };
    let report = Scanner::new(settings).scan().unwrap();

    assert_eq!(report.index.get("fs").unwrap(), ["a.js"]);
    assert_eq!(report.reference_count(), 2);
}

#[test]
fn test_repeated_scans_give_identical_indexes() {
    let dir = TempDir::new().unwrap();
    for i in 0..40 {
        write(
            dir.path(),
            &format!("pkg{}/mod{}.js", i % 7, i),
            &format!("require('shared'); require('./m{}');", i),
        );
    }

    let first = Scanner::new(settings_for(dir.path())).scan().unwrap();
    let second = Scanner::new(Settings {
        threads: 1,
        ..settings_for(dir.path())
    })
    .scan()
    .unwrap();

    assert_eq!(first.index, second.index);
    assert_eq!(first.index.get("shared").unwrap().len(), 40);
}

#[test]
fn test_aggregation_is_idempotent() {
    let records = vec![
        ReferenceRecord::new("fs", "a.js"),
        ReferenceRecord::new("./a", "sub/b.js"),
        ReferenceRecord::new("fs", "sub/b.js"),
    ];

    assert_eq!(aggregate(records.clone()), aggregate(records));
}

#[test]
fn test_malformed_file_is_isolated() {
    let dir = sample_project();
    write(dir.path(), "broken.js", "import { from ;;");

    let report = Scanner::new(settings_for(dir.path())).scan().unwrap();

    assert_eq!(report.index.get("fs").unwrap(), ["a.js", "sub/b.js"]);
    assert_eq!(report.issues.len(), 1);
    assert!(report.issues[0].path.ends_with("broken.js"));
}

#[test]
fn test_file_target_is_rejected() {
    let dir = sample_project();
    let err = Scanner::new(settings_for(&dir.path().join("a.js")))
        .scan()
        .unwrap_err();

    assert!(matches!(err, ScanError::NotADirectory { .. }));
    assert!(err.is_configuration());
}

#[test]
fn test_missing_target_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = Scanner::new(settings_for(&dir.path().join("nope")))
        .scan()
        .unwrap_err();

    assert!(matches!(err, ScanError::TargetNotFound { .. }));
    assert!(err.user_message().contains("does not exist"));
}
