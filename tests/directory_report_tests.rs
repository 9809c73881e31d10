// tests/directory_report_tests.rs
//! End-to-end directory mode: discovery, ordering, degraded entries, output file.

mod common;

use common::{fixture, notebook_json, write_file};
use nbsummary::{
    analyze_directory, compose_directory_report, discover_notebooks, DirectoryOutcome,
    OutputFilename,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const HEADER: &str = "# Notebook Descriptions\n\nThis document provides automatically generated descriptions for all Jupyter notebooks in this repository.\n\n---\n\n";

fn relative_names(root: &Path, paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_two_notebook_report() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "a.ipynb",
        &notebook_json(&[("markdown", "# A\n## X"), ("code", "print('x')")]),
    );
    write_file(dir.path(), "b.ipynb", "this is { not json");

    let outcome = analyze_directory(dir.path(), &OutputFilename::default(), |_| {}).unwrap();
    let report = match outcome {
        DirectoryOutcome::Report(report) => report,
        other => panic!("expected a report, got {:?}", other),
    };

    assert_eq!(report.output_path, dir.path().join("NOTEBOOKS.md"));
    assert_eq!(report.summary.notebooks, 2);
    assert_eq!(report.summary.degraded, 1);

    let written = fs::read_to_string(dir.path().join("NOTEBOOKS.md")).unwrap();
    let expected = format!(
        "{HEADER}\
## a.ipynb\n\n\
### A\n\n\
A notebook covering 1 topics with 1 code examples.\n\n\
**Topics Covered:**\n\
- X\n\n\
**Code Examples:** 1 cells\n\n\
---\n\n\
## b.ipynb\n\n\
### b\n\n\
Error loading notebook\n\n\
**Code Examples:** 0 cells\n\n\
---\n\n"
    );
    assert_eq!(written, expected);
    assert_eq!(report.content.as_str(), expected);
}

#[test]
fn test_discovery_is_sorted_and_skips_checkpoints() {
    let dir = tempfile::tempdir().unwrap();
    let nb = notebook_json(&[("markdown", "# T")]);
    write_file(dir.path(), "zeta.ipynb", &nb);
    write_file(dir.path(), "alpha/b.ipynb", &nb);
    write_file(dir.path(), "alpha/a.ipynb", &nb);
    write_file(dir.path(), "alpha-notes.ipynb", &nb);
    write_file(dir.path(), ".ipynb_checkpoints/zeta-checkpoint.ipynb", &nb);
    write_file(dir.path(), "alpha/.ipynb_checkpoints/a-checkpoint.ipynb", &nb);
    write_file(dir.path(), "notes.md", "# not a notebook");

    let found = discover_notebooks(dir.path());
    assert_eq!(
        relative_names(dir.path(), &found),
        vec!["alpha/a.ipynb", "alpha/b.ipynb", "alpha-notes.ipynb", "zeta.ipynb"]
    );
}

#[test]
fn test_nested_paths_appear_relative_to_root() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "lessons/week1/intro.ipynb",
        &notebook_json(&[("markdown", "# Intro")]),
    );

    let outcome = compose_directory_report(dir.path(), &OutputFilename::default(), |_| {}).unwrap();
    let DirectoryOutcome::Report(report) = outcome else {
        panic!("expected a report");
    };
    assert!(report
        .content
        .as_str()
        .contains("## lessons/week1/intro.ipynb\n\n### Intro\n\n"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(
        fixture("intro_to_regression.ipynb"),
        dir.path().join("intro_to_regression.ipynb"),
    )
    .unwrap();
    fs::copy(
        fixture("data_cleaning-tips.ipynb"),
        dir.path().join("data_cleaning-tips.ipynb"),
    )
    .unwrap();
    fs::copy(fixture("broken.ipynb"), dir.path().join("broken.ipynb")).unwrap();

    analyze_directory(dir.path(), &OutputFilename::default(), |_| {}).unwrap();
    let first = fs::read(dir.path().join("NOTEBOOKS.md")).unwrap();
    analyze_directory(dir.path(), &OutputFilename::default(), |_| {}).unwrap();
    let second = fs::read(dir.path().join("NOTEBOOKS.md")).unwrap();

    assert_eq!(first, second);

    let text = String::from_utf8(first).unwrap();
    let broken = text.find("## broken.ipynb").unwrap();
    let cleaning = text.find("## data_cleaning-tips.ipynb").unwrap();
    let intro = text.find("## intro_to_regression.ipynb").unwrap();
    assert!(broken < cleaning && cleaning < intro);
}

#[test]
fn test_custom_output_filename() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "one.ipynb", &notebook_json(&[("code", "1")]));

    let name = OutputFilename::new("docs/INDEX.md").unwrap();
    analyze_directory(dir.path(), &name, |_| {}).unwrap();

    let written = fs::read_to_string(dir.path().join("docs/INDEX.md")).unwrap();
    assert!(written.starts_with(HEADER));
    assert!(written.contains("## one.ipynb\n\n### One\n\n"));
    assert!(!dir.path().join("NOTEBOOKS.md").exists());
}

#[test]
fn test_no_notebooks_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "readme.md", "# hi");
    write_file(
        dir.path(),
        ".ipynb_checkpoints/only-checkpoint.ipynb",
        &notebook_json(&[("markdown", "# T")]),
    );

    let outcome = analyze_directory(dir.path(), &OutputFilename::default(), |_| {}).unwrap();
    assert!(matches!(outcome, DirectoryOutcome::NoNotebooks { .. }));
    assert!(!dir.path().join("NOTEBOOKS.md").exists());
}

#[test]
fn test_missing_root_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let outcome = analyze_directory(&missing, &OutputFilename::default(), |_| {}).unwrap();
    assert!(matches!(outcome, DirectoryOutcome::RootMissing { .. }));
    assert!(!missing.exists());
}

#[test]
fn test_root_with_glob_metacharacters() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("course [2024]");
    write_file(&root, "lab.ipynb", &notebook_json(&[("markdown", "# Lab")]));

    let found = discover_notebooks(&root);
    assert_eq!(relative_names(&root, &found), vec!["lab.ipynb"]);
}
