// tests/common/mod.rs
//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the fixture notebooks.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/notebooks")
}

/// Path of one fixture notebook.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(&path, content).expect("write fixture file");
    path
}

/// Builds notebook JSON from `(cell_type, source)` pairs.
pub fn notebook_json(cells: &[(&str, &str)]) -> String {
    let cells: Vec<serde_json::Value> = cells
        .iter()
        .map(|(cell_type, source)| {
            serde_json::json!({
                "cell_type": cell_type,
                "metadata": {},
                "source": split_source(source),
            })
        })
        .collect();

    serde_json::json!({
        "cells": cells,
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 5,
    })
    .to_string()
}

/// Splits text into nbformat-style fragments that keep their newlines.
fn split_source(source: &str) -> Vec<String> {
    source.split_inclusive('\n').map(str::to_string).collect()
}
