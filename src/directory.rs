// src/directory.rs
//! Directory mode: discover every notebook under a root and write one report.
//!
//! Notebooks are analyzed one at a time in sorted path order; a notebook that
//! fails to load contributes a degraded section and the run carries on.

use crate::analysis::analyze_notebook;
use crate::analytics::{measure_outcomes, ReportSummary};
use crate::constants::{CHECKPOINT_DIR_MARKER, NOTEBOOK_EXTENSION};
use crate::error::AppError;
use crate::formatting::{render_report, ReportSection};
use crate::model::AnalysisOutcome;
use crate::output::{deliver, relative_display_path, DeliveryTarget, OutputPlan};
use crate::types::{OutputFilename, RenderedMarkdown};
use std::path::{Path, PathBuf};

/// What happened when a directory was analyzed.
#[derive(Debug, Clone)]
pub enum DirectoryOutcome {
    /// The root does not exist; nothing was written.
    RootMissing { root: PathBuf },
    /// The root exists but holds no notebooks; nothing was written.
    NoNotebooks { root: PathBuf },
    /// A report was produced.
    Report(DirectoryReport),
}

/// A rendered directory report and where it belongs.
#[derive(Debug, Clone)]
pub struct DirectoryReport {
    pub output_path: PathBuf,
    pub content: RenderedMarkdown,
    pub summary: ReportSummary,
}

/// Every notebook file under `root`, sorted, checkpoint copies excluded.
///
/// A missing root yields an empty list.
pub fn discover_notebooks(root: &Path) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        NOTEBOOK_EXTENSION
    );

    let entries = match glob::glob(&pattern) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Invalid notebook search pattern {}: {}", pattern, e);
            return Vec::new();
        }
    };

    let mut notebooks: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Skipping unreadable path: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .filter(|path| !is_checkpoint_path(path))
        .collect();

    notebooks.sort();
    log::debug!(
        "Discovered {} notebooks under {}",
        notebooks.len(),
        root.display()
    );
    notebooks
}

/// Whether any component of `path` is the autosave checkpoint directory.
pub fn is_checkpoint_path(path: &Path) -> bool {
    path.components()
        .any(|component| component.as_os_str() == CHECKPOINT_DIR_MARKER)
}

/// Analyzes every notebook under `root` and renders the report in memory.
///
/// `on_notebook` is called with each notebook path just before it is
/// analyzed, in report order.
pub fn compose_directory_report(
    root: &Path,
    output_filename: &OutputFilename,
    mut on_notebook: impl FnMut(&Path),
) -> Result<DirectoryOutcome, AppError> {
    if !root.exists() {
        return Ok(DirectoryOutcome::RootMissing {
            root: root.to_path_buf(),
        });
    }

    let notebooks = discover_notebooks(root);
    if notebooks.is_empty() {
        return Ok(DirectoryOutcome::NoNotebooks {
            root: root.to_path_buf(),
        });
    }

    let mut analyzed: Vec<(String, AnalysisOutcome)> = Vec::with_capacity(notebooks.len());
    for notebook in &notebooks {
        log::debug!("Analyzing {}", notebook.display());
        on_notebook(notebook);
        let relative_path = relative_display_path(notebook, root).unwrap_or_else(|e| {
            log::warn!("{}", e);
            notebook.display().to_string()
        });
        analyzed.push((relative_path, analyze_notebook(notebook)));
    }

    let sections: Vec<ReportSection<'_>> = analyzed
        .iter()
        .map(|(relative_path, outcome)| ReportSection {
            relative_path: relative_path.clone(),
            result: outcome.result(),
        })
        .collect();

    let outcomes: Vec<&AnalysisOutcome> = analyzed.iter().map(|(_, outcome)| outcome).collect();

    Ok(DirectoryOutcome::Report(DirectoryReport {
        output_path: output_filename.resolve_in(root),
        content: render_report(&sections),
        summary: measure_outcomes(&outcomes),
    }))
}

/// Analyzes `root` and writes the report to `<root>/<output_filename>`.
pub fn analyze_directory(
    root: &Path,
    output_filename: &OutputFilename,
    on_notebook: impl FnMut(&Path),
) -> Result<DirectoryOutcome, AppError> {
    let outcome = compose_directory_report(root, output_filename, on_notebook)?;

    if let DirectoryOutcome::Report(report) = &outcome {
        let plan = OutputPlan::new().with_operation(DeliveryTarget::WriteFile {
            path: report.output_path.clone(),
            content: report.content.as_str().to_string(),
        });

        let delivery = deliver(plan)?;
        if !delivery.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: delivery.failure_messages(),
            });
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_detection() {
        assert!(is_checkpoint_path(Path::new(
            "root/.ipynb_checkpoints/a-checkpoint.ipynb"
        )));
        assert!(is_checkpoint_path(Path::new(
            "root/sub/.ipynb_checkpoints/deep/b.ipynb"
        )));
        assert!(!is_checkpoint_path(Path::new("root/sub/a.ipynb")));
        assert!(!is_checkpoint_path(Path::new(
            "root/not.ipynb_checkpoints.bak/a.ipynb"
        )));
    }

    #[test]
    fn test_missing_root_discovers_nothing() {
        assert!(discover_notebooks(Path::new("/no/such/notebook/root")).is_empty());
    }

    #[test]
    fn test_missing_root_outcome() {
        let outcome = compose_directory_report(
            Path::new("/no/such/notebook/root"),
            &OutputFilename::default(),
            |_| {},
        )
        .unwrap();
        assert!(matches!(outcome, DirectoryOutcome::RootMissing { .. }));
    }

    #[test]
    fn test_progress_follows_report_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("b")).unwrap();
        std::fs::create_dir_all(dir.path().join(".ipynb_checkpoints")).unwrap();
        for name in ["z.ipynb", "a.ipynb", "b/m.ipynb", ".ipynb_checkpoints/a.ipynb"] {
            std::fs::write(dir.path().join(name), r#"{"cells": []}"#).unwrap();
        }

        let mut seen = Vec::new();
        compose_directory_report(dir.path(), &OutputFilename::default(), |path| {
            seen.push(relative_display_path(path, dir.path()).unwrap());
        })
        .unwrap();

        assert_eq!(seen, vec!["a.ipynb", "b/m.ipynb", "z.ipynb"]);
    }
}
