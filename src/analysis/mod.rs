//! Loads notebooks and turns them into analysis results.
//!
//! Loading is the only fallible step. `analyze_notebook` folds every load
//! failure into a degraded outcome, so callers always get something they can
//! render.

mod extract;
mod headings;

pub use extract::{
    count_code_cells, extract_description, extract_title, extract_topics, file_stem,
    title_from_filename,
};
pub use headings::{classify_line, LineKind};

use crate::constants::LOAD_FAILURE_DESCRIPTION;
use crate::error::NotebookLoadError;
use crate::model::{AnalysisOutcome, AnalysisResult, NotebookDocument};
use serde_json::Value;
use std::path::Path;

/// Reads and parses a notebook file.
pub fn load_notebook(path: &Path) -> Result<NotebookDocument, NotebookLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| NotebookLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_notebook(&raw, path)
}

/// Parses notebook JSON; `path` is only used for error reporting.
pub fn parse_notebook(raw: &str, path: &Path) -> Result<NotebookDocument, NotebookLoadError> {
    let json_error = |source| NotebookLoadError::Json {
        path: path.to_path_buf(),
        source,
    };

    let value: Value = serde_json::from_str(raw).map_err(json_error)?;
    if !value.is_object() {
        return Err(NotebookLoadError::NotAnObject {
            path: path.to_path_buf(),
            found: json_kind(&value),
        });
    }

    serde_json::from_value(value).map_err(json_error)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Runs every extractor over a loaded document.
pub fn analyze_document(doc: &NotebookDocument, path: &Path) -> AnalysisResult {
    AnalysisResult {
        title: extract_title(doc, path),
        description: extract_description(doc),
        topics: extract_topics(doc),
        code_cell_count: count_code_cells(doc),
        source_filename: file_name(path),
    }
}

/// Loads and analyzes one notebook. Never fails.
pub fn analyze_notebook(path: &Path) -> AnalysisOutcome {
    match load_notebook(path) {
        Ok(doc) => {
            log::debug!(
                "Loaded {} ({} cells)",
                path.display(),
                doc.cells.len()
            );
            AnalysisOutcome::Analyzed(analyze_document(&doc, path))
        }
        Err(e) => {
            log::warn!("Error loading notebook: {}", e);
            AnalysisOutcome::Degraded {
                result: degraded_result(path),
                reason: e.to_string(),
            }
        }
    }
}

/// Fallback result for a notebook that could not be loaded.
pub fn degraded_result(path: &Path) -> AnalysisResult {
    AnalysisResult {
        title: file_stem(path),
        description: LOAD_FAILURE_DESCRIPTION.to_string(),
        topics: Vec::new(),
        code_cell_count: 0,
        source_filename: file_name(path),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
