// src/pipeline.rs
//! Pipeline capability traits: the three stages of summarizing one notebook.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::error::AppError;
use crate::model::AnalysisOutcome;
use crate::output::OutputReport;
use crate::types::RenderedMarkdown;
use std::path::Path;

/// Produces an analysis outcome for a notebook path.
pub trait NotebookSource {
    fn analyze(&self, path: &Path) -> AnalysisOutcome;
}

/// Turns an analysis outcome into deliverable text.
pub trait SummaryComposer {
    fn compose(&self, outcome: &AnalysisOutcome) -> Result<RenderedMarkdown, AppError>;
}

/// Delivers rendered text to its destinations.
pub trait SummaryDelivery {
    fn deliver(&self, rendered: RenderedMarkdown) -> Result<OutputReport, AppError>;
}
