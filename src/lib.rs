// src/lib.rs
//! nbsummary library — summarizes Jupyter notebooks into markdown descriptions.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `NotebookLoadError`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `RunConfig`, `RunTarget`
//! - **Domain model** — `NotebookDocument`, `Cell`, `AnalysisResult`, `AnalysisOutcome`
//! - **Analysis** — `load_notebook`, `analyze_notebook`, the individual extractors
//! - **Formatting** — `render_markdown`, `render_json`, `render_report`
//! - **Directory mode** — `discover_notebooks`, `analyze_directory`

mod analytics;
mod config;
mod error;
mod output;
mod pipeline;
mod types;

pub mod analysis;
pub mod constants;
pub mod directory;
pub mod formatting;
pub mod model;

// --- Error Handling ---
pub use crate::error::{AppError, NotebookLoadError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, RunConfig, RunTarget};

// --- Domain Model ---
pub use crate::model::{
    AnalysisOutcome, AnalysisResult, Cell, CellSource, CellType, NotebookDocument,
};

// --- Domain Types ---
pub use crate::types::{OutputFilename, RenderedMarkdown};

// --- Analysis ---
pub use crate::analysis::{
    analyze_document, analyze_notebook, count_code_cells, extract_description, extract_title,
    extract_topics, load_notebook, parse_notebook,
};

// --- Formatting ---
pub use crate::formatting::{render_json, render_markdown, render_report, ReportSection};

// --- Directory Mode ---
pub use crate::analytics::ReportSummary;
pub use crate::directory::{
    analyze_directory, compose_directory_report, discover_notebooks, DirectoryOutcome,
    DirectoryReport,
};

// --- Output ---
pub use crate::output::{deliver, DeliveryTarget, OutputPlan, OutputReport};

// --- Pipeline Traits ---
pub use crate::pipeline::{NotebookSource, SummaryComposer, SummaryDelivery};
