// src/constants.rs
//! Domain constants that define what the analyzer looks for and what it emits.
//!
//! Each constant is named for the notebook concept it describes. Reading
//! these constants should tell you which files are analyzed, how the
//! heuristics decide what counts as content, and how the report is framed.

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// File extension (without the dot) that marks a notebook document.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Directory name produced by the notebook editor's autosave mechanism.
///
/// Any discovered path with this component is never analyzed.
pub const CHECKPOINT_DIR_MARKER: &str = ".ipynb_checkpoints";

/// Report file written into the analyzed directory when no name is given.
pub const DEFAULT_OUTPUT_FILENAME: &str = "NOTEBOOKS.md";

// ---------------------------------------------------------------------------
// Extraction heuristics
// ---------------------------------------------------------------------------

/// A paragraph must be strictly longer than this (in characters) to serve
/// as a notebook description.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// Heading levels that are collected as topics.
pub const TOPIC_HEADING_LEVELS: std::ops::RangeInclusive<usize> = 2..=3;

/// Description substituted when a notebook cannot be loaded.
pub const LOAD_FAILURE_DESCRIPTION: &str = "Error loading notebook";

// ---------------------------------------------------------------------------
// Report framing
// ---------------------------------------------------------------------------

/// Title line of the directory report.
pub const REPORT_TITLE: &str = "# Notebook Descriptions";

/// Introductory sentence under the report title.
pub const REPORT_INTRODUCTION: &str = "This document provides automatically generated descriptions for all Jupyter notebooks in this repository.";

/// Horizontal rule separating report sections.
pub const SECTION_RULE: &str = "---";

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per rendered notebook section, used to pre-allocate
/// the report buffer.
pub const CHARS_PER_SECTION_ESTIMATE: usize = 256;
