// src/error.rs
//! Application error types with structured error handling.
//!
//! Two layers of failure exist. `NotebookLoadError` describes why a single
//! notebook could not be read; it never leaves the analysis boundary and is
//! folded into a degraded result instead. `AppError` is what the binary sees
//! when an invocation as a whole cannot proceed.

use std::path::PathBuf;
use thiserror::Error;

/// Why a notebook document could not be loaded.
#[derive(Error, Debug)]
pub enum NotebookLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid notebook JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} does not contain a JSON object (found {found})")]
    NotAnObject { path: PathBuf, found: &'static str },
}

impl NotebookLoadError {
    /// The notebook path the failure refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } | Self::NotAnObject { path, .. } => {
                path
            }
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{} is not a valid notebook file or directory", .0.display())]
    InvalidInput(PathBuf),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

// Allow converting from anyhow::Error, preserving the message
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError {
            message: err.to_string(),
            source: None,
        }
    }
}
