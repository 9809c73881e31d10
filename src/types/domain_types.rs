// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Name of the report file written inside an analyzed directory.
///
/// The name is always resolved against the analyzed root, so it must stay
/// relative and may not climb out of the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFilename(String);

impl OutputFilename {
    /// Create a new output filename with validation
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField("output filename"));
        }

        let path = Path::new(&name);
        if path.is_absolute() || path.has_root() {
            return Err(ValidationError::InvalidOutputFilename {
                name: name.clone(),
                reason: "must be relative to the analyzed directory".to_string(),
            });
        }

        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(ValidationError::InvalidOutputFilename {
                name: name.clone(),
                reason: "may not contain '..'".to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Get the filename as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the report location inside `root`.
    pub fn resolve_in(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl Default for OutputFilename {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_OUTPUT_FILENAME.to_string())
    }
}

impl fmt::Display for OutputFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Markdown (or JSON) text that is ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMarkdown(String);

impl RenderedMarkdown {
    pub fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedMarkdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
