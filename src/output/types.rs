// src/output/types.rs
//! Type definitions for output operations.

use std::path::PathBuf;

/// An ordered list of output operations.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    /// Creates a new empty output plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation to the plan.
    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }
}

/// Represents a single output operation.
#[derive(Debug, Clone)]
pub enum DeliveryTarget {
    /// Write content to a file, creating parent directories as needed
    WriteFile { path: PathBuf, content: String },
    /// Print to stdout
    PrintToStdout { content: String },
}

impl DeliveryTarget {
    /// Short human-readable name of the destination.
    pub fn describe(&self) -> String {
        match self {
            DeliveryTarget::WriteFile { path, .. } => path.display().to_string(),
            DeliveryTarget::PrintToStdout { .. } => "stdout".to_string(),
        }
    }
}

/// Result of executing an output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    pub completed: Vec<CompletedOperation>,
    pub failed: Vec<FailedOperation>,
    pub bytes_written: usize,
}

impl OutputReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a completed operation to the report.
    pub fn with_completed(mut self, operation: CompletedOperation) -> Self {
        self.bytes_written += operation.bytes_written;
        self.completed.push(operation);
        self
    }

    /// Adds a failed operation to the report.
    pub fn with_failed(mut self, operation: FailedOperation) -> Self {
        self.failed.push(operation);
        self
    }

    /// Checks if all operations succeeded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// One `<target>: <error>` line per failed operation.
    pub fn failure_messages(&self) -> Vec<String> {
        self.failed
            .iter()
            .map(|failure| format!("{}: {}", failure.operation.describe(), failure.error))
            .collect()
    }
}

/// A successfully completed operation.
#[derive(Debug, Clone)]
pub struct CompletedOperation {
    pub bytes_written: usize,
}

/// A failed operation with error information.
#[derive(Debug, Clone)]
pub struct FailedOperation {
    pub operation: DeliveryTarget,
    pub error: String,
}
