// src/output/writer.rs
//! Executes output operations by performing actual I/O.
//!
//! This module is the only place where output is written, keeping the
//! analysis and rendering code free of side effects.

use super::types::*;
use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Delivers the output plan, performing all I/O operations in order.
///
/// A failing operation is recorded in the report and does not stop the
/// remaining operations.
pub fn deliver(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let mut report = OutputReport::new();

    log::debug!(
        "Executing output plan with {} operations",
        plan.operations.len()
    );

    for operation in plan.operations {
        match execute_operation(&operation) {
            Ok(bytes_written) => {
                report = report.with_completed(CompletedOperation { bytes_written });
            }
            Err(e) => {
                log::error!("Operation failed: {}", e);
                report = report.with_failed(FailedOperation {
                    operation,
                    error: e.to_string(),
                });
            }
        }
    }

    log::debug!(
        "Output plan complete: {} succeeded, {} failed, {} bytes",
        report.completed.len(),
        report.failed.len(),
        report.bytes_written
    );

    Ok(report)
}

fn execute_operation(operation: &DeliveryTarget) -> Result<usize, AppError> {
    match operation {
        DeliveryTarget::WriteFile { path, content } => write_file(path, content),
        DeliveryTarget::PrintToStdout { content } => {
            print_to_stdout(content)?;
            Ok(content.len())
        }
    }
}

/// Writes content to a file.
fn write_file(path: &Path, content: &str) -> Result<usize, AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;

    log::info!("Wrote file: {}", path.display());
    Ok(content.len())
}

/// Prints content to stdout.
fn print_to_stdout(content: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
