// src/formatting/summary.rs
//! Renders one analysis result as a markdown fragment or JSON.
//!
//! The markdown layout is fixed byte for byte; generated reports are diffed
//! by downstream tooling.

use crate::error::AppError;
use crate::model::AnalysisResult;

/// Renders the per-notebook markdown fragment.
pub fn render_markdown(result: &AnalysisResult) -> String {
    let mut md = String::with_capacity(
        result.title.len()
            + result.description.len()
            + result.topics.iter().map(|t| t.len() + 3).sum::<usize>()
            + 64,
    );

    md.push_str(&format!("### {}\n\n", result.title));
    md.push_str(&format!("{}\n\n", result.description));

    if !result.topics.is_empty() {
        md.push_str("**Topics Covered:**\n");
        for topic in &result.topics {
            md.push_str(&format!("- {}\n", topic));
        }
        md.push('\n');
    }

    md.push_str(&format!(
        "**Code Examples:** {} cells\n",
        result.code_cell_count
    ));
    md
}

/// Renders the analysis result as pretty-printed JSON.
pub fn render_json(result: &AnalysisResult) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(result)?)
}
