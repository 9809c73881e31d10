// src/formatting/report.rs
//! Assembles the directory-level report from per-notebook sections.

use super::summary::render_markdown;
use crate::constants::{
    CHARS_PER_SECTION_ESTIMATE, REPORT_INTRODUCTION, REPORT_TITLE, SECTION_RULE,
};
use crate::model::AnalysisResult;
use crate::types::RenderedMarkdown;

/// One notebook's entry in the report.
#[derive(Debug, Clone)]
pub struct ReportSection<'a> {
    /// Path relative to the analyzed root, `/`-separated.
    pub relative_path: String,
    pub result: &'a AnalysisResult,
}

/// The fixed report preamble: title, introduction, rule.
pub fn report_header() -> String {
    format!("{REPORT_TITLE}\n\n{REPORT_INTRODUCTION}\n\n{SECTION_RULE}\n\n")
}

/// A level-2 heading with the relative path, the fragment, and a rule.
pub fn render_section(section: &ReportSection<'_>) -> String {
    format!(
        "## {}\n\n{}\n{SECTION_RULE}\n\n",
        section.relative_path,
        render_markdown(section.result)
    )
}

/// Concatenates the header and every section in the given order.
pub fn render_report(sections: &[ReportSection<'_>]) -> RenderedMarkdown {
    let mut output = String::with_capacity(
        REPORT_INTRODUCTION.len() + sections.len() * CHARS_PER_SECTION_ESTIMATE,
    );
    output.push_str(&report_header());
    for section in sections {
        output.push_str(&render_section(section));
    }
    RenderedMarkdown::new(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header() {
        assert_eq!(
            report_header(),
            "# Notebook Descriptions\n\nThis document provides automatically generated descriptions for all Jupyter notebooks in this repository.\n\n---\n\n"
        );
    }

    #[test]
    fn test_section_layout() {
        let result = AnalysisResult {
            title: "A".to_string(),
            description: "Error loading notebook".to_string(),
            topics: vec![],
            code_cell_count: 0,
            source_filename: "a.ipynb".to_string(),
        };
        let section = ReportSection {
            relative_path: "sub/a.ipynb".to_string(),
            result: &result,
        };
        assert_eq!(
            render_section(&section),
            "## sub/a.ipynb\n\n### A\n\nError loading notebook\n\n**Code Examples:** 0 cells\n\n---\n\n"
        );
    }

    #[test]
    fn test_empty_report_is_just_the_header() {
        assert_eq!(render_report(&[]).as_str(), report_header());
    }
}
