//! Renders analysis results into markdown fragments and directory reports.

pub mod report;
pub mod summary;

pub use report::{render_report, render_section, report_header, ReportSection};
pub use summary::{render_json, render_markdown};
