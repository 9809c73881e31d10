//! Aggregate statistics over a batch of analyzed notebooks.

use crate::model::AnalysisOutcome;

/// Totals shown to the user once a directory report is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub notebooks: usize,
    pub degraded: usize,
    pub topics: usize,
    pub code_cells: usize,
}

impl ReportSummary {
    /// Notebooks that loaded and were fully analyzed.
    pub fn analyzed(&self) -> usize {
        self.notebooks - self.degraded
    }
}

/// Sums counts over every outcome, degraded ones included.
pub fn measure_outcomes(outcomes: &[&AnalysisOutcome]) -> ReportSummary {
    outcomes
        .iter()
        .fold(ReportSummary::default(), |mut summary, outcome| {
            let result = outcome.result();
            summary.notebooks += 1;
            summary.topics += result.topics.len();
            summary.code_cells += result.code_cell_count;
            if outcome.is_degraded() {
                summary.degraded += 1;
            }
            summary
        })
}
