use serde::Serialize;

/// Everything the analyzer learned about one notebook.
///
/// Built once per analysis call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub title: String,
    pub description: String,
    pub topics: Vec<String>,
    #[serde(rename = "code_cells")]
    pub code_cell_count: usize,
    #[serde(rename = "filename")]
    pub source_filename: String,
}

/// Outcome of analyzing one notebook.
///
/// A degraded outcome still carries a renderable result built from fallback
/// values, plus the reason the notebook could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Analyzed(AnalysisResult),
    Degraded {
        result: AnalysisResult,
        reason: String,
    },
}

impl AnalysisOutcome {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            Self::Analyzed(result) | Self::Degraded { result, .. } => result,
        }
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            Self::Analyzed(result) | Self::Degraded { result, .. } => result,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}
