mod analysis;
mod cell;

pub use analysis::{AnalysisOutcome, AnalysisResult};
pub use cell::{Cell, CellSource, CellType};

use serde::Deserialize;

/// A parsed notebook: the ordered cell list and nothing else.
///
/// Cell order is document order; the "first heading" and "first paragraph"
/// rules depend on it. Every other top-level key (`metadata`, `nbformat`, ...)
/// is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotebookDocument {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl NotebookDocument {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Concatenated source text of each markdown cell, in document order.
    pub fn markdown_texts(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_markdown())
            .map(|cell| cell.source.text())
    }

    /// Number of executable code cells.
    pub fn code_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_code()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
