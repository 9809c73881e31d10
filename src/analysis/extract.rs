// src/analysis/extract.rs
//! Heuristic extractors over a loaded notebook document.
//!
//! Every extractor scans markdown cells in document order and looks at one
//! cell's concatenated text at a time; no rule ever matches across a cell
//! boundary.

use super::headings::{classify_line, headings};
use crate::constants::{MIN_DESCRIPTION_CHARS, TOPIC_HEADING_LEVELS};
use crate::model::NotebookDocument;
use std::path::Path;

/// Text of the first level-1 heading, or a title derived from the file name.
///
/// The first markdown cell that contains a level-1 heading line wins, and
/// within that cell the first such line.
pub fn extract_title(doc: &NotebookDocument, path: &Path) -> String {
    doc.markdown_texts()
        .find_map(|text| first_title_heading(&text))
        .unwrap_or_else(|| title_from_filename(path))
}

fn first_title_heading(text: &str) -> Option<String> {
    headings(text)
        .find(|(level, _)| *level == 1)
        .map(|(_, heading)| heading.to_string())
}

/// Level-2 and level-3 heading texts, in document order, duplicates kept.
pub fn extract_topics(doc: &NotebookDocument) -> Vec<String> {
    let mut topics = Vec::new();
    for text in doc.markdown_texts() {
        topics.extend(
            headings(&text)
                .filter(|(level, _)| TOPIC_HEADING_LEVELS.contains(level))
                .map(|(_, heading)| heading.to_string()),
        );
    }
    topics
}

/// Number of code cells.
pub fn count_code_cells(doc: &NotebookDocument) -> usize {
    doc.code_cell_count()
}

/// First substantial body paragraph, or a generated summary sentence.
///
/// Heading lines are blanked out before the cell text is split on blank
/// lines, so a heading also acts as a paragraph break.
pub fn extract_description(doc: &NotebookDocument) -> String {
    doc.markdown_texts()
        .find_map(|text| first_substantial_paragraph(&text))
        .unwrap_or_else(|| {
            format!(
                "A notebook covering {} topics with {} code examples.",
                extract_topics(doc).len(),
                count_code_cells(doc)
            )
        })
}

fn first_substantial_paragraph(text: &str) -> Option<String> {
    let body = text
        .split('\n')
        .map(|line| {
            if classify_line(line).is_heading() {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    body.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .find(|paragraph| paragraph.chars().count() > MIN_DESCRIPTION_CHARS)
        .map(str::to_string)
}

/// File stem with `_`/`-` turned into spaces, in title case.
pub fn title_from_filename(path: &Path) -> String {
    title_case(&file_stem(path).replace(['_', '-'], " "))
}

/// File name without its final extension.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Upper-cases the first letter of every run of letters and lower-cases
/// the rest, so `data2vec` becomes `Data2Vec` and `ALL CAPS` becomes
/// `All Caps`.
fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }

    output
}
