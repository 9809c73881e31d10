use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::fmt;

/// One notebook cell.
///
/// Both keys are optional in the file. A missing `cell_type` makes the cell
/// invisible to every extraction rule; a missing or null `source` is empty
/// text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Cell {
    #[serde(default, deserialize_with = "cell_type_from_value")]
    pub cell_type: CellType,
    #[serde(default, deserialize_with = "source_or_empty")]
    pub source: CellSource,
}

impl Cell {
    pub fn new(cell_type: CellType, source: impl Into<String>) -> Self {
        Self {
            cell_type,
            source: CellSource::Text(source.into()),
        }
    }

    pub fn markdown(source: impl Into<String>) -> Self {
        Self::new(CellType::Markdown, source)
    }

    pub fn code(source: impl Into<String>) -> Self {
        Self::new(CellType::Code, source)
    }

    pub fn is_markdown(&self) -> bool {
        self.cell_type == CellType::Markdown
    }

    pub fn is_code(&self) -> bool {
        self.cell_type == CellType::Code
    }
}

/// Kind of cell. Anything the analyzer does not recognize is `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellType {
    Markdown,
    Code,
    Raw,
    #[default]
    Unknown,
}

impl CellType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "markdown" => Self::Markdown,
            "code" => Self::Code,
            "raw" => Self::Raw,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Markdown => "markdown",
            Self::Code => "code",
            Self::Raw => "raw",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Non-string tags (numbers, null, objects) are treated like unknown tags
/// rather than failing the whole document.
fn cell_type_from_value<'de, D>(deserializer: D) -> Result<CellType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(tag) => CellType::from_tag(&tag),
        _ => CellType::Unknown,
    })
}

fn source_or_empty<'de, D>(deserializer: D) -> Result<CellSource, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<CellSource>::deserialize(deserializer)?.unwrap_or_default())
}

/// Cell source as stored on disk: either a list of fragments or one string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Lines(Vec<String>),
    Text(String),
}

impl CellSource {
    /// The fragments joined in order with no separator.
    pub fn text(&self) -> String {
        self.as_text().into_owned()
    }

    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Lines(lines) => Cow::Owned(lines.concat()),
            Self::Text(text) => Cow::Borrowed(text),
        }
    }
}

impl Default for CellSource {
    fn default() -> Self {
        Self::Lines(Vec::new())
    }
}
