use serde::{Deserialize, Serialize};

/// One translatable source string extracted from an asset.
///
/// Immutable once handed to a checker; checkers never mutate source content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextUnit {
    source: String,
}

impl TextUnit {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// The set of text units that changed between two extraction snapshots of one
/// asset. Only added units are inspected by the check pipeline; removed units
/// are carried for callers that diff in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionDiff {
    #[serde(default)]
    added: Vec<TextUnit>,
    #[serde(default)]
    removed: Vec<TextUnit>,
}

impl ExtractionDiff {
    pub fn new(added: Vec<TextUnit>, removed: Vec<TextUnit>) -> Self {
        Self { added, removed }
    }

    /// Diff consisting only of added units, the common case for checks.
    pub fn from_added(added: Vec<TextUnit>) -> Self {
        Self {
            added,
            removed: Vec::new(),
        }
    }

    pub fn added(&self) -> &[TextUnit] {
        &self.added
    }

    pub fn removed(&self) -> &[TextUnit] {
        &self.removed
    }
}
