//! Version note types

use serde::{Deserialize, Deserializer, Serialize};

use crate::formatter::{HtmlFormatter, NoteFormatter};

/// One change-log line: a short category tag and free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// Category label (feat, fix, ...)
    pub tag: String,
    /// What changed
    pub description: String,
}

impl ChangeEntry {
    /// Create a new change entry
    pub fn new(tag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            description: description.into(),
        }
    }
}

/// The notes for a single release.
///
/// Fields are stored exactly as given. `changes` keeps its order all the way
/// to the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionNote {
    /// Release identifier; numbers are accepted on input
    #[serde(deserialize_with = "deserialize_version")]
    pub version: String,
    /// Free-text summary
    pub description: String,
    /// Ordered change entries
    #[serde(default, alias = "changes_list")]
    pub changes: Vec<ChangeEntry>,
    /// Who wrote the release
    pub author: String,
}

impl VersionNote {
    /// Create a new version note
    pub fn new(
        version: impl Into<String>,
        description: impl Into<String>,
        changes: Vec<ChangeEntry>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            description: description.into(),
            changes,
            author: author.into(),
        }
    }

    /// Render as an HTML fragment with fields interpolated verbatim
    pub fn render(&self) -> String {
        HtmlFormatter::new().format(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VersionId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

fn deserialize_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match VersionId::deserialize(deserializer)? {
        VersionId::Text(s) => s,
        VersionId::Unsigned(n) => n.to_string(),
        VersionId::Signed(n) => n.to_string(),
        VersionId::Float(n) => n.to_string(),
    })
}
