//! Markdown version note formatter

use tracing::{debug, instrument};

use super::NoteFormatter;
use crate::types::VersionNote;

/// Markdown formatter producing one `##` section per note
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }
}

impl NoteFormatter for MarkdownFormatter {
    #[instrument(skip(self, note), fields(version = %note.version, change_count = note.changes.len()))]
    fn format(&self, note: &VersionNote) -> String {
        let mut output = String::new();

        output.push_str(&format!("## Version {}\n\n", note.version));

        if !note.description.is_empty() {
            output.push_str(&format!("{}\n\n", note.description));
        }

        if !note.changes.is_empty() {
            for change in &note.changes {
                output.push_str(&format!("- **{}** {}\n", change.tag, change.description));
            }
            output.push('\n');
        }

        output.push_str(&format!("**Author:** {}\n\n", note.author));

        debug!(output_len = output.len(), "markdown note formatted");
        output
    }

    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeEntry;

    #[test]
    fn test_format_basic() {
        let note = VersionNote::new(
            "1.0",
            "Initial",
            vec![ChangeEntry::new("feat", "Add login")],
            "Alice",
        );
        let output = MarkdownFormatter::new().format(&note);

        assert!(output.starts_with("## Version 1.0\n"));
        assert!(output.contains("Initial"));
        assert!(output.contains("- **feat** Add login"));
        assert!(output.contains("**Author:** Alice"));
    }

    #[test]
    fn test_format_order_and_empty_list() {
        let note = VersionNote::new(
            "2.0",
            "",
            vec![ChangeEntry::new("fix", "one"), ChangeEntry::new("feat", "two")],
            "Bob",
        );
        let output = MarkdownFormatter::new().format(&note);
        assert!(output.find("one").unwrap() < output.find("two").unwrap());

        let empty = VersionNote::new("2.1", "d", vec![], "Bob");
        let output = MarkdownFormatter::new().format(&empty);
        assert!(!output.contains("- "));
        assert!(output.contains("**Author:** Bob"));
    }
}
