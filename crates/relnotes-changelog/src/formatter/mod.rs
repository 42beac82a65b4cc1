//! Version note formatters

mod html;
mod markdown;
mod registry;

pub use html::HtmlFormatter;
pub use markdown::MarkdownFormatter;
pub use registry::FormatterRegistry;

use tracing::{debug, instrument};

use crate::types::VersionNote;

/// Trait for version note formatters
pub trait NoteFormatter: Send + Sync {
    /// Format a version note to string
    fn format(&self, note: &VersionNote) -> String;

    /// Short name used to select this formatter (e.g. "html")
    fn name(&self) -> &'static str;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}

/// Render several notes in order, one fragment after another
#[instrument(skip(formatter, notes), fields(format = formatter.name(), note_count = notes.len()))]
pub fn render_all(formatter: &dyn NoteFormatter, notes: &[VersionNote]) -> String {
    let output: String = notes.iter().map(|note| formatter.format(note)).collect();
    debug!(output_len = output.len(), "notes rendered");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeEntry;

    #[test]
    fn test_render_all_keeps_note_order() {
        let notes = vec![
            VersionNote::new("2.0", "Second", vec![], "Bob"),
            VersionNote::new("1.0", "First", vec![ChangeEntry::new("feat", "x")], "Alice"),
        ];

        let output = render_all(&HtmlFormatter::new(), &notes);

        let second = output.find("Version 2.0").unwrap();
        let first = output.find("Version 1.0").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_render_all_empty() {
        assert!(render_all(&MarkdownFormatter::new(), &[]).is_empty());
    }
}
