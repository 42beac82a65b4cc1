//! HTML version note formatter

use std::borrow::Cow;

use tracing::{debug, instrument};

use super::NoteFormatter;
use crate::types::VersionNote;

/// HTML fragment formatter.
///
/// Text fields are interpolated verbatim unless `escape_html` is set.
/// Callers inserting untrusted input into a page must sanitize it first or
/// turn escaping on.
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    /// Escape text fields before interpolation
    pub escape_html: bool,
}

impl HtmlFormatter {
    /// Create a new HTML formatter (no escaping)
    pub fn new() -> Self {
        Self { escape_html: false }
    }

    /// Enable or disable escaping of text fields
    pub fn with_escape(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }

    fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            html_escape::encode_text(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}

impl NoteFormatter for HtmlFormatter {
    #[instrument(skip(self, note), fields(version = %note.version, change_count = note.changes.len()))]
    fn format(&self, note: &VersionNote) -> String {
        let items: String = note
            .changes
            .iter()
            .map(|change| {
                format!(
                    "<li>{} {}</li>",
                    self.text(&change.tag),
                    self.text(&change.description)
                )
            })
            .collect();

        let mut output = String::new();
        output.push_str("<div>\n");
        output.push_str(&format!("  <h2>Version {}</h2>\n", self.text(&note.version)));
        output.push_str(&format!("  <p>{}</p>\n", self.text(&note.description)));
        output.push_str("  <ul>\n");
        output.push_str(&format!("    {}\n", items));
        output.push_str("  </ul>\n");
        output.push_str(&format!(
            "  <p><strong>Author:</strong> {}</p>\n",
            self.text(&note.author)
        ));
        output.push_str("</div>\n");

        debug!(output_len = output.len(), escaped = self.escape_html, "html note formatted");
        output
    }

    fn name(&self) -> &'static str {
        "html"
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeEntry;

    fn sample() -> VersionNote {
        VersionNote::new(
            "1.0",
            "Initial",
            vec![ChangeEntry::new("feat", "Add login")],
            "Alice",
        )
    }

    #[test]
    fn test_format_basic() {
        let output = HtmlFormatter::new().format(&sample());

        assert!(output.contains("<h2>Version 1.0</h2>"));
        assert!(output.contains("<p>Initial</p>"));
        assert!(output.contains("<li>feat Add login</li>"));
        assert!(output.contains("<p><strong>Author:</strong> Alice</p>"));
    }

    #[test]
    fn test_exact_markup() {
        let expected = "<div>\n  <h2>Version 1.0</h2>\n  <p>Initial</p>\n  <ul>\n    <li>feat Add login</li>\n  </ul>\n  <p><strong>Author:</strong> Alice</p>\n</div>\n";
        assert_eq!(HtmlFormatter::new().format(&sample()), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let note = sample();
        assert_eq!(note.render(), note.render());
        assert_eq!(note.render(), HtmlFormatter::new().format(&note));
    }

    #[test]
    fn test_empty_changes() {
        let note = VersionNote::new("0.1", "Nothing yet", vec![], "Bob");
        let output = note.render();

        assert!(!output.contains("<li>"));
        assert!(output.contains("<ul>"));
        assert!(output.contains("</ul>"));
        assert!(output.contains("Version 0.1"));
        assert!(output.contains("<strong>Author:</strong> Bob"));
    }

    #[test]
    fn test_change_order_preserved() {
        let note = VersionNote::new(
            "1.1",
            "Second",
            vec![
                ChangeEntry::new("fix", "B comes first"),
                ChangeEntry::new("feat", "A comes second"),
                ChangeEntry::new("fix", "B comes first"),
            ],
            "Alice",
        );
        let output = note.render();

        let first = output.find("<li>fix B comes first</li>").unwrap();
        let second = output.find("<li>feat A comes second</li>").unwrap();
        assert!(first < second);
        assert_eq!(output.matches("<li>fix B comes first</li>").count(), 2);
    }

    #[test]
    fn test_no_escaping_by_default() {
        let note = VersionNote::new(
            "1.0",
            "<script>alert(1)</script>",
            vec![ChangeEntry::new("<b>feat</b>", "a & b")],
            "Alice",
        );
        let output = note.render();

        assert!(output.contains("<p><script>alert(1)</script></p>"));
        assert!(output.contains("<li><b>feat</b> a & b</li>"));
    }

    #[test]
    fn test_escaping_when_enabled() {
        let note = VersionNote::new(
            "1.0",
            "<script>alert(1)</script>",
            vec![ChangeEntry::new("feat", "a & b")],
            "Alice",
        );
        let output = HtmlFormatter::new().with_escape(true).format(&note);

        assert!(!output.contains("<script>"));
        assert!(output.contains("&lt;script&gt;"));
        assert!(output.contains("<li>feat a &amp; b</li>"));
    }
}
