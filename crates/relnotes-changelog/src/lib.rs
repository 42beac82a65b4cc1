//! relnotes changelog - version notes and their renderers
//!
//! This crate holds the [`VersionNote`] data type and the formatters that
//! turn it into HTML or Markdown fragments.

pub mod formatter;
pub mod notes;
pub mod types;

pub use formatter::{
    render_all, FormatterRegistry, HtmlFormatter, MarkdownFormatter, NoteFormatter,
};
pub use notes::load_notes;
pub use types::{ChangeEntry, VersionNote};
