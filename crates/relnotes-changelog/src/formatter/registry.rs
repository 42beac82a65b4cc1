//! Formatter registry

use std::sync::Arc;

use relnotes_core::RenderConfig;

use super::{HtmlFormatter, MarkdownFormatter, NoteFormatter};

/// Registry of available note formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn NoteFormatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self {
            formatters: vec![
                Arc::new(HtmlFormatter::new()),
                Arc::new(MarkdownFormatter::new()),
            ],
        }
    }

    /// Create a registry whose built-ins follow the render settings
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            formatters: vec![
                Arc::new(HtmlFormatter::new().with_escape(config.escape_html)),
                Arc::new(MarkdownFormatter::new()),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            formatters: Vec::new(),
        }
    }

    /// Register a formatter
    pub fn register<F: NoteFormatter + 'static>(&mut self, formatter: F) {
        self.formatters.push(Arc::new(formatter));
    }

    /// Get formatter by name or file extension
    pub fn get(&self, key: &str) -> Option<Arc<dyn NoteFormatter>> {
        self.formatters
            .iter()
            .find(|f| f.name() == key || f.extension() == key)
            .cloned()
    }

    /// Get all registered formatters
    pub fn all(&self) -> &[Arc<dyn NoteFormatter>] {
        &self.formatters
    }

    /// Get all registered formatter names
    pub fn names(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.name()).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
