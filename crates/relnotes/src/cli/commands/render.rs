//! Render command

use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use relnotes_changelog::{load_notes, render_all, FormatterRegistry};
use relnotes_core::{NotesError, RelnotesError, RenderConfig};

use crate::cli::{output, Cli, OutputFormat};

/// Render version notes
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Notes file (.json, .yaml, .yml or .toml)
    pub file: PathBuf,

    /// Output format (html, markdown); defaults to the configured one
    #[arg(long = "as", value_name = "FORMAT")]
    pub as_format: Option<String>,

    /// Escape text fields in HTML output
    #[arg(long)]
    pub escape: bool,

    /// Write to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    /// Execute the render command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            file = %self.file.display(),
            format = ?self.as_format,
            escape = self.escape,
            "executing render command"
        );
        let config = cli.load_config()?;

        let render = RenderConfig {
            format: self
                .as_format
                .clone()
                .unwrap_or_else(|| config.render.format.clone()),
            escape_html: self.escape || config.render.escape_html,
        };

        let registry = FormatterRegistry::from_config(&render);
        let formatter = registry
            .get(&render.format)
            .ok_or_else(|| RelnotesError::from(NotesError::UnknownFormat(render.format.clone())))?;

        let notes = load_notes(&self.file)?;
        let rendered = render_all(formatter.as_ref(), &notes);
        debug!(note_count = notes.len(), output_len = rendered.len(), "notes rendered");

        if let Some(path) = &self.output {
            std::fs::write(path, &rendered)?;
            if !cli.quiet {
                output::success(&format!(
                    "Rendered {} note(s) to {}",
                    notes.len(),
                    output::path_style().apply_to(path.display())
                ));
            }
            return Ok(());
        }

        match cli.format {
            OutputFormat::Json => {
                let payload = serde_json::json!({
                    "format": formatter.name(),
                    "notes": notes.len(),
                    "rendered": rendered,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Text => {
                print!("{}", rendered);
            }
        }

        Ok(())
    }
}
