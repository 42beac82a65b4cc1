//! CLI commands

mod authors;
mod init;
mod render;
mod tags;

pub use authors::AuthorsCommand;
pub use init::InitCommand;
pub use render::RenderCommand;
pub use tags::TagsCommand;

use crate::cli::{Cli, OutputFormat};

/// Print a list of names as text lines or a JSON array
fn print_list(cli: &Cli, label: &str, values: &[String]) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(values)?);
        }
        OutputFormat::Text => {
            if values.is_empty() {
                if !cli.quiet {
                    crate::cli::output::warning(&format!("No {} configured.", label));
                }
                return Ok(());
            }
            for value in values {
                println!("{}", value);
            }
        }
    }
    Ok(())
}
