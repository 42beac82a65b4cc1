//! Authors command

use clap::Args;
use tracing::info;

use crate::cli::Cli;

use super::print_list;

/// List authors
#[derive(Debug, Args)]
pub struct AuthorsCommand {}

impl AuthorsCommand {
    /// Execute the authors command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing authors command");
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.execute_async(cli))
    }

    async fn execute_async(&self, cli: &Cli) -> anyhow::Result<()> {
        let config = cli.load_config()?;
        let accessor = cli.accessor(&config)?;

        let authors = accessor.authors().await?;
        print_list(cli, "authors", &authors)
    }
}
