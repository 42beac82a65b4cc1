//! Tags command

use clap::Args;
use tracing::info;

use crate::cli::Cli;

use super::print_list;

/// List change tags
#[derive(Debug, Args)]
pub struct TagsCommand {}

impl TagsCommand {
    /// Execute the tags command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing tags command");
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.execute_async(cli))
    }

    async fn execute_async(&self, cli: &Cli) -> anyhow::Result<()> {
        let config = cli.load_config()?;
        let accessor = cli.accessor(&config)?;

        let tags = accessor.change_tags().await?;
        print_list(cli, "tags", &tags)
    }
}
