//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::error::{Result, ResultExt};
use crate::model::{ResultItem, SearchOptions};
use crate::search::SearchClient;
use std::io::Write;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub async fn run(&self) -> Result<()> {
        let mut buf = Vec::new();
        self.run_to(&mut buf).await?;
        std::io::stdout().write_all(&buf)?;
        Ok(())
    }

    /// Run the CLI command, writing results to `out`
    pub async fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let client = SearchClient::from_config(&self.client_config()?)?;

        match &self.cli.command {
            Commands::Search { term, page } => {
                let options = page.map(SearchOptions::page);
                let items = client.search(term, options).await?;
                self.write_items(out, &items)
            }
            Commands::Id { id } => {
                let item = client.get_by_id(id).await?;
                self.write_items(out, std::slice::from_ref(&item))
            }
            Commands::Title { title } => {
                let item = client.get_by_title(title).await?;
                self.write_items(out, std::slice::from_ref(&item))
            }
        }
    }

    /// Resolve configuration: file (or defaults), then environment, then flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ClientConfig::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;

        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(url) = &self.cli.base_url {
            config.base_url = url.clone();
        }

        config.validate()?;
        Ok(config)
    }

    fn write_items<W: Write>(&self, out: &mut W, items: &[ResultItem]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                for item in items {
                    writeln!(out, "{}", serde_json::to_string(item)?)?;
                }
            }
            OutputFormat::Pretty => {
                for item in items {
                    writeln!(out, "{} ({}) [{}] {}", item.title, item.year, item.item_type, item.imdb_id)?;
                    if !item.plot.is_empty() {
                        writeln!(out, "    {}", item.plot)?;
                    }
                    for rating in &item.ratings {
                        writeln!(out, "    {}: {}", rating.source, rating.value)?;
                    }
                }
                writeln!(out, "{} item(s)", items.len())?;
            }
        }
        Ok(())
    }
}
