//! CLI runner - executes commands

use crate::adapter::VecAdapter;
use crate::cli::commands::{Cli, Commands};
use crate::config::PaginatorConfig;
use crate::error::{Error, Result, ResultExt};
use crate::paginator::Paginator;
use crate::types::JsonValue;
use crate::window::ScrollingStyle;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Pages { style } => self.pages(*style),
            Commands::Items => self.items(),
            Commands::Item { number } => self.item(*number),
            Commands::Styles => self.styles(),
        }
    }

    /// Load the paginator configuration
    fn load_config(&self) -> Result<PaginatorConfig> {
        match &self.cli.config {
            Some(path) => PaginatorConfig::from_file(path),
            None => Ok(PaginatorConfig::default()),
        }
    }

    /// Load the collection to paginate
    fn load_items(&self) -> Result<Vec<JsonValue>> {
        if let Some(path) = &self.cli.input {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read data file {}", path.display()))?;
            let value: JsonValue = serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in {}", path.display()))?;

            return match value {
                JsonValue::Array(items) => Ok(items),
                _ => Err(Error::invalid_value(
                    "input",
                    "data file must contain a JSON array",
                )),
            };
        }

        if let Some(total) = self.cli.total {
            return Ok((1..=total).map(JsonValue::from).collect());
        }

        Err(Error::invalid_config(
            "No collection given (use --input or --total)",
        ))
    }

    /// Build a paginator from the command-line options
    fn build_paginator(&self) -> Result<Paginator<VecAdapter<JsonValue>>> {
        let config = self.load_config()?;
        let items = self.load_items()?;
        debug!("Paginating {} items", items.len());

        let mut builder = Paginator::builder()
            .adapter(Arc::new(VecAdapter::fingerprinted(items)?))
            .config(config.into_shared())
            .current_page_number(self.cli.page);
        if let Some(count) = self.cli.per_page {
            builder = builder.item_count_per_page(count);
        }
        if let Some(range) = self.cli.range {
            builder = builder.page_range(range);
        }

        builder.build().context("Cannot set up paginator")
    }

    /// Print the navigation snapshot
    fn pages(&self, style: Option<ScrollingStyle>) -> Result<()> {
        let paginator = self.build_paginator()?;
        let pages = paginator.pages(style)?;
        self.output(&pages)
    }

    /// Print the current page's items
    fn items(&self) -> Result<()> {
        let paginator = self.build_paginator()?;
        let items = paginator.current_items()?;

        self.output(&json!({
            "page": paginator.current_page_number(),
            "page_count": paginator.page_count(),
            "items": items,
        }))
    }

    /// Print one item of the current page
    fn item(&self, number: i64) -> Result<()> {
        let paginator = self.build_paginator()?;
        let item = paginator.item(number, None)?;
        self.output(&item)
    }

    /// List the scrolling styles
    fn styles(&self) -> Result<()> {
        let styles: Vec<&str> = ScrollingStyle::ALL.iter().map(|s| s.name()).collect();
        self.output(&json!({ "styles": styles }))
    }

    /// Write a value to stdout as JSON
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{text}");
        Ok(())
    }
}
