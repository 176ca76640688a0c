//! CLI commands and argument parsing

use crate::types::LogLevel;
use crate::window::ScrollingStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Solidafy Paginator CLI
#[derive(Parser, Debug)]
#[command(name = "solidafy-paginator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Paginator configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Data file holding a JSON array of items
    #[arg(short, long, global = true, conflicts_with = "total")]
    pub input: Option<PathBuf>,

    /// Paginate a synthetic collection of the numbers 1..=TOTAL
    #[arg(short, long, global = true)]
    pub total: Option<usize>,

    /// Current page (out-of-range values are clamped)
    #[arg(short, long, global = true, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,

    /// Items per page (overrides the configuration, 0 = single page)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub per_page: Option<i64>,

    /// Number of page links in the window (overrides the configuration)
    #[arg(short, long, global = true)]
    pub range: Option<usize>,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the navigation snapshot of the current page
    Pages {
        /// Scrolling style (all, sliding, elastic, jumping)
        #[arg(short, long)]
        style: Option<ScrollingStyle>,
    },

    /// Print the items of the current page
    Items,

    /// Print one item of the current page
    Item {
        /// Position on the page (negative counts from the end)
        #[arg(short, long, allow_negative_numbers = true)]
        number: i64,
    },

    /// List the scrolling styles
    Styles,
}
