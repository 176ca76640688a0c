//! CLI module
//!
//! Command-line interface for inspecting how a collection paginates.
//!
//! # Commands
//!
//! - `pages` - Navigation snapshot for the current page
//! - `items` - Items of the current page
//! - `item` - One item of the current page
//! - `styles` - Available scrolling styles

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
