//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `styles` - List the account's styles
//! - `style` - Fetch one style document
//! - `tilesets` - List the account's tilesets
//! - `tilejson` - Fetch TileJSON for one or more tilesets

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
