//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --config, --verbose) are inherited by all subcommands
//! - Each invocation is one session: selection starts idle, so `place`
//!   selects and clicks in a single command

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{ViewKind, DEFAULT_HEX};

/// paintrack - track paints against a storage board, stock and shopping list
#[derive(Parser, Debug)]
#[command(name = "paintrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/paintrack/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a custom paint to the catalog
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Paint code (e.g. 70.950)
        #[arg(long)]
        code: String,

        /// Swatch colour
        #[arg(long, default_value = DEFAULT_HEX)]
        hex: String,
    },

    /// Change the stock on hand for a paint
    Stock {
        code: String,

        /// Signed change, e.g. 1 or -1
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },

    /// Change the wanted quantity on the shopping list
    Cart {
        code: String,

        /// Signed change, e.g. 1 or -1
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },

    /// Put a paint into a board slot
    Place { code: String, slot: usize },

    /// Show the paint in a board slot
    Inspect { slot: usize },

    /// Empty a board slot
    Clear { slot: usize },

    /// Show a list panel
    List {
        #[arg(value_enum, default_value_t = ViewKind::Inventory)]
        kind: ViewKind,
    },

    /// Search the catalog by name or code
    Search {
        /// Case-insensitive substring (empty lists everything)
        #[arg(default_value = "")]
        query: String,
    },

    /// Show the board section by section
    Board,

    /// Write a list panel to a text file
    Export {
        #[arg(value_enum)]
        kind: ViewKind,

        /// Output directory (default: export.dir from config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}
