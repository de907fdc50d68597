//! paintrack CLI - track paints against a storage board, stock and shopping list
//!
//! Usage: paintrack <COMMAND>
//!
//! Commands:
//!   add      Add a custom paint to the catalog
//!   stock    Change the stock on hand for a paint
//!   cart     Change the wanted quantity on the shopping list
//!   place    Put a paint into a board slot
//!   inspect  Show the paint in a board slot
//!   clear    Empty a board slot
//!   list     Show a list panel
//!   search   Search the catalog
//!   board    Show the board section by section
//!   export   Write a list panel to a text file

mod commands;

use anyhow::{Context as _, Result};
use clap::Parser;

use paintrack::config::Config;
use paintrack::logging;
use paintrack::presentation::{Cli, Commands};

use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) =
        Config::load_or_default(cli.config.as_deref()).context("loading configuration")?;
    logging::init(logging::level_for(config.output.verbosity, cli.verbose));
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    let ctx = Context::new(config, cli.json);

    match cli.command {
        Commands::Add { name, code, hex } => commands::catalog::cmd_add(&ctx, name, code, hex),
        Commands::Search { query } => commands::catalog::cmd_search(&ctx, &query),
        Commands::Stock { code, delta } => commands::ledger::cmd_stock(&ctx, &code, delta),
        Commands::Cart { code, delta } => commands::ledger::cmd_cart(&ctx, &code, delta),
        Commands::Place { code, slot } => commands::board::cmd_place(&ctx, &code, slot),
        Commands::Inspect { slot } => commands::board::cmd_inspect(&ctx, slot),
        Commands::Clear { slot } => commands::board::cmd_clear(&ctx, slot),
        Commands::Board => commands::board::cmd_board(&ctx),
        Commands::List { kind } => commands::lists::cmd_list(&ctx, kind),
        Commands::Export { kind, dir } => commands::lists::cmd_export(&ctx, kind, dir.as_deref()),
    }
}
