//! Command handlers for the paintrack binary
//!
//! Each handler opens one tracker session, applies a single action and
//! prints the result as text or JSON.

pub mod board;
pub mod catalog;
pub mod ledger;
pub mod lists;

use anyhow::{Context as _, Result};
use serde::Serialize;

use paintrack::config::Config;
use paintrack::presentation::{create_tracker, output, FileTracker, OutputFormat};

/// Per-invocation settings shared by every handler
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: Config, json: bool) -> Self {
        Self {
            config,
            format: OutputFormat::from_json_flag(json),
        }
    }

    pub fn tracker(&self) -> Result<FileTracker> {
        create_tracker(&self.config).context("opening paint tracker")
    }

    /// Print `value` as JSON, or the text produced by `text`.
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", output::to_json(value)?),
            OutputFormat::Text => println!("{}", text()),
        }
        Ok(())
    }
}
