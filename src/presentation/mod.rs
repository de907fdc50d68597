//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the tracker with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Wires config into stores, repositories and exporters
//! - `output` - Text and JSON renderers

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_exporter, create_tracker, FileTracker};
pub use output::OutputFormat;
