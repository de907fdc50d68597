//! Tracker Factory
//!
//! Creates the tracker with infrastructure dependencies wired up from
//! configuration. This is the dependency injection point for the binary.

use std::path::Path;

use tracing::debug;

use crate::application::{PaintTracker, TrackerOptions};
use crate::config::Config;
use crate::error::PaintrackResult;
use crate::infrastructure::{load_base_paints, FileStore, JsonStateRepository, TextFileExporter};

/// Tracker backed by JSON files in the configured storage directory
pub type FileTracker = PaintTracker<JsonStateRepository<FileStore>>;

/// Load the base catalog and stored state for one session.
///
/// A base catalog that cannot be read is an error; stored state never is.
pub fn create_tracker(config: &Config) -> PaintrackResult<FileTracker> {
    let base = load_base_paints(config.base_catalog_path().as_deref())?;
    let store = FileStore::new(config.storage_dir());
    debug!(dir = %store.dir().display(), "using storage directory");

    Ok(PaintTracker::with_options(
        JsonStateRepository::new(store),
        base,
        TrackerOptions {
            reject_duplicate_codes: config.catalog.reject_duplicate_codes,
        },
    ))
}

/// Exporter writing to `dir`, else the configured export directory.
pub fn create_exporter(config: &Config, dir: Option<&Path>) -> TextFileExporter {
    match dir {
        Some(dir) => TextFileExporter::new(dir),
        None => TextFileExporter::new(config.export_dir()),
    }
}
