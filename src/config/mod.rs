//! Configuration module for paintrack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PAINTRACK_*)
//! 3. Explicit `--config` file, else user config (~/.config/paintrack/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{CatalogConfig, Config, ExportConfig, OutputConfig, StorageConfig, Verbosity};
