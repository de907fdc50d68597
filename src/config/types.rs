//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PaintrackResult;

use super::loader::{self, ConfigWarning};

/// Where the tracked state is stored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per entity (default `~/.paintrack`)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Base catalog settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Replacement for the bundled base paint set
    #[serde(default)]
    pub base: Option<PathBuf>,

    /// Refuse custom paints whose code is already in the catalog
    #[serde(default)]
    pub reject_duplicate_codes: bool,
}

/// List export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PaintrackResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PaintrackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the user config, or defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> PaintrackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (PAINTRACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Resolved storage directory
    pub fn storage_dir(&self) -> PathBuf {
        match &self.storage.dir {
            Some(dir) => loader::expand_home(dir),
            None => loader::home_dir()
                .map(|home| home.join(".paintrack"))
                .unwrap_or_else(|| PathBuf::from(".paintrack")),
        }
    }

    /// Resolved base catalog file, `None` for the bundled set
    pub fn base_catalog_path(&self) -> Option<PathBuf> {
        self.catalog.base.as_deref().map(loader::expand_home)
    }

    /// Resolved export directory
    pub fn export_dir(&self) -> PathBuf {
        loader::expand_home(&self.export.dir)
    }
}
