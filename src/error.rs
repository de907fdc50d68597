//! Error types for paintrack
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::BoardError;
use crate::domain::value_objects::{PaintValidationError, ViewKind};

/// Result type alias for paintrack operations
pub type PaintrackResult<T> = Result<T, PaintrackError>;

/// Main error type for paintrack operations
#[derive(Error, Debug)]
pub enum PaintrackError {
    /// Paint rejected by validation (empty name or code)
    #[error("invalid paint: {0}")]
    InvalidPaint(#[from] PaintValidationError),

    /// Board slot addressing error
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Code not present in the merged catalog
    #[error("no paint with code '{code}' in the catalog")]
    UnknownPaint { code: String },

    /// Custom paint would be shadowed by an existing catalog entry
    #[error("a paint with code '{code}' already exists in the catalog")]
    DuplicateCode { code: String },

    /// Export requested for a view with no rows
    #[error("nothing to export: the {kind} list is empty")]
    NothingToExport { kind: ViewKind },

    /// Base catalog file could not be read or parsed
    #[error("failed to load base catalog from {path}: {message}")]
    CatalogLoad { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PaintrackError {
    /// Whether this error is a user-facing notice rather than a failure
    pub fn is_notice(&self) -> bool {
        matches!(self, PaintrackError::NothingToExport { .. })
    }
}
