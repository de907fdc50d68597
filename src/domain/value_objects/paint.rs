//! Paint value object - one colour in the catalog
//!
//! A paint is identified by its `code`. It carries no quantity; stock and
//! purchase intent live in the ledgers, placement lives on the board.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default swatch colour for paints added without one
pub const DEFAULT_HEX: &str = "#ffffff";

/// A single paint definition
///
/// Immutable once created. Board slots embed a full copy, so a paint
/// placed on the board survives even if its catalog entry becomes
/// unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Paint {
    pub code: String,
    pub name: String,
    pub hex: String,
}

/// Reasons a paint is rejected when added to the custom set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaintValidationError {
    #[error("paint name must not be empty")]
    EmptyName,
    #[error("paint code must not be empty")]
    EmptyCode,
}

impl Paint {
    pub fn new(code: impl Into<String>, name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Check the fields required for a user-added paint.
    pub fn validate(&self) -> Result<(), PaintValidationError> {
        if self.name.is_empty() {
            return Err(PaintValidationError::EmptyName);
        }
        if self.code.is_empty() {
            return Err(PaintValidationError::EmptyCode);
        }
        Ok(())
    }

    /// Case-insensitive substring match against name or code.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.code.to_lowercase().contains(needle)
    }
}

impl std::fmt::Display for Paint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}
