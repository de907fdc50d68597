//! Catalog entity - base paints plus user-added custom paints
//!
//! The merged catalog is deduplicated by code with the first occurrence
//! winning, and the base set is always iterated first. A custom paint
//! whose code is already taken is still stored but never reachable
//! through the merged catalog.

use std::collections::HashSet;

use crate::domain::value_objects::{Paint, PaintValidationError};

/// Concatenate `base` then `custom`, dropping later duplicates by code.
pub fn merge(base: &[Paint], custom: &[Paint]) -> Vec<Paint> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(base.len() + custom.len());
    base.iter()
        .chain(custom)
        .filter(|paint| seen.insert(paint.code.as_str()))
        .cloned()
        .collect()
}

/// Append `new_paint` to the custom set.
///
/// Rejects paints with an empty name or code. Does not look for code
/// collisions; `merge` decides precedence.
pub fn add_custom(custom: &[Paint], new_paint: Paint) -> Result<Vec<Paint>, PaintValidationError> {
    new_paint.validate()?;
    let mut next = Vec::with_capacity(custom.len() + 1);
    next.extend_from_slice(custom);
    next.push(new_paint);
    Ok(next)
}

/// The merged, deduplicated catalog in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    paints: Vec<Paint>,
}

impl Catalog {
    pub fn new(base: &[Paint], custom: &[Paint]) -> Self {
        Self {
            paints: merge(base, custom),
        }
    }

    pub fn paints(&self) -> &[Paint] {
        &self.paints
    }

    pub fn find(&self, code: &str) -> Option<&Paint> {
        self.paints.iter().find(|p| p.code == code)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.paints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paints.is_empty()
    }
}
