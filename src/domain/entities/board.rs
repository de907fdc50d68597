//! Board entity - the physical rack of paint slots
//!
//! A flat, fixed-length sequence of slots. Each slot is empty or holds a
//! copy of the paint placed there. Assigning to an occupied slot silently
//! replaces its occupant.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::domain::value_objects::Paint;

/// Number of slots on the reference rack
pub const BOARD_CAPACITY: usize = 105;

/// Row groups of the reference rack as `(first slot, slot count)`.
///
/// Only used for display; addressing is always by flat index.
pub const BOARD_SECTIONS: [(usize, usize); 6] =
    [(0, 24), (24, 14), (38, 14), (52, 14), (66, 14), (80, 25)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("slot {index} is outside the board (0..{capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Option<Paint>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// An all-empty board of the reference capacity
    pub fn empty() -> Self {
        Self::with_capacity(BOARD_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Build a board from stored slots, padding or truncating to `capacity`.
    pub fn from_slots(mut slots: Vec<Option<Paint>>, capacity: usize) -> Self {
        slots.resize(capacity, None);
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<Paint>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Result<Option<&Paint>, BoardError> {
        self.check(index)?;
        Ok(self.slots[index].as_ref())
    }

    /// Overwrite slot `index` with `paint`, regardless of its occupant.
    pub fn assign(&self, index: usize, paint: Paint) -> Result<Self, BoardError> {
        self.check(index)?;
        let mut slots = self.slots.clone();
        slots[index] = Some(paint);
        Ok(Self { slots })
    }

    /// Empty slot `index`.
    pub fn clear(&self, index: usize) -> Result<Self, BoardError> {
        self.check(index)?;
        let mut slots = self.slots.clone();
        slots[index] = None;
        Ok(Self { slots })
    }

    /// Distinct codes held by any occupied slot
    pub fn occupied_codes(&self) -> BTreeSet<&str> {
        self.slots
            .iter()
            .flatten()
            .map(|paint| paint.code.as_str())
            .collect()
    }

    /// Indices of slots holding `code`
    pub fn slots_for(&self, code: &str) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.as_ref().is_some_and(|p| p.code == code))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    fn check(&self, index: usize) -> Result<(), BoardError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(BoardError::SlotOutOfRange {
                index,
                capacity: self.slots.len(),
            })
        }
    }
}
