//! Selection controller
//!
//! Tracks which paint is current and whether it is armed for placement.
//! Session-scoped: never persisted, starts `Idle`.
//!
//! ```text
//!            select(p)                 left_click(any slot)
//!   Idle ───────────────▶ Placing(p) ───────────────────────▶ Idle   (emits Place)
//!   Viewing ────────────▶ Placing(p)
//!   Idle/Viewing ── left_click(occupied slot q) ──▶ Viewing(q)      (emits Inspect)
//!   any ── right_click(slot) ──▶ unchanged                          (emits Clear)
//! ```

use serde::Serialize;

use crate::domain::entities::{Board, BoardError};
use crate::domain::value_objects::Paint;

/// Current selection state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    /// Shown for inspection only
    Viewing(Paint),
    /// Armed: the next left click places this paint
    Placing(Paint),
}

impl Selection {
    pub fn current(&self) -> Option<&Paint> {
        match self {
            Selection::Idle => None,
            Selection::Viewing(paint) | Selection::Placing(paint) => Some(paint),
        }
    }

    pub fn is_pending_placement(&self) -> bool {
        matches!(self, Selection::Placing(_))
    }
}

/// Board action resulting from a slot click
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SlotClick {
    /// Write `paint` into slot `index`, replacing any occupant
    Place { index: usize, paint: Paint },
    /// Slot `index` holds `paint`, now shown as current
    Inspect { index: usize, paint: Paint },
    /// Empty slot `index`
    Clear { index: usize },
    /// Empty slot clicked with nothing armed
    Ignored { index: usize },
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Selection {
        &self.state
    }

    /// Pick a paint from a list panel (or a freshly added paint) and arm it.
    pub fn select(&mut self, paint: Paint) {
        self.state = Selection::Placing(paint);
    }

    /// Primary click on a board slot.
    pub fn left_click(&mut self, board: &Board, index: usize) -> Result<SlotClick, BoardError> {
        let occupant = board.get(index)?;

        match std::mem::take(&mut self.state) {
            Selection::Placing(paint) => Ok(SlotClick::Place { index, paint }),
            previous => match occupant {
                Some(paint) => {
                    self.state = Selection::Viewing(paint.clone());
                    Ok(SlotClick::Inspect {
                        index,
                        paint: paint.clone(),
                    })
                }
                None => {
                    self.state = previous;
                    Ok(SlotClick::Ignored { index })
                }
            },
        }
    }

    /// Secondary click on a board slot. Selection is left as is.
    pub fn right_click(&self, board: &Board, index: usize) -> Result<SlotClick, BoardError> {
        board.get(index)?;
        Ok(SlotClick::Clear { index })
    }
}
