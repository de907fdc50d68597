//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Catalog` - base plus custom paints, deduplicated by code
//! - `Ledger` - quantity per code (inventory stock, shopping cart)
//! - `Board` - fixed rack of slots holding placed paints

mod board;
pub mod catalog;
mod ledger;

pub use board::{Board, BoardError, BOARD_CAPACITY, BOARD_SECTIONS};
pub use catalog::Catalog;
pub use ledger::{CartLedger, InventoryLedger, Ledger, LedgerKind, Stock, Wanted};
