//! StateRepository port - load and save of the four durable entities
//!
//! Loading never fails: absent or malformed data yields the entity's
//! default. Saving is fire-and-forget; failures are the implementation's
//! to report and are not surfaced to callers.

use crate::domain::entities::{Board, CartLedger, InventoryLedger};
use crate::domain::value_objects::Paint;

pub trait StateRepository {
    fn load_custom_paints(&self) -> Vec<Paint>;
    fn load_inventory(&self) -> InventoryLedger;
    fn load_cart(&self) -> CartLedger;
    fn load_board(&self) -> Board;

    fn save_custom_paints(&self, paints: &[Paint]);
    fn save_inventory(&self, inventory: &InventoryLedger);
    fn save_cart(&self, cart: &CartLedger);
    fn save_board(&self, board: &Board);
}
