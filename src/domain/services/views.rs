//! View derivation
//!
//! Pure functions computing the read-only lists from the current
//! catalog, ledgers and board. Nothing is cached; callers recompute on
//! every read, so results always reflect the latest snapshots.
//!
//! Every view preserves catalog order.

use serde::Serialize;

use crate::domain::entities::{Board, CartLedger, InventoryLedger};
use crate::domain::value_objects::{Paint, ViewKind};

/// Paints worth showing in the inventory panel.
///
/// A paint qualifies if it has stock, occupies a board slot, or is in the
/// cart, even with zero recorded stock.
pub fn inventory_view<'a>(
    catalog: &'a [Paint],
    inventory: &InventoryLedger,
    cart: &CartLedger,
    board: &Board,
) -> Vec<&'a Paint> {
    let on_board = board.occupied_codes();
    catalog
        .iter()
        .filter(|p| {
            inventory.quantity_of(&p.code) > 0
                || on_board.contains(p.code.as_str())
                || cart.quantity_of(&p.code) > 0
        })
        .collect()
}

/// Inventory paints that have no board slot.
pub fn non_indexed_view<'a>(inventory_view: &[&'a Paint], board: &Board) -> Vec<&'a Paint> {
    let on_board = board.occupied_codes();
    inventory_view
        .iter()
        .copied()
        .filter(|p| !on_board.contains(p.code.as_str()))
        .collect()
}

/// Paints with an entry in the cart.
pub fn cart_view<'a>(catalog: &'a [Paint], cart: &CartLedger) -> Vec<&'a Paint> {
    catalog.iter().filter(|p| cart.contains(&p.code)).collect()
}

/// Case-insensitive substring search over name and code.
///
/// An empty query returns the whole catalog.
pub fn search_view<'a>(catalog: &'a [Paint], query: &str) -> Vec<&'a Paint> {
    if query.is_empty() {
        return catalog.iter().collect();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|p| p.matches_lowercase(&needle))
        .collect()
}

/// One exported line: code, name and the quantity relevant to the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub code: String,
    pub name: String,
    pub qty: u32,
}

impl ExportRow {
    fn new(paint: &Paint, qty: u32) -> Self {
        Self {
            code: paint.code.clone(),
            name: paint.name.clone(),
            qty,
        }
    }
}

impl std::fmt::Display for ExportRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} - {}", self.code, self.name, self.qty)
    }
}

/// Rows for one of the exportable views.
///
/// Inventory and non-indexed rows carry stock on hand; cart rows carry the
/// wanted quantity.
pub fn export_rows(
    kind: ViewKind,
    catalog: &[Paint],
    inventory: &InventoryLedger,
    cart: &CartLedger,
    board: &Board,
) -> Vec<ExportRow> {
    match kind {
        ViewKind::Inventory => inventory_view(catalog, inventory, cart, board)
            .into_iter()
            .map(|p| ExportRow::new(p, inventory.quantity_of(&p.code)))
            .collect(),
        ViewKind::NonIndexed => {
            let listed = inventory_view(catalog, inventory, cart, board);
            non_indexed_view(&listed, board)
                .into_iter()
                .map(|p| ExportRow::new(p, inventory.quantity_of(&p.code)))
                .collect()
        }
        ViewKind::Cart => cart_view(catalog, cart)
            .into_iter()
            .map(|p| ExportRow::new(p, cart.quantity_of(&p.code)))
            .collect(),
    }
}
