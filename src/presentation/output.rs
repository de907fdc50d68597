//! Output Rendering
//!
//! Text and JSON renderings of list panels, the board and slot clicks.
//! Renderers return strings; the binary decides where they go.

use serde::Serialize;

use crate::application::{PaintLine, SlotClick};
use crate::domain::entities::{Board, CartLedger, InventoryLedger, BOARD_SECTIONS};
use crate::domain::value_objects::{Paint, ViewKind};
use crate::error::PaintrackResult;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Pretty JSON for any serializable value
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> PaintrackResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One list row: code, name, quantity and any pending purchase.
///
/// Cart rows show the wanted quantity instead of stock.
pub fn render_line(kind: ViewKind, line: &PaintLine) -> String {
    let qty = match kind {
        ViewKind::Cart => line.cart_qty,
        ViewKind::Inventory | ViewKind::NonIndexed => line.qty,
    };
    let mut row = format!("{:<10} {:<28} {:>3}", line.paint.code, line.paint.name, qty);
    if kind != ViewKind::Cart && line.cart_qty > 0 {
        row.push_str(&format!(" (+{} in cart)", line.cart_qty));
    }
    row.trim_end().to_string()
}

pub fn render_lines(kind: ViewKind, lines: &[PaintLine]) -> String {
    if lines.is_empty() {
        return format!("The {kind} list is empty");
    }
    lines
        .iter()
        .map(|line| render_line(kind, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Search results: catalog paints with no quantities
pub fn render_paints(paints: &[Paint]) -> String {
    if paints.is_empty() {
        return "No matching paints".to_string();
    }
    paints
        .iter()
        .map(|p| format!("{:<10} {:<28} {}", p.code, p.name, p.hex))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A filled slot with the stock and cart quantities of its paint
#[derive(Debug, Serialize)]
pub struct SlotEntry<'a> {
    pub slot: usize,
    pub section: usize,
    pub paint: &'a Paint,
    pub qty: u32,
    pub cart_qty: u32,
}

/// Filled slots in index order, tagged with their 1-based section.
pub fn board_entries<'a>(
    board: &'a Board,
    inventory: &InventoryLedger,
    cart: &CartLedger,
) -> Vec<SlotEntry<'a>> {
    board
        .slots()
        .iter()
        .enumerate()
        .filter_map(|(slot, paint)| {
            paint.as_ref().map(|paint| SlotEntry {
                slot,
                section: section_of(slot),
                paint,
                qty: inventory.quantity_of(&paint.code),
                cart_qty: cart.quantity_of(&paint.code),
            })
        })
        .collect()
}

/// 1-based rack section holding `slot`; slots past the last section count
/// as part of it.
pub fn section_of(slot: usize) -> usize {
    BOARD_SECTIONS
        .iter()
        .position(|(start, len)| slot >= *start && slot < start + len)
        .unwrap_or(BOARD_SECTIONS.len() - 1)
        + 1
}

/// Board grouped by rack section; each filled slot shows stock and any
/// pending purchase.
pub fn render_board(board: &Board, inventory: &InventoryLedger, cart: &CartLedger) -> String {
    let entries = board_entries(board, inventory, cart);
    let mut out = Vec::new();
    for (number, (start, len)) in BOARD_SECTIONS.iter().enumerate() {
        let end = (start + len).min(board.capacity());
        if *start >= end {
            continue;
        }
        let filled: Vec<&SlotEntry<'_>> = entries
            .iter()
            .filter(|entry| entry.slot >= *start && entry.slot < end)
            .collect();

        out.push(format!(
            "Section {} (slots {}-{}): {}/{} filled",
            number + 1,
            start,
            end - 1,
            filled.len(),
            end - start
        ));
        for entry in filled {
            let mut row = format!(
                "  {:>3}  {} {}  {}",
                entry.slot, entry.paint.code, entry.paint.name, entry.qty
            );
            if entry.cart_qty > 0 {
                row.push_str(&format!(" (+{} in cart)", entry.cart_qty));
            }
            out.push(row);
        }
    }
    out.join("\n")
}

/// Describe the outcome of a slot click. `line` carries quantities for the
/// paint involved, when there is one.
pub fn render_click(click: &SlotClick, line: Option<&PaintLine>) -> String {
    match click {
        SlotClick::Place { index, paint } => {
            format!("Placed {} {} in slot {index}", paint.code, paint.name)
        }
        SlotClick::Inspect { index, paint } => {
            let mut out = format!("Slot {index}: {} {} {}", paint.code, paint.name, paint.hex);
            if let Some(line) = line {
                out.push_str(&format!(
                    "\n  in stock: {}, in cart: {}",
                    line.qty, line.cart_qty
                ));
            }
            out
        }
        SlotClick::Clear { index } => format!("Cleared slot {index}"),
        SlotClick::Ignored { index } => format!("Slot {index} is empty"),
    }
}
