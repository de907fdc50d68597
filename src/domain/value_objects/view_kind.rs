//! View kind value object - names the exportable list views

use serde::{Deserialize, Serialize};

/// One of the three derived lists that can be listed or exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    /// Everything with stock, a board slot, or a pending purchase
    Inventory,
    /// Inventory items that have no board slot yet
    NonIndexed,
    /// The shopping list
    Cart,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Inventory, ViewKind::NonIndexed, ViewKind::Cart];

    /// Stable identifier used on the command line and in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Inventory => "inventory",
            ViewKind::NonIndexed => "non-indexed",
            ViewKind::Cart => "cart",
        }
    }

    /// File name written by the text exporter
    pub fn export_file_name(&self) -> &'static str {
        match self {
            ViewKind::Inventory => "inventory.txt",
            ViewKind::NonIndexed => "non-indexed.txt",
            ViewKind::Cart => "shopping-list.txt",
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
