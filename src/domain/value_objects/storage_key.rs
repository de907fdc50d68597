//! Storage key value object - the four durable records

/// Key under which one top-level entity is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    CustomPaints,
    Inventory,
    Cart,
    Board,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::CustomPaints,
        StorageKey::Inventory,
        StorageKey::Cart,
        StorageKey::Board,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::CustomPaints => "paint-custom-paints",
            StorageKey::Inventory => "paint-inventory",
            StorageKey::Cart => "paint-shopping-cart",
            StorageKey::Board => "paint-board",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
