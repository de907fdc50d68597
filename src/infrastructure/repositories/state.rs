//! JSON State Repository
//!
//! Implements the StateRepository port over any `KeyValueStore`, using the
//! same JSON shapes the browser version of the tracker kept in local
//! storage:
//!
//! - custom paints: `[{"code","name","hex"}, ...]`
//! - inventory / cart: `{"<code>": {"qty": n}, ...}`
//! - board: `[null | {"code","name","hex"}, ...]`

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::entities::{Board, CartLedger, InventoryLedger, Ledger, LedgerKind};
use crate::domain::ports::{KeyValueStore, StateRepository};
use crate::domain::value_objects::{Paint, StorageKey};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct StoredQty {
    qty: u32,
}

type StoredLedger = BTreeMap<String, StoredQty>;

pub struct JsonStateRepository<S> {
    store: S,
    board_capacity: usize,
}

impl<S: KeyValueStore> JsonStateRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_board_capacity(store, crate::domain::entities::BOARD_CAPACITY)
    }

    pub fn with_board_capacity(store: S, board_capacity: usize) -> Self {
        Self {
            store,
            board_capacity,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read and decode `key`, or `None` when absent or unreadable.
    fn load_value<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = match self.store.get(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(%key, "nothing stored, using default");
                return None;
            }
            Err(e) => {
                warn!(%key, error = %e, "failed to read stored state, using default");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%key, error = %e, "malformed stored state, using default");
                None
            }
        }
    }

    fn save_value<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(%key, error = %e, "failed to serialize state, not saved");
                return;
            }
        };

        match self.store.put(key.as_str(), &raw) {
            Ok(()) => debug!(%key, bytes = raw.len(), "state saved"),
            Err(e) => warn!(%key, error = %e, "failed to save state"),
        }
    }

    fn load_ledger<K: LedgerKind>(&self, key: StorageKey) -> Ledger<K> {
        self.load_value::<StoredLedger>(key)
            .map(|stored| Ledger::from_entries(stored.into_iter().map(|(code, q)| (code, q.qty))))
            .unwrap_or_default()
    }

    fn save_ledger<K: LedgerKind>(&self, key: StorageKey, ledger: &Ledger<K>) {
        let stored: StoredLedger = ledger
            .entries()
            .map(|(code, qty)| (code.to_string(), StoredQty { qty }))
            .collect();
        self.save_value(key, &stored);
    }
}

impl<S: KeyValueStore> StateRepository for JsonStateRepository<S> {
    fn load_custom_paints(&self) -> Vec<Paint> {
        self.load_value(StorageKey::CustomPaints).unwrap_or_default()
    }

    fn load_inventory(&self) -> InventoryLedger {
        self.load_ledger(StorageKey::Inventory)
    }

    fn load_cart(&self) -> CartLedger {
        self.load_ledger(StorageKey::Cart)
    }

    fn load_board(&self) -> Board {
        let Some(slots) = self.load_value::<Vec<Option<Paint>>>(StorageKey::Board) else {
            return Board::with_capacity(self.board_capacity);
        };
        if slots.len() != self.board_capacity {
            warn!(
                stored = slots.len(),
                capacity = self.board_capacity,
                "stored board size differs from capacity, resizing"
            );
        }
        Board::from_slots(slots, self.board_capacity)
    }

    fn save_custom_paints(&self, paints: &[Paint]) {
        self.save_value(StorageKey::CustomPaints, paints);
    }

    fn save_inventory(&self, inventory: &InventoryLedger) {
        self.save_ledger(StorageKey::Inventory, inventory);
    }

    fn save_cart(&self, cart: &CartLedger) {
        self.save_ledger(StorageKey::Cart, cart);
    }

    fn save_board(&self, board: &Board) {
        self.save_value(StorageKey::Board, board.slots());
    }
}
