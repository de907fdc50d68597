//! Ledger entity - quantity per paint code
//!
//! Two ledgers share this type and differ only in how they store zero:
//! - `InventoryLedger` records owned stock and keeps zero entries
//! - `CartLedger` records wanted purchases and drops an entry at zero
//!
//! Quantities never go below zero. Mutation returns a new snapshot.

use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Storage rule for a ledger kind
pub trait LedgerKind {
    /// Whether an entry adjusted down to zero stays in the ledger
    const KEEP_ZERO: bool;
}

/// Marker for the owned-stock ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stock;

/// Marker for the shopping-cart ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wanted;

impl LedgerKind for Stock {
    const KEEP_ZERO: bool = true;
}

impl LedgerKind for Wanted {
    const KEEP_ZERO: bool = false;
}

pub type InventoryLedger = Ledger<Stock>;
pub type CartLedger = Ledger<Wanted>;

/// Mapping from paint code to a non-negative quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger<K> {
    entries: BTreeMap<String, u32>,
    _kind: PhantomData<K>,
}

impl<K: LedgerKind> Default for Ledger<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: LedgerKind> Ledger<K> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            _kind: PhantomData,
        }
    }

    /// Build a ledger from raw entries, applying this kind's storage rule.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(code, qty)| (code.into(), qty))
            .filter(|(_, qty)| K::KEEP_ZERO || *qty > 0)
            .collect();
        Self {
            entries,
            _kind: PhantomData,
        }
    }

    /// Return a new ledger with `code` moved by `delta`, floored at zero.
    pub fn adjust(&self, code: &str, delta: i64) -> Self {
        let current = i64::from(self.quantity_of(code));
        let next = current.saturating_add(delta).clamp(0, i64::from(u32::MAX)) as u32;

        let mut entries = self.entries.clone();
        if next > 0 || K::KEEP_ZERO {
            entries.insert(code.to_string(), next);
        } else {
            entries.remove(code);
        }
        Self {
            entries,
            _kind: PhantomData,
        }
    }

    /// Stored quantity, or 0 when absent.
    pub fn quantity_of(&self, code: &str) -> u32 {
        self.entries.get(code).copied().unwrap_or(0)
    }

    /// Whether `code` has an entry (which may be zero for inventory).
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(code, qty)| (code.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
