//! Property tests for the inventory and cart ledgers.

use proptest::prelude::*;

use paintrack::{CartLedger, InventoryLedger};

fn code() -> impl Strategy<Value = String> {
    prop_oneof![Just("70.950"), Just("70.951"), Just("34.224")].prop_map(String::from)
}

fn steps() -> impl Strategy<Value = Vec<(String, i64)>> {
    proptest::collection::vec((code(), -5i64..=5), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: inventory quantities follow max(0, q + delta) step by step.
    #[test]
    fn property_inventory_tracks_floored_sum(steps in steps()) {
        let mut ledger = InventoryLedger::new();
        let mut expected = std::collections::HashMap::<String, i64>::new();

        for (code, delta) in &steps {
            ledger = ledger.adjust(code, *delta);
            let entry = expected.entry(code.clone()).or_insert(0);
            *entry = (*entry + delta).max(0);
            prop_assert_eq!(i64::from(ledger.quantity_of(code)), *entry);
        }
    }

    /// PROPERTY: inventory keeps adjusted codes even at zero.
    #[test]
    fn property_inventory_keeps_zero_entries(steps in steps()) {
        let mut ledger = InventoryLedger::new();
        for (code, delta) in &steps {
            ledger = ledger.adjust(code, *delta);
            prop_assert!(ledger.contains(code));
        }
    }

    /// PROPERTY: the cart never holds a zero entry.
    #[test]
    fn property_cart_has_no_zero_entries(steps in steps()) {
        let mut ledger = CartLedger::new();
        for (code, delta) in &steps {
            ledger = ledger.adjust(code, *delta);
            prop_assert_eq!(ledger.contains(code), ledger.quantity_of(code) > 0);
            prop_assert!(ledger.entries().all(|(_, qty)| qty > 0));
        }
    }

    /// PROPERTY: adjusting returns a new ledger and leaves the old one alone.
    #[test]
    fn property_adjust_does_not_mutate_receiver(c in code(), delta in -5i64..=5) {
        let before = InventoryLedger::new().adjust(&c, 2);
        let snapshot = before.clone();
        let _after = before.adjust(&c, delta);
        prop_assert_eq!(before, snapshot);
    }
}
