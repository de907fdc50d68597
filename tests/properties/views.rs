//! Property tests for the derived views.

use proptest::prelude::*;

use paintrack::domain::services::{cart_view, inventory_view, non_indexed_view, search_view};
use paintrack::{Board, CartLedger, InventoryLedger, Paint, BOARD_CAPACITY};

fn catalog() -> Vec<Paint> {
    vec![
        Paint::new("70.950", "Black", "#1b1b1b"),
        Paint::new("70.951", "White", "#f4f4f2"),
        Paint::new("70.926", "Red", "#b0102a"),
        Paint::new("70.957", "Flat Red", "#c8102e"),
        Paint::new("34.224", "Bone White", "#e8e4d8"),
    ]
}

#[derive(Debug, Clone)]
enum Action {
    Stock(usize, i64),
    Want(usize, i64),
    Place(usize, usize),
    Clear(usize),
}

fn action() -> impl Strategy<Value = Action> {
    let paint = 0..catalog().len();
    let slot = 0..BOARD_CAPACITY;
    prop_oneof![
        (paint.clone(), -3i64..=3).prop_map(|(p, d)| Action::Stock(p, d)),
        (paint.clone(), -3i64..=3).prop_map(|(p, d)| Action::Want(p, d)),
        (paint, slot.clone()).prop_map(|(p, s)| Action::Place(p, s)),
        slot.prop_map(Action::Clear),
    ]
}

fn apply(actions: &[Action]) -> (InventoryLedger, CartLedger, Board) {
    let catalog = catalog();
    let mut inventory = InventoryLedger::new();
    let mut cart = CartLedger::new();
    let mut board = Board::empty();
    for action in actions {
        match action {
            Action::Stock(p, d) => inventory = inventory.adjust(&catalog[*p].code, *d),
            Action::Want(p, d) => cart = cart.adjust(&catalog[*p].code, *d),
            Action::Place(p, s) => board = board.assign(*s, catalog[*p].clone()).unwrap(),
            Action::Clear(s) => board = board.clear(*s).unwrap(),
        }
    }
    (inventory, cart, board)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the inventory view is exactly the paints with stock, a slot or a wanted purchase.
    #[test]
    fn property_inventory_view_is_complete(actions in proptest::collection::vec(action(), 0..30)) {
        let catalog = catalog();
        let (inventory, cart, board) = apply(&actions);
        let view = inventory_view(&catalog, &inventory, &cart, &board);

        for paint in &catalog {
            let expected = inventory.quantity_of(&paint.code) > 0
                || !board.slots_for(&paint.code).is_empty()
                || cart.quantity_of(&paint.code) > 0;
            prop_assert_eq!(view.contains(&paint), expected, "paint {}", paint.code);
        }
    }

    /// PROPERTY: non-indexed paints are listed and have no slot.
    #[test]
    fn property_non_indexed_is_listed_and_unplaced(actions in proptest::collection::vec(action(), 0..30)) {
        let catalog = catalog();
        let (inventory, cart, board) = apply(&actions);
        let listed = inventory_view(&catalog, &inventory, &cart, &board);
        let unplaced = non_indexed_view(&listed, &board);

        for paint in &listed {
            let placed = !board.slots_for(&paint.code).is_empty();
            prop_assert_eq!(unplaced.contains(paint), !placed);
        }
    }

    /// PROPERTY: the cart view lists exactly the cart codes, in catalog order.
    #[test]
    fn property_cart_view_matches_cart(actions in proptest::collection::vec(action(), 0..30)) {
        let catalog = catalog();
        let (_, cart, _) = apply(&actions);
        let view = cart_view(&catalog, &cart);

        let expected: Vec<&Paint> = catalog.iter().filter(|p| cart.contains(&p.code)).collect();
        prop_assert_eq!(view, expected);
    }

    /// PROPERTY: search ignores case.
    #[test]
    fn property_search_is_case_insensitive(query in "[a-zA-Z0-9. ]{0,6}") {
        let catalog = catalog();
        prop_assert_eq!(
            search_view(&catalog, &query.to_uppercase()),
            search_view(&catalog, &query.to_lowercase())
        );
    }

    /// PROPERTY: the empty query returns the whole catalog in catalog order.
    #[test]
    fn property_empty_search_is_identity(
        catalog in proptest::sample::subsequence(catalog(), 0..=5).prop_shuffle()
    ) {
        prop_assert_eq!(search_view(&catalog, ""), catalog.iter().collect::<Vec<_>>());
    }
}
