//! Scenario: Planning a Shopping Trip
//!
//! Journey: A hobbyist tracks what to buy, exports the list, then shops.
//!
//! Steps:
//! 1. Export the empty shopping list; told it is empty, nothing written
//! 2. Add two paints to the cart
//! 3. The inventory panel shows them with zero stock
//! 4. Export the shopping list
//! 5. Buy one: remove it from the cart, record the stock
//! 6. The bought paint is non-indexed until it gets a slot
//!
//! Success Criteria:
//! - Exported text matches the `code - name - qty` format
//! - Cart entries vanish at zero

use crate::common::*;

#[test]
fn scenario_shopping_trip() {
    let env = TestEnv::new();

    // Step 1
    let result = env.run_ok(&["export", "cart"]);
    assert!(result.stderr.contains("List is empty"));
    assert!(!env.work_path("shopping-list.txt").exists());

    // Step 2
    env.run_ok(&["cart", "70.950", "2"]);
    env.run_ok(&["cart", "70.961", "1"]);

    // Step 3
    let result = env.run_ok(&["list", "inventory"]);
    assert!(result.stdout.contains("70.950"));
    assert!(result.stdout.contains("(+2 in cart)"));

    // Step 4
    let result = env.run_ok(&["export", "cart"]);
    assert!(result.stdout.contains("Exported 2 rows"));
    let exported = std::fs::read_to_string(env.work_path("shopping-list.txt")).unwrap();
    assert_eq!(exported, "70.950 - Black - 2\n70.961 - Sky Blue - 1");

    // Step 5
    let result = env.run_ok(&["cart", "70.961", "-1"]);
    assert!(result.stdout.contains("off the shopping list"));
    env.run_ok(&["stock", "70.961", "1"]);

    // Step 6
    let lines = env.run_ok(&["--json", "list", "non-indexed"]).json();
    let codes: Vec<&str> = lines
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["70.950", "70.961"]);

    env.run_ok(&["place", "70.961", "80"]);
    let lines = env.run_ok(&["--json", "list", "non-indexed"]).json();
    assert_eq!(lines.as_array().map(Vec::len), Some(1));
}
