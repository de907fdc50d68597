//! Scenario: Adding and Racking a Custom Paint
//!
//! Journey: A hobbyist buys a paint the bundled catalog does not know.
//!
//! Steps:
//! 1. Start with empty state
//! 2. Add "Bone White" (34.224) as a custom paint; it is armed for placement
//! 3. Click slot 5; the paint lands there and the selection goes idle
//! 4. The inventory panel lists it with quantity 0 because it is on the board
//! 5. Record three bottles; the inventory panel shows quantity 3
//!
//! Success Criteria:
//! - Every step persists, so a fresh session sees the same state

use paintrack::domain::ports::StateRepository;
use paintrack::{JsonStateRepository, MemoryStore, PaintTracker, Selection, SlotClick, ViewKind};

use crate::common::*;

/// SCENARIO: in-process, over an in-memory store
#[test]
fn scenario_bone_white_in_process() {
    let store = MemoryStore::new();
    let mut tracker = PaintTracker::open(JsonStateRepository::new(&store), base_paints());

    // Step 2
    tracker.add_paint(bone_white()).unwrap();
    assert_eq!(tracker.selection(), &Selection::Placing(bone_white()));

    // Step 3
    let click = tracker.click_slot(5).unwrap();
    assert_eq!(
        click,
        SlotClick::Place {
            index: 5,
            paint: bone_white()
        }
    );
    assert_eq!(tracker.board().get(5).unwrap(), Some(&bone_white()));
    assert_eq!(tracker.selection(), &Selection::Idle);

    // Step 4
    let lines = tracker.lines(ViewKind::Inventory);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].paint, bone_white());
    assert_eq!(lines[0].qty, 0);
    assert!(tracker.non_indexed_view().is_empty());

    // Step 5
    assert_eq!(tracker.adjust_inventory("34.224", 3), 3);
    assert_eq!(tracker.lines(ViewKind::Inventory)[0].qty, 3);

    // Fresh session
    let repo = JsonStateRepository::new(&store);
    assert_eq!(repo.load_board().get(5).unwrap(), Some(&bone_white()));
    assert_eq!(repo.load_inventory().quantity_of("34.224"), 3);
    assert_eq!(repo.load_custom_paints(), vec![bone_white()]);
}

/// SCENARIO: the same journey through the binary
#[test]
fn scenario_bone_white_via_cli() {
    let env = TestEnv::new();

    // Step 1: nothing listed yet
    let result = env.run_ok(&["list"]);
    assert!(result.stdout.contains("The inventory list is empty"));

    // Step 2
    let result = env.run_ok(&[
        "add",
        "--name",
        "Bone White",
        "--code",
        "34.224",
        "--hex",
        "#e8e4d8",
    ]);
    assert!(result.stdout.contains("Added 34.224 Bone White"));

    // Step 3: each process is its own session, so placement names the paint
    let result = env.run_ok(&["place", "34.224", "5"]);
    assert_eq!(result.stdout.trim(), "Placed 34.224 Bone White in slot 5");

    // Step 4
    let lines = env.run_ok(&["--json", "list"]).json();
    assert_eq!(lines.as_array().map(Vec::len), Some(1));
    assert_eq!(lines[0]["code"], "34.224");
    assert_eq!(lines[0]["qty"], 0);

    // Step 5
    env.run_ok(&["stock", "34.224", "3"]);
    let lines = env.run_ok(&["--json", "list"]).json();
    assert_eq!(lines[0]["qty"], 3);

    let result = env.run_ok(&["inspect", "5"]);
    assert!(result.stdout.contains("Slot 5: 34.224 Bone White #e8e4d8"));
    assert!(result.stdout.contains("in stock: 3"));

    // Stored in the browser-compatible layout
    assert_eq!(
        env.stored("paint-inventory").as_deref(),
        Some(r#"{"34.224":{"qty":3}}"#)
    );
}
