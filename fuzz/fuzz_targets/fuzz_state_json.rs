#![no_main]

use libfuzzer_sys::fuzz_target;
use paintrack::domain::ports::StateRepository;
use paintrack::{JsonStateRepository, MemoryStore, StorageKey, BOARD_CAPACITY};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Whatever is stored, loading falls back to defaults and never panics
        let store = MemoryStore::new();
        for key in StorageKey::ALL {
            store.insert(key.as_str(), content);
        }
        let repo = JsonStateRepository::new(&store);

        let _ = repo.load_custom_paints();
        let _ = repo.load_inventory();
        let _ = repo.load_cart();
        assert_eq!(repo.load_board().capacity(), BOARD_CAPACITY);
    }
});
