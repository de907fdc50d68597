#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use paintrack::infrastructure::catalog::parse_base_paints;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Bad catalogs are errors, never panics
        let _ = parse_base_paints(content, Path::new("<fuzz>"));
    }
});
