//! Reusable test content

use paintrack::Paint;

/// Small base catalog in the bundled file format
pub const BASE_CATALOG_JSON: &str = r##"[
  {"code": "70.950", "name": "Black (950)", "hex": "#1b1b1b"},
  {"code": "70.951", "name": "White", "hex": "#f4f4f2"},
  {"code": "70.926", "name": " Red ", "hex": "#b0102a"}
]"##;

pub fn base_paints() -> Vec<Paint> {
    vec![
        Paint::new("70.950", "Black", "#1b1b1b"),
        Paint::new("70.951", "White", "#f4f4f2"),
        Paint::new("70.926", "Red", "#b0102a"),
    ]
}

pub fn bone_white() -> Paint {
    Paint::new("34.224", "Bone White", "#e8e4d8")
}
