//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod paint;
mod storage_key;
mod view_kind;

pub use paint::{Paint, PaintValidationError, DEFAULT_HEX};
pub use storage_key::StorageKey;
pub use view_kind::ViewKind;
