//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `store/` - Key-value stores (file directory, in-memory)
//! - `repositories/` - JSON persistence of the tracked state
//! - `catalog` - Base paint set loading
//! - `export` - Plain-text list export

pub mod catalog;
pub mod export;
pub mod repositories;
pub mod store;

// Re-export for convenience
pub use catalog::load_base_paints;
pub use export::TextFileExporter;
pub use repositories::JsonStateRepository;
pub use store::{FileStore, MemoryStore};
