//! paintrack - a paint collection tracker
//!
//! paintrack keeps a catalog of paints (a bundled base set plus user-added
//! custom paints), a fixed physical storage board, a stock ledger and a
//! shopping list. Views over that state are recomputed after every change
//! and every change is persisted immediately.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{PaintLine, PaintTracker, Selection, SlotClick, TrackerOptions};
pub use config::Config;
pub use domain::entities::{Board, Catalog, CartLedger, InventoryLedger, BOARD_CAPACITY};
pub use domain::value_objects::{Paint, StorageKey, ViewKind};
pub use error::{PaintrackError, PaintrackResult};
pub use infrastructure::{FileStore, JsonStateRepository, MemoryStore, TextFileExporter};
