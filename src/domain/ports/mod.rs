//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod key_value_store;
pub mod state_repository;
pub mod view_exporter;

pub use key_value_store::{KeyValueStore, StoreError, StoreResult};
pub use state_repository::StateRepository;
pub use view_exporter::ViewExporter;
