//! Domain Layer
//!
//! Pure state model without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Catalog, ledgers and board
//! - `value_objects/` - Paint, view kinds, storage keys
//! - `services/` - View derivation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Snapshots** - Mutators return new values instead of editing in place
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
