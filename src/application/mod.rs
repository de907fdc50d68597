//! Application Layer
//!
//! Use cases that orchestrate the state model.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Decides when to persist and which entity changed
//!
//! ## Use Cases
//!
//! - `PaintTracker` - loads state, applies actions, saves after each mutation
//! - `SelectionController` - current paint and pending placement

pub mod selection;
pub mod tracker;

pub use selection::{Selection, SelectionController, SlotClick};
pub use tracker::{PaintLine, PaintTracker, TrackerOptions};
