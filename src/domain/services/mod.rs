//! Domain Services
//!
//! Stateless computations over domain entities.

pub mod views;

pub use views::{
    cart_view, export_rows, inventory_view, non_indexed_view, search_view, ExportRow,
};
