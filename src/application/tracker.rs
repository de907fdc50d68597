//! Paint tracker use case
//!
//! Owns the current snapshot of every tracked entity, applies user actions
//! to them, and saves the changed entity through the `StateRepository`
//! after each committed mutation. Views are recomputed on every call.

use tracing::{debug, warn};

use crate::domain::entities::{catalog, Board, CartLedger, Catalog, InventoryLedger};
use crate::domain::ports::{StateRepository, ViewExporter};
use crate::domain::services::{self, ExportRow};
use crate::domain::value_objects::{Paint, ViewKind};
use crate::error::{PaintrackError, PaintrackResult};

use super::selection::{Selection, SelectionController, SlotClick};

/// Behaviour switches for the tracker
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackerOptions {
    /// Refuse custom paints whose code is already in the catalog
    pub reject_duplicate_codes: bool,
}

/// A paint with the quantities shown next to it in list panels
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PaintLine {
    #[serde(flatten)]
    pub paint: Paint,
    pub qty: u32,
    pub cart_qty: u32,
}

pub struct PaintTracker<R: StateRepository> {
    repo: R,
    options: TrackerOptions,
    base: Vec<Paint>,
    custom: Vec<Paint>,
    inventory: InventoryLedger,
    cart: CartLedger,
    board: Board,
    selection: SelectionController,
}

impl<R: StateRepository> PaintTracker<R> {
    /// Load every entity from `repo` and start an idle session.
    pub fn open(repo: R, base: Vec<Paint>) -> Self {
        Self::with_options(repo, base, TrackerOptions::default())
    }

    pub fn with_options(repo: R, base: Vec<Paint>, options: TrackerOptions) -> Self {
        let custom = repo.load_custom_paints();
        let inventory = repo.load_inventory();
        let cart = repo.load_cart();
        let board = repo.load_board();

        debug!(
            base = base.len(),
            custom = custom.len(),
            inventory = inventory.len(),
            cart = cart.len(),
            placed = board.occupied_count(),
            "tracker state loaded"
        );

        Self {
            repo,
            options,
            base,
            custom,
            inventory,
            cart,
            board,
            selection: SelectionController::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Merged catalog, rebuilt from the base and custom sets.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(&self.base, &self.custom)
    }

    pub fn custom_paints(&self) -> &[Paint] {
        &self.custom
    }

    pub fn inventory(&self) -> &InventoryLedger {
        &self.inventory
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        self.selection.state()
    }

    /// Find a paint by code in the catalog, falling back to board slots.
    pub fn resolve(&self, code: &str) -> Option<Paint> {
        self.catalog().find(code).cloned().or_else(|| {
            self.board
                .slots()
                .iter()
                .flatten()
                .find(|p| p.code == code)
                .cloned()
        })
    }

    /// Add a custom paint and arm it for placement.
    pub fn add_paint(&mut self, paint: Paint) -> PaintrackResult<()> {
        paint.validate()?;
        if self.catalog().contains_code(&paint.code) {
            if self.options.reject_duplicate_codes {
                return Err(PaintrackError::DuplicateCode { code: paint.code });
            }
            warn!(
                code = %paint.code,
                "code already in catalog; the new paint is stored but shadowed"
            );
        }

        self.custom = catalog::add_custom(&self.custom, paint.clone())?;
        self.repo.save_custom_paints(&self.custom);
        debug!(code = %paint.code, "custom paint added");

        self.selection.select(paint);
        Ok(())
    }

    /// Change stock on hand; returns the new quantity.
    pub fn adjust_inventory(&mut self, code: &str, delta: i64) -> u32 {
        self.inventory = self.inventory.adjust(code, delta);
        self.repo.save_inventory(&self.inventory);
        let qty = self.inventory.quantity_of(code);
        debug!(code, delta, qty, "inventory adjusted");
        qty
    }

    /// Change wanted quantity; returns the new quantity (0 = removed).
    pub fn adjust_cart(&mut self, code: &str, delta: i64) -> u32 {
        self.cart = self.cart.adjust(code, delta);
        self.repo.save_cart(&self.cart);
        let qty = self.cart.quantity_of(code);
        debug!(code, delta, qty, "cart adjusted");
        qty
    }

    /// Select a paint from a list panel, arming it for placement.
    pub fn select(&mut self, code: &str) -> PaintrackResult<Paint> {
        let paint = self
            .resolve(code)
            .ok_or_else(|| PaintrackError::UnknownPaint {
                code: code.to_string(),
            })?;
        self.selection.select(paint.clone());
        Ok(paint)
    }

    /// Primary click on a board slot.
    pub fn click_slot(&mut self, index: usize) -> PaintrackResult<SlotClick> {
        let click = self.selection.left_click(&self.board, index)?;
        if let SlotClick::Place { index, paint } = &click {
            self.board = self.board.assign(*index, paint.clone())?;
            self.repo.save_board(&self.board);
            debug!(index, code = %paint.code, "paint placed");
        }
        Ok(click)
    }

    /// Secondary click on a board slot: empties it.
    pub fn right_click_slot(&mut self, index: usize) -> PaintrackResult<SlotClick> {
        let click = self.selection.right_click(&self.board, index)?;
        self.board = self.board.clear(index)?;
        self.repo.save_board(&self.board);
        debug!(index, "slot cleared");
        Ok(click)
    }

    pub fn inventory_view(&self) -> Vec<Paint> {
        let catalog = self.catalog();
        services::inventory_view(catalog.paints(), &self.inventory, &self.cart, &self.board)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn non_indexed_view(&self) -> Vec<Paint> {
        let catalog = self.catalog();
        let listed =
            services::inventory_view(catalog.paints(), &self.inventory, &self.cart, &self.board);
        services::non_indexed_view(&listed, &self.board)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn cart_view(&self) -> Vec<Paint> {
        let catalog = self.catalog();
        services::cart_view(catalog.paints(), &self.cart)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn search(&self, query: &str) -> Vec<Paint> {
        let catalog = self.catalog();
        services::search_view(catalog.paints(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// The paints of `kind` with their ledger quantities.
    pub fn lines(&self, kind: ViewKind) -> Vec<PaintLine> {
        let paints = match kind {
            ViewKind::Inventory => self.inventory_view(),
            ViewKind::NonIndexed => self.non_indexed_view(),
            ViewKind::Cart => self.cart_view(),
        };
        paints.into_iter().map(|p| self.line(p)).collect()
    }

    /// Attach current quantities to a paint.
    pub fn line(&self, paint: Paint) -> PaintLine {
        PaintLine {
            qty: self.inventory.quantity_of(&paint.code),
            cart_qty: self.cart.quantity_of(&paint.code),
            paint,
        }
    }

    pub fn export_rows(&self, kind: ViewKind) -> Vec<ExportRow> {
        let catalog = self.catalog();
        services::export_rows(kind, catalog.paints(), &self.inventory, &self.cart, &self.board)
    }

    /// Hand the rows of `kind` to `exporter`.
    pub fn export(
        &self,
        kind: ViewKind,
        exporter: &impl ViewExporter,
    ) -> PaintrackResult<std::path::PathBuf> {
        exporter.export(kind, &self.export_rows(kind))
    }
}
