//! Ledger command handlers: stock on hand and shopping list

use anyhow::Result;

use paintrack::presentation::{output, FileTracker};
use paintrack::{Paint, PaintrackError, ViewKind};

use super::Context;

pub fn cmd_stock(ctx: &Context, code: &str, delta: i64) -> Result<()> {
    let mut tracker = ctx.tracker()?;
    let paint = known_paint(&tracker, code)?;
    tracker.adjust_inventory(code, delta);

    let line = tracker.line(paint);
    ctx.emit(&line, || output::render_line(ViewKind::Inventory, &line))
}

pub fn cmd_cart(ctx: &Context, code: &str, delta: i64) -> Result<()> {
    let mut tracker = ctx.tracker()?;
    let paint = known_paint(&tracker, code)?;
    tracker.adjust_cart(code, delta);

    let line = tracker.line(paint);
    ctx.emit(&line, || {
        if line.cart_qty == 0 {
            format!("{} {} is off the shopping list", line.paint.code, line.paint.name)
        } else {
            output::render_line(ViewKind::Cart, &line)
        }
    })
}

/// Ledgers accept any code; the CLI only adjusts paints it can show.
fn known_paint(tracker: &FileTracker, code: &str) -> Result<Paint, PaintrackError> {
    tracker
        .resolve(code)
        .ok_or_else(|| PaintrackError::UnknownPaint {
            code: code.to_string(),
        })
}
