//! Catalog command handlers: add and search

use anyhow::Result;

use paintrack::presentation::output;
use paintrack::Paint;

use super::Context;

pub fn cmd_add(ctx: &Context, name: String, code: String, hex: String) -> Result<()> {
    let mut tracker = ctx.tracker()?;
    let paint = Paint::new(code, name, hex);
    tracker.add_paint(paint.clone())?;

    ctx.emit(&paint, || {
        format!("Added {paint}; run `paintrack place {} <slot>` to put it on the board", paint.code)
    })
}

pub fn cmd_search(ctx: &Context, query: &str) -> Result<()> {
    let tracker = ctx.tracker()?;
    let paints = tracker.search(query);
    ctx.emit(&paints, || output::render_paints(&paints))
}
