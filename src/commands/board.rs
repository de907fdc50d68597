//! Board command handlers: place, inspect, clear and show

use anyhow::Result;

use paintrack::presentation::output;
use paintrack::SlotClick;

use super::Context;

pub fn cmd_place(ctx: &Context, code: &str, slot: usize) -> Result<()> {
    let mut tracker = ctx.tracker()?;
    tracker.select(code)?;
    let click = tracker.click_slot(slot)?;
    ctx.emit(&click, || output::render_click(&click, None))
}

pub fn cmd_inspect(ctx: &Context, slot: usize) -> Result<()> {
    let mut tracker = ctx.tracker()?;
    let click = tracker.click_slot(slot)?;
    let line = match &click {
        SlotClick::Inspect { paint, .. } => Some(tracker.line(paint.clone())),
        _ => None,
    };
    ctx.emit(&click, || output::render_click(&click, line.as_ref()))
}

pub fn cmd_clear(ctx: &Context, slot: usize) -> Result<()> {
    let mut tracker = ctx.tracker()?;
    let click = tracker.right_click_slot(slot)?;
    ctx.emit(&click, || output::render_click(&click, None))
}

pub fn cmd_board(ctx: &Context) -> Result<()> {
    let tracker = ctx.tracker()?;
    let entries = output::board_entries(tracker.board(), tracker.inventory(), tracker.cart());
    ctx.emit(&entries, || {
        output::render_board(tracker.board(), tracker.inventory(), tracker.cart())
    })
}
